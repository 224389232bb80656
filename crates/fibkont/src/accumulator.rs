use core::fmt::{Debug, Display};

/// A value the evaluators can sum base-case terms into.
///
/// Implemented for the unsigned integers from `u8` to `u128`, which report overflow, and for
/// [`num_bigint::BigUint`] (with the `bigint` feature), which never does.
pub trait Accumulator: Clone + Debug + Display {
    /// Short name of the representation, used in logs and reports
    const WIDTH: &'static str;

    /// The additive identity, the value of an accumulator before any base case resolved
    fn zero() -> Self;

    /// The contribution of a single base case
    fn one() -> Self;

    /// `self + rhs`, or `None` if the result does not fit
    fn checked_add(&self, rhs: &Self) -> Option<Self>;

    /// Add one in place, returning `false` if the result does not fit
    fn checked_increment(&mut self) -> bool {
        match self.checked_add(&Self::one()) {
            Some(value) => {
                *self = value;
                true
            }
            None => false,
        }
    }
}

macro_rules! impl_fixed_width_accumulator {
    ($($type:ty => $width:literal),*) => {
        $(
            impl Accumulator for $type {
                const WIDTH: &'static str = $width;

                #[inline(always)]
                fn zero() -> Self {
                    0
                }

                #[inline(always)]
                fn one() -> Self {
                    1
                }

                #[inline(always)]
                fn checked_add(&self, rhs: &Self) -> Option<Self> {
                    <$type>::checked_add(*self, *rhs)
                }

                #[inline(always)]
                fn checked_increment(&mut self) -> bool {
                    match <$type>::checked_add(*self, 1) {
                        Some(value) => {
                            *self = value;
                            true
                        }
                        None => false,
                    }
                }
            }
        )*
    }
}

impl_fixed_width_accumulator!(u8 => "u8", u16 => "u16", u32 => "u32", u64 => "u64", u128 => "u128");

#[cfg(feature = "bigint")]
impl Accumulator for num_bigint::BigUint {
    const WIDTH: &'static str = "big";

    fn zero() -> Self {
        num_traits::Zero::zero()
    }

    fn one() -> Self {
        num_traits::One::one()
    }

    fn checked_add(&self, rhs: &Self) -> Option<Self> {
        Some(self + rhs)
    }

    fn checked_increment(&mut self) -> bool {
        *self += 1u32;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_width_overflow() {
        let mut max = u64::MAX;
        assert!(!max.checked_increment());
        assert_eq!(max, u64::MAX);
        assert_eq!(Accumulator::checked_add(&u128::MAX, &1), None);
        assert_eq!(Accumulator::checked_add(&2u64, &3), Some(5));
    }

    #[test]
    fn test_increment_from_zero() {
        let mut v = <u64 as Accumulator>::zero();
        assert!(v.checked_increment());
        assert!(v.checked_increment());
        assert_eq!(v, 2);
    }

    #[cfg(feature = "bigint")]
    #[test]
    fn test_bigint_never_overflows() {
        use num_bigint::BigUint;

        let mut v = BigUint::from(u128::MAX);
        assert!(v.checked_increment());
        assert_eq!(v, BigUint::from(u128::MAX) + 1u32);
        assert_eq!(<BigUint as Accumulator>::WIDTH, "big");
    }
}
