#![no_std]
#![forbid(unsafe_code)]
#![doc(test(
    no_crate_inject,
    attr(deny(warnings, rust_2018_idioms), allow(dead_code, unused_assignments, unused_variables))
))]
#![warn(missing_debug_implementations, rust_2018_idioms, unreachable_pub)]

//! Fibonacci numbers through an explicit continuation chain.
//!
//! The pending work of the naive recursion, "add `fibonacci(n - 2)` once `fibonacci(n - 1)`
//! is known", is reified as a [`Continuation`]: an immutable, reference-counted chain of
//! frames. Two evaluators walk it:
//!
//! - [`RecursiveEvaluator`] recurses natively and keeps only the additions as data.
//! - [`IterativeEvaluator`] runs a two-state loop (descend / resolve) with a cursor over
//!   the chain and never grows the native stack.
//!
//! Both count one per base case, so running time is proportional to the result itself.
//!
//! ## Features
//! - **`std`**\
//!   Enabled by default. Without it the crate only needs `alloc`.
//! - **`log`**\
//!   Enabled by default. Logs evaluation progress through the `log` facade.
//! - **`bigint`**\
//!   Enabled by default. Arbitrary precision results via `num-bigint`; without it
//!   [`Natural`] is `u128`.
//!
//! ## Getting Started
//!
//! ```rust
//! use fibkont::{Evaluator, IterativeEvaluator, Limits, Natural};
//!
//! assert_eq!(fibkont::fibonacci(10)?, Natural::from(55u32));
//!
//! let evaluator = IterativeEvaluator::new(Limits::default());
//! let evaluation = evaluator.evaluate::<u64>(30, fibkont::Continuation::empty())?;
//! assert_eq!(evaluation.value, 832040);
//! assert_eq!(evaluation.max_chain_depth, 28);
//! # Ok::<(), fibkont::Error>(())
//! ```

extern crate alloc;

mod std;

// log for logging (optional).
#[cfg(feature = "log")]
pub(crate) use ::log;

#[cfg(not(feature = "log"))]
pub(crate) mod log {
    macro_rules! debug    ( ($($tt:tt)*) => {{}} );
    macro_rules! trace    ( ($($tt:tt)*) => {{}} );
    pub(crate) use debug;
    pub(crate) use trace;
}

mod accumulator;
mod continuation;
mod error;
mod evaluator;
mod limits;

pub use accumulator::Accumulator;
pub use continuation::{Continuation, Frames};
pub use error::*;
pub use evaluator::{Evaluation, Evaluator, EvaluatorKind, IterativeEvaluator, RecursiveEvaluator};
pub use limits::*;

/// The accumulator used by the top-level functions
#[cfg(feature = "bigint")]
pub type Natural = num_bigint::BigUint;

/// The accumulator used by the top-level functions
#[cfg(not(feature = "bigint"))]
pub type Natural = u128;

/// Compute the `n`-th Fibonacci number (1-indexed) with the iterative evaluator.
///
/// Returns [`Error::InvalidIndex`] for `n = 0`.
pub fn fibonacci(n: u64) -> Result<Natural> {
    fibonacci_with(n, Continuation::empty())
}

/// Compute `fibonacci(n)` plus everything `continuation` still owes, without recursion.
pub fn fibonacci_with(n: u64, continuation: Continuation) -> Result<Natural> {
    IterativeEvaluator::default().evaluate(n, continuation).map(|evaluation| evaluation.value)
}

/// Compute the `n`-th Fibonacci number with the recursive evaluator.
///
/// Native recursion is bounded by [`DEFAULT_MAX_NATIVE_DEPTH`], which caps `n` at 14.
pub fn fibonacci_recursive(n: u64) -> Result<Natural> {
    RecursiveEvaluator::default().fibonacci(n)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_documented_values() -> Result<()> {
        assert_eq!(fibonacci(1)?, Natural::from(1u32));
        assert_eq!(fibonacci(2)?, Natural::from(1u32));
        assert_eq!(fibonacci(10)?, Natural::from(55u32));
        assert_eq!(fibonacci(30)?, Natural::from(832040u32));
        assert_eq!(fibonacci_recursive(10)?, Natural::from(55u32));
        Ok(())
    }

    #[test]
    fn test_invalid_index() {
        assert_eq!(fibonacci(0), Err(Error::InvalidIndex));
        assert_eq!(fibonacci_recursive(0), Err(Error::InvalidIndex));
    }

    #[test]
    fn test_fibonacci_with_empty_continuation() -> Result<()> {
        assert_eq!(fibonacci_with(12, Continuation::empty())?, fibonacci(12)?);
        Ok(())
    }
}
