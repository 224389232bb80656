use crate::{Error, Result};
use alloc::rc::Rc;
use core::fmt::Debug;

/// Frames are only suspended while descending, which happens for `n > 2`.
pub(crate) const MIN_FRAME_INDEX: u64 = 3;

/// A pending addition: once the term for `n - 1` is known, `fibonacci(n - 2)` still has to be added.
pub(crate) struct Frame {
    pub(crate) n: u64,
    pub(crate) next: Continuation,
}

impl Frame {
    /// The index evaluation resumes at when this frame is popped
    #[inline(always)]
    pub(crate) fn resume_index(&self) -> u64 {
        self.n - 2
    }
}

/// The rest of a Fibonacci computation, reified as an immutable singly linked chain of frames.
///
/// Cloning a continuation is cheap and shares the chain. Pushing never mutates an
/// existing chain, so cycles cannot be constructed.
#[derive(Clone, Default)]
pub struct Continuation {
    head: Option<Rc<Frame>>,
    depth: usize,
}

impl Continuation {
    /// The empty continuation: nothing is owed once the current term is known.
    #[inline]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Returns `true` if nothing is pending.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Number of pending frames.
    #[inline]
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// The index of the most recently suspended frame.
    pub fn top(&self) -> Option<u64> {
        self.head.as_deref().map(|frame| frame.n)
    }

    /// Suspend a frame for index `n` on top of this chain.
    ///
    /// The existing chain is shared, not copied. Returns [`Error::InvalidFrame`] for `n < 3`,
    /// since no evaluation ever suspends on a base case.
    pub fn push(&self, n: u64) -> Result<Self> {
        if n < MIN_FRAME_INDEX {
            return Err(Error::InvalidFrame { n });
        }
        Ok(self.clone().suspend(n))
    }

    /// Iterate the pending indices, most recent first.
    pub fn iter(&self) -> Frames<'_> {
        Frames { cursor: self.head.as_deref() }
    }

    #[inline(always)]
    pub(crate) fn suspend(self, n: u64) -> Self {
        debug_assert!(n >= MIN_FRAME_INDEX, "suspended a base case");
        let depth = self.depth + 1;
        Self { head: Some(Rc::new(Frame { n, next: self })), depth }
    }

    /// Pop the top frame, returning the index to resume at and the remaining chain.
    ///
    /// Uniquely owned frames are moved out; shared ones leave the other owners intact.
    #[inline(always)]
    pub(crate) fn resume(mut self) -> Option<(u64, Continuation)> {
        let frame = self.head.take()?;
        Some(match Rc::try_unwrap(frame) {
            Ok(frame) => {
                let n = frame.resume_index();
                let Frame { next, .. } = frame;
                (n, next)
            }
            Err(shared) => (shared.resume_index(), shared.next.clone()),
        })
    }
}

// Dropping frame by frame keeps arbitrarily long chains off the native stack.
impl Drop for Continuation {
    fn drop(&mut self) {
        let mut head = self.head.take();
        while let Some(frame) = head {
            match Rc::try_unwrap(frame) {
                Ok(mut frame) => head = frame.next.head.take(),
                Err(_) => break,
            }
        }
    }
}

impl Debug for Continuation {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<'a> IntoIterator for &'a Continuation {
    type Item = u64;
    type IntoIter = Frames<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over the pending indices of a [`Continuation`]
#[derive(Debug, Clone)]
pub struct Frames<'a> {
    cursor: Option<&'a Frame>,
}

impl Iterator for Frames<'_> {
    type Item = u64;

    fn next(&mut self) -> Option<Self::Item> {
        let frame = self.cursor?;
        self.cursor = frame.next.head.as_deref();
        Some(frame.n)
    }
}

impl Debug for Frame {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Frame").field("n", &self.n).field("pending", &self.next.depth).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    fn chain(indices: &[u64]) -> Continuation {
        indices.iter().try_fold(Continuation::empty(), |k, &n| k.push(n)).expect("valid frames")
    }

    #[test]
    fn test_empty_continuation() {
        let k = Continuation::empty();
        assert!(k.is_empty());
        assert_eq!(k.depth(), 0);
        assert_eq!(k.top(), None);
        assert!(k.resume().is_none());
    }

    #[test]
    fn test_push_tracks_depth_and_order() {
        let k = chain(&[5, 4, 3]);
        assert_eq!(k.depth(), 3);
        assert_eq!(k.top(), Some(3));
        assert_eq!(k.iter().collect::<Vec<_>>(), [3, 4, 5]);
    }

    #[test]
    fn test_push_rejects_base_cases() {
        let k = Continuation::empty();
        assert_eq!(k.push(2).unwrap_err(), Error::InvalidFrame { n: 2 });
        assert_eq!(k.push(0).unwrap_err(), Error::InvalidFrame { n: 0 });
        assert!(k.push(3).is_ok());
    }

    #[test]
    fn test_resume_pops_and_resumes_two_below() {
        let k = chain(&[7, 6]);
        let (n, rest) = k.resume().expect("non-empty");
        assert_eq!(n, 4);
        assert_eq!(rest.depth(), 1);
        assert_eq!(rest.top(), Some(7));

        let (n, rest) = rest.resume().expect("non-empty");
        assert_eq!(n, 5);
        assert!(rest.is_empty());
    }

    #[test]
    fn test_push_shares_structure() {
        let base = chain(&[9, 8]);
        let left = base.push(4).unwrap();
        let right = base.push(5).unwrap();

        // popping one branch leaves the other and the shared tail untouched
        let (_, rest) = left.resume().unwrap();
        assert_eq!(rest.iter().collect::<Vec<_>>(), [8, 9]);
        assert_eq!(right.iter().collect::<Vec<_>>(), [5, 8, 9]);
        assert_eq!(base.depth(), 2);
    }

    #[test]
    fn test_drop_long_chain() {
        let mut k = Continuation::empty();
        for _ in 0..1_000_000 {
            k = k.suspend(MIN_FRAME_INDEX);
        }
        assert_eq!(k.depth(), 1_000_000);
        drop(k);
    }

    #[test]
    fn test_drop_keeps_shared_tail() {
        let tail = chain(&[10, 9, 8]);
        let head = tail.push(7).unwrap();
        drop(head);
        assert_eq!(tail.iter().collect::<Vec<_>>(), [8, 9, 10]);
    }

    #[test]
    fn test_debug_lists_pending_indices() {
        let k = chain(&[4, 3]);
        assert_eq!(alloc::format!("{k:?}"), "[3, 4]");
    }
}
