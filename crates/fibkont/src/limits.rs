/// Default bound on the explicit continuation chain.
///
/// A chain never grows past `n - 2` frames for a fresh evaluation, so this only
/// matters for caller-supplied chains or absurd indices.
pub const DEFAULT_MAX_CHAIN_DEPTH: usize = 1 << 24;

/// Default bound on native recursion for the recursive evaluator.
///
/// A level costs up to about 1.3 KiB of stack in debug builds, so this stays inside the
/// default 2 MiB stack of spawned threads. It admits `fibonacci(14)` (753 levels).
pub const DEFAULT_MAX_NATIVE_DEPTH: usize = 1024;

/// Resource limits shared by both evaluators
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Limits {
    /// Maximum number of pending frames in the continuation chain
    pub max_chain_depth: usize,
    /// Maximum native recursion depth (only the recursive evaluator recurses)
    pub max_native_depth: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Self { max_chain_depth: DEFAULT_MAX_CHAIN_DEPTH, max_native_depth: DEFAULT_MAX_NATIVE_DEPTH }
    }
}

impl Limits {
    /// Limits that never trip. The recursive evaluator can then overflow the thread stack.
    pub fn unbounded() -> Self {
        Self { max_chain_depth: usize::MAX, max_native_depth: usize::MAX }
    }

    /// Set the maximum chain depth
    pub fn with_max_chain_depth(mut self, max_chain_depth: usize) -> Self {
        self.max_chain_depth = max_chain_depth;
        self
    }

    /// Set the maximum native recursion depth
    pub fn with_max_native_depth(mut self, max_native_depth: usize) -> Self {
        self.max_native_depth = max_native_depth;
        self
    }
}
