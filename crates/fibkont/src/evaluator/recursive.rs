use super::{check_chain, check_index, Counters, Evaluation, Evaluator};
use crate::{log, Accumulator, Continuation, Error, Limits, Result};

/// Evaluates Fibonacci numbers by native recursion, keeping the pending additions as data.
///
/// Each call either suspends a frame and recurses on `n - 1`, or resolves a base case and
/// recurses into whatever the top frame still owes. No call returns
/// before the whole chain is resolved, so native depth is one level per step:
/// `2 * fibonacci(n) - 1` for an empty starting chain. [`Limits::max_native_depth`] turns
/// what would be a stack overflow into [`Error::NativeDepthExceeded`].
#[derive(Debug, Clone, Default)]
pub struct RecursiveEvaluator {
    limits: Limits,
}

impl RecursiveEvaluator {
    /// Create a new recursive evaluator
    pub fn new(limits: Limits) -> Self {
        Self { limits }
    }

    fn eval<T: Accumulator>(
        &self,
        n: u64,
        continuation: Continuation,
        depth: usize,
        counters: &mut Counters,
    ) -> Result<T> {
        if depth > self.limits.max_native_depth {
            return Err(Error::NativeDepthExceeded { limit: self.limits.max_native_depth });
        }
        counters.step(depth);

        if n <= 2 {
            return self.apply(continuation, T::one(), depth, counters);
        }

        check_chain(&self.limits, &continuation)?;
        let continuation = continuation.suspend(n);
        counters.observe_chain(&continuation);
        self.eval(n - 1, continuation, depth + 1, counters)
    }

    #[inline(always)]
    fn apply<T: Accumulator>(
        &self,
        continuation: Continuation,
        value: T,
        depth: usize,
        counters: &mut Counters,
    ) -> Result<T> {
        match continuation.resume() {
            Some((n, rest)) => {
                let rest = self.eval::<T>(n, rest, depth + 1, counters)?;
                value.checked_add(&rest).ok_or_else(|| counters.overflow())
            }
            None => Ok(value),
        }
    }
}

impl Evaluator for RecursiveEvaluator {
    fn name(&self) -> &'static str {
        "recursive"
    }

    fn limits(&self) -> &Limits {
        &self.limits
    }

    fn evaluate<T: Accumulator>(&self, n: u64, continuation: Continuation) -> Result<Evaluation<T>> {
        check_index(n)?;
        log::debug!("recursive: fibonacci({n}) width={} pending={}", T::WIDTH, continuation.depth());

        let mut counters = Counters::new(n, &continuation);
        let value = self.eval(n, continuation, 1, &mut counters)?;
        let evaluation = counters.finish(value);
        log::debug!(
            "recursive: done after {} calls, max native depth {}",
            evaluation.steps,
            evaluation.max_native_depth
        );
        Ok(evaluation)
    }
}
