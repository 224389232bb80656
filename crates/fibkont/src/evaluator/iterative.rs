use super::{check_chain, check_index, Counters, Evaluation, Evaluator};
use crate::{log, Accumulator, Continuation, Limits, Result};
use core::ops::ControlFlow;

/// Evaluates Fibonacci numbers in a single loop over the continuation chain.
///
/// The native stack never grows: suspended frames live on the heap, and the loop
/// moves a cursor over them. Memory is `O(n)` frames, the same as the recursive
/// evaluator's stack, just in a different place.
#[derive(Debug, Clone, Default)]
pub struct IterativeEvaluator {
    limits: Limits,
}

impl IterativeEvaluator {
    /// Create a new iterative evaluator
    pub fn new(limits: Limits) -> Self {
        Self { limits }
    }
}

impl Evaluator for IterativeEvaluator {
    fn name(&self) -> &'static str {
        "iterative"
    }

    fn limits(&self) -> &Limits {
        &self.limits
    }

    fn evaluate<T: Accumulator>(&self, n: u64, continuation: Continuation) -> Result<Evaluation<T>> {
        check_index(n)?;
        log::debug!("iterative: fibonacci({n}) width={} pending={}", T::WIDTH, continuation.depth());

        let evaluation = Machine::new(&self.limits, n, continuation).run_to_completion()?;
        log::debug!("iterative: done after {} steps, max chain depth {}", evaluation.steps, evaluation.max_chain_depth);
        Ok(evaluation)
    }
}

/// The two states of the loop, decided by the index under the cursor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    /// `n > 2`: suspend a frame and move to `n - 1`
    Descend,
    /// `n <= 2`: a base case contributes one, then resume the top frame or stop
    Resolve,
}

impl State {
    #[inline(always)]
    fn of(n: u64) -> Self {
        match n {
            0..=2 => Self::Resolve,
            _ => Self::Descend,
        }
    }
}

struct Machine<'limits, T> {
    n: u64,
    continuation: Continuation,
    value: T,
    limits: &'limits Limits,
    counters: Counters,
}

impl<'limits, T: Accumulator> Machine<'limits, T> {
    fn new(limits: &'limits Limits, n: u64, continuation: Continuation) -> Self {
        let counters = Counters::new(n, &continuation);
        Self { n, continuation, value: T::zero(), limits, counters }
    }

    fn run_to_completion(mut self) -> Result<Evaluation<T>> {
        loop {
            match self.exec_next()? {
                ControlFlow::Break(()) => return Ok(self.counters.finish(self.value)),
                ControlFlow::Continue(()) => continue,
            };
        }
    }

    #[inline(always)]
    fn exec_next(&mut self) -> Result<ControlFlow<()>> {
        self.counters.step(1);
        match State::of(self.n) {
            State::Descend => self.exec_descend(),
            State::Resolve => self.exec_resolve(),
        }
    }

    #[inline(always)]
    fn exec_descend(&mut self) -> Result<ControlFlow<()>> {
        check_chain(self.limits, &self.continuation)?;
        self.continuation = core::mem::take(&mut self.continuation).suspend(self.n);
        self.n -= 1;
        self.counters.observe_chain(&self.continuation);
        Ok(ControlFlow::Continue(()))
    }

    #[inline(always)]
    fn exec_resolve(&mut self) -> Result<ControlFlow<()>> {
        if !self.value.checked_increment() {
            return Err(self.counters.overflow());
        }

        match core::mem::take(&mut self.continuation).resume() {
            Some((n, rest)) => {
                log::trace!("resume at {n}, {} pending", rest.depth());
                self.n = n;
                self.continuation = rest;
                Ok(ControlFlow::Continue(()))
            }
            None => Ok(ControlFlow::Break(())),
        }
    }
}
