mod iterative;
mod recursive;

pub use iterative::IterativeEvaluator;
pub use recursive::RecursiveEvaluator;

use crate::{Accumulator, Continuation, Error, Limits, Result};
use alloc::string::ToString;
use core::{fmt::Display, str::FromStr};

/// Evaluates Fibonacci numbers against an explicit continuation chain.
pub trait Evaluator {
    /// Name of the evaluator, as accepted by [`EvaluatorKind::from_str`]
    fn name(&self) -> &'static str;

    /// The limits this evaluator enforces
    fn limits(&self) -> &Limits;

    /// Evaluate `fibonacci(n)` and then everything `continuation` still owes.
    fn evaluate<T: Accumulator>(&self, n: u64, continuation: Continuation) -> Result<Evaluation<T>>;

    /// Evaluate `fibonacci(n)` starting from an empty continuation.
    fn fibonacci<T: Accumulator>(&self, n: u64) -> Result<T> {
        self.evaluate(n, Continuation::empty()).map(|evaluation| evaluation.value)
    }
}

/// The result of an evaluation together with what it cost
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Evaluation<T> {
    /// The computed value
    pub value: T,
    /// Loop iterations (iterative) or evaluator calls (recursive)
    pub steps: u64,
    /// The deepest the continuation chain grew, including frames supplied by the caller
    pub max_chain_depth: usize,
    /// The deepest native recursion reached. Always 1 for the iterative evaluator.
    pub max_native_depth: usize,
}

/// Selects one of the built-in evaluators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EvaluatorKind {
    /// [`RecursiveEvaluator`]
    Recursive,
    /// [`IterativeEvaluator`]
    #[default]
    Iterative,
}

impl EvaluatorKind {
    /// All built-in evaluators
    pub const ALL: [EvaluatorKind; 2] = [Self::Recursive, Self::Iterative];

    /// Name of the evaluator
    pub fn name(self) -> &'static str {
        match self {
            Self::Recursive => "recursive",
            Self::Iterative => "iterative",
        }
    }

    /// Run the selected evaluator with the given limits
    pub fn evaluate<T: Accumulator>(
        self,
        limits: Limits,
        n: u64,
        continuation: Continuation,
    ) -> Result<Evaluation<T>> {
        match self {
            Self::Recursive => RecursiveEvaluator::new(limits).evaluate(n, continuation),
            Self::Iterative => IterativeEvaluator::new(limits).evaluate(n, continuation),
        }
    }
}

impl FromStr for EvaluatorKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "recursive" => Ok(Self::Recursive),
            "iterative" => Ok(Self::Iterative),
            _ => Err(Error::UnknownEvaluator(s.to_string())),
        }
    }
}

impl Display for EvaluatorKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}

/// Bookkeeping shared by both evaluators
#[derive(Debug)]
pub(crate) struct Counters {
    origin: u64,
    steps: u64,
    max_chain_depth: usize,
    max_native_depth: usize,
}

impl Counters {
    pub(crate) fn new(origin: u64, continuation: &Continuation) -> Self {
        Self { origin, steps: 0, max_chain_depth: continuation.depth(), max_native_depth: 0 }
    }

    #[inline(always)]
    pub(crate) fn step(&mut self, native_depth: usize) {
        self.steps += 1;
        self.max_native_depth = self.max_native_depth.max(native_depth);
    }

    #[inline(always)]
    pub(crate) fn observe_chain(&mut self, continuation: &Continuation) {
        self.max_chain_depth = self.max_chain_depth.max(continuation.depth());
    }

    pub(crate) fn overflow(&self) -> Error {
        Error::Overflow { n: self.origin }
    }

    pub(crate) fn finish<T>(self, value: T) -> Evaluation<T> {
        Evaluation {
            value,
            steps: self.steps,
            max_chain_depth: self.max_chain_depth,
            max_native_depth: self.max_native_depth,
        }
    }
}

/// Fibonacci numbers are 1-indexed.
#[inline]
pub(crate) fn check_index(n: u64) -> Result<()> {
    match n {
        0 => Err(Error::InvalidIndex),
        _ => Ok(()),
    }
}

/// Refuse to grow `continuation` past the configured limit.
#[inline(always)]
pub(crate) fn check_chain(limits: &Limits, continuation: &Continuation) -> Result<()> {
    if continuation.depth() >= limits.max_chain_depth {
        return Err(Error::ChainDepthExceeded { limit: limits.max_chain_depth });
    }
    Ok(())
}
