use alloc::string::String;
use core::fmt::Display;

/// Errors that can occur while evaluating a Fibonacci number
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The requested index was zero. Fibonacci numbers are 1-indexed.
    InvalidIndex,

    /// A continuation frame was pushed with an index the evaluators never suspend on
    InvalidFrame {
        /// The rejected index
        n: u64,
    },

    /// The accumulator could not represent the result
    Overflow {
        /// The index that was being evaluated
        n: u64,
    },

    /// The continuation chain grew past the configured limit
    ChainDepthExceeded {
        /// The configured limit
        limit: usize,
    },

    /// Native recursion grew past the configured limit
    NativeDepthExceeded {
        /// The configured limit
        limit: usize,
    },

    /// An evaluator name could not be resolved
    UnknownEvaluator(String),
}

impl Error {
    /// Get the message of the error
    pub fn message(&self) -> &'static str {
        match self {
            Self::InvalidIndex => "index must be at least 1",
            Self::InvalidFrame { .. } => "invalid continuation frame",
            Self::Overflow { .. } => "accumulator overflow",
            Self::ChainDepthExceeded { .. } => "continuation chain exhausted",
            Self::NativeDepthExceeded { .. } => "native call stack exhausted",
            Self::UnknownEvaluator(_) => "unknown evaluator",
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::InvalidIndex => write!(f, "invalid index: fibonacci numbers are 1-indexed"),
            Self::InvalidFrame { n } => {
                write!(f, "invalid continuation frame: n={n}, frames are only suspended for n > 2")
            }
            Self::Overflow { n } => write!(f, "accumulator overflow while evaluating fibonacci({n})"),
            Self::ChainDepthExceeded { limit } => write!(f, "continuation chain exhausted: limit={limit}"),
            Self::NativeDepthExceeded { limit } => write!(f, "native call stack exhausted: limit={limit}"),
            Self::UnknownEvaluator(name) => write!(f, "unknown evaluator: {name}"),
        }
    }
}

impl core::error::Error for Error {}

/// A wrapper around [`core::result::Result`] for fibkont operations
pub type Result<T, E = Error> = crate::std::result::Result<T, E>;
