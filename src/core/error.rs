//! Error taxonomy for the shuffle engine

use thiserror::Error;

/// Failures detected before any output is produced
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ShuffleError {
    /// A pattern or shuffle referenced a name that was never registered
    #[error("Unknown source: '{0}'")]
    UnknownSource(String),

    /// A registered source has nothing to draw from
    #[error("Source '{0}' has no items")]
    EmptySource(String),

    /// A pattern node asked to repeat fewer than once
    #[error("Invalid repeat count {count} for {node}: must be at least 1")]
    InvalidRepeat { node: String, count: u32 },

    /// A pattern would expand past the key limit
    #[error("Pattern expands to more than {limit} keys")]
    PatternTooLarge { limit: usize },
}

/// Result type for engine operations
pub type Result<T> = std::result::Result<T, ShuffleError>;
