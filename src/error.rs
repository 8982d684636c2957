//! Error type shared by the parsing and configuration entry points.
//!
//! The pagination generator and the list query pipeline are total functions and
//! never return errors; only user-supplied text (amounts, sort keys, status names)
//! and configuration values can be rejected.

use thiserror::Error;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors produced while parsing user input or validating configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// An STX amount string could not be parsed.
    #[error("invalid STX amount {input:?}: {reason}")]
    InvalidAmount {
        /// The rejected input.
        input: String,
        /// Why it was rejected.
        reason: &'static str,
    },

    /// An STX amount does not fit in a microSTX `u64`.
    #[error("STX amount {0:?} overflows microSTX range")]
    AmountOverflow(String),

    /// A sort key name was not recognized.
    #[error("unknown sort key: {0}")]
    UnknownSortKey(String),

    /// A status filter name was not recognized.
    #[error("unknown status filter: {0}")]
    UnknownStatus(String),

    /// A configuration value is out of range.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// A cache refresh callback failed.
    #[error("fetch failed: {0}")]
    Fetch(String),
}
