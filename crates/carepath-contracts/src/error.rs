//! Error types for the Carepath risk engine.
//!
//! All fallible operations in the Carepath crates return `CarepathResult<T>`.
//! The core is pure and deterministic, so a given bad input always fails the
//! same way — there are no retryable failures.

use thiserror::Error;

/// The unified error type for the Carepath engine.
#[derive(Debug, Error)]
pub enum CarepathError {
    /// A caller-supplied value violated an operation's contract.
    ///
    /// Covers every input-side violation: a missing or negative age, a risk
    /// score outside [0.0, 1.0]. Callers decide the external representation
    /// (e.g. a 4xx-equivalent response).
    #[error("invalid input: {reason}")]
    InvalidInput { reason: String },

    /// A configuration document is malformed or violates a structural rule.
    ///
    /// Raised at load time, before any scoring call is served. A scorer or
    /// planner is never constructed over an invalid table.
    #[error("configuration error: {reason}")]
    ConfigError { reason: String },
}

/// Convenience alias used throughout the Carepath crates.
pub type CarepathResult<T> = Result<T, CarepathError>;
