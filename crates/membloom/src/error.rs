//! Error types for the membership cache

use thiserror::Error;

/// Errors that can occur while building or querying a membership cache
///
/// All failures are local and synchronous. A failed construction yields no
/// cache value at all; the caller retries construction from scratch rather
/// than resuming it.
#[derive(Debug, Error)]
pub enum FilterError {
    /// Missing or empty required input. The caller must fix the input
    /// before retrying; retrying as-is cannot succeed.
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),

    /// Input too large for a 32-bit-indexable bitmap at the fixed 0.005
    /// collision probability. The caller must reduce the input or switch
    /// to a wider-index filter variant.
    #[error("capacity exceeded: {count} items, at most {max} fit a 32-bit bitmap at collision probability 0.005")]
    CapacityExceeded { count: usize, max: usize },

    /// Key encoding failed, wrapping the underlying encoder message.
    /// Not retried: encoding is deterministic, so a retry cannot change
    /// the outcome.
    #[error("key encoding failed: {0}")]
    Encoding(String),
}
