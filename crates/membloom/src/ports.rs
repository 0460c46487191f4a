//! Port traits: the seams between the filter core and its collaborators
//!
//! - `MemoryCache`: driving port, the read-only query surface
//! - `DataStructure`: structure plug consumed by the builder
//! - `KeyEncoder`: driven port, object-to-bytes encoding

use crate::domain::hash::HashFunction;
use crate::error::FilterError;

/// Read-only membership queries against a built cache
///
/// Implementations are logically immutable after construction: queries
/// never mutate state, so a shared reference may be queried from any
/// number of threads without synchronization.
pub trait MemoryCache<T>: Send + Sync {
    /// Returns `true` if the key is possibly in the set, `false` if it is
    /// definitely not. Keys present at construction always return `true`.
    fn is_key_present(&self, key: &T) -> Result<bool, FilterError>;
}

/// A concrete membership structure that the builder can assemble
///
/// `create_cache` either fully succeeds or fails with an error before any
/// bit is readable; no partially constructed cache is observable.
pub trait DataStructure<T> {
    /// Build an immutable cache over `input`, hashing every key with every
    /// function in `hash_functions`.
    fn create_cache(
        &self,
        hash_functions: Vec<Box<dyn HashFunction>>,
        input: &[T],
    ) -> Result<Box<dyn MemoryCache<T>>, FilterError>;
}

/// Object-to-bytes encoding of keys
///
/// Encoding must be deterministic: identical logical keys must always
/// encode to identical byte sequences, otherwise the no-false-negative
/// guarantee does not hold across repeated queries.
pub trait KeyEncoder<T>: Send + Sync {
    fn encode(&self, key: &T) -> Result<Vec<u8>, FilterError>;
}
