//! Convenience entry point
//!
//! Wires the two stock hash strategies and the 32-bit Bloom structure for
//! callers that just want an immutable membership cache.

use serde::Serialize;
use tracing::debug;

use crate::domain::bloom_filter::Bloom32;
use crate::domain::builder::CacheBuilder;
use crate::domain::hash::{process_seed, Murmur3Hash, SipHash13};
use crate::error::FilterError;
use crate::ports::MemoryCache;

/// Build a ready-to-query immutable cache over `keys`.
///
/// Pre-wired with MurmurHash3 and SipHash-1-3 on the process-wide seed and
/// the 32-bit Bloom filter structure. This is the only entry point most
/// callers need; it holds no state of its own.
///
/// # Example
///
/// ```
/// use membloom::MemoryCache;
///
/// let words = vec!["one".to_string(), "two".to_string()];
/// let cache = membloom::create_immutable_cache(&words).unwrap();
/// assert!(cache.is_key_present(&"one".to_string()).unwrap());
/// ```
pub fn create_immutable_cache<T: Serialize + 'static>(
    keys: &[T],
) -> Result<Box<dyn MemoryCache<T>>, FilterError> {
    let seed = process_seed();
    debug!(keys = keys.len(), seed, "building immutable cache with stock hash strategies");
    CacheBuilder::new()
        .add_hash_function(Box::new(Murmur3Hash::new(seed)))
        .add_hash_function(Box::new(SipHash13::new(seed)))
        .add_data_structure(Box::new(Bloom32))
        .build_cache(keys)
}
