//! Core Bloom filter implementation
//!
//! A Bloom filter is a space-efficient probabilistic structure answering
//! set-membership queries: false positives are possible, false negatives
//! are not. Elements usually can be added over time; this variant is built
//! once from a finite input and is immutable afterwards.
//!
//! The bitmap is sized for a collision probability of p = 0.005 under the
//! naive assumption that the hash strategies distribute keys uniformly.
//!
//! INVARIANTS:
//! - the bitmap and its size never change after construction
//! - every key present at construction has all of its derived bit
//!   positions set, so `is_key_present` cannot return a false negative

use bitvec::prelude::*;
use serde::Serialize;

use super::hash::HashFunction;
use super::math::optimal_bits;
use super::properties::BloomProperties;
use crate::encode::BincodeEncoder;
use crate::error::FilterError;
use crate::ports::{DataStructure, KeyEncoder, MemoryCache};

/// Collision probability this 32-bit variant is sized for. A fixed design
/// constant, not a caller-supplied parameter.
const COLLISION_PROBABILITY: f64 = 0.005;

/// Largest input the 32-bit variant accepts. Past this count the bitmap
/// would need more than 32-bit indexing to keep the 0.005 target with the
/// stock two-hash configuration, so construction rejects the input rather
/// than silently degrading accuracy. At the limit the bitmap costs about
/// 256 MiB.
pub const MAX_ITEMS: usize = 78_743_024;

/// Immutable Bloom filter over keys of type `T`, indexed by 32-bit bit
/// positions.
///
/// Built exactly once via [`BloomFilter32::create_cache`]; afterwards only
/// `&self` queries exist, so a shared instance is safe for unlimited
/// concurrent reads.
pub struct BloomFilter32<T> {
    bits: BitVec<u8, Lsb0>,
    hash_functions: Vec<Box<dyn HashFunction>>,
    bitmap_size: u32,
    encoder: Box<dyn KeyEncoder<T>>,
    properties: BloomProperties,
}

impl<T: Serialize> BloomFilter32<T> {
    /// Build a filter over `input` with the default bincode key encoder.
    ///
    /// Preconditions are checked in order and the first failure is
    /// reported:
    /// 1. `hash_functions` must not be empty
    /// 2. `input` must not be empty
    /// 3. `input` must hold at most [`MAX_ITEMS`] keys
    ///
    /// Construction either fully succeeds or returns an error before any
    /// bit is readable.
    pub fn create_cache(
        hash_functions: Vec<Box<dyn HashFunction>>,
        input: &[T],
    ) -> Result<Self, FilterError>
    where
        T: 'static,
    {
        Self::create_cache_with_encoder(hash_functions, Box::new(BincodeEncoder), input)
    }
}

impl<T> BloomFilter32<T> {
    /// Build a filter over `input` with an explicit key encoder.
    ///
    /// The same encoder serves every later query; it must be
    /// deterministic for the no-false-negative guarantee to hold.
    pub fn create_cache_with_encoder(
        hash_functions: Vec<Box<dyn HashFunction>>,
        encoder: Box<dyn KeyEncoder<T>>,
        input: &[T],
    ) -> Result<Self, FilterError> {
        if hash_functions.is_empty() {
            return Err(FilterError::InvalidArgument(
                "at least one hash function required",
            ));
        }
        if input.is_empty() {
            return Err(FilterError::InvalidArgument("at least one item required"));
        }
        ensure_capacity(input.len())?;

        let bitmap_size =
            optimal_bits(hash_functions.len(), input.len(), COLLISION_PROBABILITY).floor() as u32;
        let mut bits = bitvec![u8, Lsb0; 0; bitmap_size as usize];
        for key in input {
            let encoded = encoder.encode(key)?;
            for hash in &hash_functions {
                let position = hash.hash32(&encoded, bitmap_size);
                bits.set(position as usize, true);
            }
        }

        let properties = BloomProperties {
            bitmap_size,
            hash_function_count: hash_functions.len(),
            collision_probability: COLLISION_PROBABILITY,
            // All strategies of one filter share a single seed
            seed: hash_functions[0].seed(),
        };

        Ok(Self {
            bits,
            hash_functions,
            bitmap_size,
            encoder,
            properties,
        })
    }

    /// Snapshot of the parameters this filter was built with, for logging
    /// and diagnostics. Returned by value; mutating the snapshot never
    /// affects the filter.
    pub fn properties(&self) -> BloomProperties {
        self.properties
    }

    /// The realized bitmap length in bits.
    pub fn bitmap_size(&self) -> u32 {
        self.bitmap_size
    }
}

impl<T> MemoryCache<T> for BloomFilter32<T> {
    /// True iff every hash strategy's bit position for `key` is set.
    ///
    /// Keys present at construction always return `true`. Keys that were
    /// not present return `true` with probability around the configured
    /// 0.005, assuming uniformly distributed hash outputs. On average that
    /// is 50 spurious matches per 10,000 unknown keys.
    fn is_key_present(&self, key: &T) -> Result<bool, FilterError> {
        let encoded = self.encoder.encode(key)?;
        Ok(self
            .hash_functions
            .iter()
            .all(|hash| self.bits[hash.hash32(&encoded, self.bitmap_size) as usize]))
    }
}

fn ensure_capacity(count: usize) -> Result<(), FilterError> {
    if count > MAX_ITEMS {
        return Err(FilterError::CapacityExceeded {
            count,
            max: MAX_ITEMS,
        });
    }
    Ok(())
}

/// Blueprint marker selecting [`BloomFilter32`] as the structure behind a
/// [`crate::domain::builder::CacheBuilder`].
#[derive(Clone, Copy, Debug, Default)]
pub struct Bloom32;

impl<T: Serialize + 'static> DataStructure<T> for Bloom32 {
    fn create_cache(
        &self,
        hash_functions: Vec<Box<dyn HashFunction>>,
        input: &[T],
    ) -> Result<Box<dyn MemoryCache<T>>, FilterError> {
        Ok(Box::new(BloomFilter32::create_cache(hash_functions, input)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::hash::{Murmur3Hash, SipHash13};
    use proptest::prelude::*;

    fn stock_hashes(seed: u32) -> Vec<Box<dyn HashFunction>> {
        vec![
            Box::new(Murmur3Hash::new(seed)),
            Box::new(SipHash13::new(seed)),
        ]
    }

    #[test]
    fn test_create_cache_with_empty_hash_list_is_rejected() {
        let result = BloomFilter32::create_cache(vec![], &["one".to_string()]);
        assert!(
            matches!(result, Err(FilterError::InvalidArgument(_))),
            "Empty hash list must be an invalid argument"
        );
    }

    #[test]
    fn test_create_cache_with_empty_input_is_rejected() {
        let input: Vec<String> = vec![];
        let result = BloomFilter32::create_cache(stock_hashes(1), &input);
        assert!(
            matches!(result, Err(FilterError::InvalidArgument(_))),
            "Empty input must be an invalid argument"
        );
    }

    #[test]
    fn test_create_cache_with_valid_arguments_succeeds() {
        let input = vec!["one".to_string(), "two".to_string()];
        assert!(BloomFilter32::create_cache(stock_hashes(1), &input).is_ok());
    }

    #[test]
    fn test_one_hash_one_item_matches_recommended_bits() {
        let hashes: Vec<Box<dyn HashFunction>> = vec![Box::new(Murmur3Hash::new(77))];
        let filter = BloomFilter32::create_cache(hashes, &["one".to_string()]).unwrap();
        let recommended = optimal_bits(1, 1, 0.005).floor() as u32;
        assert_eq!(filter.bitmap_size(), recommended);
    }

    #[test]
    fn test_one_hash_one_item_matches_properties_snapshot() {
        let hashes: Vec<Box<dyn HashFunction>> = vec![Box::new(Murmur3Hash::new(77))];
        let filter = BloomFilter32::create_cache(hashes, &["one".to_string()]).unwrap();
        let properties = filter.properties();

        assert_eq!(properties.bitmap_size, 199);
        assert_eq!(properties.hash_function_count, 1);
        assert_eq!(properties.collision_probability, 0.005);
        assert_eq!(properties.seed, 77);
    }

    #[test]
    fn test_constructed_key_is_always_present() {
        let filter =
            BloomFilter32::create_cache(stock_hashes(5), &["one".to_string()]).unwrap();
        assert!(filter.is_key_present(&"one".to_string()).unwrap());
    }

    #[test]
    fn test_absent_key_query_does_not_fail() {
        let filter =
            BloomFilter32::create_cache(stock_hashes(5), &["one".to_string()]).unwrap();
        // The answer is probabilistic either way; only the call itself is
        // guaranteed.
        assert!(filter.is_key_present(&"two".to_string()).is_ok());
    }

    #[test]
    fn test_no_false_negatives_bulk() {
        let words: Vec<String> = (0..2000).map(|i| format!("word_{:04}", i)).collect();
        let filter = BloomFilter32::create_cache(stock_hashes(11), &words).unwrap();
        for word in &words {
            assert!(
                filter.is_key_present(word).unwrap(),
                "False negative for {}",
                word
            );
        }
    }

    #[test]
    fn test_snapshot_mutation_leaves_filter_untouched() {
        let filter =
            BloomFilter32::create_cache(stock_hashes(5), &["one".to_string()]).unwrap();
        let mut snapshot = filter.properties();
        snapshot.bitmap_size = 1;
        snapshot.hash_function_count = 99;

        assert!(filter.is_key_present(&"one".to_string()).unwrap());
        assert_eq!(filter.properties().hash_function_count, 2);
    }

    #[test]
    fn test_capacity_boundary() {
        assert!(ensure_capacity(MAX_ITEMS).is_ok());
        assert!(matches!(
            ensure_capacity(MAX_ITEMS + 1),
            Err(FilterError::CapacityExceeded {
                count: 78_743_025,
                max: MAX_ITEMS
            })
        ));
    }

    #[test]
    fn test_oversized_input_is_rejected_before_any_hashing() {
        let oversized = vec![0u8; MAX_ITEMS + 1];
        let result = BloomFilter32::create_cache(stock_hashes(1), &oversized);
        assert!(matches!(result, Err(FilterError::CapacityExceeded { .. })));
    }

    #[test]
    fn test_failing_encoder_surfaces_encoding_error() {
        struct FailingEncoder;
        impl KeyEncoder<String> for FailingEncoder {
            fn encode(&self, key: &String) -> Result<Vec<u8>, FilterError> {
                if key == "poison" {
                    return Err(FilterError::Encoding("poisoned key".to_string()));
                }
                Ok(key.clone().into_bytes())
            }
        }

        let build = BloomFilter32::create_cache_with_encoder(
            stock_hashes(5),
            Box::new(FailingEncoder),
            &["poison".to_string()],
        );
        assert!(matches!(build, Err(FilterError::Encoding(_))));

        let filter = BloomFilter32::create_cache_with_encoder(
            stock_hashes(5),
            Box::new(FailingEncoder),
            &["fine".to_string()],
        )
        .unwrap();
        assert!(filter.is_key_present(&"fine".to_string()).unwrap());
        assert!(matches!(
            filter.is_key_present(&"poison".to_string()),
            Err(FilterError::Encoding(_))
        ));
    }

    #[test]
    fn test_filter_is_shareable_across_threads() {
        let filter = std::sync::Arc::new(
            BloomFilter32::create_cache(stock_hashes(5), &["one".to_string()]).unwrap(),
        );
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let filter = filter.clone();
                std::thread::spawn(move || filter.is_key_present(&"one".to_string()).unwrap())
            })
            .collect();
        for handle in handles {
            assert!(handle.join().unwrap());
        }
    }

    proptest! {
        #[test]
        fn prop_no_false_negatives(
            keys in proptest::collection::hash_set("[a-z]{1,12}", 1..64),
        ) {
            let keys: Vec<String> = keys.into_iter().collect();
            let filter = BloomFilter32::create_cache(stock_hashes(3), &keys).unwrap();
            for key in &keys {
                prop_assert!(filter.is_key_present(key).unwrap(), "false negative for {}", key);
            }
        }
    }
}
