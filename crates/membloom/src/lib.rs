//! # membloom
//!
//! Immutable in-memory membership cache backed by a Bloom filter.
//!
//! A finite key collection is hashed into a fixed bitmap once; afterwards
//! the cache answers "possibly present" / "definitely absent" queries.
//! Nothing can be added or removed after construction.
//!
//! ## Architecture
//!
//! - **Domain Layer** (`domain/`): pure logic, no I/O
//!   - `BloomFilter32`: the 32-bit-indexed filter core
//!   - `Murmur3Hash` / `SipHash13`: independent hash strategies
//!   - `math`: bit-sizing formulas
//!   - `CacheBuilder`: ordered assembly of strategies and structure
//!   - `BloomProperties`: read-only snapshot of build parameters
//! - **Ports** (`ports.rs`): `MemoryCache`, `DataStructure`, `KeyEncoder`
//! - **Encoding** (`encode.rs`): bincode-backed default key encoder
//! - **Factory** (`factory.rs`): `create_immutable_cache`, the pre-wired
//!   entry point
//!
//! ## Invariants
//!
//! - No false negatives: every key present at construction queries `true`
//! - False positives occur with probability around the fixed 0.005 target,
//!   assuming uniformly distributed hash outputs
//!
//! ## Usage
//!
//! ```
//! use membloom::{create_immutable_cache, MemoryCache};
//!
//! let words = vec!["one".to_string(), "two".to_string()];
//! let dictionary = create_immutable_cache(&words).unwrap();
//!
//! assert!(dictionary.is_key_present(&"one".to_string()).unwrap());
//! ```
//!
//! Filters built in one process run share a single time-derived hash seed;
//! separate runs lay their bits out differently on purpose.

pub mod domain;
pub mod encode;
pub mod error;
pub mod factory;
pub mod ports;

// Re-exports for convenience
pub use domain::{
    process_seed, Bloom32, BloomFilter32, BloomProperties, CacheBuilder, HashFunction,
    Murmur3Hash, SipHash13, MAX_ITEMS,
};
pub use encode::BincodeEncoder;
pub use error::FilterError;
pub use factory::create_immutable_cache;
pub use ports::{DataStructure, KeyEncoder, MemoryCache};
