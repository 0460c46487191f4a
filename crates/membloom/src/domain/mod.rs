//! Domain layer - pure filter logic
//!
//! This layer contains:
//! - The core 32-bit Bloom filter
//! - Hash strategies and the process-wide seed
//! - Bit-sizing math
//! - The assembly builder and the properties snapshot
//!
//! RULES:
//! - No I/O operations
//! - Pure functions where possible

pub mod bloom_filter;
pub mod builder;
pub mod hash;
pub mod math;
pub mod properties;

pub use bloom_filter::{Bloom32, BloomFilter32, MAX_ITEMS};
pub use builder::CacheBuilder;
pub use hash::{process_seed, HashFunction, Murmur3Hash, SipHash13};
pub use properties::BloomProperties;
