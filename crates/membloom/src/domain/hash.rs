//! Hash strategies for the Bloom filter
//!
//! Two independent mixing families are provided: MurmurHash3 (x86 32-bit)
//! and SipHash-1-3. Independence matters for the false-positive bound; two
//! seed variants of one algorithm would correlate and do not qualify.
//!
//! All strategies attached to one filter share a single seed so that
//! repeated queries against the same filter are deterministic. The stock
//! seed is drawn once per process from a time source; strategies take the
//! seed explicitly through their constructors so tests can pin it.

use std::hash::Hasher;
use std::io::Cursor;
use std::sync::OnceLock;
use std::time::{SystemTime, UNIX_EPOCH};

use siphasher::sip::SipHasher13;

/// A single hash strategy: maps a byte key and a positive `bound` to a
/// deterministic index in `[0, bound)`.
pub trait HashFunction: Send + Sync {
    /// Hash `key` into `[0, bound)`. `bound` must be positive.
    fn hash32(&self, key: &[u8], bound: u32) -> u32;

    /// The seed this strategy was constructed with.
    fn seed(&self) -> u32;
}

static PROCESS_SEED: OnceLock<u32> = OnceLock::new();

/// Process-wide hash seed, generated once from the clock.
///
/// Filters built within one process run share hashing behaviour; separate
/// runs do not reproduce the same bit layout. The seed is deliberately not
/// persisted across runs.
pub fn process_seed() -> u32 {
    *PROCESS_SEED.get_or_init(|| {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|elapsed| elapsed.subsec_nanos())
            .unwrap_or(0)
    })
}

/// Reduce a raw 32-bit hash word into `[0, bound)`.
///
/// The word is reinterpreted as signed, so the remainder can come out
/// negative; the absolute value folds it back into range.
fn to_bit_position(raw: u32, bound: u32) -> u32 {
    (i64::from(raw as i32) % i64::from(bound)).unsigned_abs() as u32
}

/// MurmurHash3 strategy (x86, 32-bit variant).
#[derive(Clone, Copy, Debug)]
pub struct Murmur3Hash {
    seed: u32,
}

impl Murmur3Hash {
    pub fn new(seed: u32) -> Self {
        Self { seed }
    }
}

impl HashFunction for Murmur3Hash {
    fn hash32(&self, key: &[u8], bound: u32) -> u32 {
        let mut cursor = Cursor::new(key);
        // Reading from an in-memory cursor cannot fail
        let raw = murmur3::murmur3_32(&mut cursor, self.seed).unwrap_or(0);
        to_bit_position(raw, bound)
    }

    fn seed(&self) -> u32 {
        self.seed
    }
}

/// SipHash-1-3 strategy, truncated to its low 32 bits.
///
/// Keyed with the seed in both key words.
#[derive(Clone, Copy, Debug)]
pub struct SipHash13 {
    seed: u32,
}

impl SipHash13 {
    pub fn new(seed: u32) -> Self {
        Self { seed }
    }
}

impl HashFunction for SipHash13 {
    fn hash32(&self, key: &[u8], bound: u32) -> u32 {
        let mut hasher = SipHasher13::new_with_keys(u64::from(self.seed), u64::from(self.seed));
        hasher.write(key);
        let raw = hasher.finish() as u32;
        to_bit_position(raw, bound)
    }

    fn seed(&self) -> u32 {
        self.seed
    }
}
