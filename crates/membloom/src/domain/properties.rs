//! Snapshot of the parameters a filter was actually built with
//!
//! For logging and diagnostics only; the query path never consults it.

use serde::{Deserialize, Serialize};

/// Read-only record of a built filter's parameters.
///
/// Returned by value: one snapshot per filter instance, and changing a
/// snapshot's fields never alters the filter's behaviour.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct BloomProperties {
    /// Realized bitmap length in bits
    pub bitmap_size: u32,
    /// Number of hash strategies used
    pub hash_function_count: usize,
    /// The configured target, not a measured value
    pub collision_probability: f64,
    /// Seed shared by all of the filter's hash strategies
    pub seed: u32,
}
