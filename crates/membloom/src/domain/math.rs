//! Bloom filter sizing math
//!
//! Pure helper functions, no I/O and no state.
//!
//! Formulas:
//! - m = n * (-k / ln(1 - e^(ln(p)/k)))  -- recommended bits
//! - p = (1 - e^(-kn/m))^k               -- collision probability

/// Recommended bitmap size for `k` hash functions, `n` items and target
/// collision probability `p`.
///
/// Callers must floor the result to an integer bit count before allocating
/// a bitmap. `f64` evaluation introduces up to about one bit of rounding
/// slack versus exact arithmetic; that tolerance is accepted rather than
/// reaching for rational arithmetic.
///
/// Only specified for `k > 0`, `n > 0` and `p` in `(0, 1)`; the filter
/// core validates its inputs before calling in here.
pub fn optimal_bits(k: usize, n: usize, p: f64) -> f64 {
    let k = k as f64;
    n as f64 * (-k / (1.0 - (p.ln() / k).exp()).ln())
}

/// Expected false-positive probability for a bitmap of `m` bits holding
/// `n` items under `k` hash functions: `(1 - e^(-kn/m))^k`.
///
/// Provided for diagnostics and validation of a chosen bitmap size; the
/// construction path only uses [`optimal_bits`].
///
/// Only specified for `k > 0`, `n > 0` and `m > 0`.
pub fn collision_probability(k: usize, n: usize, m: usize) -> f64 {
    let exponent = -(k as f64) * (n as f64) / (m as f64);
    (1.0 - exponent.exp()).powi(k as i32)
}
