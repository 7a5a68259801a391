//! Closed-form path counts.
//!
//! The number of monotone paths to (rows, cols) is C(rows + cols, rows).
//! Nothing in the analysis depends on this module for its answers; it exists
//! so both counters can be checked against an independent baseline.

use num_bigint::BigUint;
use num_traits::{One, Zero};

/// Binomial coefficient C(n, k) via the multiplicative formula.
///
/// After step `i` the accumulator holds C(n, i + 1), so every division is exact.
pub fn binomial(n: u64, k: u64) -> BigUint {
    if k > n {
        return BigUint::zero();
    }
    let k = k.min(n - k);
    let mut acc = BigUint::one();
    for i in 0..k {
        acc *= n - i;
        acc /= i + 1;
    }
    acc
}

/// Central binomial coefficient C(2n, n): the number of paths across an n×n grid.
pub fn central_binomial(n: usize) -> BigUint {
    let n = n as u64;
    binomial(2 * n, n)
}
