//! Naive recursive lattice path counting.
//!
//! `count(i, j) = 1` on the boundary, otherwise `count(i-1, j) + count(i, j-1)`.
//! There is no memoisation: the call tree has C(i+j, i) leaves, so an n×n grid
//! costs on the order of 4ⁿ/√n calls. This counter is the slow baseline the
//! dynamic-programming counter is compared against.
//!
//! The recursion accumulates in `u128`. C(2n, n) first exceeds `u128` near
//! n = 66, where the call tree has roughly 2¹³⁰ leaves; no call that could
//! overflow can ever finish, so the fixed width is exact for every result this
//! function actually returns.

use crate::error::{PathError, Result};
use crate::traits::{PathCount, PathCounter};

fn naive(i: usize, j: usize) -> u128 {
    if i == 0 || j == 0 {
        return 1;
    }
    naive(i - 1, j) + naive(i, j - 1)
}

/// Count paths from (0,0) to (i,j) by unmemoised recursion.
///
/// Does not bound its input. Use [`count_paths_recursive_guarded`] anywhere
/// the size comes from a user.
pub fn count_paths_recursive(i: usize, j: usize) -> PathCount {
    #[cfg(feature = "tracing")]
    let _span = tracing::trace_span!("naive_recursion", i, j).entered();
    PathCount::from(naive(i, j))
}

/// Like [`count_paths_recursive`], but refuses grids whose larger side exceeds `limit`.
pub fn count_paths_recursive_guarded(i: usize, j: usize, limit: usize) -> Result<PathCount> {
    let size = i.max(j);
    if size > limit {
        return Err(PathError::ComputationTooLarge { size, limit });
    }
    Ok(count_paths_recursive(i, j))
}

/// Naive recursive counter, O(2ⁿ) time.
#[derive(Clone, Copy, Debug, Default)]
pub struct RecursiveCounter;

impl PathCounter for RecursiveCounter {
    fn name(&self) -> &'static str {
        "recursive"
    }

    fn complexity(&self) -> &'static str {
        "O(2ⁿ)"
    }

    fn count_grid(&self, rows: usize, cols: usize) -> PathCount {
        count_paths_recursive(rows, cols)
    }
}
