//! Core trait definitions for lattice path counters.
//!
//! Every counting strategy plugs into the benchmark runner and the analysis
//! boundary through [`PathCounter`]. The runner only ever asks a counter for
//! a count and times the call; it knows nothing about tables or recursion.

use num_bigint::BigUint;

/// Number of monotone lattice paths between two grid corners.
///
/// Grows like C(2n, n) and leaves the 64-bit range around n = 33, so it is
/// always held at arbitrary precision.
pub type PathCount = BigUint;

/// A strategy for counting monotone lattice paths.
///
/// Semantics:
/// - A path starts at (0,0) and ends at (rows, cols).
/// - Each move is one unit right or one unit down.
/// - Implementations do not validate sizes; callers bound them first
///   (see [`crate::analysis::AnalysisInput::validate`]).
pub trait PathCounter {
    /// Short identifier used in reports and log fields.
    fn name(&self) -> &'static str;

    /// Asymptotic time-complexity label shown next to results.
    fn complexity(&self) -> &'static str;

    /// Count paths from (0,0) to (rows, cols).
    fn count_grid(&self, rows: usize, cols: usize) -> PathCount;

    /// Count paths across the square grid, from (0,0) to (n,n).
    fn count(&self, n: usize) -> PathCount {
        self.count_grid(n, n)
    }
}
