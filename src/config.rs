//! Configuration defaults and input bounds.
//!
//! The command-line front end layers `clap` flags and `PATH_ANALYSIS_*`
//! environment variables over these defaults; library callers build an
//! [`AnalysisInput`](crate::analysis::AnalysisInput) directly.

use clap::ValueEnum;
use serde::Serialize;

/// Grid size analysed when none is given.
pub const DEFAULT_SIZE: usize = 5;

/// Largest size at which the sweep still runs the naive recursion.
pub const DEFAULT_RECURSIVE_CUTOFF: usize = 20;

/// Largest size accepted for the single-shot recursive call.
pub const DEFAULT_RECURSIVE_LIMIT: usize = 20;

/// Sweep stride.
pub const DEFAULT_SWEEP_STEP: usize = 1;

/// Largest size for which a full (n+1)×(n+1) table is built; above it the
/// iterative counter keeps a single rolling row.
pub const FULL_TABLE_MAX_SIZE: usize = 2000;

/// Smallest grid size the interface accepts.
pub const MIN_SIZE: usize = 1;

/// Which flavour of the analysis to run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    /// Single-shot comparison only, sizes 1..=15.
    Basic,
    /// Single-shot comparison plus timing sweep and chart, sizes 1..=10000.
    #[default]
    Extended,
}

impl Variant {
    /// Inclusive upper bound on the grid size.
    pub fn max_size(self) -> usize {
        match self {
            Variant::Basic => 15,
            Variant::Extended => 10_000,
        }
    }

    /// Whether this variant runs the size sweep.
    pub fn runs_sweep(self) -> bool {
        matches!(self, Variant::Extended)
    }
}

/// Storage strategy for the dynamic-programming counter.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum TableMode {
    /// Full (n+1)×(n+1) table.
    #[default]
    Full,
    /// Single rolling row, O(n) space.
    RollingRow,
}

impl TableMode {
    /// Mode actually used at grid size `size`.
    pub fn for_size(self, size: usize) -> Self {
        match self {
            TableMode::Full if size > FULL_TABLE_MAX_SIZE => TableMode::RollingRow,
            mode => mode,
        }
    }
}
