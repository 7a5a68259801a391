//! The "run analysis" action.
//!
//! [`AnalysisInput`] holds everything a user can choose. [`run_analysis`]
//! validates it, times one call of each counter at the chosen size, runs the
//! sweep when the variant asks for it, and returns an [`AnalysisReport`].
//! Rendering is left to [`crate::report`] and [`crate::chart`].

use std::time::Duration;

use serde::{Serialize, Serializer};

use crate::benchmark::{run_sweep, BenchmarkSeries, SweepConfig};
use crate::config::{
    TableMode, Variant, DEFAULT_RECURSIVE_CUTOFF, DEFAULT_RECURSIVE_LIMIT, DEFAULT_SIZE,
    DEFAULT_SWEEP_STEP, MIN_SIZE,
};
use crate::counters::{
    central_binomial, count_paths_recursive_guarded, IterativeCounter, RecursiveCounter,
};
use crate::error::{PathError, Result};
use crate::probe::MemoryProbe;
use crate::traits::{PathCount, PathCounter};

/// User-chosen parameters for one analysis run.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct AnalysisInput {
    pub size: usize,
    pub variant: Variant,
    /// Sweep sizes above this skip the recursive counter.
    pub recursive_cutoff: usize,
    /// Single-shot recursive calls above this are refused.
    pub recursive_limit: usize,
    pub step: usize,
    pub table_mode: TableMode,
}

impl AnalysisInput {
    pub fn new(size: usize) -> Self {
        Self {
            size,
            ..Self::default()
        }
    }

    /// Reject sizes outside the variant's bound.
    pub fn validate(&self) -> Result<()> {
        let max = self.variant.max_size();
        if self.size < MIN_SIZE || self.size > max {
            return Err(PathError::InputOutOfRange {
                value: self.size,
                min: MIN_SIZE,
                max,
            });
        }
        Ok(())
    }

    /// Table mode after the large-size fallback; see [`TableMode::for_size`].
    pub fn effective_table_mode(&self) -> TableMode {
        self.table_mode.for_size(self.size)
    }

    pub fn sweep_config(&self) -> SweepConfig {
        SweepConfig::new(self.size)
            .with_cutoff(self.recursive_cutoff)
            .with_step(self.step)
    }
}

impl Default for AnalysisInput {
    fn default() -> Self {
        Self {
            size: DEFAULT_SIZE,
            variant: Variant::default(),
            recursive_cutoff: DEFAULT_RECURSIVE_CUTOFF,
            recursive_limit: DEFAULT_RECURSIVE_LIMIT,
            step: DEFAULT_SWEEP_STEP,
            table_mode: TableMode::default(),
        }
    }
}

/// A timed single-shot count.
#[derive(Clone, Debug, Serialize)]
pub struct SingleShot {
    pub algorithm: &'static str,
    pub complexity: &'static str,
    #[serde(serialize_with = "serialize_count")]
    pub count: PathCount,
    #[serde(rename = "elapsed_s", serialize_with = "serialize_secs")]
    pub elapsed: Duration,
    pub rss_delta_kib: u64,
}

/// What happened to the single-shot recursive call.
#[derive(Clone, Debug, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum RecursiveOutcome {
    Computed(SingleShot),
    /// Refused: the size is above the recursive ceiling.
    TooLarge {
        complexity: &'static str,
        size: usize,
        limit: usize,
    },
}

impl RecursiveOutcome {
    pub fn computed(&self) -> Option<&SingleShot> {
        match self {
            RecursiveOutcome::Computed(shot) => Some(shot),
            RecursiveOutcome::TooLarge { .. } => None,
        }
    }
}

/// Everything one analysis run produces.
#[derive(Clone, Debug, Serialize)]
pub struct AnalysisReport {
    pub input: AnalysisInput,
    pub iterative: SingleShot,
    pub recursive: RecursiveOutcome,
    /// C(2n, n), computed independently of both counters.
    #[serde(serialize_with = "serialize_count")]
    pub closed_form: PathCount,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sweep: Option<BenchmarkSeries>,
}

impl AnalysisReport {
    /// Whether both counters returned the same count; `None` if the recursive
    /// call was refused.
    pub fn counts_agree(&self) -> Option<bool> {
        self.recursive
            .computed()
            .map(|shot| shot.count == self.iterative.count)
    }

    /// Whether every computed count equals C(2n, n).
    pub fn matches_closed_form(&self) -> bool {
        self.iterative.count == self.closed_form
            && self
                .recursive
                .computed()
                .map_or(true, |shot| shot.count == self.closed_form)
    }
}

/// Run the full analysis for `input`.
///
/// Input outside the variant's bound is rejected before any counter runs.
/// A single-shot recursive call above `recursive_limit` is not an error: the
/// report carries [`RecursiveOutcome::TooLarge`] instead.
pub fn run_analysis(input: &AnalysisInput) -> Result<AnalysisReport> {
    input.validate()?;

    #[cfg(feature = "tracing")]
    let span = tracing::info_span!("analysis", size = input.size, variant = ?input.variant);
    #[cfg(feature = "tracing")]
    let _enter = span.enter();

    let table_mode = input.effective_table_mode();
    #[cfg(feature = "tracing")]
    if table_mode != input.table_mode {
        tracing::info!(?table_mode, "full table too large, using a rolling row");
    }
    let iterative_counter = IterativeCounter::new(table_mode);
    let recursive_counter = RecursiveCounter;
    let mut probe = MemoryProbe::new();
    let n = input.size;

    let m = probe.measure(|| iterative_counter.count(n));
    let iterative = SingleShot {
        algorithm: iterative_counter.name(),
        complexity: iterative_counter.complexity(),
        count: m.value,
        elapsed: m.elapsed,
        rss_delta_kib: m.rss_delta_kib,
    };
    #[cfg(feature = "tracing")]
    tracing::info!(elapsed_s = iterative.elapsed.as_secs_f64(), "iterative count done");

    let m = probe.measure(|| count_paths_recursive_guarded(n, n, input.recursive_limit));
    let recursive = match m.value {
        Ok(count) => {
            #[cfg(feature = "tracing")]
            tracing::info!(elapsed_s = m.elapsed.as_secs_f64(), "recursive count done");
            RecursiveOutcome::Computed(SingleShot {
                algorithm: recursive_counter.name(),
                complexity: recursive_counter.complexity(),
                count,
                elapsed: m.elapsed,
                rss_delta_kib: m.rss_delta_kib,
            })
        }
        Err(PathError::ComputationTooLarge { size, limit }) => {
            #[cfg(feature = "tracing")]
            tracing::warn!(size, limit, "recursive count refused as too large");
            RecursiveOutcome::TooLarge {
                complexity: recursive_counter.complexity(),
                size,
                limit,
            }
        }
        Err(err) => return Err(err),
    };

    let sweep = input
        .variant
        .runs_sweep()
        .then(|| run_sweep(&input.sweep_config(), &iterative_counter, &recursive_counter));

    let report = AnalysisReport {
        input: AnalysisInput {
            table_mode,
            ..*input
        },
        iterative,
        recursive,
        closed_form: central_binomial(n),
        sweep,
    };

    #[cfg(feature = "tracing")]
    if !report.matches_closed_form() {
        tracing::error!("computed counts disagree with C(2n, n)");
    }

    Ok(report)
}

fn serialize_count<S: Serializer>(
    count: &PathCount,
    s: S,
) -> std::result::Result<S::Ok, S::Error> {
    s.collect_str(count)
}

fn serialize_secs<S: Serializer>(d: &Duration, s: S) -> std::result::Result<S::Ok, S::Error> {
    s.serialize_f64(d.as_secs_f64())
}
