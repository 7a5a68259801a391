//! Timing sweep across grid sizes.
//!
//! For each size `v` in the sweep the iterative counter is always timed; the
//! recursive counter is timed only while `v <= recursive_cutoff`. Above the
//! cutoff the recursive sample is recorded as absent, so both series stay
//! aligned by size. Every sample times a fresh call; nothing is cached.

use std::time::Duration;

use serde::{Serialize, Serializer};

use crate::config::{DEFAULT_RECURSIVE_CUTOFF, DEFAULT_SWEEP_STEP};
use crate::probe::time;
use crate::traits::PathCounter;

/// Sizes and cutoff for a sweep.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct SweepConfig {
    /// Largest size sampled; the sweep covers 1..=max_size.
    pub max_size: usize,
    /// Largest size at which the recursive counter is run.
    pub recursive_cutoff: usize,
    /// Stride between sampled sizes.
    pub step: usize,
}

impl SweepConfig {
    pub fn new(max_size: usize) -> Self {
        Self {
            max_size,
            recursive_cutoff: DEFAULT_RECURSIVE_CUTOFF,
            step: DEFAULT_SWEEP_STEP,
        }
    }

    pub fn with_cutoff(mut self, recursive_cutoff: usize) -> Self {
        self.recursive_cutoff = recursive_cutoff;
        self
    }

    /// Set the stride. A zero stride is treated as 1.
    pub fn with_step(mut self, step: usize) -> Self {
        self.step = step.max(1);
        self
    }

    /// Sizes visited, ascending. Always starts at 1 and ends at `max_size`
    /// (empty when `max_size == 0`).
    pub fn sizes(&self) -> Vec<usize> {
        if self.max_size == 0 {
            return Vec::new();
        }
        let mut sizes: Vec<usize> = (1..=self.max_size).step_by(self.step.max(1)).collect();
        if sizes.last() != Some(&self.max_size) {
            sizes.push(self.max_size);
        }
        sizes
    }
}

/// One row of the sweep.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct TimingSample {
    pub size: usize,
    #[serde(rename = "iterative_s", serialize_with = "serialize_secs")]
    pub iterative: Duration,
    /// `None` above the recursive cutoff.
    #[serde(rename = "recursive_s", serialize_with = "serialize_opt_secs")]
    pub recursive: Option<Duration>,
}

/// Aligned timing series for both counters.
#[derive(Clone, Debug, Serialize)]
pub struct BenchmarkSeries {
    pub config: SweepConfig,
    pub samples: Vec<TimingSample>,
}

impl BenchmarkSeries {
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Iterative series as (size, elapsed) pairs; never has gaps.
    pub fn iterative_points(&self) -> impl Iterator<Item = (usize, Duration)> + '_ {
        self.samples.iter().map(|s| (s.size, s.iterative))
    }

    /// Recursive series as (size, elapsed) pairs, truncated at the cutoff.
    pub fn recursive_points(&self) -> impl Iterator<Item = (usize, Duration)> + '_ {
        self.samples
            .iter()
            .filter_map(|s| s.recursive.map(|d| (s.size, d)))
    }

    /// Largest size with a recursive sample.
    pub fn last_recursive_size(&self) -> Option<usize> {
        self.recursive_points().map(|(size, _)| size).last()
    }
}

/// Run the sweep described by `config`.
///
/// The recursive counter is called as `count(v)`, i.e. on the (v, v) grid.
pub fn run_sweep<I, R>(config: &SweepConfig, iterative: &I, recursive: &R) -> BenchmarkSeries
where
    I: PathCounter,
    R: PathCounter,
{
    #[cfg(feature = "tracing")]
    let span = tracing::info_span!(
        "sweep",
        max_size = config.max_size,
        cutoff = config.recursive_cutoff,
        step = config.step
    );
    #[cfg(feature = "tracing")]
    let _enter = span.enter();

    let samples = config
        .sizes()
        .into_iter()
        .map(|size| {
            let (_, iterative_elapsed) = time(|| iterative.count(size));
            let recursive_elapsed = if size <= config.recursive_cutoff {
                let (_, elapsed) = time(|| recursive.count(size));
                Some(elapsed)
            } else {
                None
            };
            #[cfg(feature = "tracing")]
            tracing::debug!(
                size,
                iterative_s = iterative_elapsed.as_secs_f64(),
                recursive_s = recursive_elapsed.map(|d| d.as_secs_f64()),
                "sample"
            );
            TimingSample {
                size,
                iterative: iterative_elapsed,
                recursive: recursive_elapsed,
            }
        })
        .collect();

    BenchmarkSeries {
        config: *config,
        samples,
    }
}

fn serialize_secs<S: Serializer>(d: &Duration, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_f64(d.as_secs_f64())
}

fn serialize_opt_secs<S: Serializer>(d: &Option<Duration>, s: S) -> Result<S::Ok, S::Error> {
    match d {
        Some(d) => s.serialize_some(&d.as_secs_f64()),
        None => s.serialize_none(),
    }
}
