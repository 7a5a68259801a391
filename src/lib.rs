//! Lattice path counting: naive recursion vs. dynamic programming
//!
//! This crate counts monotone lattice paths from (0,0) to (n,n), moving only
//! right or down, in two ways and measures how far apart they are:
//!
//! 1. [`counters::recursive`]: the textbook recursion with no memoisation,
//!    exponential in n.
//! 2. [`counters::iterative`]: bottom-up tabulation, O(n²).
//!
//! Both return C(2n, n) exactly as an arbitrary-precision [`PathCount`].
//! [`benchmark`] times them across sizes 1..n, [`analysis`] is the single
//! "run analysis" action behind the `path-analysis` binary, and [`report`]
//! and [`chart`] render its output.
//!
//! ## Quick start
//! ```
//! use lattice_paths::{run_analysis, AnalysisInput, PathCount};
//!
//! let report = run_analysis(&AnalysisInput::new(5)).unwrap();
//! assert_eq!(report.iterative.count, PathCount::from(252u32));
//! assert_eq!(report.counts_agree(), Some(true));
//! ```
//!
//! ## Limits
//! The naive recursion is only run up to a ceiling (20 by default). Above it
//! the single-shot call is reported as too large and the sweep leaves the
//! recursive sample empty. The size itself is bounded per [`Variant`].

pub mod analysis;
pub mod benchmark;
pub mod chart;
pub mod config;
pub mod counters;
pub mod error;
pub mod probe;
pub mod report;
pub mod traits;

pub use crate::analysis::{run_analysis, AnalysisInput, AnalysisReport, RecursiveOutcome};
pub use crate::benchmark::{run_sweep, BenchmarkSeries, SweepConfig, TimingSample};
pub use crate::config::{TableMode, Variant};
pub use crate::error::{PathError, Result};
pub use crate::traits::{PathCount, PathCounter};
