//! Rendering an [`AnalysisReport`] as a text table, CSV or JSON.

use std::io::Write;

use clap::ValueEnum;

use crate::analysis::{AnalysisReport, RecursiveOutcome, SingleShot};
use crate::chart::{render_log_chart, ChartOptions};
use crate::error::Result;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable report with observations and chart.
    #[default]
    Table,
    /// One row per sweep size.
    Csv,
    /// The whole report as JSON.
    Json,
}

impl OutputFormat {
    pub fn write<W: Write>(self, report: &AnalysisReport, out: &mut W) -> Result<()> {
        match self {
            OutputFormat::Table => write_table(report, out),
            OutputFormat::Csv => write_csv(report, out),
            OutputFormat::Json => write_json(report, out),
        }
    }
}

const OBSERVATIONS: &[&str] = &[
    "Both algorithms produce the same number of paths",
    "Recursive running time grows exponentially with n",
    "The iterative algorithm performs far more consistently",
];

const CONCLUSIONS: &[&str] = &[
    "Naive recursion is inefficient for large grids",
    "Iterative dynamic programming is the better choice",
    "The gap between the two widens sharply as n grows",
];

fn write_shot<W: Write>(out: &mut W, title: &str, shot: &SingleShot) -> Result<()> {
    writeln!(out, "{title}")?;
    writeln!(out, "  paths:      {}", shot.count)?;
    writeln!(out, "  elapsed:    {:.6} s", shot.elapsed.as_secs_f64())?;
    writeln!(out, "  rss delta:  {} KiB", shot.rss_delta_kib)?;
    writeln!(out, "  complexity: {}", shot.complexity)?;
    Ok(())
}

pub fn write_table<W: Write>(report: &AnalysisReport, out: &mut W) -> Result<()> {
    let n = report.input.size;
    writeln!(out, "Lattice paths from (0,0) to ({n},{n}), right and down moves only")?;
    writeln!(out)?;

    write_shot(out, "Iterative (dynamic programming)", &report.iterative)?;
    writeln!(out)?;
    match &report.recursive {
        RecursiveOutcome::Computed(shot) => write_shot(out, "Naive recursion", shot)?,
        RecursiveOutcome::TooLarge {
            complexity,
            size,
            limit,
        } => {
            writeln!(out, "Naive recursion")?;
            writeln!(
                out,
                "  computation too large: size {size} exceeds the recursive ceiling of {limit}"
            )?;
            writeln!(out, "  complexity: {complexity}")?;
        }
    }
    writeln!(out)?;

    match report.counts_agree() {
        Some(true) => writeln!(out, "Both counts agree.")?,
        Some(false) => writeln!(out, "MISMATCH: the two counts differ.")?,
        None => writeln!(out, "Only the iterative count was computed.")?,
    }
    if report.matches_closed_form() {
        writeln!(out, "Verified against C(2n, n).")?;
    } else {
        writeln!(out, "MISMATCH: C(2n, n) = {}", report.closed_form)?;
    }
    writeln!(out)?;

    writeln!(out, "Observations:")?;
    for line in OBSERVATIONS {
        writeln!(out, "  - {line}")?;
    }
    writeln!(out, "Conclusions:")?;
    for line in CONCLUSIONS {
        writeln!(out, "  - {line}")?;
    }

    if let Some(series) = &report.sweep {
        writeln!(out)?;
        writeln!(out, "{:>8}  {:>14}  {:>14}", "size", "iterative_s", "recursive_s")?;
        writeln!(out, "{:-<8}  {:-<14}  {:-<14}", "", "", "")?;
        for s in &series.samples {
            let rec = s
                .recursive
                .map(|d| format!("{:.9}", d.as_secs_f64()))
                .unwrap_or_else(|| "-".to_string());
            writeln!(
                out,
                "{:>8}  {:>14.9}  {:>14}",
                s.size,
                s.iterative.as_secs_f64(),
                rec
            )?;
        }
        writeln!(out)?;
        write!(out, "{}", render_log_chart(series, ChartOptions::default()))?;
    }
    Ok(())
}

/// Sweep rows as CSV; an absent recursive sample is an empty field.
pub fn write_csv<W: Write>(report: &AnalysisReport, out: &mut W) -> Result<()> {
    writeln!(out, "size,iterative_s,recursive_s")?;
    if let Some(series) = &report.sweep {
        for s in &series.samples {
            let rec = s
                .recursive
                .map(|d| format!("{:.9}", d.as_secs_f64()))
                .unwrap_or_default();
            writeln!(out, "{},{:.9},{}", s.size, s.iterative.as_secs_f64(), rec)?;
        }
    }
    Ok(())
}

pub fn write_json<W: Write>(report: &AnalysisReport, out: &mut W) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, report)?;
    writeln!(out)?;
    Ok(())
}
