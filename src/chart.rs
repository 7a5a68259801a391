//! Text line chart of sweep timings on a log10 axis.

use std::fmt::Write as _;
use std::time::Duration;

use crate::benchmark::BenchmarkSeries;

/// Durations below this are plotted at this value (log of zero is undefined).
const FLOOR_SECS: f64 = 1e-9;

const LABEL_WIDTH: usize = 8;

#[derive(Clone, Copy, Debug)]
pub struct ChartOptions {
    /// Maximum number of plot columns; samples are thinned to fit.
    pub width: usize,
    /// Number of plot rows.
    pub height: usize,
}

impl Default for ChartOptions {
    fn default() -> Self {
        Self {
            width: 60,
            height: 12,
        }
    }
}

fn log_secs(d: Duration) -> f64 {
    d.as_secs_f64().max(FLOOR_SECS).log10()
}

/// Render both series, elapsed seconds against grid size.
///
/// `i` marks the iterative series, `r` the recursive one, `*` a shared cell.
/// The recursive series stops at the sweep cutoff.
pub fn render_log_chart(series: &BenchmarkSeries, opts: ChartOptions) -> String {
    let mut out = String::new();
    if series.is_empty() {
        out.push_str("(no samples)\n");
        return out;
    }

    let len = series.len();
    let height = opts.height.max(2);
    let cols = len.min(opts.width.max(1));
    let sample_at = |c: usize| {
        if cols == 1 {
            len - 1
        } else {
            c * (len - 1) / (cols - 1)
        }
    };

    let logs = series
        .samples
        .iter()
        .flat_map(|s| std::iter::once(s.iterative).chain(s.recursive))
        .map(log_secs);
    let (min, max) = logs.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
        (lo.min(v), hi.max(v))
    });
    let lo = min.floor();
    let mut hi = max.ceil();
    if hi <= lo {
        hi = lo + 1.0;
    }
    let row_of = |d: Duration| -> usize {
        let frac = (hi - log_secs(d)) / (hi - lo);
        ((frac * (height - 1) as f64).round() as usize).min(height - 1)
    };

    let mut grid = vec![vec![' '; cols]; height];
    for c in 0..cols {
        let sample = &series.samples[sample_at(c)];
        grid[row_of(sample.iterative)][c] = 'i';
        if let Some(d) = sample.recursive {
            let cell = &mut grid[row_of(d)][c];
            *cell = if *cell == 'i' { '*' } else { 'r' };
        }
    }

    let _ = writeln!(out, "elapsed seconds (log10) vs grid size");
    for (r, row) in grid.iter().enumerate() {
        let label = if r == 0 {
            format!("1e{}", hi as i32)
        } else if r == height - 1 {
            format!("1e{}", lo as i32)
        } else {
            String::new()
        };
        let line: String = row.iter().collect();
        let _ = writeln!(out, "{label:>LABEL_WIDTH$} |{}", line.trim_end());
    }
    let _ = writeln!(out, "{:>LABEL_WIDTH$} +{}", "", "-".repeat(cols));

    let first = series.samples[0].size.to_string();
    let last = series.samples[len - 1].size.to_string();
    let gap = cols.saturating_sub(first.len() + last.len()).max(1);
    let _ = writeln!(
        out,
        "{:>LABEL_WIDTH$}  {first}{}{last}",
        "",
        " ".repeat(gap)
    );
    let _ = writeln!(
        out,
        "i = iterative (DP)   r = recursive (naive, sizes <= {})   * = both",
        series.config.recursive_cutoff
    );
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::benchmark::{SweepConfig, TimingSample};

    fn series(samples: Vec<TimingSample>, cutoff: usize) -> BenchmarkSeries {
        BenchmarkSeries {
            config: SweepConfig::new(samples.len()).with_cutoff(cutoff),
            samples,
        }
    }

    fn plot_rows(chart: &str) -> Vec<String> {
        chart
            .lines()
            .filter_map(|l| l.split_once(" |").map(|(_, plot)| plot.to_string()))
            .collect()
    }

    #[test]
    fn empty_series() {
        let chart = render_log_chart(&series(Vec::new(), 20), ChartOptions::default());
        assert!(chart.contains("no samples"));
    }

    #[test]
    fn recursive_marks_stop_at_cutoff() {
        let samples = (1..=10)
            .map(|size| TimingSample {
                size,
                iterative: Duration::from_micros(size as u64),
                recursive: (size <= 4).then(|| Duration::from_millis(size as u64)),
            })
            .collect();
        let chart = render_log_chart(&series(samples, 4), ChartOptions::default());
        for row in plot_rows(&chart) {
            for (c, ch) in row.chars().enumerate() {
                if c >= 4 {
                    assert!(ch != 'r' && ch != '*', "recursive mark past cutoff in {row:?}");
                }
            }
        }
        assert!(chart.contains("sizes <= 4"));
    }

    #[test]
    fn slower_series_plots_higher() {
        let samples = vec![TimingSample {
            size: 1,
            iterative: Duration::from_micros(1),
            recursive: Some(Duration::from_secs(1)),
        }];
        let rows = plot_rows(&render_log_chart(&series(samples, 1), ChartOptions::default()));
        let r_row = rows.iter().position(|r| r.contains('r')).unwrap();
        let i_row = rows.iter().position(|r| r.contains('i')).unwrap();
        assert!(r_row < i_row);
    }

    #[test]
    fn zero_durations_are_clamped() {
        let samples = vec![TimingSample {
            size: 1,
            iterative: Duration::ZERO,
            recursive: Some(Duration::ZERO),
        }];
        let chart = render_log_chart(&series(samples, 1), ChartOptions::default());
        assert!(chart.contains('*'));
        assert!(chart.contains("1e-9"));
    }

    #[test]
    fn wide_series_is_thinned_to_width() {
        let samples = (1..=200)
            .map(|size| TimingSample {
                size,
                iterative: Duration::from_nanos(size as u64 * 100),
                recursive: None,
            })
            .collect();
        let opts = ChartOptions {
            width: 40,
            height: 6,
        };
        let chart = render_log_chart(&series(samples, 0), opts);
        let rows = plot_rows(&chart);
        assert_eq!(rows.len(), 6);
        assert!(rows.iter().all(|r| r.chars().count() <= 40));
        assert!(chart.contains("200"));
    }
}
