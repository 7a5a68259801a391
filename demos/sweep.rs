//! Example: run a timing sweep and draw the log-scale chart.
//!
//! Run with:
//! `cargo run --example sweep`

use lattice_paths::chart::{render_log_chart, ChartOptions};
use lattice_paths::counters::{IterativeCounter, RecursiveCounter};
use lattice_paths::{run_sweep, SweepConfig};

fn main() {
    let cfg = SweepConfig::new(40).with_cutoff(14);
    let series = run_sweep(&cfg, &IterativeCounter::default(), &RecursiveCounter);

    for (size, elapsed) in series.recursive_points() {
        println!("recursive n={size:>2}: {:.6}s", elapsed.as_secs_f64());
    }
    println!();
    print!("{}", render_log_chart(&series, ChartOptions::default()));
}
