//! Compare naive recursive and dynamic-programming lattice path counting.
//!
//! # Usage
//!
//! ```bash
//! path-analysis --size 12
//! path-analysis -n 15 --variant basic
//! path-analysis -n 2000 --rolling-row --step 100 --format csv
//! ```

use std::io::{self, Write};
use std::process::ExitCode;

use clap::Parser;

use lattice_paths::config::{
    DEFAULT_RECURSIVE_CUTOFF, DEFAULT_RECURSIVE_LIMIT, DEFAULT_SIZE, DEFAULT_SWEEP_STEP,
};
use lattice_paths::report::OutputFormat;
use lattice_paths::{run_analysis, AnalysisInput, TableMode, Variant};

/// Count lattice paths to (n,n) both ways and compare their running times.
#[derive(Parser, Debug)]
#[command(name = "path-analysis", version)]
struct Args {
    /// Grid size n
    #[arg(short = 'n', long, env = "PATH_ANALYSIS_SIZE", default_value_t = DEFAULT_SIZE)]
    size: usize,

    /// Analysis variant; `basic` allows n <= 15 and skips the sweep
    #[arg(long, value_enum, env = "PATH_ANALYSIS_VARIANT", default_value_t = Variant::Extended)]
    variant: Variant,

    /// Largest sweep size at which the naive recursion still runs
    #[arg(long, env = "PATH_ANALYSIS_RECURSIVE_CUTOFF", default_value_t = DEFAULT_RECURSIVE_CUTOFF)]
    recursive_cutoff: usize,

    /// Largest n for the single-shot naive recursion
    #[arg(long, env = "PATH_ANALYSIS_RECURSIVE_LIMIT", default_value_t = DEFAULT_RECURSIVE_LIMIT)]
    recursive_limit: usize,

    /// Stride between swept sizes
    #[arg(long, env = "PATH_ANALYSIS_STEP", default_value_t = DEFAULT_SWEEP_STEP)]
    step: usize,

    /// Keep one table row instead of the full (n+1)x(n+1) table
    #[arg(long, env = "PATH_ANALYSIS_ROLLING_ROW")]
    rolling_row: bool,

    /// Output format
    #[arg(long, value_enum, env = "PATH_ANALYSIS_FORMAT", default_value_t = OutputFormat::Table)]
    format: OutputFormat,
}

impl Args {
    fn to_input(&self) -> AnalysisInput {
        AnalysisInput {
            size: self.size,
            variant: self.variant,
            recursive_cutoff: self.recursive_cutoff,
            recursive_limit: self.recursive_limit,
            step: self.step,
            table_mode: if self.rolling_row {
                TableMode::RollingRow
            } else {
                TableMode::Full
            },
        }
    }
}

/// Install the stderr subscriber. Returns false if one was already set.
#[cfg(feature = "tracing")]
fn init_logging() -> bool {
    use tracing_subscriber::EnvFilter;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("lattice_paths=info")),
        )
        .with_writer(io::stderr)
        .try_init()
        .is_ok()
}

/// Without the `tracing` feature the library emits no events to collect.
#[cfg(not(feature = "tracing"))]
fn init_logging() -> bool {
    false
}

fn main() -> ExitCode {
    init_logging();

    let args = Args::parse();
    let input = args.to_input();

    let result = run_analysis(&input).and_then(|report| {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        args.format.write(&report, &mut out)?;
        out.flush()?;
        Ok(())
    });

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("path-analysis: {err}");
            err.exit_code()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(feature = "tracing")]
    #[test]
    fn logging_installs_once() {
        init_logging();
        assert!(!init_logging(), "second install must be refused");
    }

    #[cfg(not(feature = "tracing"))]
    #[test]
    fn logging_is_inert_without_tracing() {
        assert!(!init_logging());
    }

    #[test]
    fn rolling_row_flag_maps_to_table_mode() {
        let args = Args::parse_from(["path-analysis", "-n", "7", "--rolling-row"]);
        let input = args.to_input();
        assert_eq!(input.size, 7);
        assert_eq!(input.table_mode, TableMode::RollingRow);
    }
}
