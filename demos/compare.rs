//! Example: count paths both ways at one size and print the timings.
//!
//! Run with:
//! `cargo run --example compare -- 12`

use std::env;

use lattice_paths::counters::{IterativeCounter, RecursiveCounter};
use lattice_paths::probe::time;
use lattice_paths::PathCounter;

fn main() {
    let n: usize = env::args()
        .nth(1)
        .and_then(|arg| arg.parse().ok())
        .unwrap_or(10)
        .min(16);

    let iterative = IterativeCounter::default();
    let recursive = RecursiveCounter;
    let counters: [&dyn PathCounter; 2] = [&iterative, &recursive];
    for counter in counters {
        let (count, elapsed) = time(|| counter.count(n));
        println!(
            "{:<10} {:<6} paths={count} elapsed={:.6}s",
            counter.name(),
            counter.complexity(),
            elapsed.as_secs_f64()
        );
    }
}
