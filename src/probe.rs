//! Wall-clock and resident-memory measurement around a single call.

use std::hint::black_box;
use std::time::{Duration, Instant};

use sysinfo::{get_current_pid, ProcessRefreshKind, System};

/// Result of a measured call.
#[derive(Clone, Debug)]
pub struct Measured<T> {
    pub value: T,
    pub elapsed: Duration,
    /// Growth in resident set size across the call, in KiB (0 if it shrank
    /// or the platform does not report it).
    pub rss_delta_kib: u64,
}

/// Samples this process's resident set size.
pub struct MemoryProbe {
    sys: System,
}

impl MemoryProbe {
    pub fn new() -> Self {
        Self { sys: System::new() }
    }

    /// Current resident set size in KiB, or 0 if unavailable.
    pub fn rss_kib(&mut self) -> u64 {
        self.sys.refresh_processes_specifics(ProcessRefreshKind::new());
        match get_current_pid().ok().and_then(|pid| self.sys.process(pid)) {
            Some(process) => process.memory() / 1024,
            None => 0,
        }
    }

    /// Time `compute` and record the RSS delta around it.
    pub fn measure<T, F>(&mut self, compute: F) -> Measured<T>
    where
        F: FnOnce() -> T,
    {
        let before = self.rss_kib();
        let (value, elapsed) = time(compute);
        let after = self.rss_kib();
        Measured {
            value,
            elapsed,
            rss_delta_kib: after.saturating_sub(before),
        }
    }
}

impl Default for MemoryProbe {
    fn default() -> Self {
        Self::new()
    }
}

/// Time a single call with the monotonic clock.
///
/// The result passes through `black_box` before the clock stops, so callers
/// that discard it still time the full computation.
#[inline]
pub fn time<T, F>(compute: F) -> (T, Duration)
where
    F: FnOnce() -> T,
{
    let start = Instant::now();
    let value = black_box(compute());
    (value, start.elapsed())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn time_returns_value() {
        let (v, elapsed) = time(|| 6 * 7);
        assert_eq!(v, 42);
        assert!(elapsed < Duration::from_secs(5));
    }

    #[test]
    fn discarded_result_is_still_computed() {
        use crate::counters::count_paths_iterative;
        use crate::PathCount;

        let (count, _) = time(|| count_paths_iterative(12));
        assert_eq!(count, PathCount::from(2_704_156u32));
        let (_, elapsed) = time(|| count_paths_iterative(200));
        assert!(elapsed > Duration::ZERO);
    }

    #[test]
    fn measure_wraps_value() {
        let mut probe = MemoryProbe::new();
        let m = probe.measure(|| vec![1u8; 16].len());
        assert_eq!(m.value, 16);
    }
}
