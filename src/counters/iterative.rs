//! Lattice path counting by bottom-up dynamic programming.
//!
//! The table has one cell per grid point, so a `rows × cols` grid needs a
//! `(rows+1) × (cols+1)` table. Row 0 and column 0 are fixed to 1: there is
//! exactly one straight-line path to any boundary point. Every interior cell
//! is the sum of the cell above and the cell to its left.
//!
//! Filling row-major guarantees both dependencies are ready. Time is
//! O(rows·cols) big-integer additions; space is O(rows·cols) for the full
//! table, or O(cols) for [`count_paths_rolling`].

use num_traits::{One, Zero};

use crate::config::TableMode;
use crate::traits::{PathCount, PathCounter};

/// Full DP table of path counts.
///
/// `cell(i, j)` is the number of monotone paths from (0,0) to (i,j).
#[derive(Clone, Debug)]
pub struct DpTable {
    cells: Vec<Vec<PathCount>>, // (rows + 1) × (cols + 1)
}

impl DpTable {
    /// Allocate and fill the table for a `rows × cols` grid.
    pub fn build(rows: usize, cols: usize) -> Self {
        #[cfg(feature = "tracing")]
        let _span = tracing::trace_span!("dp_table_build", rows, cols).entered();

        let mut dp = vec![vec![PathCount::zero(); cols + 1]; rows + 1];
        for row in dp.iter_mut() {
            row[0] = PathCount::one();
        }
        for cell in dp[0].iter_mut() {
            *cell = PathCount::one();
        }

        for i in 1..=rows {
            for j in 1..=cols {
                let sum = &dp[i - 1][j] + &dp[i][j - 1];
                dp[i][j] = sum;
            }
        }

        Self { cells: dp }
    }

    /// Number of grid rows (the table has one more).
    pub fn rows(&self) -> usize {
        self.cells.len() - 1
    }

    /// Number of grid columns (the table has one more).
    pub fn cols(&self) -> usize {
        self.cells[0].len() - 1
    }

    /// Path count to (i, j), or `None` outside the grid.
    pub fn cell(&self, i: usize, j: usize) -> Option<&PathCount> {
        self.cells.get(i).and_then(|row| row.get(j))
    }

    /// Path count to the far corner (rows, cols).
    pub fn corner(&self) -> &PathCount {
        &self.cells[self.rows()][self.cols()]
    }

    /// Consume the table, keeping only the corner value.
    pub fn into_corner(mut self) -> PathCount {
        let mut last = self.cells.pop().unwrap_or_default();
        last.pop().unwrap_or_else(PathCount::one)
    }
}

/// Count paths across an n×n grid with the full O(n²) table.
pub fn count_paths_iterative(n: usize) -> PathCount {
    DpTable::build(n, n).into_corner()
}

/// Count paths to (rows, cols) keeping a single table row.
///
/// Before the update `row[j]` still holds the value from the previous row
/// (the cell above) and `row[j-1]` already holds the current row's value
/// (the cell to the left), so one in-place addition per cell suffices.
pub fn count_paths_rolling(rows: usize, cols: usize) -> PathCount {
    #[cfg(feature = "tracing")]
    let _span = tracing::trace_span!("rolling_row", rows, cols).entered();

    let mut row = vec![PathCount::one(); cols + 1];
    for _ in 1..=rows {
        for j in 1..=cols {
            let (left, rest) = row.split_at_mut(j);
            rest[0] += &left[j - 1];
        }
    }
    row.pop().unwrap_or_else(PathCount::one)
}

/// Dynamic-programming counter, O(n²) time.
#[derive(Clone, Copy, Debug, Default)]
pub struct IterativeCounter {
    pub mode: TableMode,
}

impl IterativeCounter {
    pub fn new(mode: TableMode) -> Self {
        Self { mode }
    }
}

impl PathCounter for IterativeCounter {
    fn name(&self) -> &'static str {
        "iterative"
    }

    fn complexity(&self) -> &'static str {
        "O(n²)"
    }

    fn count_grid(&self, rows: usize, cols: usize) -> PathCount {
        match self.mode {
            TableMode::Full => DpTable::build(rows, cols).into_corner(),
            TableMode::RollingRow => count_paths_rolling(rows, cols),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_size_is_single_cell() {
        let table = DpTable::build(0, 0);
        assert_eq!(table.rows(), 0);
        assert_eq!(table.cols(), 0);
        assert_eq!(table.corner(), &PathCount::one());
        assert_eq!(count_paths_iterative(0), PathCount::one());
        assert_eq!(count_paths_rolling(0, 0), PathCount::one());
    }

    #[test]
    fn known_small_values() {
        let expected = [1u32, 2, 6, 20, 70, 252];
        for (n, &want) in expected.iter().enumerate() {
            assert_eq!(count_paths_iterative(n), PathCount::from(want), "n={n}");
        }
        assert_eq!(count_paths_iterative(10), PathCount::from(184_756u32));
    }

    #[test]
    fn boundary_cells_are_one() {
        let table = DpTable::build(7, 7);
        for k in 0..=7 {
            assert_eq!(table.cell(k, 0), Some(&PathCount::one()), "dp[{k}][0]");
            assert_eq!(table.cell(0, k), Some(&PathCount::one()), "dp[0][{k}]");
        }
        assert!(table.cell(8, 0).is_none());
        assert!(table.cell(0, 8).is_none());
    }

    #[test]
    fn interior_is_sum_of_neighbours() {
        let table = DpTable::build(6, 4);
        for i in 1..=6 {
            for j in 1..=4 {
                let up = table.cell(i - 1, j).unwrap();
                let left = table.cell(i, j - 1).unwrap();
                assert_eq!(table.cell(i, j).unwrap(), &(up + left));
            }
        }
    }

    #[test]
    fn rectangular_grids_are_symmetric() {
        for rows in 0..8 {
            for cols in 0..8 {
                assert_eq!(
                    DpTable::build(rows, cols).into_corner(),
                    DpTable::build(cols, rows).into_corner()
                );
            }
        }
    }

    #[test]
    fn rolling_row_matches_full_table() {
        for rows in 0..12 {
            for cols in 0..12 {
                assert_eq!(
                    count_paths_rolling(rows, cols),
                    DpTable::build(rows, cols).into_corner(),
                    "{rows}x{cols}"
                );
            }
        }
    }

    #[test]
    fn counter_modes_agree() {
        let full = IterativeCounter::new(TableMode::Full);
        let rolling = IterativeCounter::new(TableMode::RollingRow);
        for n in 0..20 {
            assert_eq!(full.count(n), rolling.count(n));
        }
        assert_eq!(full.name(), "iterative");
        assert_eq!(full.complexity(), "O(n²)");
    }
}
