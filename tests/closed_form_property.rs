use lattice_paths::{
    counters::{binomial, central_binomial, count_paths_rolling, DpTable},
    PathCount,
};
use num_traits::One;
use proptest::prelude::*;

proptest! {
    #[test]
    fn table_matches_closed_form(n in 0usize..120) {
        prop_assert_eq!(DpTable::build(n, n).into_corner(), central_binomial(n));
    }

    #[test]
    fn rectangular_table_is_binomial(rows in 0usize..40, cols in 0usize..40) {
        let expected = binomial((rows + cols) as u64, rows as u64);
        let table = DpTable::build(rows, cols);
        prop_assert_eq!(table.corner(), &expected);
        prop_assert_eq!(count_paths_rolling(rows, cols), expected);
    }

    #[test]
    fn table_boundaries_are_one(rows in 0usize..30, cols in 0usize..30) {
        let table = DpTable::build(rows, cols);
        for i in 0..=rows {
            prop_assert_eq!(table.cell(i, 0), Some(&PathCount::one()));
        }
        for j in 0..=cols {
            prop_assert_eq!(table.cell(0, j), Some(&PathCount::one()));
        }
    }

    #[test]
    fn every_cell_is_pascal_entry(rows in 1usize..20, cols in 1usize..20) {
        let table = DpTable::build(rows, cols);
        for i in 0..=rows {
            for j in 0..=cols {
                let expected = binomial((i + j) as u64, i as u64);
                prop_assert_eq!(table.cell(i, j), Some(&expected));
            }
        }
    }
}
