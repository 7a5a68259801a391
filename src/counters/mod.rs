//! Path counting strategies.
//!
//! - [`iterative`] : bottom-up dynamic programming over a (rows+1)×(cols+1) table,
//!                   with an O(cols) rolling-row alternative.
//! - [`recursive`] : the naive exponential recursion, kept unmemoised.
//! - [`binomial`]  : closed form C(rows+cols, rows), used as a verification baseline.

pub mod binomial;
pub mod iterative;
pub mod recursive;

pub use binomial::{binomial, central_binomial};
pub use iterative::{count_paths_iterative, count_paths_rolling, DpTable, IterativeCounter};
pub use recursive::{count_paths_recursive, count_paths_recursive_guarded, RecursiveCounter};
