//! Sudoku solving engine: candidate tracking, constraint propagation, and
//! heuristic backtracking search.
//!
//! The engine consumes a [`rustdoku_core::Grid`] and drives it to a solved
//! state (or determines that its deduction-plus-search procedure cannot
//! reach one). A solving session owns the grid and a [`Candidates`] cube
//! derived from it, and alternates three phases:
//!
//! 1. **Propagation** ([`propagate()`]): fill every cell whose digit has a
//!    single open cell in the cell's 3x3 block, repeating until a full pass
//!    deduces nothing.
//! 2. **Choice** ([`search::choose`]): when propagation stalls, pick the
//!    most constrained `(digit, row)` pair and enumerate its placements.
//! 3. **Descent** ([`search::search`]): try each placement against a grid
//!    snapshot, propagate, and recurse; restore the snapshot on failure.
//!
//! The [`Solver`] façade wires the phases together behind a single call.
//!
//! # Examples
//!
//! ```
//! use rustdoku_core::Grid;
//! use rustdoku_solver::{SolveOutcome, Solver};
//!
//! let mut grid: Grid = "\
//! ..3.2.6..
//! 9..3.5..1
//! ..18.64..
//! ..81.29..
//! 7.......8
//! ..67.82..
//! ..26.95..
//! 8..2.3..9
//! ..5.1.3..".parse()?;
//!
//! let (outcome, stats) = Solver::new().solve(&mut grid);
//! assert_eq!(outcome, SolveOutcome::Solved);
//! assert!(grid.is_complete() && grid.is_correct());
//! assert!(stats.deduced > 0);
//! # Ok::<(), rustdoku_core::ParseGridError>(())
//! ```

pub mod candidates;
pub mod propagate;
pub mod search;
mod solver;

pub use self::{
    candidates::Candidates,
    propagate::propagate,
    search::Choice,
    solver::{SolveOutcome, SolveStats, Solver},
};
