//! Core data structures for the rustdoku solver.
//!
//! This crate provides the pure-data side of the workspace: type-safe
//! digits, cell coordinates with 3x3 block geometry, and the 9x9 puzzle
//! grid with its consistency checks and textual format. The solving engine
//! lives in `rustdoku-solver` and consumes only the types defined here.
//!
//! # Overview
//!
//! - [`digit`]: the [`Digit`] type, a sudoku digit in the range 1-9.
//! - [`position`]: the [`Position`] type, a `(row, col)` cell coordinate,
//!   plus the derived block index and per-block cell tables.
//! - [`grid`]: the [`Grid`] type, a 9x9 matrix of optional digits with
//!   completeness/consistency checks, text parsing and serialization, and
//!   a human-readable rendering.
//!
//! # Examples
//!
//! ```
//! use rustdoku_core::{Digit, Grid, Position};
//!
//! let mut grid = Grid::new();
//! grid.set(Position::new(0, 0), Digit::new(5).unwrap());
//!
//! assert!(!grid.is_complete());
//! assert!(grid.is_correct());
//! assert_eq!(grid.filled_cells(), 1);
//! ```

pub mod digit;
pub mod grid;
pub mod position;

pub use self::{
    digit::Digit,
    grid::{ConsistencyError, Grid, ParseGridError},
    position::Position,
};
