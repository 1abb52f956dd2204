//! Candidate tracking for the solving session.

use std::fmt::Write as _;

use rustdoku_core::{Digit, Grid, Position};

/// Tracks, for every digit and cell, whether the digit is still open there.
///
/// The cube is value-major: `open[digit][row][col]` is `true` iff the digit
/// has not been excluded from the cell by any filled cell sharing its row,
/// column, or block. It carries no information the grid does not already
/// encode: it is an index over the grid and must always be re-derivable
/// from it, either wholesale ([`Candidates::recompute`]) or patched for a
/// single placement ([`Candidates::place`]). Both routes produce identical
/// cubes for the same grid.
///
/// Exclusion is self-inclusive: once a cell is filled, no digit is open
/// there, not even its own value.
///
/// # Examples
///
/// ```
/// use rustdoku_core::{Digit, Grid, Position};
/// use rustdoku_solver::Candidates;
///
/// let mut grid = Grid::new();
/// let five = Digit::new(5).unwrap();
/// grid.set(Position::new(4, 4), five);
///
/// let candidates = Candidates::from_grid(&grid);
/// assert!(!candidates.is_open(five, Position::new(4, 8))); // same row
/// assert!(!candidates.is_open(five, Position::new(0, 4))); // same column
/// assert!(!candidates.is_open(five, Position::new(3, 3))); // same block
/// assert!(candidates.is_open(five, Position::new(0, 0)));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidates {
    open: [[[bool; 9]; 9]; 9],
}

impl Candidates {
    /// Builds the cube from a grid (full recompute).
    #[must_use]
    pub fn from_grid(grid: &Grid) -> Self {
        let mut candidates = Self {
            open: [[[true; 9]; 9]; 9],
        };
        candidates.exclude_filled(grid);
        candidates
    }

    /// Rebuilds the cube wholesale from a grid.
    ///
    /// Required whenever the grid changes arbitrarily, e.g. after restoring
    /// a snapshot on a failed search branch.
    pub fn recompute(&mut self, grid: &Grid) {
        self.open = [[[true; 9]; 9]; 9];
        self.exclude_filled(grid);
    }

    /// Applies the exclusions of a single new placement (partial recompute).
    ///
    /// Cheaper than [`recompute`](Self::recompute) but equivalent to it,
    /// provided the grid differs from the previously tracked state only by
    /// this one placement.
    pub fn place(&mut self, pos: Position, digit: Digit) {
        self.exclude(pos, digit);
    }

    /// Returns `true` if the digit is still open at the position.
    #[must_use]
    pub fn is_open(&self, digit: Digit, pos: Position) -> bool {
        self.open[digit.index()][usize::from(pos.row())][usize::from(pos.col())]
    }

    /// Returns the single open cell for the digit within a block, if the
    /// block has exactly one.
    ///
    /// This is the deduction primitive behind propagation: a lone open cell
    /// forces the digit's placement there.
    #[must_use]
    pub fn sole_open_in_block(&self, block: u8, digit: Digit) -> Option<Position> {
        let mut found = None;
        for cell in Position::BLOCK_CELLS[usize::from(block)] {
            if self.is_open(digit, cell) {
                if found.is_some() {
                    return None;
                }
                found = Some(cell);
            }
        }
        found
    }

    /// Renders the open cells for one digit as a 9x9 `X` map with 3x3
    /// rules, for debug output.
    #[must_use]
    pub fn render(&self, digit: Digit) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "candidates for {digit}:");
        for row in 0..9 {
            if row == 3 || row == 6 {
                out.push_str("- - - + - - - + - - -\n");
            }
            for col in 0..9 {
                if col == 3 || col == 6 {
                    out.push_str("| ");
                }
                let open = self.is_open(digit, Position::new(row, col));
                out.push(if open { 'X' } else { '.' });
                out.push(' ');
            }
            let trimmed = out.trim_end().len();
            out.truncate(trimmed);
            out.push('\n');
        }
        out
    }

    fn exclude_filled(&mut self, grid: &Grid) {
        for pos in Position::ALL {
            if let Some(digit) = grid.get(pos) {
                self.exclude(pos, digit);
            }
        }
    }

    /// Clears the digit along the placement's row, column, and block, and
    /// every digit at the placed cell itself.
    fn exclude(&mut self, pos: Position, digit: Digit) {
        let v = digit.index();
        let row = usize::from(pos.row());
        let col = usize::from(pos.col());
        for i in 0..9 {
            self.open[v][i][col] = false;
            self.open[v][row][i] = false;
            self.open[i][row][col] = false;
        }
        for cell in Position::BLOCK_CELLS[usize::from(pos.block())] {
            self.open[v][usize::from(cell.row())][usize::from(cell.col())] = false;
        }
    }
}
