//! The 9x9 puzzle grid: storage, consistency checks, and the text format.

use std::{
    fmt::{self, Display, Write as _},
    str::FromStr,
};

use crate::{digit::Digit, position::Position};

/// Errors produced when parsing a grid from text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ParseGridError {
    /// The text did not contain exactly nine rows.
    #[display("expected 9 rows, got {rows}")]
    WrongRowCount {
        /// Number of rows found.
        rows: usize,
    },
    /// A row did not contain exactly nine cells.
    #[display("row {row} has {cells} cells, expected 9")]
    WrongRowLength {
        /// 0-based index of the offending row.
        row: usize,
        /// Number of cells found in that row.
        cells: usize,
    },
    /// A cell character was neither a digit 1-9 nor a blank marker.
    #[display("invalid character {c:?} at row {row}, column {col}")]
    InvalidCharacter {
        /// 0-based row of the offending cell.
        row: usize,
        /// 0-based column of the offending cell.
        col: usize,
        /// The character that was found.
        c: char,
    },
}

/// A uniqueness violation among the filled cells of a grid.
///
/// Reports the first violation found by a row-major scan: for each cell,
/// its row is checked before its column, and its column before its block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ConsistencyError {
    /// The digit appears more than once in the row.
    #[display("repeated digit {digit} in row {row}")]
    DuplicateInRow {
        /// The repeated digit.
        digit: Digit,
        /// 0-based row containing the repetition.
        row: u8,
    },
    /// The digit appears more than once in the column.
    #[display("repeated digit {digit} in column {col}")]
    DuplicateInColumn {
        /// The repeated digit.
        digit: Digit,
        /// 0-based column containing the repetition.
        col: u8,
    },
    /// The digit appears more than once in the 3x3 block.
    #[display("repeated digit {digit} in block {block}")]
    DuplicateInBlock {
        /// The repeated digit.
        digit: Digit,
        /// Index (0-8) of the block containing the repetition.
        block: u8,
    },
}

/// A 9x9 sudoku grid of optional digits.
///
/// The grid is owned by a single solving session: it is mutated in place
/// during propagation and search, and snapshotted with [`Clone`] before each
/// trial placement so a failed branch can be rolled back wholesale.
///
/// # Text format
///
/// A grid is nine `\n`-separated lines of nine characters each. `'1'`-`'9'`
/// are digits; `'.'`, `' '`, `'0'` and `'_'` all mean "empty". Serialization
/// picks one blank marker ([`Grid::to_text_with_blank`]), so parsing and
/// re-serializing with the same marker reproduces the input byte for byte.
///
/// # Examples
///
/// ```
/// use rustdoku_core::Grid;
///
/// let text = "\
/// .....3.17
/// .15..9..8
/// .6.......
/// 1....7...
/// ..9...2..
/// ...5....4
/// .......2.
/// 5..6..34.
/// 34.2.....";
///
/// let grid: Grid = text.parse().unwrap();
/// assert!(grid.is_correct());
/// assert!(!grid.is_complete());
/// assert_eq!(grid.to_text_with_blank('.'), text);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cells: [[Option<Digit>; 9]; 9],
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}

impl Grid {
    /// Creates an empty grid.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            cells: [[None; 9]; 9],
        }
    }

    /// Returns the digit at a position, or `None` if the cell is empty.
    #[must_use]
    pub fn get(&self, pos: Position) -> Option<Digit> {
        self.cells[usize::from(pos.row())][usize::from(pos.col())]
    }

    /// Places a digit at a position, overwriting any previous value.
    pub fn set(&mut self, pos: Position, digit: Digit) {
        self.cells[usize::from(pos.row())][usize::from(pos.col())] = Some(digit);
    }

    /// Returns the number of filled cells (0-81).
    #[must_use]
    pub fn filled_cells(&self) -> usize {
        Position::ALL.iter().filter(|p| self.get(**p).is_some()).count()
    }

    /// Returns `true` if every one of the 81 cells holds a digit.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        Position::ALL.iter().all(|p| self.get(*p).is_some())
    }

    /// Returns `true` if no digit repeats within any row, column, or block.
    ///
    /// Correctness is about *consistency*, not completeness: an empty or
    /// partially filled grid with no repeats is correct.
    #[must_use]
    pub fn is_correct(&self) -> bool {
        self.check_consistency().is_ok()
    }

    /// Checks the uniqueness constraints over all filled cells.
    ///
    /// # Errors
    ///
    /// Returns the first [`ConsistencyError`] found by a row-major scan.
    pub fn check_consistency(&self) -> Result<(), ConsistencyError> {
        let mut row_seen = [[false; 9]; 9];
        let mut col_seen = [[false; 9]; 9];
        let mut block_seen = [[false; 9]; 9];
        for pos in Position::ALL {
            let Some(digit) = self.get(pos) else {
                continue;
            };
            let d = digit.index();
            let row = usize::from(pos.row());
            let col = usize::from(pos.col());
            let block = usize::from(pos.block());
            if row_seen[row][d] {
                return Err(ConsistencyError::DuplicateInRow {
                    digit,
                    row: pos.row(),
                });
            }
            if col_seen[col][d] {
                return Err(ConsistencyError::DuplicateInColumn {
                    digit,
                    col: pos.col(),
                });
            }
            if block_seen[block][d] {
                return Err(ConsistencyError::DuplicateInBlock {
                    digit,
                    block: pos.block(),
                });
            }
            row_seen[row][d] = true;
            col_seen[col][d] = true;
            block_seen[block][d] = true;
        }
        Ok(())
    }

    /// Serializes the grid to its nine-line text form.
    ///
    /// Empty cells are written as `blank`. Parsing the result reproduces
    /// this grid as long as `blank` is one of the accepted blank markers.
    #[must_use]
    pub fn to_text_with_blank(&self, blank: char) -> String {
        let mut text = String::with_capacity(9 * 10);
        for (i, row) in self.cells.iter().enumerate() {
            if i > 0 {
                text.push('\n');
            }
            for cell in row {
                text.push(cell.map_or(blank, Digit::to_char));
            }
        }
        text
    }

    /// Renders the grid with 3x3 block rules for console output.
    ///
    /// Digits are separated by spaces, blocks by `|` columns and
    /// `- - - + - - - + - - -` rules; empty cells show as `.`.
    #[must_use]
    pub fn pretty(&self) -> String {
        let mut out = String::new();
        for (i, row) in self.cells.iter().enumerate() {
            if i == 3 || i == 6 {
                out.push_str("- - - + - - - + - - -\n");
            }
            for (j, cell) in row.iter().enumerate() {
                if j == 3 || j == 6 {
                    out.push_str("| ");
                }
                match cell {
                    Some(digit) => {
                        let _ = write!(out, "{digit} ");
                    }
                    None => out.push_str(". "),
                }
            }
            let trimmed = out.trim_end().len();
            out.truncate(trimmed);
            out.push('\n');
        }
        out
    }
}

impl FromStr for Grid {
    type Err = ParseGridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lines: Vec<&str> = s.lines().collect();
        if lines.len() != 9 {
            return Err(ParseGridError::WrongRowCount { rows: lines.len() });
        }
        let mut cells = [[None; 9]; 9];
        for (row, line) in lines.iter().enumerate() {
            let mut count = 0;
            for (col, c) in line.chars().enumerate() {
                count += 1;
                if count > 9 {
                    continue;
                }
                cells[row][col] = match c {
                    '.' | ' ' | '0' | '_' => None,
                    _ => Some(
                        Digit::from_char(c)
                            .ok_or(ParseGridError::InvalidCharacter { row, col, c })?,
                    ),
                };
            }
            if count != 9 {
                return Err(ParseGridError::WrongRowLength { row, cells: count });
            }
        }
        Ok(Self { cells })
    }
}

impl Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_text_with_blank('.'))
    }
}
