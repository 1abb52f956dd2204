//! Heuristic backtracking search.

use rustdoku_core::{Digit, Grid, Position};
use tinyvec::ArrayVec;

use crate::{candidates::Candidates, propagate::propagate, solver::SolveStats};

/// A trial placement considered during search.
///
/// Ephemeral: choices are produced by [`choose`], tried by [`search`], and
/// never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Choice {
    /// The cell to fill.
    pub pos: Position,
    /// The digit to place there.
    pub digit: Digit,
}

// tinyvec backing arrays need Default; the placeholder is never observed.
impl Default for Choice {
    fn default() -> Self {
        Self {
            pos: Position::new(0, 0),
            digit: Digit::ALL[0],
        }
    }
}

/// The alternatives for one most-constrained `(digit, row)` pair.
///
/// A row has at most nine open columns for a digit, so the list never
/// spills to the heap.
pub type Choices = ArrayVec<[Choice; 9]>;

/// Selects the trial placements for the most constrained `(digit, row)`
/// pair.
///
/// Scans all `(digit, row)` combinations in ascending enumeration order
/// (digit, then row) and counts the open columns for each. The first pair
/// attaining the smallest count in 1-8 wins, and all of its placements are
/// returned in column order. Rows where a digit is open in all nine columns
/// carry no constraint to exploit and are never selected, so a virgin grid
/// yields no choices.
///
/// An empty result means no trial placement is available, which is an
/// expected outcome, not an error.
#[must_use]
pub fn choose(candidates: &Candidates) -> Choices {
    let mut min_count = 9;
    let mut best = Choices::new();
    for digit in Digit::ALL {
        for row in 0..9 {
            let mut group = Choices::new();
            for col in 0..9 {
                let pos = Position::new(row, col);
                if candidates.is_open(digit, pos) {
                    group.push(Choice { pos, digit });
                }
            }
            if !group.is_empty() && group.len() < min_count {
                min_count = group.len();
                best = group;
            }
        }
    }
    best
}

/// Recursive backtracking descent over trial placements.
///
/// Each level rebuilds the candidate cube, asks [`choose`] for the most
/// constrained alternatives, and tries them in order: snapshot the grid,
/// place, propagate to exhaustion, and recurse. A branch that fails
/// restores the snapshot (and the cube with it) before the next
/// alternative. Success, a correct and complete grid, propagates straight
/// up the call stack with no further undo.
///
/// Returns `false` once every alternative at this level is exhausted.
pub fn search(grid: &mut Grid, candidates: &mut Candidates, stats: &mut SolveStats) -> bool {
    if grid.is_correct() && grid.is_complete() {
        return true;
    }
    candidates.recompute(grid);
    for choice in choose(candidates) {
        stats.nodes += 1;
        let snapshot = grid.clone();
        grid.set(choice.pos, choice.digit);
        candidates.place(choice.pos, choice.digit);
        stats.deduced += propagate(grid, candidates);
        if search(grid, candidates, stats) {
            return true;
        }
        *grid = snapshot;
        candidates.recompute(grid);
        stats.backtracks += 1;
    }
    false
}
