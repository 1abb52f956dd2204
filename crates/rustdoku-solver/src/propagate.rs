//! Forced-placement constraint propagation.

use rustdoku_core::{Digit, Grid, Position};

use crate::candidates::Candidates;

/// Fills every cell that a block forces, repeating until a pass deduces
/// nothing.
///
/// For every digit and every empty cell, if the digit has exactly one open
/// cell in that cell's 3x3 block, the digit must go there: the cell is
/// filled, the candidate cube is patched, and the pass is marked as having
/// made progress. Passes repeat until one makes no placement. Digits
/// already placed nine times are skipped; their blocks can force nothing
/// further.
///
/// Propagation never fails: it either completes the grid or stalls with the
/// grid still consistent, handing control to search. Placements only go to
/// open cells, so a consistent grid stays consistent. The caller must
/// supply a consistent grid and a cube tracking it.
///
/// Returns the number of digits placed.
///
/// # Examples
///
/// ```
/// use rustdoku_core::Grid;
/// use rustdoku_solver::{Candidates, propagate};
///
/// let mut grid: Grid = "\
/// 123......
/// 456......
/// 78.......
/// .........
/// .........
/// .........
/// .........
/// .........
/// .........".parse()?;
/// let mut candidates = Candidates::from_grid(&grid);
///
/// // The last free cell of the top-left block is forced.
/// assert_eq!(propagate(&mut grid, &mut candidates), 1);
/// # Ok::<(), rustdoku_core::ParseGridError>(())
/// ```
pub fn propagate(grid: &mut Grid, candidates: &mut Candidates) -> usize {
    debug_assert!(grid.is_correct());

    let mut occurrences = [0_usize; 9];
    for pos in Position::ALL {
        if let Some(digit) = grid.get(pos) {
            occurrences[digit.index()] += 1;
        }
    }

    let mut placed = 0;
    loop {
        let mut progress = false;
        for digit in Digit::ALL {
            if occurrences[digit.index()] == 9 {
                continue;
            }
            for pos in Position::ALL {
                if grid.get(pos).is_some() {
                    continue;
                }
                if let Some(target) = candidates.sole_open_in_block(pos.block(), digit) {
                    grid.set(target, digit);
                    candidates.place(target, digit);
                    occurrences[digit.index()] += 1;
                    placed += 1;
                    progress = true;
                }
            }
        }
        if !progress {
            break;
        }
    }
    placed
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid(lines: [&str; 9]) -> Grid {
        lines.join("\n").parse().unwrap()
    }

    #[test]
    fn test_fills_forced_cell_in_block() {
        let mut g = grid([
            "123......",
            "456......",
            "78.......",
            ".........",
            ".........",
            ".........",
            ".........",
            ".........",
            ".........",
        ]);
        let mut candidates = Candidates::from_grid(&g);

        let placed = propagate(&mut g, &mut candidates);

        assert_eq!(placed, 1);
        assert_eq!(g.get(Position::new(2, 2)), Digit::new(9));
        assert!(g.is_correct());
    }

    #[test]
    fn test_no_progress_on_empty_grid() {
        let mut g = Grid::new();
        let mut candidates = Candidates::from_grid(&g);

        assert_eq!(propagate(&mut g, &mut candidates), 0);
        assert_eq!(g, Grid::new());
    }

    #[test]
    fn test_no_progress_on_complete_grid() {
        let mut g = grid([
            "123456789",
            "456789123",
            "789123456",
            "214365897",
            "365897214",
            "897214365",
            "531642978",
            "642978531",
            "978531642",
        ]);
        let snapshot = g.clone();
        let mut candidates = Candidates::from_grid(&g);

        assert_eq!(propagate(&mut g, &mut candidates), 0);
        assert_eq!(g, snapshot);
    }

    #[test]
    fn test_completes_nearly_solved_grid() {
        let mut g = grid([
            "123456789",
            " 56789123",
            "789123456",
            "214365897",
            "36589721 ",
            "89721 365",
            "5 16 2978",
            "6 2978531",
            "978531642",
        ]);
        let mut candidates = Candidates::from_grid(&g);

        let placed = propagate(&mut g, &mut candidates);

        assert_eq!(placed, 6);
        assert!(g.is_complete());
        assert!(g.is_correct());
    }

    #[test]
    fn test_cascades_until_fixed_point() {
        // An easy puzzle that deduction alone finishes, over several passes.
        let mut g = grid([
            "  3 2 6  ",
            "9  3 5  1",
            "  18 64  ",
            "  81 29  ",
            "7       8",
            "  67 82  ",
            "  26 95  ",
            "8  2 3  9",
            "  5 1 3  ",
        ]);
        let mut candidates = Candidates::from_grid(&g);

        let placed = propagate(&mut g, &mut candidates);

        assert_eq!(placed, g.filled_cells() - 32);
        assert!(g.is_complete());
        assert!(g.is_correct());
    }

    #[test]
    fn test_keeps_grid_consistent_when_stalled() {
        // Ambiguous puzzle: propagation stalls short of completion but the
        // grid must remain consistent.
        let mut g = grid([
            ".....3.17",
            ".15..9..8",
            ".6.......",
            "1....7...",
            "..9...2..",
            "...5....4",
            ".......2.",
            "5..6..34.",
            "34.2.....",
        ]);
        let mut candidates = Candidates::from_grid(&g);

        let placed = propagate(&mut g, &mut candidates);

        assert_eq!(placed, 3);
        assert_eq!(g.filled_cells(), 25);
        assert!(g.is_correct());
        assert!(!g.is_complete());
    }
}
