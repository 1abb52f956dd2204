use rustdoku_core::Grid;

use crate::{candidates::Candidates, propagate::propagate, search::search};

/// Statistics collected during a solve run.
///
/// # Examples
///
/// ```
/// use rustdoku_core::Grid;
/// use rustdoku_solver::Solver;
///
/// let mut grid: Grid = "\
/// 123456789
/// 456789123
/// 789123456
/// 214365897
/// 365897214
/// 897214365
/// 531642978
/// 642978531
/// 978531642".parse()?;
///
/// // An already solved grid needs no work at all.
/// let (_, stats) = Solver::new().solve(&mut grid);
/// assert_eq!(stats, rustdoku_solver::SolveStats::default());
/// # Ok::<(), rustdoku_core::ParseGridError>(())
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SolveStats {
    /// Placements made by constraint propagation, before and during search.
    pub deduced: usize,
    /// Trial placements attempted by the search.
    pub nodes: usize,
    /// Grid snapshots restored after failed search branches.
    pub backtracks: usize,
}

/// How a solve run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::IsVariant)]
pub enum SolveOutcome {
    /// The grid is complete and satisfies all uniqueness constraints.
    #[display("solved")]
    Solved,
    /// Deduction and search exhausted every choice without completing the
    /// grid; it is left in its best-effort post-propagation state.
    #[display("unsolvable")]
    Unsolvable,
    /// The input grid already violated a uniqueness constraint; nothing was
    /// changed.
    #[display("rejected")]
    Rejected,
}

/// Drives a full solving session over a grid.
///
/// A session validates the input, builds the candidate cube, propagates
/// forced placements to a fixed point, and falls back to backtracking
/// search only if the grid is still incomplete. The grid is mutated in
/// place; the caller can confirm the result through
/// [`Grid::is_complete`] and [`Grid::is_correct`] or the returned
/// [`SolveOutcome`].
///
/// # Examples
///
/// ```
/// use rustdoku_core::Grid;
/// use rustdoku_solver::{SolveOutcome, Solver};
///
/// let mut grid: Grid = "\
/// .....3.17
/// .15..9..8
/// .6.......
/// 1....7...
/// ..9...2..
/// ...5....4
/// .......2.
/// 5..6..34.
/// 34.2.....".parse()?;
///
/// let (outcome, stats) = Solver::new().solve(&mut grid);
/// assert_eq!(outcome, SolveOutcome::Solved);
/// assert!(stats.nodes > 0); // deduction alone cannot finish this one
/// # Ok::<(), rustdoku_core::ParseGridError>(())
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Solver;

impl Solver {
    /// Creates a new solver.
    #[must_use]
    pub const fn new() -> Self {
        Solver
    }

    /// Solves the grid in place and reports the outcome and statistics.
    pub fn solve(&self, grid: &mut Grid) -> (SolveOutcome, SolveStats) {
        let mut stats = SolveStats::default();
        let outcome = self.solve_with_stats(grid, &mut stats);
        (outcome, stats)
    }

    /// Solves the grid in place, accumulating statistics into `stats`.
    ///
    /// This is the same run as [`solve`](Self::solve) but lets the caller
    /// aggregate statistics across several puzzles.
    pub fn solve_with_stats(&self, grid: &mut Grid, stats: &mut SolveStats) -> SolveOutcome {
        if !grid.is_correct() {
            return SolveOutcome::Rejected;
        }
        let mut candidates = Candidates::from_grid(grid);
        stats.deduced += propagate(grid, &mut candidates);
        if grid.is_complete() {
            return SolveOutcome::Solved;
        }
        if search(grid, &mut candidates, stats) {
            SolveOutcome::Solved
        } else {
            SolveOutcome::Unsolvable
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid(lines: [&str; 9]) -> Grid {
        lines.join("\n").parse().unwrap()
    }

    #[test]
    fn test_already_solved_grid_is_left_unchanged() {
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

        let (outcome, stats) = Solver::new().solve(&mut g);

        assert_eq!(outcome, SolveOutcome::Solved);
        assert_eq!(g, snapshot);
        assert_eq!(stats, SolveStats::default());
    }

    #[test]
    fn test_solves_by_propagation_alone() {
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

        let (outcome, stats) = Solver::new().solve(&mut g);

        assert_eq!(outcome, SolveOutcome::Solved);
        assert!(g.is_correct());
        assert!(g.is_complete());
        assert_eq!(stats.deduced, 6);
        assert_eq!(stats.nodes, 0);
    }

    #[test]
    fn test_solves_easy_puzzle_without_search() {
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

        let (outcome, stats) = Solver::new().solve(&mut g);

        assert_eq!(outcome, SolveOutcome::Solved);
        assert!(g.is_correct());
        assert!(g.is_complete());
        assert_eq!(stats.deduced, 49);
        assert_eq!(stats.nodes, 0);
    }

    #[test]
    fn test_solves_second_easy_puzzle_without_search() {
        let mut g = grid([
            "2   8 3  ",
            " 6  7  84",
            " 3 5  2 9",
            "   1 54 8",
            "         ",
            "4 27 6   ",
            "3 1  7 4 ",
            "72  4  6 ",
            "  4 1   3",
        ]);

        let (outcome, stats) = Solver::new().solve(&mut g);

        assert_eq!(outcome, SolveOutcome::Solved);
        assert!(g.is_correct());
        assert!(g.is_complete());
        assert_eq!(stats.nodes, 0);
    }

    #[test]
    fn test_solves_ambiguous_puzzle_with_search() {
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

        let (outcome, stats) = Solver::new().solve(&mut g);

        assert_eq!(outcome, SolveOutcome::Solved);
        assert!(g.is_correct());
        assert!(g.is_complete());
        assert!(stats.nodes > 0);
        assert_eq!(
            g.to_text_with_blank('.'),
            [
                "294863517",
                "715429638",
                "863751492",
                "152947863",
                "479386251",
                "638512974",
                "986134725",
                "521678349",
                "347295186",
            ]
            .join("\n")
        );
    }

    #[test]
    fn test_rejects_contradictory_puzzle_without_touching_it() {
        // The center block holds two 1s; the input is inconsistent.
        let mut g = grid([
            "36..712..",
            ".5....18.",
            "..92.47..",
            "....13.28",
            "4..1.2..9",
            "27.46....",
            "..53.89..",
            ".83....6.",
            "..769..43",
        ]);
        let snapshot = g.clone();

        let (outcome, stats) = Solver::new().solve(&mut g);

        assert_eq!(outcome, SolveOutcome::Rejected);
        assert_eq!(g, snapshot);
        assert_eq!(stats, SolveStats::default());
        assert!(!g.is_correct());
        assert!(!g.is_complete());
    }

    #[test]
    fn test_virgin_grid_is_unsolvable_by_this_procedure() {
        // With no givens, no (digit, row) pair carries a constraint, so the
        // heuristic has nothing to try and the run reports exhaustion.
        let mut g = Grid::new();

        let (outcome, _) = Solver::new().solve(&mut g);

        assert_eq!(outcome, SolveOutcome::Unsolvable);
        assert!(g.is_correct());
        assert!(!g.is_complete());
    }

    #[test]
    fn test_outcome_predicates_and_display() {
        assert!(SolveOutcome::Solved.is_solved());
        assert!(SolveOutcome::Unsolvable.is_unsolvable());
        assert!(SolveOutcome::Rejected.is_rejected());
        assert_eq!(SolveOutcome::Solved.to_string(), "solved");
        assert_eq!(SolveOutcome::Unsolvable.to_string(), "unsolvable");
        assert_eq!(SolveOutcome::Rejected.to_string(), "rejected");
    }

    #[test]
    fn test_stats_accumulate_across_runs() {
        let solver = Solver::new();
        let mut stats = SolveStats::default();

        let mut first = grid([
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
        let outcome = solver.solve_with_stats(&mut first, &mut stats);
        assert_eq!(outcome, SolveOutcome::Solved);
        assert_eq!(stats.deduced, 6);

        // The second grid is already solved; the totals stay untouched.
        let mut second = first.clone();
        let outcome = solver.solve_with_stats(&mut second, &mut stats);
        assert_eq!(outcome, SolveOutcome::Solved);
        assert_eq!(stats.deduced, 6);
    }
}
