//! Console front end for the rustdoku solver.
//!
//! Reads a puzzle from a file (or stdin), solves it, and writes the solved
//! grid to stdout.
//!
//! # Usage
//!
//! ```sh
//! cargo run --release -p rustdoku-cli -- puzzle.txt
//! ```
//!
//! Read the puzzle from stdin:
//!
//! ```sh
//! cat puzzle.txt | cargo run --release -p rustdoku-cli -- -
//! ```
//!
//! Print solver statistics and use spaces for empty cells in the output:
//!
//! ```sh
//! cargo run --release -p rustdoku-cli -- puzzle.txt --stats --blank ' '
//! ```
//!
//! Candidate maps and progress output are logged through `env_logger`; set
//! `RUST_LOG=debug` to see them.

use std::{
    fs,
    io::Read as _,
    path::{Path, PathBuf},
    process,
    time::Instant,
};

use clap::Parser;
use rustdoku_core::{Digit, Grid};
use rustdoku_solver::{Candidates, SolveOutcome, SolveStats, Solver};

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Puzzle file: nine lines of nine characters, digits 1-9 with '.',
    /// ' ', '0' or '_' for empty cells. Use '-' to read from stdin.
    #[arg(value_name = "PUZZLE")]
    puzzle: PathBuf,

    /// Character used for empty cells in the serialized output.
    #[arg(long, value_name = "CHAR", default_value_t = '.')]
    blank: char,

    /// Print solver statistics to stderr after the run.
    #[arg(long)]
    stats: bool,
}

fn main() {
    better_panic::install();
    env_logger::init();

    let args = Args::parse();

    let text = match read_puzzle(&args.puzzle) {
        Ok(text) => text,
        Err(err) => {
            eprintln!("cannot read {}: {err}", args.puzzle.display());
            process::exit(2);
        }
    };
    let grid: Grid = match text.parse() {
        Ok(grid) => grid,
        Err(err) => {
            eprintln!("cannot parse {}: {err}", args.puzzle.display());
            process::exit(2);
        }
    };

    log::debug!("input:\n{}", grid.pretty());
    if log::log_enabled!(log::Level::Trace) {
        let candidates = Candidates::from_grid(&grid);
        for digit in Digit::ALL {
            log::trace!("{}", candidates.render(digit));
        }
    }

    let mut solved = grid.clone();
    let start = Instant::now();
    let (outcome, stats) = Solver::new().solve(&mut solved);
    let elapsed = start.elapsed();
    log::info!("{outcome} in {elapsed:.2?}");

    if args.stats {
        report_stats(&stats);
    }

    match outcome {
        SolveOutcome::Solved => {
            log::debug!("solution:\n{}", solved.pretty());
            println!("{}", solved.to_text_with_blank(args.blank));
        }
        SolveOutcome::Unsolvable => {
            eprintln!("no solution reachable; best effort:");
            eprintln!("{}", solved.to_text_with_blank(args.blank));
            process::exit(1);
        }
        SolveOutcome::Rejected => {
            if let Err(err) = grid.check_consistency() {
                eprintln!("puzzle rejected: {err}");
            }
            process::exit(2);
        }
    }
}

fn read_puzzle(path: &Path) -> std::io::Result<String> {
    if path.as_os_str() == "-" {
        let mut text = String::new();
        std::io::stdin().read_to_string(&mut text)?;
        Ok(text)
    } else {
        fs::read_to_string(path)
    }
}

fn report_stats(stats: &SolveStats) {
    eprintln!("Stats:");
    eprintln!("  deduced: {}", stats.deduced);
    eprintln!("  nodes: {}", stats.nodes);
    eprintln!("  backtracks: {}", stats.backtracks);
}
