//! Example demonstrating scrambling and solving a board.
//!
//! This example shows how to:
//! - Create and scramble a `Grid`
//! - Configure `IdaStar` with a divert factor and a time budget
//! - Display the solution moves and search statistics
//!
//! # Usage
//!
//! ```sh
//! cargo run --release --example solve
//! ```
//!
//! Solve a larger board, trading path quality for speed:
//!
//! ```sh
//! cargo run --release --example solve -- --width 6 --height 6 --divert 4.0
//! ```
//!
//! Reproduce a specific scramble and cap the search time:
//!
//! ```sh
//! cargo run --release --example solve -- --seed 42 --timeout-ms 5000
//! ```

use std::{process, time::Duration};

use clap::Parser;
use rand::SeedableRng as _;
use rand_pcg::Pcg64;
use taquin_core::{DEFAULT_SCRAMBLE_MAGNITUDE, Grid};
use taquin_solver::{IdaStar, ManhattanDistance, State};

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Board width in cells (3 to 8).
    #[arg(long, value_name = "CELLS", default_value_t = 4)]
    width: u8,

    /// Board height in cells (3 to 8).
    #[arg(long, value_name = "CELLS", default_value_t = 4)]
    height: u8,

    /// Scramble strength (at least 1.0).
    #[arg(long, value_name = "FACTOR", default_value_t = DEFAULT_SCRAMBLE_MAGNITUDE)]
    magnitude: f64,

    /// Heuristic divert factor (at least 1.0); larger finds longer paths faster.
    #[arg(long, value_name = "FACTOR", default_value_t = 3.0)]
    divert: f64,

    /// Abort the search after this many milliseconds.
    #[arg(long, value_name = "MS")]
    timeout_ms: Option<u64>,

    /// RNG seed for a reproducible scramble.
    #[arg(long, value_name = "SEED")]
    seed: Option<u64>,
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    let heuristic = match ManhattanDistance::with_divert_factor(args.divert) {
        Ok(heuristic) => heuristic,
        Err(err) => {
            eprintln!("{err}");
            process::exit(2);
        }
    };

    let mut grid = match Grid::new(args.width, args.height) {
        Ok(grid) => grid,
        Err(err) => {
            eprintln!("{err}");
            process::exit(2);
        }
    };
    let goal = State::new(grid.clone());

    let scrambled = match args.seed {
        Some(seed) => grid.scramble_with(args.magnitude, &mut Pcg64::seed_from_u64(seed)),
        None => grid.scramble(args.magnitude),
    };
    if let Err(err) = scrambled {
        eprintln!("{err}");
        process::exit(2);
    }

    println!("Scrambled:");
    print!("{grid}");
    println!();

    let mut solver = IdaStar::with_heuristic(heuristic);
    solver.set_timeout(args.timeout_ms.map(Duration::from_millis));

    let solution = match solver.solve(&State::new(grid), &goal) {
        Ok(solution) => solution,
        Err(err) => {
            eprintln!("{err}");
            process::exit(1);
        }
    };

    println!("Moves:");
    for (i, mv) in solution.path().moves().enumerate() {
        println!("  {:3}  {mv}", i + 1);
    }
    println!();

    println!("Stats:");
    println!("  moves: {}", solution.path().len() - 1);
    println!("  nodes expanded: {}", solution.expanded_nodes());
    println!("  elapsed: {:?}", solution.elapsed());
}
