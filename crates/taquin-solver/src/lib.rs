//! An IDA* solver for sliding-tile puzzles.
//!
//! The solver searches single-tile slides between two [`State`]s built on
//! [`taquin_core::Grid`]. Iterative-deepening A* keeps memory proportional to
//! the current line of play, so even 8×8 boards search without a visited-set
//! blowup; search effort is steered by a pluggable [`Heuristic`], by default
//! [`ManhattanDistance`] with an optional divert factor that trades shortest
//! paths for speed.
//!
//! # Examples
//!
//! ```
//! use rand::SeedableRng as _;
//! use rand_pcg::Pcg64;
//! use taquin_core::Grid;
//! use taquin_solver::{IdaStar, State};
//!
//! let goal = State::new(Grid::new(3, 3)?);
//! let mut grid = Grid::new(3, 3)?;
//! grid.scramble_with(3.0, &mut Pcg64::seed_from_u64(1))?;
//!
//! let solution = IdaStar::new().solve(&State::new(grid), &goal)?;
//! assert!(solution.path().goal().state().grid().is_solved());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub use self::{
    error::SolveError,
    heuristic::{BoxedHeuristic, Heuristic, ManhattanDistance},
    ida_star::IdaStar,
    mv::Move,
    node::Node,
    path::{Path, Solution},
    state::{PossibleMoves, State},
};

mod error;
mod heuristic;
mod ida_star;
mod mv;
mod node;
mod path;
mod state;

#[cfg(test)]
mod testing;
