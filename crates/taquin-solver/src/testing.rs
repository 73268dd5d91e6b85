//! Shared helpers for solver tests.

use rand::SeedableRng as _;
use rand_pcg::Pcg64;
use taquin_core::Grid;

use crate::{BoxedHeuristic, Heuristic, Move, Node, State};

/// Estimates zero everywhere, degrading IDA* to plain iterative deepening.
/// Exercises the engine independently of any distance information.
#[derive(Debug, Clone, Copy)]
pub(crate) struct ZeroHeuristic;

impl<T> Heuristic<T> for ZeroHeuristic {
    fn evaluate(&self, _node: &Node<T>) -> u32 {
        0
    }

    fn clone_box(&self) -> BoxedHeuristic<T> {
        Box::new(*self)
    }
}

/// Builds a reproducibly scrambled state.
pub(crate) fn scrambled_state(width: u8, height: u8, magnitude: f64, seed: u64) -> State {
    let mut grid = Grid::new(width, height).unwrap();
    grid.scramble_with(magnitude, &mut Pcg64::seed_from_u64(seed))
        .unwrap();
    State::new(grid)
}

/// Builds a solved state.
pub(crate) fn solved_state(width: u8, height: u8) -> State {
    State::new(Grid::new(width, height).unwrap())
}

/// Replays `moves` on a copy of `initial` and asserts every slide is legal
/// and the goal arrangement is reached.
#[track_caller]
pub(crate) fn assert_replay_reaches(
    initial: &State,
    goal: &State,
    moves: impl IntoIterator<Item = Move>,
) {
    let mut grid = initial.grid().clone();
    for mv in moves {
        assert!(grid.move_from(mv.from()), "replayed move {mv} must be legal");
    }
    assert!(
        State::new(grid).matches_arrangement(goal),
        "replay must reach the goal arrangement"
    );
}
