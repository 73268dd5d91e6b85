use std::hash::{Hash, Hasher};

use taquin_core::Grid;
use tinyvec::ArrayVec;

use crate::Move;

/// The legal moves out of a state. Never more than the four neighbors of the
/// blank, so the collection lives on the stack.
pub type PossibleMoves = ArrayVec<[Move; 4]>;

/// An immutable grid arrangement used as a vertex of the search space.
///
/// The search only ever slides single tiles, so [`State::possible_moves`]
/// offers the blank's neighbors rather than full-line starts. States equal by
/// [`PartialEq`] when their grids do, payloads included; the solver itself
/// compares arrangements with [`State::matches_arrangement`], which ignores
/// payloads.
#[derive(Debug, Clone)]
pub struct State<T = ()> {
    grid: Grid<T>,
}

impl<T> State<T> {
    /// Wraps a grid as a search state.
    #[must_use]
    #[inline]
    pub const fn new(grid: Grid<T>) -> Self {
        Self { grid }
    }

    /// Returns the underlying grid.
    #[must_use]
    #[inline]
    pub const fn grid(&self) -> &Grid<T> {
        &self.grid
    }

    /// Unwraps the state back into its grid.
    #[must_use]
    pub fn into_grid(self) -> Grid<T> {
        self.grid
    }

    /// Returns the moves that slide one of the blank's neighbors, nearest
    /// arm first in left, right, up, down order.
    #[must_use]
    pub fn possible_moves(&self) -> PossibleMoves {
        self.grid.start_positions(true).map(Move::new).collect()
    }

    /// Returns `true` if `other` has the same dimensions and the same tile
    /// orders on every cell, regardless of payloads.
    #[must_use]
    pub fn matches_arrangement(&self, other: &Self) -> bool {
        self.grid.width() == other.grid.width()
            && self.grid.height() == other.grid.height()
            && self
                .grid
                .tiles()
                .zip(other.grid.tiles())
                .all(|((_, a), (_, b))| a.order() == b.order())
    }
}

impl<T: Clone> State<T> {
    /// Applies `mv` to a copy of this state.
    ///
    /// Returns the successor state together with the move resolved against
    /// this state: its destination is filled in with the blank's position
    /// before the slide.
    #[must_use]
    pub fn apply(&self, mv: Move) -> (Self, Move) {
        let mut grid = self.grid.clone();
        let moved = grid.move_from(mv.from());
        debug_assert!(moved, "possible moves are always legal");
        (Self { grid }, Move::resolved(mv.from(), self.grid.blank()))
    }
}

impl<T: PartialEq> PartialEq for State<T> {
    fn eq(&self, other: &Self) -> bool {
        self.grid == other.grid
    }
}

impl<T: Eq> Eq for State<T> {}

impl<T> Hash for State<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.grid.hash(state);
    }
}
