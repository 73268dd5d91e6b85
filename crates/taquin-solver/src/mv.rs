use std::fmt;

use taquin_core::Position;

/// One slide step in a search path.
///
/// A move is identified by its start position, the cell whose tile line
/// slides toward the blank. The destination only becomes known relative to a
/// concrete state: it is the cell the blank vacates, recorded when the move
/// is applied with [`State::apply`](crate::State::apply). Moves produced by
/// [`State::possible_moves`](crate::State::possible_moves) carry no
/// destination yet.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Move {
    from: Position,
    to: Option<Position>,
}

impl Move {
    pub(crate) const fn new(from: Position) -> Self {
        Self { from, to: None }
    }

    pub(crate) const fn resolved(from: Position, to: Position) -> Self {
        Self {
            from,
            to: Some(to),
        }
    }

    /// Returns the start position of the slide.
    #[must_use]
    #[inline]
    pub const fn from(self) -> Position {
        self.from
    }

    /// Returns the cell the blank vacated, or `None` if the move has not
    /// been applied to a state yet.
    #[must_use]
    #[inline]
    pub const fn to(self) -> Option<Position> {
        self.to
    }

    /// Returns `true` if this move starts from the cell the blank occupied
    /// before `other` was applied, i.e. if it would exactly undo `other`.
    ///
    /// Always `false` when `other` has no destination recorded.
    #[must_use]
    pub fn is_inverse(self, other: Self) -> bool {
        other.to == Some(self.from)
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.to {
            Some(to) => write!(f, "{} -> {}", self.from, to),
            None => write!(f, "{} -> blank", self.from),
        }
    }
}
