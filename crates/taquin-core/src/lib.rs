//! Core data structures for sliding-tile puzzles.
//!
//! This crate models the classic N-puzzle family (the 15-puzzle and its
//! relatives) on rectangular boards from 3×3 up to 8×8. A [`Grid`] tracks
//! tile placement, the blank cell, and a solved-condition bitmask that is
//! maintained incrementally as tiles slide.
//!
//! Tiles move in lines: a slide starts from any cell sharing the blank's row
//! or column and pushes every tile between it and the blank one step, so a
//! single move can relocate several tiles at once. [`Grid::scramble`] builds
//! on the same primitive, which guarantees that scrambled boards are always
//! solvable.
//!
//! Search and solving live in the companion `taquin-solver` crate; this crate
//! is only concerned with board mechanics.
//!
//! # Examples
//!
//! ```
//! use taquin_core::{Grid, Position};
//!
//! let mut grid = Grid::new(4, 4)?;
//! assert!(grid.is_solved());
//!
//! // Slide the tile left of the blank into the blank cell.
//! let start = Position::new(2, 3);
//! assert!(grid.move_from(start));
//! assert_eq!(grid.blank(), start);
//!
//! // Sliding back from the old blank position undoes the move.
//! assert!(grid.move_from(Position::new(3, 3)));
//! assert!(grid.is_solved());
//! # Ok::<(), taquin_core::GridError>(())
//! ```

pub mod grid;
pub mod position;

pub use self::{
    grid::{
        DEFAULT_SCRAMBLE_MAGNITUDE, Grid, GridError, MAX_DIMENSION, MIN_DIMENSION, SlideEvent,
        StartPositions, Tile,
    },
    position::Position,
};
