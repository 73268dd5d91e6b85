//! The sliding-tile grid.
//!
//! A [`Grid`] holds a rectangular arrangement of tiles with one distinguished
//! blank cell. All mutation goes through [`Grid::move_from`] (a line-slide of
//! one or more tiles toward the blank) and [`Grid::scramble`] (a random walk
//! of such slides), so every reachable arrangement stays solvable.

use std::{
    fmt::{self, Debug, Display},
    hash::{Hash, Hasher},
    iter::FusedIterator,
    mem,
};

use rand::{Rng, RngExt as _};

use crate::Position;

/// Smallest supported grid width and height.
pub const MIN_DIMENSION: u8 = 3;

/// Largest supported grid width and height.
///
/// Together with [`MIN_DIMENSION`] this bounds the cell count by 64, which
/// lets the solved condition live in a single `u64` mask.
pub const MAX_DIMENSION: u8 = 8;

/// Magnitude used by [`Grid::scramble`] when callers have no preference.
pub const DEFAULT_SCRAMBLE_MAGNITUDE: f64 = 10.0;

/// Errors produced by [`Grid`] construction and scrambling.
#[derive(Debug, Clone, Copy, PartialEq, derive_more::Display, derive_more::Error)]
pub enum GridError {
    /// A width or height outside the supported range.
    #[display("grid dimension {dimension} is outside the supported range 3..=8")]
    DimensionOutOfRange {
        /// The rejected dimension.
        dimension: u8,
    },
    /// A scramble magnitude below the minimum of 1.0.
    #[display("scramble magnitude {magnitude} is less than 1.0")]
    MagnitudeOutOfRange {
        /// The rejected magnitude.
        magnitude: f64,
    },
}

/// A single cell: the tile's home order plus a caller-supplied payload.
///
/// The home order says where the tile belongs in the solved arrangement
/// (row-major, `0` at the top-left). The payload is opaque to this crate;
/// games typically use it to attach tile identity for rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tile<T> {
    order: u8,
    payload: T,
}

impl<T> Tile<T> {
    /// Returns the tile's home order.
    #[must_use]
    #[inline]
    pub const fn order(&self) -> u8 {
        self.order
    }

    /// Returns a reference to the tile's payload.
    #[must_use]
    #[inline]
    pub const fn payload(&self) -> &T {
        &self.payload
    }

    /// Returns a mutable reference to the tile's payload.
    #[inline]
    pub fn payload_mut(&mut self) -> &mut T {
        &mut self.payload
    }
}

/// Notification passed to the observer after every successful slide.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlideEvent {
    /// Where the blank was before the slide.
    pub old_blank: Position,
    /// Where the blank is now (the chosen start position).
    pub new_blank: Position,
    /// Whether the slide was performed by [`Grid::scramble`].
    pub scrambling: bool,
}

type SlideObserver = Box<dyn FnMut(SlideEvent) + Send>;

/// An N×M sliding-tile arrangement.
///
/// Exactly one cell is blank; its coordinates are tracked incrementally as
/// tiles slide. A 64-bit condition mask records, per cell, whether the cell
/// currently holds the tile whose home order matches it, so [`Grid::is_solved`]
/// is a single comparison.
///
/// The payload type `T` defaults to `()`; bounds appear only on the
/// operations that need them (`Clone` for [`Clone`], `PartialEq` for
/// equality). Cloning never carries the observer registered with
/// [`Grid::set_observer`].
///
/// # Examples
///
/// ```
/// use taquin_core::{Grid, Position};
///
/// let mut grid = Grid::new(3, 3)?;
/// assert!(grid.is_solved());
/// assert_eq!(grid.blank(), Position::new(2, 2));
///
/// // Slide the two tiles left of the blank one step rightward.
/// assert!(grid.move_from(Position::new(0, 2)));
/// assert_eq!(grid.blank(), Position::new(0, 2));
/// assert!(!grid.is_solved());
/// # Ok::<(), taquin_core::GridError>(())
/// ```
pub struct Grid<T = ()> {
    width: u8,
    height: u8,
    tiles: Vec<Tile<T>>,
    blank: Position,
    condition: u64,
    solved_condition: u64,
    observer: Option<SlideObserver>,
}

impl Grid {
    /// Creates a solved grid with unit payloads.
    ///
    /// Home orders are laid out row-major with the blank at the bottom-right
    /// corner.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::DimensionOutOfRange`] if `width` or `height` is
    /// outside [`MIN_DIMENSION`]`..=`[`MAX_DIMENSION`].
    pub fn new(width: u8, height: u8) -> Result<Self, GridError> {
        Self::with_payloads(width, height, |_| ())
    }
}

impl<T> Grid<T> {
    /// Creates a solved grid, producing each cell's payload with `payload`.
    ///
    /// The closure is called once per cell in row-major order with the cell's
    /// position.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::DimensionOutOfRange`] if `width` or `height` is
    /// outside [`MIN_DIMENSION`]`..=`[`MAX_DIMENSION`].
    pub fn with_payloads(
        width: u8,
        height: u8,
        mut payload: impl FnMut(Position) -> T,
    ) -> Result<Self, GridError> {
        check_dimension(width)?;
        check_dimension(height)?;

        let cell_count = width * height;
        let mut tiles = Vec::with_capacity(usize::from(cell_count));
        for order in 0..cell_count {
            let pos = Position::from_offset(order, width);
            tiles.push(Tile {
                order,
                payload: payload(pos),
            });
        }

        let solved_condition = u64::MAX >> (64 - u32::from(cell_count));
        Ok(Self {
            width,
            height,
            tiles,
            blank: Position::new(width - 1, height - 1),
            condition: solved_condition,
            solved_condition,
            observer: None,
        })
    }

    /// Returns the grid width.
    #[must_use]
    #[inline]
    pub const fn width(&self) -> u8 {
        self.width
    }

    /// Returns the grid height.
    #[must_use]
    #[inline]
    pub const fn height(&self) -> u8 {
        self.height
    }

    /// Returns the blank cell's position.
    #[must_use]
    #[inline]
    pub const fn blank(&self) -> Position {
        self.blank
    }

    /// Returns `true` if every tile sits on its home cell.
    #[must_use]
    #[inline]
    pub const fn is_solved(&self) -> bool {
        self.condition == self.solved_condition
    }

    /// Returns `true` if `pos` lies within the grid.
    #[must_use]
    #[inline]
    pub const fn contains(&self, pos: Position) -> bool {
        pos.x() < self.width && pos.y() < self.height
    }

    /// Returns the tile at `pos`, or `None` if `pos` is out of range.
    ///
    /// The blank cell carries a tile too (home order `width * height - 1`);
    /// check [`Grid::blank`] to tell it apart.
    #[must_use]
    pub fn tile(&self, pos: Position) -> Option<&Tile<T>> {
        if !self.contains(pos) {
            return None;
        }
        Some(&self.tiles[self.offset_of(pos)])
    }

    /// Returns the tile at `pos` mutably, or `None` if `pos` is out of range.
    ///
    /// Only the payload is mutable; home orders change exclusively through
    /// slides.
    pub fn tile_mut(&mut self, pos: Position) -> Option<&mut Tile<T>> {
        if !self.contains(pos) {
            return None;
        }
        let offset = self.offset_of(pos);
        Some(&mut self.tiles[offset])
    }

    /// Returns the home order of the tile at `pos`, or `None` if `pos` is out
    /// of range.
    #[must_use]
    pub fn order_at(&self, pos: Position) -> Option<u8> {
        self.tile(pos).map(Tile::order)
    }

    /// Returns the payload at `pos`, or `None` if `pos` is out of range.
    #[must_use]
    pub fn payload(&self, pos: Position) -> Option<&T> {
        self.tile(pos).map(Tile::payload)
    }

    /// Returns the payload at `pos` mutably, or `None` if `pos` is out of
    /// range.
    pub fn payload_mut(&mut self, pos: Position) -> Option<&mut T> {
        self.tile_mut(pos).map(Tile::payload_mut)
    }

    /// Replaces the payload at `pos` and returns the previous one, or `None`
    /// if `pos` is out of range.
    pub fn set_payload(&mut self, pos: Position, payload: T) -> Option<T> {
        let slot = self.payload_mut(pos)?;
        Some(mem::replace(slot, payload))
    }

    /// Returns the position currently holding the tile with home order
    /// `order`, or `None` if no such tile exists.
    #[must_use]
    pub fn position_of(&self, order: u8) -> Option<Position> {
        self.tiles()
            .find(|(_, tile)| tile.order == order)
            .map(|(pos, _)| pos)
    }

    /// Returns an iterator over all cells in row-major order.
    pub fn tiles(&self) -> impl Iterator<Item = (Position, &Tile<T>)> {
        self.tiles
            .iter()
            .enumerate()
            .map(|(offset, tile)| (self.position_at(offset), tile))
    }

    /// Slides tiles starting from `start` toward the blank.
    ///
    /// The slide is legal when `start` shares exactly one axis with the blank
    /// (same row or same column, and not the blank itself). Every tile
    /// strictly between `start` and the blank then shifts one step toward the
    /// old blank position, and the blank ends up at `start`. A single call
    /// can relocate several tiles, but the move still counts as one step.
    ///
    /// Returns `false` without mutating anything when the slide is illegal;
    /// illegal requests are an expected occurrence, not an error.
    pub fn move_from(&mut self, start: Position) -> bool {
        self.slide(start, false)
    }

    /// Returns how many tiles [`Grid::move_from`] would shift from `start`,
    /// or `0` if the slide is illegal.
    #[must_use]
    pub fn move_count_from(&self, start: Position) -> usize {
        if !self.is_legal_start(start) {
            return 0;
        }
        if start.x() == self.blank.x() {
            usize::from(self.blank.y().abs_diff(start.y()))
        } else {
            usize::from(self.blank.x().abs_diff(start.x()))
        }
    }

    /// Returns an iterator over the legal slide start positions.
    ///
    /// With `adjacent_only` the iterator yields at most the four neighbors of
    /// the blank; otherwise it yields every cell sharing the blank's row or
    /// column. Each arm is walked nearest-first, in left, right, up, down
    /// order.
    ///
    /// # Examples
    ///
    /// ```
    /// use taquin_core::{Grid, Position};
    ///
    /// let grid = Grid::new(3, 3)?;
    /// let starts: Vec<_> = grid.start_positions(true).collect();
    /// assert_eq!(starts, [Position::new(1, 2), Position::new(2, 1)]);
    ///
    /// // Every cell in the blank's row or column is a legal full-line start.
    /// assert_eq!(grid.start_positions(false).len(), 4);
    /// # Ok::<(), taquin_core::GridError>(())
    /// ```
    #[must_use]
    pub fn start_positions(&self, adjacent_only: bool) -> StartPositions {
        StartPositions {
            blank: self.blank,
            width: self.width,
            height: self.height,
            arm: 0,
            step: 1,
            adjacent_only,
        }
    }

    /// Scrambles the grid with a random walk of legal slides.
    ///
    /// Equivalent to [`Grid::scramble_with`] driven by the thread-local RNG.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::MagnitudeOutOfRange`] if `magnitude < 1.0`.
    pub fn scramble(&mut self, magnitude: f64) -> Result<(), GridError> {
        self.scramble_with(magnitude, &mut rand::rng())
    }

    /// Scrambles the grid with a random walk of legal slides drawn from `rng`.
    ///
    /// The walk performs `log(100, max(width, height) / 2) * magnitude`
    /// slides, each starting from a randomly chosen cell in the blank's row
    /// or column — full line slides, not just neighbors. A start equal to
    /// the square the blank vacated on the previous slide is rejected (it
    /// would undo that slide) and the neighboring candidate is used instead.
    /// If the walk happens to land back on the arrangement it started from,
    /// the whole walk runs again.
    ///
    /// Because the walk is built exclusively from legal slides, the result
    /// is always reachable from the starting arrangement and therefore
    /// solvable.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::MagnitudeOutOfRange`] if `magnitude < 1.0`.
    ///
    /// # Examples
    ///
    /// ```
    /// use rand::SeedableRng as _;
    /// use rand_pcg::Pcg64;
    /// use taquin_core::Grid;
    ///
    /// let mut grid = Grid::new(4, 4)?;
    /// grid.scramble_with(10.0, &mut Pcg64::seed_from_u64(42))?;
    /// assert!(!grid.is_solved());
    /// # Ok::<(), taquin_core::GridError>(())
    /// ```
    pub fn scramble_with<R: Rng + ?Sized>(
        &mut self,
        magnitude: f64,
        rng: &mut R,
    ) -> Result<(), GridError> {
        if magnitude < 1.0 {
            return Err(GridError::MagnitudeOutOfRange { magnitude });
        }

        let base = f64::from(self.width.max(self.height)) / 2.0;
        #[expect(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let walk_len = (100.0_f64.log(base) * magnitude) as usize;
        let initial_condition = self.condition;
        let mut last_vacated = self.blank;

        loop {
            for _ in 0..walk_len {
                let starts: Vec<_> = self.start_positions(false).collect();
                let mut i = rng.random_range(0..starts.len());
                if starts[i] == last_vacated {
                    i = if i == 0 { 1 } else { i - 1 };
                }
                let vacated = self.blank;
                self.slide(starts[i], true);
                last_vacated = vacated;
            }
            if self.condition != initial_condition {
                break;
            }
        }
        Ok(())
    }

    /// Restores the solved arrangement in place.
    ///
    /// Home orders are laid out row-major again and the blank returns to the
    /// bottom-right corner. Payloads stay with their cell slot.
    pub fn reset(&mut self) {
        for (tile, order) in self.tiles.iter_mut().zip(0..) {
            tile.order = order;
        }
        self.blank = Position::new(self.width - 1, self.height - 1);
        self.condition = self.solved_condition;
    }

    /// Registers a callback fired after every successful slide.
    ///
    /// The event carries the blank's old and new coordinates and whether the
    /// slide happened inside [`Grid::scramble`]. At most one observer is
    /// registered at a time; clones of the grid never inherit it.
    pub fn set_observer(&mut self, observer: impl FnMut(SlideEvent) + Send + 'static) {
        self.observer = Some(Box::new(observer));
    }

    /// Removes the observer registered with [`Grid::set_observer`], if any.
    pub fn clear_observer(&mut self) {
        self.observer = None;
    }

    fn is_legal_start(&self, start: Position) -> bool {
        self.contains(start) && ((start.x() == self.blank.x()) != (start.y() == self.blank.y()))
    }

    fn slide(&mut self, start: Position, scrambling: bool) -> bool {
        if !self.is_legal_start(start) {
            return false;
        }
        let old_blank = self.blank;
        if start.x() == old_blank.x() {
            let x = start.x();
            if start.y() < old_blank.y() {
                for y in (start.y()..old_blank.y()).rev() {
                    self.shift(Position::new(x, y), Position::new(x, y + 1));
                }
            } else {
                for y in old_blank.y()..start.y() {
                    self.shift(Position::new(x, y + 1), Position::new(x, y));
                }
            }
        } else {
            let y = start.y();
            if start.x() < old_blank.x() {
                for x in (start.x()..old_blank.x()).rev() {
                    self.shift(Position::new(x, y), Position::new(x + 1, y));
                }
            } else {
                for x in old_blank.x()..start.x() {
                    self.shift(Position::new(x + 1, y), Position::new(x, y));
                }
            }
        }
        debug_assert_eq!(self.blank, start);

        if let Some(observer) = &mut self.observer {
            observer(SlideEvent {
                old_blank,
                new_blank: start,
                scrambling,
            });
        }
        true
    }

    // Swaps the tile at `from` into the blank cell at `to`. The blank's own
    // tile travels with it, so the cell array never loses a tile.
    fn shift(&mut self, from: Position, to: Position) {
        debug_assert_eq!(self.blank, to);
        let from_offset = self.offset_of(from);
        let to_offset = self.offset_of(to);
        self.tiles.swap(from_offset, to_offset);
        self.blank = from;
        self.update_condition(from_offset);
        self.update_condition(to_offset);
    }

    // Recomputes the condition bit for one cell; slides touch exactly two
    // cells per shift, so the mask never needs a full rescan.
    fn update_condition(&mut self, offset: usize) {
        let bit = 1_u64 << offset;
        if usize::from(self.tiles[offset].order) == offset {
            self.condition |= bit;
        } else {
            self.condition &= !bit;
        }
    }

    #[inline]
    fn offset_of(&self, pos: Position) -> usize {
        pos.to_offset(self.width)
    }

    #[expect(clippy::cast_possible_truncation)]
    #[inline]
    fn position_at(&self, offset: usize) -> Position {
        debug_assert!(offset < self.tiles.len());
        Position::from_offset(offset as u8, self.width)
    }
}

fn check_dimension(dimension: u8) -> Result<(), GridError> {
    if (MIN_DIMENSION..=MAX_DIMENSION).contains(&dimension) {
        Ok(())
    } else {
        Err(GridError::DimensionOutOfRange { dimension })
    }
}

impl<T: Clone> Clone for Grid<T> {
    fn clone(&self) -> Self {
        Self {
            width: self.width,
            height: self.height,
            tiles: self.tiles.clone(),
            blank: self.blank,
            condition: self.condition,
            solved_condition: self.solved_condition,
            observer: None,
        }
    }
}

impl<T: Debug> Debug for Grid<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Grid")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("tiles", &self.tiles)
            .field("blank", &self.blank)
            .field("condition", &format_args!("{:#x}", self.condition))
            .finish_non_exhaustive()
    }
}

impl<T: PartialEq> PartialEq for Grid<T> {
    fn eq(&self, other: &Self) -> bool {
        self.width == other.width
            && self.height == other.height
            && self.blank == other.blank
            && self.tiles == other.tiles
    }
}

impl<T: Eq> Eq for Grid<T> {}

impl<T> Hash for Grid<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.width.hash(state);
        self.height.hash(state);
        for tile in &self.tiles {
            tile.order.hash(state);
        }
    }
}

impl<T> Display for Grid<T> {
    /// Renders rows of right-aligned home orders, with the blank as `.`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..self.height {
            for x in 0..self.width {
                if x > 0 {
                    f.write_str(" ")?;
                }
                let pos = Position::new(x, y);
                if pos == self.blank {
                    write!(f, "{:>2}", ".")?;
                } else {
                    write!(f, "{:>2}", self.tiles[self.offset_of(pos)].order)?;
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Iterator over the legal slide start positions of a [`Grid`].
///
/// Returned by [`Grid::start_positions`]; yields nothing once all four arms
/// around the blank are exhausted.
#[derive(Debug, Clone)]
pub struct StartPositions {
    blank: Position,
    width: u8,
    height: u8,
    arm: u8,
    step: u8,
    adjacent_only: bool,
}

impl StartPositions {
    // Arm indices: 0 = left, 1 = right, 2 = up, 3 = down.
    fn position_on_arm(&self, arm: u8, distance: u8) -> Option<Position> {
        let (x, y) = (self.blank.x(), self.blank.y());
        match arm {
            0 => x.checked_sub(distance).map(|x| Position::new(x, y)),
            1 => (x + distance < self.width).then(|| Position::new(x + distance, y)),
            2 => y.checked_sub(distance).map(|y| Position::new(x, y)),
            _ => (y + distance < self.height).then(|| Position::new(x, y + distance)),
        }
    }

    fn arm_len(&self, arm: u8) -> usize {
        let full = match arm {
            0 => self.blank.x(),
            1 => self.width - 1 - self.blank.x(),
            2 => self.blank.y(),
            _ => self.height - 1 - self.blank.y(),
        };
        if self.adjacent_only {
            usize::from(full.min(1))
        } else {
            usize::from(full)
        }
    }
}

impl Iterator for StartPositions {
    type Item = Position;

    fn next(&mut self) -> Option<Position> {
        while self.arm < 4 {
            match self.position_on_arm(self.arm, self.step) {
                Some(pos) => {
                    if self.adjacent_only {
                        self.arm += 1;
                    } else {
                        self.step += 1;
                    }
                    return Some(pos);
                }
                None => {
                    self.arm += 1;
                    self.step = 1;
                }
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let mut remaining = 0;
        for arm in self.arm..4 {
            let len = self.arm_len(arm);
            if arm == self.arm {
                remaining += len.saturating_sub(usize::from(self.step) - 1);
            } else {
                remaining += len;
            }
        }
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for StartPositions {}
impl FusedIterator for StartPositions {}
