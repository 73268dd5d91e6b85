//! Grid coordinates.

use std::fmt::{self, Display};

/// A zero-based `(x, y)` coordinate on a grid.
///
/// `x` grows rightward and `y` grows downward, so `(0, 0)` is the top-left
/// cell. Positions convert to and from row-major cell offsets given the grid
/// width.
///
/// # Examples
///
/// ```
/// use taquin_core::Position;
///
/// let pos = Position::new(2, 1);
/// assert_eq!(pos.x(), 2);
/// assert_eq!(pos.y(), 1);
/// assert_eq!(pos.to_offset(4), 6);
/// assert_eq!(Position::from_offset(6, 4), pos);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    x: u8,
    y: u8,
}

impl Position {
    /// Creates a position from zero-based coordinates.
    #[must_use]
    #[inline]
    pub const fn new(x: u8, y: u8) -> Self {
        Self { x, y }
    }

    /// Converts a row-major cell offset into a position.
    ///
    /// # Panics
    ///
    /// Panics if `width` is zero.
    #[must_use]
    #[inline]
    pub const fn from_offset(offset: u8, width: u8) -> Self {
        Self {
            x: offset % width,
            y: offset / width,
        }
    }

    /// Returns the x coordinate (column).
    #[must_use]
    #[inline]
    pub const fn x(self) -> u8 {
        self.x
    }

    /// Returns the y coordinate (row).
    #[must_use]
    #[inline]
    pub const fn y(self) -> u8 {
        self.y
    }

    /// Converts this position into its row-major cell offset.
    #[must_use]
    #[inline]
    pub const fn to_offset(self, width: u8) -> usize {
        self.x as usize + self.y as usize * width as usize
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offset_round_trip() {
        for width in 3..=8 {
            for offset in 0..width * 8 {
                let pos = Position::from_offset(offset, width);
                assert_eq!(pos.to_offset(width), usize::from(offset));
            }
        }
    }

    #[test]
    fn test_offset_layout_is_row_major() {
        assert_eq!(Position::from_offset(0, 3), Position::new(0, 0));
        assert_eq!(Position::from_offset(2, 3), Position::new(2, 0));
        assert_eq!(Position::from_offset(3, 3), Position::new(0, 1));
        assert_eq!(Position::from_offset(8, 3), Position::new(2, 2));
    }

    #[test]
    fn test_display() {
        assert_eq!(Position::new(4, 7).to_string(), "(4, 7)");
    }
}
