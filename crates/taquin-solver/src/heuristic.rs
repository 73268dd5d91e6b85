use std::fmt::Debug;

use taquin_core::Position;

use crate::{Node, SolveError, State};

/// Estimate of the remaining move count from a node to the goal.
///
/// Estimates that never exceed the true distance keep the search optimal;
/// inflated estimates (see [`ManhattanDistance::with_divert_factor`]) trade
/// path quality for speed.
pub trait Heuristic<T>: Debug + Send + Sync {
    /// Estimates how many moves remain from `node` to the goal.
    fn evaluate(&self, node: &Node<T>) -> u32;

    /// Clones this heuristic into a box.
    fn clone_box(&self) -> BoxedHeuristic<T>;
}

/// A boxed [`Heuristic`].
pub type BoxedHeuristic<T> = Box<dyn Heuristic<T>>;

impl<T> Clone for BoxedHeuristic<T> {
    fn clone(&self) -> Self {
        self.clone_box()
    }
}

/// Sum of the Manhattan distances from each tile to its home cell.
///
/// The blank cell is not counted. The raw sum is multiplied by the divert
/// factor and rounded up, so a factor of 1.0 keeps the estimate admissible
/// while larger factors steer the search toward the goal more aggressively
/// at the expense of shortest paths.
///
/// The estimate always targets the solved arrangement. Searches toward a
/// different goal state stay correct but are effectively uninformed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ManhattanDistance {
    divert_factor: f64,
}

impl ManhattanDistance {
    /// Creates the plain, admissible distance with a divert factor of 1.0.
    #[must_use]
    pub const fn new() -> Self {
        Self { divert_factor: 1.0 }
    }

    /// Creates a distance inflated by `divert_factor`.
    ///
    /// # Errors
    ///
    /// Returns [`SolveError::DivertFactorOutOfRange`] if
    /// `divert_factor < 1.0`.
    pub fn with_divert_factor(divert_factor: f64) -> Result<Self, SolveError> {
        check_divert_factor(divert_factor)?;
        Ok(Self { divert_factor })
    }

    /// Replaces the divert factor.
    ///
    /// # Errors
    ///
    /// Returns [`SolveError::DivertFactorOutOfRange`] if
    /// `divert_factor < 1.0`.
    pub fn set_divert_factor(&mut self, divert_factor: f64) -> Result<(), SolveError> {
        check_divert_factor(divert_factor)?;
        self.divert_factor = divert_factor;
        Ok(())
    }

    /// Returns the current divert factor.
    #[must_use]
    #[inline]
    pub const fn divert_factor(&self) -> f64 {
        self.divert_factor
    }
}

impl Default for ManhattanDistance {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Heuristic<T> for ManhattanDistance {
    #[expect(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn evaluate(&self, node: &Node<T>) -> u32 {
        let raw = manhattan_distance(node.state());
        (f64::from(raw) * self.divert_factor).ceil() as u32
    }

    fn clone_box(&self) -> BoxedHeuristic<T> {
        Box::new(*self)
    }
}

fn check_divert_factor(divert_factor: f64) -> Result<(), SolveError> {
    if divert_factor < 1.0 {
        return Err(SolveError::DivertFactorOutOfRange { divert_factor });
    }
    Ok(())
}

fn manhattan_distance<T>(state: &State<T>) -> u32 {
    let grid = state.grid();
    let width = grid.width();
    let mut total = 0;
    for (pos, tile) in grid.tiles() {
        if pos == grid.blank() {
            continue;
        }
        let home = Position::from_offset(tile.order(), width);
        total += u32::from(pos.x().abs_diff(home.x())) + u32::from(pos.y().abs_diff(home.y()));
    }
    total
}

#[cfg(test)]
mod tests {
    use taquin_core::Grid;

    use super::*;

    fn evaluate(heuristic: &ManhattanDistance, grid: Grid) -> u32 {
        Heuristic::evaluate(heuristic, &Node::root(State::new(grid)))
    }

    #[test]
    fn test_divert_factor_must_be_at_least_one() {
        assert_eq!(
            ManhattanDistance::with_divert_factor(0.5),
            Err(SolveError::DivertFactorOutOfRange { divert_factor: 0.5 })
        );
        assert_eq!(ManhattanDistance::new().divert_factor(), 1.0);

        let mut heuristic = ManhattanDistance::with_divert_factor(2.5).unwrap();
        assert_eq!(heuristic.divert_factor(), 2.5);
        assert!(heuristic.set_divert_factor(0.0).is_err());
        assert_eq!(heuristic.divert_factor(), 2.5);
    }

    #[test]
    fn test_solved_grid_has_zero_distance() {
        let heuristic = ManhattanDistance::new();
        assert_eq!(evaluate(&heuristic, Grid::new(3, 3).unwrap()), 0);
        assert_eq!(evaluate(&heuristic, Grid::new(8, 8).unwrap()), 0);
    }

    #[test]
    fn test_distance_counts_displaced_tiles() {
        let heuristic = ManhattanDistance::new();

        // One neighbor slide displaces a single tile by one step.
        let mut grid = Grid::new(3, 3).unwrap();
        assert!(grid.move_from(Position::new(1, 2)));
        assert_eq!(evaluate(&heuristic, grid), 1);

        // A full-line slide displaces two tiles by one step each.
        let mut grid = Grid::new(3, 3).unwrap();
        assert!(grid.move_from(Position::new(0, 2)));
        assert_eq!(evaluate(&heuristic, grid), 2);
    }

    #[test]
    fn test_distance_on_rectangular_grid() {
        // Home cells decompose by grid width, which differs from the height
        // on rectangles.
        let mut grid = Grid::new(4, 3).unwrap();
        assert!(grid.move_from(Position::new(3, 0)));
        assert_eq!(evaluate(&ManhattanDistance::new(), grid), 2);
    }

    #[test]
    fn test_divert_factor_rounds_up() {
        let mut grid = Grid::new(3, 3).unwrap();
        assert!(grid.move_from(Position::new(0, 2)));

        // Raw distance 2, inflated by 2.5 to 5.
        let heuristic = ManhattanDistance::with_divert_factor(2.5).unwrap();
        assert_eq!(evaluate(&heuristic, grid.clone()), 5);

        // Raw distance 2, inflated by 1.2 to 2.4, rounded up to 3.
        let heuristic = ManhattanDistance::with_divert_factor(1.2).unwrap();
        assert_eq!(evaluate(&heuristic, grid), 3);
    }

    #[test]
    fn test_boxed_clone_preserves_divert_factor() {
        let boxed: BoxedHeuristic<()> =
            Box::new(ManhattanDistance::with_divert_factor(3.0).unwrap());
        let cloned = boxed.clone();

        let mut grid = Grid::new(3, 3).unwrap();
        assert!(grid.move_from(Position::new(1, 2)));
        let node = Node::root(State::new(grid));
        assert_eq!(cloned.evaluate(&node), 3);
    }
}
