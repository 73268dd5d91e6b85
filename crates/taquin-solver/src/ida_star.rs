use std::{
    rc::Rc,
    time::{Duration, Instant},
};

use log::debug;

use crate::{
    BoxedHeuristic, Heuristic, ManhattanDistance, Node, Path, Solution, SolveError, State,
};

/// Iterative-deepening A* search over sliding-tile states.
///
/// The search runs a sequence of depth-first probes. Each probe visits nodes
/// whose cost plus heuristic estimate stays within the current bound; when a
/// probe fails, the bound grows by two (every move flips the parity of the
/// arrangement, so odd increments can never succeed) and the probe restarts
/// from the root.
///
/// Only the undo of the immediately preceding move is pruned. Revisited
/// arrangements are otherwise searched again, which keeps memory proportional
/// to the current line of play instead of the visited set.
#[derive(Debug, Clone)]
pub struct IdaStar<T = ()> {
    heuristic: BoxedHeuristic<T>,
    timeout: Option<Duration>,
}

impl<T> IdaStar<T> {
    /// Creates a solver using the plain [`ManhattanDistance`] heuristic and
    /// no time budget.
    #[must_use]
    pub fn new() -> Self {
        Self::with_heuristic(ManhattanDistance::new())
    }

    /// Creates a solver using `heuristic` and no time budget.
    #[must_use]
    pub fn with_heuristic(heuristic: impl Heuristic<T> + 'static) -> Self {
        Self {
            heuristic: Box::new(heuristic),
            timeout: None,
        }
    }

    /// Sets the wall-clock budget for [`IdaStar::solve`], or removes it with
    /// `None`.
    pub fn set_timeout(&mut self, timeout: Option<Duration>) {
        self.timeout = timeout;
    }

    /// Returns the configured wall-clock budget.
    #[must_use]
    #[inline]
    pub const fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    /// Returns the heuristic used by the search.
    #[must_use]
    pub fn heuristic(&self) -> &dyn Heuristic<T> {
        &*self.heuristic
    }
}

impl<T> Default for IdaStar<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> IdaStar<T> {
    /// Searches for a move sequence from `initial` to `goal`.
    ///
    /// Goal recognition compares tile arrangements only, so payloads may
    /// differ between the two states. With an admissible heuristic the
    /// returned path is shortest; inflated heuristics may return longer
    /// paths sooner.
    ///
    /// # Errors
    ///
    /// Returns [`SolveError::DimensionMismatch`] if the two grids have
    /// different dimensions, and [`SolveError::Timeout`] once the configured
    /// budget is exceeded. An exceeded budget aborts the search; there is no
    /// partial result.
    pub fn solve(&self, initial: &State<T>, goal: &State<T>) -> Result<Solution<T>, SolveError> {
        let initial_dims = (initial.grid().width(), initial.grid().height());
        let goal_dims = (goal.grid().width(), goal.grid().height());
        if initial_dims != goal_dims {
            return Err(SolveError::DimensionMismatch {
                initial: initial_dims,
                goal: goal_dims,
            });
        }

        let started = Instant::now();
        let mut search = Search {
            goal,
            heuristic: &*self.heuristic,
            started,
            budget: self.timeout,
            expanded: 0,
        };

        let root = Node::root(initial.clone());
        let mut bound = root.heuristic_with(search.heuristic);
        let goal_node = loop {
            debug!("probing with cost bound {bound}");
            if let Some(found) = search.probe(&root, bound)? {
                break found;
            }
            bound += 2;
        };

        let elapsed = started.elapsed();
        debug!(
            "found a {}-move path after expanding {} nodes in {elapsed:?}",
            goal_node.cost(),
            search.expanded,
        );
        Ok(Solution::new(
            Path::create(&goal_node),
            search.expanded,
            elapsed,
        ))
    }
}

struct Search<'a, T> {
    goal: &'a State<T>,
    heuristic: &'a dyn Heuristic<T>,
    started: Instant,
    budget: Option<Duration>,
    expanded: u64,
}

impl<T: Clone> Search<'_, T> {
    fn probe(&mut self, node: &Rc<Node<T>>, bound: u32) -> Result<Option<Rc<Node<T>>>, SolveError> {
        if node.state().matches_arrangement(self.goal) {
            return Ok(Some(Rc::clone(node)));
        }
        self.expanded += 1;

        for mv in node.state().possible_moves() {
            if node.mv().is_some_and(|last| mv.is_inverse(last)) {
                continue;
            }
            self.check_deadline()?;

            let (child_state, resolved) = node.state().apply(mv);
            let child = Node::child(node, resolved, child_state);
            if child.cost() + child.heuristic_with(self.heuristic) <= bound
                && let Some(found) = self.probe(&child, bound)?
            {
                return Ok(Some(found));
            }
        }
        Ok(None)
    }

    fn check_deadline(&self) -> Result<(), SolveError> {
        let Some(budget) = self.budget else {
            return Ok(());
        };
        if self.started.elapsed() > budget {
            return Err(SolveError::Timeout { budget });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use taquin_core::{Grid, Position};

    use super::*;
    use crate::testing::{ZeroHeuristic, assert_replay_reaches, scrambled_state, solved_state};

    fn weighted_solver(divert_factor: f64) -> IdaStar {
        IdaStar::with_heuristic(ManhattanDistance::with_divert_factor(divert_factor).unwrap())
    }

    #[test]
    fn test_solves_scrambled_3x3() {
        let initial = scrambled_state(3, 3, 5.0, 31);
        let goal = solved_state(3, 3);

        let solution = IdaStar::new().solve(&initial, &goal).unwrap();
        let path = solution.path();
        assert!(path.initial().state().matches_arrangement(&initial));
        assert!(path.goal().state().grid().is_solved());
        assert_eq!(path.moves().count(), path.len() - 1);
        assert!(solution.expanded_nodes() > 0);
        assert_replay_reaches(&initial, &goal, path.moves());
    }

    #[test]
    fn test_solves_scrambled_4x4() {
        let initial = scrambled_state(4, 4, 6.0, 7);
        let goal = solved_state(4, 4);

        let solution = weighted_solver(3.0).solve(&initial, &goal).unwrap();
        assert!(solution.path().goal().state().grid().is_solved());
        assert_replay_reaches(&initial, &goal, solution.path().moves());
    }

    #[test]
    fn test_solves_scrambled_5x5() {
        let initial = scrambled_state(5, 5, 4.0, 11);
        let goal = solved_state(5, 5);

        let solution = weighted_solver(4.0).solve(&initial, &goal).unwrap();
        assert!(solution.path().goal().state().grid().is_solved());
        assert_replay_reaches(&initial, &goal, solution.path().moves());
    }

    #[test]
    fn test_initial_equal_to_goal_yields_single_state_path() {
        let initial = solved_state(4, 4);
        let goal = solved_state(4, 4);

        let solution = IdaStar::new().solve(&initial, &goal).unwrap();
        assert_eq!(solution.path().len(), 1);
        assert_eq!(solution.path().moves().count(), 0);
        assert_eq!(solution.expanded_nodes(), 0);
    }

    #[test]
    fn test_solves_to_arbitrary_goal() {
        let mut grid = Grid::new(3, 3).unwrap();
        assert!(grid.move_from(Position::new(2, 1)));
        let goal = State::new(grid);
        let initial = solved_state(3, 3);

        let solution = IdaStar::new().solve(&initial, &goal).unwrap();
        assert_eq!(solution.path().len(), 2);
        assert!(solution.path().goal().state().matches_arrangement(&goal));
    }

    #[test]
    fn test_dimension_mismatch_is_rejected() {
        let initial = solved_state(3, 3);
        let goal = solved_state(4, 4);

        assert_eq!(
            IdaStar::new().solve(&initial, &goal).unwrap_err(),
            SolveError::DimensionMismatch {
                initial: (3, 3),
                goal: (4, 4),
            }
        );
    }

    #[test]
    fn test_tiny_budget_times_out_on_hard_grid() {
        let initial = scrambled_state(8, 8, 10.0, 5);
        let goal = solved_state(8, 8);

        let mut solver = weighted_solver(4.0);
        solver.set_timeout(Some(Duration::from_millis(1)));
        assert_eq!(
            solver.solve(&initial, &goal).unwrap_err(),
            SolveError::Timeout {
                budget: Duration::from_millis(1),
            }
        );
    }

    #[test]
    fn test_admissible_path_is_never_longer_than_diverted() {
        let initial = scrambled_state(3, 3, 5.0, 17);
        let goal = solved_state(3, 3);

        let optimal = IdaStar::new().solve(&initial, &goal).unwrap();
        let diverted = weighted_solver(4.0).solve(&initial, &goal).unwrap();
        assert!(optimal.path().len() <= diverted.path().len());
        assert_replay_reaches(&initial, &goal, diverted.path().moves());
    }

    #[test]
    fn test_zero_heuristic_still_finds_shortest_path() {
        // Three slides away from solved; plain iterative deepening handles
        // this depth easily and must match the informed search's length.
        let mut grid = Grid::new(3, 3).unwrap();
        for start in [
            Position::new(1, 2),
            Position::new(1, 1),
            Position::new(0, 1),
        ] {
            assert!(grid.move_from(start));
        }
        let initial = State::new(grid);
        let goal = solved_state(3, 3);

        let uninformed = IdaStar::with_heuristic(ZeroHeuristic).solve(&initial, &goal).unwrap();
        let informed = IdaStar::new().solve(&initial, &goal).unwrap();
        assert_eq!(uninformed.path().len(), 4);
        assert_eq!(uninformed.path().len(), informed.path().len());
        assert!(uninformed.expanded_nodes() >= informed.expanded_nodes());
    }

    #[test]
    fn test_configuration_accessors() {
        let mut solver: IdaStar = IdaStar::default();
        assert_eq!(solver.timeout(), None);

        solver.set_timeout(Some(Duration::from_secs(1)));
        assert_eq!(solver.timeout(), Some(Duration::from_secs(1)));
        solver.set_timeout(None);
        assert_eq!(solver.timeout(), None);

        let cloned = weighted_solver(2.0).clone();
        let node = Node::root(solved_state(3, 3));
        assert_eq!(cloned.heuristic().evaluate(&node), 0);
    }
}
