use std::{rc::Rc, time::Duration};

use crate::{Move, Node};

/// The line of states from the initial arrangement to the goal.
///
/// A path always contains at least one state; a single-state path means the
/// initial arrangement already matched the goal.
#[derive(Debug, Clone)]
pub struct Path<T = ()> {
    nodes: Vec<Rc<Node<T>>>,
}

impl<T> Path<T> {
    /// Walks the parent links from `goal` back to the root and records the
    /// nodes in play order.
    pub(crate) fn create(goal: &Rc<Node<T>>) -> Self {
        let mut nodes = Vec::new();
        let mut current = Some(Rc::clone(goal));
        while let Some(node) = current {
            current = node.parent().map(Rc::clone);
            nodes.push(node);
        }
        nodes.reverse();
        Self { nodes }
    }

    /// Returns the states along the path, initial arrangement first.
    #[must_use]
    #[inline]
    pub fn nodes(&self) -> &[Rc<Node<T>>] {
        &self.nodes
    }

    /// Returns the number of states along the path. One more than the number
    /// of moves.
    #[must_use]
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns `true` if the path holds no states. Paths built by the solver
    /// never are.
    #[must_use]
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Returns the first node of the path.
    #[must_use]
    pub fn initial(&self) -> &Node<T> {
        &self.nodes[0]
    }

    /// Returns the last node of the path.
    #[must_use]
    pub fn goal(&self) -> &Node<T> {
        &self.nodes[self.nodes.len() - 1]
    }

    /// Returns the resolved moves along the path in play order.
    pub fn moves(&self) -> impl Iterator<Item = Move> {
        self.nodes.iter().filter_map(|node| node.mv())
    }
}

/// A successful search result together with its search statistics.
#[derive(Debug, Clone)]
pub struct Solution<T = ()> {
    path: Path<T>,
    expanded_nodes: u64,
    elapsed: Duration,
}

impl<T> Solution<T> {
    pub(crate) const fn new(path: Path<T>, expanded_nodes: u64, elapsed: Duration) -> Self {
        Self {
            path,
            expanded_nodes,
            elapsed,
        }
    }

    /// Returns the path from the initial arrangement to the goal.
    #[must_use]
    #[inline]
    pub const fn path(&self) -> &Path<T> {
        &self.path
    }

    /// Returns how many nodes the search expanded, goal checks excluded.
    #[must_use]
    #[inline]
    pub const fn expanded_nodes(&self) -> u64 {
        self.expanded_nodes
    }

    /// Returns how long the search ran.
    #[must_use]
    #[inline]
    pub const fn elapsed(&self) -> Duration {
        self.elapsed
    }
}

#[cfg(test)]
mod tests {
    use taquin_core::{Grid, Position};

    use super::*;
    use crate::State;

    fn three_step_path() -> Path {
        let root = Node::root(State::new(Grid::new(3, 3).unwrap()));
        let mut tip = root;
        for start in [Position::new(1, 2), Position::new(1, 1)] {
            let (state, resolved) = tip.state().apply(Move::new(start));
            tip = Node::child(&tip, resolved, state);
        }
        Path::create(&tip)
    }

    #[test]
    fn test_create_orders_nodes_from_root() {
        let path = three_step_path();
        assert_eq!(path.len(), 3);
        assert!(!path.is_empty());
        assert_eq!(path.initial().cost(), 0);
        assert_eq!(path.goal().cost(), 2);
        assert!(path.initial().state().grid().is_solved());
        assert_eq!(path.goal().state().grid().blank(), Position::new(1, 1));
    }

    #[test]
    fn test_moves_are_resolved_and_in_play_order() {
        let path = three_step_path();
        let moves: Vec<_> = path.moves().collect();
        assert_eq!(
            moves,
            [
                Move::resolved(Position::new(1, 2), Position::new(2, 2)),
                Move::resolved(Position::new(1, 1), Position::new(1, 2)),
            ]
        );
    }

    #[test]
    fn test_single_node_path() {
        let root = Node::root(State::new(Grid::new(3, 3).unwrap()));
        let path = Path::create(&root);
        assert_eq!(path.len(), 1);
        assert_eq!(path.moves().count(), 0);
        assert_eq!(path.nodes().len(), 1);
    }
}
