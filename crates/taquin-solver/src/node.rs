use std::{cell::Cell, rc::Rc};

use crate::{Heuristic, Move, State};

/// A search-tree vertex: a state plus the move and parent that produced it.
///
/// Nodes are reference counted rather than arena allocated. Depth-first
/// probing abandons most branches almost immediately, and dropping the last
/// `Rc` frees the branch right away while the ancestors of the current line
/// stay alive through their parent links.
#[derive(Debug)]
pub struct Node<T = ()> {
    state: State<T>,
    parent: Option<Rc<Node<T>>>,
    mv: Option<Move>,
    cost: u32,
    heuristic: Cell<Option<u32>>,
}

impl<T> Node<T> {
    /// Creates a root node with cost 0 and no incoming move.
    pub fn root(state: State<T>) -> Rc<Self> {
        Rc::new(Self {
            state,
            parent: None,
            mv: None,
            cost: 0,
            heuristic: Cell::new(None),
        })
    }

    /// Creates a child of `parent` reached by `mv`, costing one more move.
    pub fn child(parent: &Rc<Self>, mv: Move, state: State<T>) -> Rc<Self> {
        Rc::new(Self {
            state,
            parent: Some(Rc::clone(parent)),
            mv: Some(mv),
            cost: parent.cost + 1,
            heuristic: Cell::new(None),
        })
    }

    /// Returns the state this node represents.
    #[must_use]
    #[inline]
    pub const fn state(&self) -> &State<T> {
        &self.state
    }

    /// Returns the move that produced this node, or `None` for a root.
    #[must_use]
    #[inline]
    pub const fn mv(&self) -> Option<Move> {
        self.mv
    }

    /// Returns the parent node, or `None` for a root.
    #[must_use]
    pub fn parent(&self) -> Option<&Rc<Self>> {
        self.parent.as_ref()
    }

    /// Returns the number of moves from the root to this node.
    #[must_use]
    #[inline]
    pub const fn cost(&self) -> u32 {
        self.cost
    }

    /// Returns the heuristic estimate for this node, evaluating it on first
    /// use and answering from the node's cache afterwards.
    pub fn heuristic_with(&self, heuristic: &dyn Heuristic<T>) -> u32 {
        if let Some(estimate) = self.heuristic.get() {
            return estimate;
        }
        let estimate = heuristic.evaluate(self);
        self.heuristic.set(Some(estimate));
        estimate
    }

    /// Returns the cached heuristic estimate, if one has been computed.
    #[must_use]
    pub fn cached_heuristic(&self) -> Option<u32> {
        self.heuristic.get()
    }
}
