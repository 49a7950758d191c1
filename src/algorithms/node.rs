use std::ops::Index;

use crate::grid::{Action, Position};

/// Stable handle to a node stored in a [`SearchTree`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

/// A candidate partial path: where it ends, how it got there and what it cost.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchNode {
    pub state: Position,
    pub parent: Option<NodeId>,
    /// `None` only for the root.
    pub action: Option<Action>,
    pub cost: f64,
}

/// Arena owning every node created during one search run.
///
/// Children refer to their parent by [`NodeId`]; nodes are never mutated or
/// removed once pushed.
#[derive(Debug, Default)]
pub struct SearchTree {
    nodes: Vec<SearchNode>,
}

impl SearchTree {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_root(&mut self, state: Position, cost: f64) -> NodeId {
        self.push(SearchNode {
            state,
            parent: None,
            action: None,
            cost,
        })
    }

    pub fn push_child(
        &mut self,
        parent: NodeId,
        state: Position,
        action: Action,
        cost: f64,
    ) -> NodeId {
        self.push(SearchNode {
            state,
            parent: Some(parent),
            action: Some(action),
            cost,
        })
    }

    fn push(&mut self, node: SearchNode) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(node);
        id
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Actions leading from the root to `goal`, in the order they are played.
    pub fn backtrack(&self, goal: NodeId) -> Vec<Action> {
        let mut actions = Vec::new();
        let mut current = goal;
        while let Some(parent) = self[current].parent {
            if let Some(action) = self[current].action {
                actions.push(action);
            }
            current = parent;
        }
        actions.reverse();
        actions
    }
}

impl Index<NodeId> for SearchTree {
    type Output = SearchNode;

    fn index(&self, id: NodeId) -> &SearchNode {
        &self.nodes[id.0]
    }
}
