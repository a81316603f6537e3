//! Search-tree bookkeeping.
//!
//! Nodes live in a [`SearchTree`] arena and refer to each other by
//! [`NodeId`]. Children are owned by the arena and listed on their parent;
//! the parent link is a plain id used to walk back to the root.

use std::fmt;

use log::trace;

use crate::action::Action;
use crate::error::{Error, Result};
use crate::state::{MoveOutcome, PuzzleState};

/// Index of a node inside its [`SearchTree`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A state plus the metadata a tree search keeps for it.
///
/// A root has depth 0 and neither parent nor action. Every other node has
/// both, and sits one level below its parent. Once a node is in a tree only
/// `cost`, `total_cost` and `visited` change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchNode {
    state: PuzzleState,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
    action: Option<Action>,
    depth: u32,
    /// g(n)
    cost: u32,
    /// f(n)
    total_cost: u32,
    visited: bool,
}

impl SearchNode {
    pub fn root(state: PuzzleState) -> Self {
        Self {
            state,
            parent: None,
            children: Vec::new(),
            action: None,
            depth: 0,
            cost: 0,
            total_cost: 0,
            visited: false,
        }
    }

    /// Fresh record one level below `parent`, still holding the parent's state.
    pub(crate) fn child_of(parent: &SearchNode, parent_id: NodeId) -> Self {
        Self {
            parent: Some(parent_id),
            depth: parent.depth + 1,
            ..Self::root(parent.state)
        }
    }

    /// Moves the blank in place and records `action` as the originating move.
    ///
    /// The action is recorded even when the move is illegal, matching the
    /// move operators on [`PuzzleState`]. Only used while building a child
    /// record, before it joins a tree.
    pub(crate) fn apply(&mut self, action: Action) -> MoveOutcome {
        self.action = Some(action);
        self.state.apply(action)
    }

    pub fn state(&self) -> &PuzzleState {
        &self.state
    }

    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    pub fn action(&self) -> Option<Action> {
        self.action
    }

    pub fn depth(&self) -> u32 {
        self.depth
    }

    pub fn cost(&self) -> u32 {
        self.cost
    }

    pub fn total_cost(&self) -> u32 {
        self.total_cost
    }

    pub fn visited(&self) -> bool {
        self.visited
    }

    pub fn set_cost(&mut self, cost: u32) {
        self.cost = cost;
    }

    pub fn set_total_cost(&mut self, total_cost: u32) {
        self.total_cost = total_cost;
    }

    pub fn set_visited(&mut self, visited: bool) {
        self.visited = visited;
    }
}

impl AsRef<PuzzleState> for SearchNode {
    fn as_ref(&self) -> &PuzzleState {
        &self.state
    }
}

/// Arena owning every node of one search tree.
#[derive(Debug, Clone)]
pub struct SearchTree {
    nodes: Vec<SearchNode>,
}

impl SearchTree {
    pub fn new(root: PuzzleState) -> Self {
        Self {
            nodes: vec![SearchNode::root(root)],
        }
    }

    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    pub fn get(&self, id: NodeId) -> Option<&SearchNode> {
        self.nodes.get(id.0)
    }

    /// # Panics
    ///
    /// Panics if `id` came from a different tree.
    pub fn node(&self, id: NodeId) -> &SearchNode {
        &self.nodes[id.0]
    }

    /// # Panics
    ///
    /// Panics if `id` came from a different tree.
    pub fn node_mut(&mut self, id: NodeId) -> &mut SearchNode {
        &mut self.nodes[id.0]
    }

    /// Adds `node` to the arena and lists it among its parent's children.
    ///
    /// `node` must be a fresh record from [`crate::successor::successor_nodes`]
    /// for a node of this tree: it needs a parent id inside the tree, a depth
    /// one below that parent, and no children of its own.
    pub fn attach(&mut self, node: SearchNode) -> Result<NodeId> {
        let parent = node.parent.ok_or(Error::MissingParent)?;
        let parent_depth = self
            .get(parent)
            .map(SearchNode::depth)
            .ok_or(Error::UnknownNode { id: parent.0 })?;

        if node.depth != parent_depth + 1 {
            return Err(Error::DepthMismatch {
                parent: parent.0,
                expected: parent_depth + 1,
                got: node.depth,
            });
        }
        if !node.children.is_empty() {
            return Err(Error::NotDetached {
                children: node.children.len(),
            });
        }

        let id = NodeId(self.nodes.len());
        trace!(
            "attaching {id} under {parent} at depth {} via {:?}",
            node.depth,
            node.action
        );
        self.nodes.push(node);
        self.nodes[parent.0].children.push(id);
        Ok(id)
    }

    /// Node ids from the root down to `id`, inclusive.
    pub fn path(&self, id: NodeId) -> Vec<NodeId> {
        let mut path = vec![id];
        let mut current = id;
        while let Some(parent) = self.node(current).parent {
            path.push(parent);
            current = parent;
        }
        path.reverse();
        path
    }

    /// Actions leading from the root to `id`.
    pub fn actions(&self, id: NodeId) -> Vec<Action> {
        self.path(id)
            .into_iter()
            .filter_map(|step| self.node(step).action)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Always false: a tree holds at least its root.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &SearchNode)> {
        self.nodes
            .iter()
            .enumerate()
            .map(|(index, node)| (NodeId(index), node))
    }
}
