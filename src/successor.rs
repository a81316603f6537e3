//! Legal-move enumeration and successor generation.
//!
//! Legality depends only on where the blank is. The per-position ordering
//! below is the order every projection returns; search drivers that break
//! ties by move order rely on it.

use log::debug;

use crate::action::Action;
use crate::error::Result;
use crate::node::{NodeId, SearchNode, SearchTree};
use crate::state::{PuzzleState, CELLS};

use crate::action::Action::{Down as D, Left as L, Right as R, Up as U};

/// Legal actions for each blank position, in the order they are generated.
const ACTION_ORDER: [&[Action]; CELLS] = [
    &[L, U],
    &[R, L, U],
    &[R, U],
    &[D, U, L],
    &[D, U, L, R],
    &[D, U, R],
    &[D, L],
    &[L, R, D],
    &[R, D],
];

/// Legal actions with the blank at `blank`.
///
/// # Panics
///
/// Panics if `blank` is not a cell index.
#[inline]
pub fn legal_actions_at(blank: usize) -> &'static [Action] {
    ACTION_ORDER[blank]
}

/// Legal actions for a node or state.
pub fn legal_actions(node: &impl AsRef<PuzzleState>) -> Vec<Action> {
    legal_actions_at(node.as_ref().blank_position()).to_vec()
}

/// One successor per legal action, each computed from the original state.
pub fn successor_states(node: &impl AsRef<PuzzleState>) -> Vec<PuzzleState> {
    let state = node.as_ref();
    legal_actions_at(state.blank_position())
        .iter()
        .map(|&action| state.successor(action))
        .collect()
}

/// Child records for `id`, with parent, depth and action set.
///
/// Costs are left at zero for the caller to assign. The records are not
/// yet part of `tree`; pass them to [`SearchTree::attach`] or use
/// [`expand`].
pub fn successor_nodes(tree: &SearchTree, id: NodeId) -> Vec<SearchNode> {
    let parent = tree.node(id);
    legal_actions_at(parent.state().blank_position())
        .iter()
        .map(|&action| {
            let mut child = SearchNode::child_of(parent, id);
            child.apply(action);
            child
        })
        .collect()
}

/// Generates the children of `id` and attaches them to `tree`.
pub fn expand(tree: &mut SearchTree, id: NodeId) -> Result<Vec<NodeId>> {
    let children = successor_nodes(tree, id);
    debug!("expanding {id}: {} children", children.len());
    children
        .into_iter()
        .map(|child| tree.attach(child))
        .collect()
}

/// The action that turns `parent` into `child`, read off the blank's
/// displacement.
///
/// `child` must be one legal move away from `parent`; any other pair
/// yields an arbitrary action.
pub fn infer_action(child: &PuzzleState, parent: &PuzzleState) -> Action {
    let delta = child.blank_position() as isize - parent.blank_position() as isize;
    match delta {
        3 => Action::Up,
        -3 => Action::Down,
        1 => Action::Left,
        _ => Action::Right,
    }
}
