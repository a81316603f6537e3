//! 8-Puzzle State Model
//!
//! Board representation, legal-move generation and search-tree bookkeeping
//! for the 3x3 sliding puzzle. Search algorithms (BFS, A*, ...) are left to
//! the caller; this crate provides what they consume.

pub mod action;
pub mod error;
pub mod loader;
pub mod node;
pub mod state;
pub mod successor;

pub use action::Action;
pub use error::{Error, Result};
pub use node::{NodeId, SearchNode, SearchTree};
pub use state::{MoveOutcome, PuzzleState, BLANK};
pub use successor::{expand, infer_action, legal_actions, successor_nodes, successor_states};
