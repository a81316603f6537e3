//! Error types for loading configurations and managing search trees.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised on external input. Broken invariants inside the core are
/// programming errors and panic instead.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("expected {expected} tokens, got {got}")]
    InvalidTokenCount { expected: usize, got: usize },

    #[error("invalid token '{token}' at position {position} (expected 1-8 or '_')")]
    InvalidSymbol { token: String, position: usize },

    #[error("symbol '{symbol}' appears more than once")]
    DuplicateSymbol { symbol: char },

    #[error("node has no parent")]
    MissingParent,

    #[error("node {id} is not part of this search tree")]
    UnknownNode { id: usize },

    #[error("child of node {parent} should be at depth {expected}, got {got}")]
    DepthMismatch { parent: usize, expected: u32, got: u32 },

    #[error("node already has {children} children")]
    NotDetached { children: usize },

    #[error("failed to {operation} {}: {source}", .path.display())]
    Io {
        operation: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
