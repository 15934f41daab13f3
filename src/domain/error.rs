//! Domain-level errors (no external dependencies)

use std::fmt;
use thiserror::Error;

/// Names one of the two input traversals.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sequence {
    Preorder,
    Inorder,
}

impl fmt::Display for Sequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Sequence::Preorder => write!(f, "preorder"),
            Sequence::Inorder => write!(f, "inorder"),
        }
    }
}

/// Input traversals that cannot describe a binary tree.
/// All variants are caller-input errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("traversals must have the same length (preorder: {preorder}, inorder: {inorder})")]
    LengthMismatch { preorder: usize, inorder: usize },

    #[error("traversals must have the same elements")]
    ElementSetMismatch,

    #[error("traversals must contain unique items (duplicate in {sequence})")]
    DuplicateValues { sequence: Sequence },
}

/// Errors returned by a reconstruction run.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TraversalError {
    #[error("{0}")]
    Validation(#[from] ValidationError),

    /// Only reachable under `SubtreePolicy::LeafTruncation`: a truncated subtree
    /// left its values unconsumed, so the cursor points outside the current slice.
    #[error("preorder value {value} at position {position} is not part of the current inorder slice")]
    CursorDesync { value: String, position: usize },
}

/// Result type for reconstruction.
pub type TraversalResult<T> = Result<T, TraversalError>;
