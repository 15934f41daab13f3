//! Domain layer: tree types, traversal validation and reconstruction
//!
//! No I/O, no CLI, no config loading.

pub mod error;
pub mod node;
pub mod reconstruct;
pub mod validator;

pub use error::{Sequence, TraversalError, TraversalResult, ValidationError};
pub use node::{BinaryTree, Node, PreorderIter};
pub use reconstruct::{tree_from_traversals, Reconstructor, SubtreePolicy};
pub use validator::validate;
