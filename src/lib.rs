//! Rebuild binary trees from their preorder and inorder traversals.
//!
//! ```
//! use retree::domain::tree_from_traversals;
//!
//! let tree = tree_from_traversals(&['b', 'a', 'c'], &['a', 'b', 'c']).unwrap();
//! assert_eq!(tree.root().map(|n| *n.value()), Some('b'));
//! ```

pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod exitcode;
pub mod tree_traits;
pub mod util;

pub use domain::{
    tree_from_traversals, validate, BinaryTree, Node, Reconstructor, SubtreePolicy,
    TraversalError, ValidationError,
};
