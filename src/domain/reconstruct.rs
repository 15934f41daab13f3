//! Rebuilds a binary tree from its preorder and inorder traversals.
//!
//! The first unconsumed preorder value is always the root of the current
//! subtree; its position in the current inorder slice splits that slice into
//! the left and right subtrees. The cursor into the preorder sequence lives in
//! the `rebuild` call, so a `Reconstructor` carries no per-call state and can
//! be shared between threads.
//!
//! The recursion runs on an explicit work stack: subtrees are entered in
//! preorder, and a node is assembled once both of its children are built.
//! Stack usage does not grow with tree height.

use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;
use std::ops::Range;

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, trace};

use crate::domain::error::{TraversalError, TraversalResult};
use crate::domain::node::{BinaryTree, Node};
use crate::domain::validator::validate;

/// How a node with exactly one non-empty side is handled.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum SubtreePolicy {
    /// Recurse into every non-empty side. The rebuilt tree always reproduces
    /// both input traversals.
    #[default]
    Complete,
    /// Recurse only when both sides are non-empty, otherwise make the node a
    /// leaf. One-child subtrees are dropped and the cursor may desynchronize.
    LeafTruncation,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Reconstructor {
    policy: SubtreePolicy,
}

impl Reconstructor {
    pub fn new(policy: SubtreePolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> SubtreePolicy {
        self.policy
    }

    /// Validates both traversals and rebuilds the tree they describe.
    ///
    /// Two empty sequences yield an empty tree. Validation failures abort
    /// before any node is created.
    #[instrument(level = "debug", skip_all, fields(policy = ?self.policy, len = preorder.len()))]
    pub fn rebuild<T>(&self, preorder: &[T], inorder: &[T]) -> TraversalResult<BinaryTree<T>>
    where
        T: Eq + Hash + Clone + Debug,
    {
        validate(preorder, inorder)?;

        if preorder.is_empty() {
            debug!("empty traversals, returning empty tree");
            return Ok(BinaryTree::empty());
        }

        // Values are unique after validation
        let positions: HashMap<&T, usize> = inorder.iter().enumerate().map(|(i, v)| (v, i)).collect();

        let mut cursor = 0;
        let root = self.build(preorder, &positions, &mut cursor)?;
        debug!(consumed = cursor, "tree rebuilt");
        Ok(BinaryTree::from(root))
    }

    fn build<T>(&self, preorder: &[T], positions: &HashMap<&T, usize>, cursor: &mut usize) -> TraversalResult<Node<T>>
    where
        T: Eq + Hash + Clone + Debug,
    {
        let mut work = vec![Step::Enter(0..preorder.len())];
        let mut built: Vec<Node<T>> = Vec::new();

        while let Some(step) = work.pop() {
            match step {
                Step::Enter(span) => {
                    let (value, left, right) = self.split(preorder, positions, span, cursor)?;
                    work.push(Step::Assemble {
                        value,
                        has_left: left.is_some(),
                        has_right: right.is_some(),
                    });
                    // Left is pushed last so its subtree consumes the cursor first
                    work.extend(right.map(Step::Enter));
                    work.extend(left.map(Step::Enter));
                }
                Step::Assemble {
                    value,
                    has_left,
                    has_right,
                } => {
                    let right = if has_right { built.pop() } else { None };
                    let left = if has_left { built.pop() } else { None };
                    built.push(Node::with_children(value, left, right));
                }
            }
        }

        // The work list starts with one subtree, so exactly one node remains
        Ok(built.pop().unwrap_or_else(|| unreachable!("work stack finished without a root")))
    }

    /// Consumes the next preorder value as the root of the inorder `span` and
    /// returns it with the sub-spans to build, according to the policy.
    /// `span` is never empty.
    fn split<T>(
        &self,
        preorder: &[T],
        positions: &HashMap<&T, usize>,
        span: Range<usize>,
        cursor: &mut usize,
    ) -> TraversalResult<(T, Option<Range<usize>>, Option<Range<usize>>)>
    where
        T: Eq + Hash + Clone + Debug,
    {
        let position = *cursor;
        let value = preorder[position].clone();
        *cursor += 1;

        let split = positions
            .get(&value)
            .copied()
            .filter(|i| span.contains(i))
            .ok_or_else(|| TraversalError::CursorDesync {
                value: format!("{:?}", value),
                position,
            })?;
        trace!(?value, position, split, "subtree root");

        let left = span.start..split;
        let right = split + 1..span.end;

        let sides = match self.policy {
            SubtreePolicy::Complete => (
                Some(left).filter(|r| !r.is_empty()),
                Some(right).filter(|r| !r.is_empty()),
            ),
            SubtreePolicy::LeafTruncation => {
                if left.is_empty() || right.is_empty() {
                    (None, None)
                } else {
                    (Some(left), Some(right))
                }
            }
        };
        Ok((value, sides.0, sides.1))
    }
}

/// Pending work while rebuilding.
enum Step<T> {
    /// Build the subtree whose inorder values occupy this span
    Enter(Range<usize>),
    /// Both requested children are built; attach them to `value`
    Assemble { value: T, has_left: bool, has_right: bool },
}

/// Rebuilds a tree with the default `SubtreePolicy::Complete`.
pub fn tree_from_traversals<T>(preorder: &[T], inorder: &[T]) -> TraversalResult<BinaryTree<T>>
where
    T: Eq + Hash + Clone + Debug,
{
    Reconstructor::default().rebuild(preorder, inorder)
}
