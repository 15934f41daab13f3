/*
Conversion of rebuilt binary trees into termtree::Tree for display.

termtree only knows ordered children, so a node with a single child gets a
placeholder for the missing side to keep left and right apart.
 */
use std::fmt::Display;

use termtree::Tree;
use tracing::instrument;

use crate::domain::{BinaryTree, Node};

/// Shown in place of the missing child of a one-child node.
pub const MISSING_CHILD: &str = "·";

pub trait TreeNodeConvert {
    fn to_tree_string(&self) -> Tree<String>;
}

impl<T: Display> TreeNodeConvert for Node<T> {
    /// Builds bottom-up from a postorder walk so deep chains do not recurse.
    fn to_tree_string(&self) -> Tree<String> {
        // Reverse of (node, right, left) preorder is (left, right, node) postorder
        let mut pending = vec![self];
        let mut reversed = Vec::new();
        while let Some(node) = pending.pop() {
            reversed.push(node);
            pending.extend(node.left());
            pending.extend(node.right());
        }

        let mut built: Vec<Tree<String>> = Vec::new();
        for node in reversed.into_iter().rev() {
            let right = node.right().and_then(|_| built.pop());
            let left = node.left().and_then(|_| built.pop());
            let leaves = match (left, right) {
                (None, None) => Vec::new(),
                (Some(left), Some(right)) => vec![left, right],
                (Some(left), None) => vec![left, Tree::new(MISSING_CHILD.to_string())],
                (None, Some(right)) => vec![Tree::new(MISSING_CHILD.to_string()), right],
            };
            built.push(Tree::new(node.value().to_string()).with_leaves(leaves));
        }

        built.pop().unwrap_or_else(|| Tree::new(self.value().to_string()))
    }
}

impl<T: Display> TreeNodeConvert for BinaryTree<T> {
    #[instrument(level = "debug", skip(self))]
    fn to_tree_string(&self) -> Tree<String> {
        match self.root() {
            Some(root) => root.to_tree_string(),
            None => Tree::new("Empty tree".to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::tree_from_traversals;

    #[test]
    fn given_full_tree_when_rendered_then_lists_children_in_order() {
        let tree = tree_from_traversals(&['b', 'a', 'c'], &['a', 'b', 'c']).unwrap();
        let rendered = tree.to_tree_string();

        assert_eq!(rendered.root, "b");
        let children: Vec<_> = rendered.leaves.iter().map(|t| t.root.as_str()).collect();
        assert_eq!(children, vec!["a", "c"]);
    }

    #[test]
    fn given_right_only_child_when_rendered_then_marks_missing_left() {
        let tree = tree_from_traversals(&['a', 'b'], &['a', 'b']).unwrap();
        let rendered = tree.to_tree_string();

        let children: Vec<_> = rendered.leaves.iter().map(|t| t.root.as_str()).collect();
        assert_eq!(children, vec![MISSING_CHILD, "b"]);
    }

    #[test]
    fn given_left_chain_when_rendered_then_nests_with_placeholders() {
        let inorder: Vec<u32> = (0..2_000).collect();
        let preorder: Vec<u32> = inorder.iter().rev().copied().collect();
        let tree = tree_from_traversals(&preorder, &inorder).unwrap();

        let mut level = &tree.to_tree_string();
        let mut depth = 1;
        while !level.leaves.is_empty() {
            assert_eq!(level.leaves[1].root, MISSING_CHILD);
            level = &level.leaves[0];
            depth += 1;
        }
        assert_eq!(level.root, "0");
        assert_eq!(depth, 2_000);
    }

    #[test]
    fn given_empty_tree_when_rendered_then_shows_placeholder() {
        let tree: BinaryTree<char> = BinaryTree::empty();
        assert_eq!(tree.to_tree_string().to_string().trim(), "Empty tree");
    }
}
