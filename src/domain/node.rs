//! Owned binary tree: every node exclusively owns its two child slots.
//!
//! Trees can be as deep as they are long (a one-sided chain), so dropping,
//! comparing and measuring all walk the tree with an explicit stack.

use tracing::instrument;

/// A tree node holding a value and up to two owned children.
#[derive(Debug)]
pub struct Node<T> {
    value: T,
    left: Option<Box<Node<T>>>,
    right: Option<Box<Node<T>>>,
}

impl<T> Node<T> {
    pub fn leaf(value: T) -> Self {
        Self::with_children(value, None, None)
    }

    /// Creates a node with its children already attached.
    /// Nodes are not mutated afterwards.
    pub fn with_children(value: T, left: Option<Node<T>>, right: Option<Node<T>>) -> Self {
        Self {
            value,
            left: left.map(Box::new),
            right: right.map(Box::new),
        }
    }

    pub fn value(&self) -> &T {
        &self.value
    }

    pub fn left(&self) -> Option<&Node<T>> {
        self.left.as_deref()
    }

    pub fn right(&self) -> Option<&Node<T>> {
        self.right.as_deref()
    }

    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }
}

impl<T> Drop for Node<T> {
    fn drop(&mut self) {
        // Detach children before they drop so no drop call recurses
        let mut stack: Vec<Box<Node<T>>> = Vec::new();
        stack.extend(self.left.take());
        stack.extend(self.right.take());
        while let Some(mut node) = stack.pop() {
            stack.extend(node.left.take());
            stack.extend(node.right.take());
        }
    }
}

impl<T: PartialEq> PartialEq for Node<T> {
    fn eq(&self, other: &Self) -> bool {
        let mut stack = vec![(self, other)];
        while let Some((a, b)) = stack.pop() {
            if a.value != b.value {
                return false;
            }
            for pair in [(a.left(), b.left()), (a.right(), b.right())] {
                match pair {
                    (Some(x), Some(y)) => stack.push((x, y)),
                    (None, None) => {}
                    _ => return false,
                }
            }
        }
        true
    }
}

impl<T: Eq> Eq for Node<T> {}

/// A binary tree; empty when there is no root.
#[derive(Debug, PartialEq, Eq)]
pub struct BinaryTree<T> {
    root: Option<Node<T>>,
}

impl<T> Default for BinaryTree<T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T> From<Node<T>> for BinaryTree<T> {
    fn from(root: Node<T>) -> Self {
        Self { root: Some(root) }
    }
}

impl<T> BinaryTree<T> {
    pub fn empty() -> Self {
        Self { root: None }
    }

    pub fn root(&self) -> Option<&Node<T>> {
        self.root.as_ref()
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    pub fn len(&self) -> usize {
        self.iter().count()
    }

    #[instrument(level = "trace", skip(self))]
    pub fn depth(&self) -> usize {
        let mut max_depth = 0;
        let mut stack: Vec<(&Node<T>, usize)> = self.root().map(|root| (root, 1)).into_iter().collect();

        while let Some((node, depth)) = stack.pop() {
            max_depth = max_depth.max(depth);
            for child in [node.left(), node.right()].into_iter().flatten() {
                stack.push((child, depth + 1));
            }
        }
        max_depth
    }

    /// Values of all childless nodes, left to right.
    pub fn leaf_values(&self) -> Vec<&T> {
        self.iter().filter(|node| node.is_leaf()).map(Node::value).collect()
    }

    /// Preorder iterator (root, left, right).
    pub fn iter(&self) -> PreorderIter<'_, T> {
        PreorderIter::new(self)
    }

    pub fn preorder(&self) -> Vec<&T> {
        self.iter().map(Node::value).collect()
    }

    pub fn inorder(&self) -> Vec<&T> {
        let mut values = Vec::new();
        let mut stack: Vec<&Node<T>> = Vec::new();
        let mut current = self.root();

        while current.is_some() || !stack.is_empty() {
            while let Some(node) = current {
                stack.push(node);
                current = node.left();
            }
            if let Some(node) = stack.pop() {
                values.push(node.value());
                current = node.right();
            }
        }
        values
    }
}

pub struct PreorderIter<'a, T> {
    stack: Vec<&'a Node<T>>,
}

impl<'a, T> PreorderIter<'a, T> {
    fn new(tree: &'a BinaryTree<T>) -> Self {
        let mut stack = Vec::new();
        if let Some(root) = tree.root() {
            stack.push(root);
        }
        Self { stack }
    }
}

impl<'a, T> Iterator for PreorderIter<'a, T> {
    type Item = &'a Node<T>;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        // Right first so the left subtree is visited first
        if let Some(right) = node.right() {
            self.stack.push(right);
        }
        if let Some(left) = node.left() {
            self.stack.push(left);
        }
        Some(node)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    //     b
    //    / \
    //   a   d
    //      /
    //     c
    fn sample() -> BinaryTree<char> {
        let d = Node::with_children('d', Some(Node::leaf('c')), None);
        BinaryTree::from(Node::with_children('b', Some(Node::leaf('a')), Some(d)))
    }

    #[test]
    fn given_empty_tree_when_inspected_then_has_no_nodes() {
        let tree: BinaryTree<char> = BinaryTree::empty();
        assert!(tree.is_empty());
        assert_eq!(tree.len(), 0);
        assert_eq!(tree.depth(), 0);
        assert!(tree.preorder().is_empty());
        assert!(tree.inorder().is_empty());
        assert!(tree.leaf_values().is_empty());
    }

    #[test]
    fn given_sample_tree_when_traversed_then_returns_expected_orders() {
        let tree = sample();
        assert_eq!(tree.preorder(), vec![&'b', &'a', &'d', &'c']);
        assert_eq!(tree.inorder(), vec![&'a', &'b', &'c', &'d']);
    }

    #[test]
    fn given_sample_tree_when_measured_then_reports_shape() {
        let tree = sample();
        assert_eq!(tree.len(), 4);
        assert_eq!(tree.depth(), 3);
        assert_eq!(tree.leaf_values(), vec![&'a', &'c']);
        assert!(!tree.root().unwrap().is_leaf());
    }
}
