//! The vertex of a [`Tree`][crate::Tree].
//!
//! A `Node` is plain structure: a value and up to two owned children. It
//! doesn't know anything about ordering, so nothing here can check the BST
//! invariant. The [`Tree`][crate::Tree] is the only thing that builds and
//! relinks nodes.

use std::fmt;

use crate::traversal;

/// An owning slot for a child. `None` means there is no child.
pub(crate) type Link<T> = Option<Box<Node<T>>>;

/// A single vertex of the tree. It owns its left and right subtrees, so
/// dropping a `Node` drops everything below it.
pub struct Node<T> {
    value: T,
    left: Link<T>,
    right: Link<T>,
}

impl<T> Node<T> {
    /// Creates a leaf holding `value`.
    pub fn new(value: T) -> Self {
        Self {
            value,
            left: None,
            right: None,
        }
    }

    /// The value stored in this node.
    pub fn value(&self) -> &T {
        &self.value
    }

    /// Replaces the stored value, returning the previous one.
    pub fn set_value(&mut self, value: T) -> T {
        std::mem::replace(&mut self.value, value)
    }

    /// The left child, if any.
    pub fn left(&self) -> Option<&Node<T>> {
        self.left.as_deref()
    }

    /// The right child, if any.
    pub fn right(&self) -> Option<&Node<T>> {
        self.right.as_deref()
    }

    /// Replaces the left subtree, handing back the old one.
    pub fn set_left(&mut self, child: Option<Node<T>>) -> Option<Node<T>> {
        std::mem::replace(&mut self.left, child.map(Box::new)).map(|old| *old)
    }

    /// Replaces the right subtree, handing back the old one.
    pub fn set_right(&mut self, child: Option<Node<T>>) -> Option<Node<T>> {
        std::mem::replace(&mut self.right, child.map(Box::new)).map(|old| *old)
    }

    /// Whether this node has no children.
    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    pub(crate) fn left_mut(&mut self) -> &mut Link<T> {
        &mut self.left
    }

    pub(crate) fn right_mut(&mut self) -> &mut Link<T> {
        &mut self.right
    }

    pub(crate) fn value_mut(&mut self) -> &mut T {
        &mut self.value
    }

    /// Splits the node into its value and its two child slots.
    pub(crate) fn into_parts(self: Box<Self>) -> (T, Link<T>, Link<T>) {
        let node = *self;
        (node.value, node.left, node.right)
    }
}

/// Copies the whole subtree without recursing, so list-shaped subtrees can be
/// cloned no matter how deep they are.
impl<T: Clone> Clone for Node<T> {
    fn clone(&self) -> Self {
        // In post-order both children of a node are finished before the node
        // itself, and the right one sits on top of `built`.
        let mut built: Vec<Node<T>> = Vec::new();
        for node in traversal::post_order_nodes(self) {
            let right = node.right.as_ref().and_then(|_| built.pop()).map(Box::new);
            let left = node.left.as_ref().and_then(|_| built.pop()).map(Box::new);
            built.push(Node {
                value: node.value.clone(),
                left,
                right,
            });
        }

        match built.pop() {
            Some(copy) => copy,
            None => unreachable!("post-order always ends with the subtree root"),
        }
    }
}

/// Shows the value and the values of the direct children only.
impl<T: fmt::Debug> fmt::Debug for Node<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("value", &self.value)
            .field("left", &self.left().map(Node::value))
            .field("right", &self.right().map(Node::value))
            .finish()
    }
}
