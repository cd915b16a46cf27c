//! Traversal strategies and the walks behind them.
//!
//! All four walks are iterative (an explicit stack or queue) so a
//! list-shaped tree can be walked without running out of call stack.

use std::collections::VecDeque;
use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::node::Node;

/// The order in which [`Tree::traverse`][crate::Tree::traverse] visits values.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Traversal {
    /// Left subtree, then the node, then the right subtree. Yields ascending order.
    InOrder,
    /// The node, then the left subtree, then the right subtree.
    PreOrder,
    /// Left subtree, then right subtree, then the node.
    PostOrder,
    /// Breadth first: depth by depth, left to right within a depth.
    LevelOrder,
}

impl Traversal {
    /// Every strategy, in declaration order.
    pub const ALL: [Traversal; 4] = [
        Traversal::InOrder,
        Traversal::PreOrder,
        Traversal::PostOrder,
        Traversal::LevelOrder,
    ];

    /// The upper case label printed above a traversal, e.g. `INORDER`.
    pub fn label(self) -> &'static str {
        match self {
            Traversal::InOrder => "INORDER",
            Traversal::PreOrder => "PREORDER",
            Traversal::PostOrder => "POSTORDER",
            Traversal::LevelOrder => "LEVELORDER",
        }
    }
}

impl fmt::Display for Traversal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Returned when a string doesn't name a [`Traversal`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown traversal `{0}`, expected one of: in-order, pre-order, post-order, level-order")]
pub struct ParseTraversalError(String);

impl FromStr for Traversal {
    type Err = ParseTraversalError;

    /// Accepts `inorder`, `in-order` or `in_order` in any case (and likewise
    /// for the other strategies).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .chars()
            .filter(|c| !matches!(c, '-' | '_'))
            .map(|c| c.to_ascii_lowercase())
            .collect();

        match normalized.as_str() {
            "inorder" => Ok(Traversal::InOrder),
            "preorder" => Ok(Traversal::PreOrder),
            "postorder" => Ok(Traversal::PostOrder),
            "levelorder" => Ok(Traversal::LevelOrder),
            _ => Err(ParseTraversalError(s.to_string())),
        }
    }
}

/// Visits every value under `root` once, in the order given by `strategy`.
pub(crate) fn walk<'a, T, F>(root: Option<&'a Node<T>>, strategy: Traversal, visit: F)
where
    F: FnMut(&'a T),
{
    let Some(root) = root else {
        return;
    };

    match strategy {
        Traversal::InOrder => in_order(root, visit),
        Traversal::PreOrder => pre_order(root, visit),
        Traversal::PostOrder => post_order(root, visit),
        Traversal::LevelOrder => level_order(root, visit),
    }
}

fn in_order<'a, T>(root: &'a Node<T>, mut visit: impl FnMut(&'a T)) {
    let mut stack = Vec::new();
    let mut current = Some(root);

    loop {
        // Slide down the left spine, remembering each node to come back to.
        while let Some(node) = current {
            stack.push(node);
            current = node.left();
        }

        let Some(node) = stack.pop() else {
            break;
        };
        visit(node.value());
        current = node.right();
    }
}

fn pre_order<'a, T>(root: &'a Node<T>, mut visit: impl FnMut(&'a T)) {
    let mut stack = vec![root];

    while let Some(node) = stack.pop() {
        visit(node.value());
        // Right goes on first so the left subtree is popped first.
        stack.extend(node.right());
        stack.extend(node.left());
    }
}

fn post_order<'a, T>(root: &'a Node<T>, mut visit: impl FnMut(&'a T)) {
    for node in post_order_nodes(root) {
        visit(node.value());
    }
}

/// Every node under `root` (inclusive) in post-order, so `root` comes last.
pub(crate) fn post_order_nodes<T>(root: &Node<T>) -> Vec<&Node<T>> {
    // Node-right-left is exactly post-order backwards.
    let mut stack = vec![root];
    let mut nodes = Vec::new();

    while let Some(node) = stack.pop() {
        nodes.push(node);
        stack.extend(node.left());
        stack.extend(node.right());
    }

    nodes.reverse();
    nodes
}

fn level_order<'a, T>(root: &'a Node<T>, mut visit: impl FnMut(&'a T)) {
    let mut queue = VecDeque::new();
    queue.push_back(root);

    while let Some(node) = queue.pop_front() {
        visit(node.value());
        queue.extend(node.left());
        queue.extend(node.right());
    }
}
