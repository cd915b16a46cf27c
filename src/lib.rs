//! This crate exposes a plain, unbalanced Binary Search Tree (BST) mostly for
//! educational purposes.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, find, and delete stored values. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` stores a value and
//! will sometimes have child `Node`s. The most important invariants of a BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a
//!    value less than its own value.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a
//!    value greater than its own value.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! Searching for a value takes `O(height)`. This tree does nothing to keep its
//! height down, so inserting values in sorted order gives a tree of height
//! `N` that behaves like a linked list.
//!
//! ## Traversals
//!
//! A [`Tree`] can be walked four ways (see [`Traversal`]):
//!
//! - in-order: left subtree, node, right subtree. This is sorted order.
//! - pre-order: node, left subtree, right subtree.
//! - post-order: left subtree, right subtree, node.
//! - level-order: breadth first, left to right within each depth.
//!
//! ```
//! use plain_bst::{Traversal, Tree};
//!
//! let mut tree: Tree<_> = [8, 9, 4, 7, 2].into_iter().collect();
//! tree.remove(&4);
//!
//! assert_eq!(tree.values(Traversal::InOrder), [&2, &7, &8, &9]);
//! assert_eq!(tree.values(Traversal::LevelOrder), [&8, &7, &9, &2]);
//! ```

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod node;
pub mod traversal;
pub mod tree;

pub use node::Node;
pub use traversal::{ParseTraversalError, Traversal};
pub use tree::Tree;
