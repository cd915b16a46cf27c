//! An unbalanced Binary Search Tree with owned nodes.
//!
//! # Examples
//!
//! ```
//! use plain_bst::{Traversal, Tree};
//!
//! let mut tree = Tree::new();
//!
//! // Nothing in here yet.
//! assert!(tree.find(&8).is_none());
//!
//! assert!(tree.insert(8));
//! assert!(tree.insert(4));
//! assert!(tree.insert(9));
//!
//! // Equal values are rejected.
//! assert!(!tree.insert(8));
//!
//! assert_eq!(tree.find(&4).map(|n| *n.value()), Some(4));
//! assert_eq!(tree.values(Traversal::InOrder), [&4, &8, &9]);
//!
//! // Removing hands back the (possibly new) root.
//! let root = tree.remove(&8);
//! assert_eq!(root.map(|n| *n.value()), Some(9));
//! assert_eq!(tree.values(Traversal::InOrder), [&4, &9]);
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::io;
use std::mem;

use tracing::trace;

use crate::node::{Link, Node};
use crate::traversal::{self, Traversal};

/// A Binary Search Tree holding distinct values. There is no balancing: values
/// inserted in sorted order produce a tree as deep as it is long.
pub struct Tree<T> {
    root: Link<T>,
    len: usize,
}

impl<T> Default for Tree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for Tree<T> {
    fn drop(&mut self) {
        // Unlink children before each node drops so a list-shaped tree doesn't
        // drop recursively.
        let mut stack: Vec<Box<Node<T>>> = self.root.take().into_iter().collect();
        while let Some(mut node) = stack.pop() {
            stack.extend(node.left_mut().take());
            stack.extend(node.right_mut().take());
        }
    }
}

impl<T: Clone> Clone for Tree<T> {
    fn clone(&self) -> Self {
        // `Node::clone` walks with an explicit stack.
        Self {
            root: self.root.clone(),
            len: self.len,
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Tree<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set()
            .entries(self.values(Traversal::InOrder))
            .finish()
    }
}

impl<T> Tree<T> {
    /// Generates a new, empty `Tree`.
    pub fn new() -> Self {
        Self { root: None, len: 0 }
    }

    /// How many values are stored.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the tree holds no values.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// The root node, if the tree isn't empty.
    pub fn root(&self) -> Option<&Node<T>> {
        self.root.as_deref()
    }

    /// Number of levels in the tree. An empty tree has height 0 and a lone
    /// root has height 1.
    pub fn height(&self) -> usize {
        let mut height = 0;
        let mut level: Vec<&Node<T>> = self.root().into_iter().collect();
        while !level.is_empty() {
            height += 1;
            level = level
                .into_iter()
                .flat_map(|n| n.left().into_iter().chain(n.right()))
                .collect();
        }
        height
    }

    /// The smallest value, found by following left children from the root.
    pub fn min(&self) -> Option<&T> {
        let mut node = self.root()?;
        while let Some(left) = node.left() {
            node = left;
        }
        Some(node.value())
    }

    /// The largest value, found by following right children from the root.
    pub fn max(&self) -> Option<&T> {
        let mut node = self.root()?;
        while let Some(right) = node.right() {
            node = right;
        }
        Some(node.value())
    }

    /// Inserts `value` as a new leaf. Returns `false`, leaving the tree
    /// untouched, if an equal value is already stored.
    ///
    /// # Examples
    ///
    /// ```
    /// use plain_bst::Tree;
    ///
    /// let mut tree = Tree::new();
    ///
    /// assert!(tree.insert(1));
    /// assert!(!tree.insert(1));
    /// assert_eq!(tree.len(), 1);
    /// ```
    pub fn insert(&mut self, value: T) -> bool
    where
        T: Ord,
    {
        let mut depth = 0usize;
        let mut slot = &mut self.root;
        while let Some(node) = slot {
            slot = match value.cmp(node.value()) {
                Ordering::Less => node.left_mut(),
                Ordering::Equal => {
                    trace!(depth, "insert rejected: value already present");
                    return false;
                }
                Ordering::Greater => node.right_mut(),
            };
            depth += 1;
        }

        *slot = Some(Box::new(Node::new(value)));
        self.len += 1;
        trace!(depth, len = self.len, "inserted leaf");
        true
    }

    /// Potentially finds the node holding `value`. If no node holds it, `None`
    /// is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use plain_bst::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.insert(1);
    ///
    /// assert_eq!(tree.find(&1).map(|n| *n.value()), Some(1));
    /// assert!(tree.find(&42).is_none());
    /// ```
    pub fn find(&self, value: &T) -> Option<&Node<T>>
    where
        T: Ord,
    {
        let mut current = self.root();
        while let Some(node) = current {
            current = match value.cmp(node.value()) {
                Ordering::Less => node.left(),
                Ordering::Equal => return Some(node),
                Ordering::Greater => node.right(),
            };
        }
        None
    }

    /// Whether a node holds `value`.
    pub fn contains(&self, value: &T) -> bool
    where
        T: Ord,
    {
        self.find(value).is_some()
    }

    /// Removes `value` from the tree if it is there and returns the root
    /// afterwards, which may have changed or be gone entirely. Removing a
    /// value that isn't stored changes nothing.
    ///
    /// # Examples
    ///
    /// ```
    /// use plain_bst::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.insert(5);
    ///
    /// assert!(tree.remove(&42).is_some());
    /// assert!(tree.remove(&5).is_none());
    /// assert!(tree.is_empty());
    /// ```
    pub fn remove(&mut self, value: &T) -> Option<&Node<T>>
    where
        T: Ord,
    {
        self.take(value);
        self.root()
    }

    /// Removes `value` from the tree and returns the value that was stored.
    ///
    /// A node with at most one child is replaced by that child. A node with
    /// two children stays where it is and takes the value of its in-order
    /// successor (the smallest value in its right subtree), and the
    /// successor's node is unlinked instead.
    ///
    /// # Examples
    ///
    /// ```
    /// use plain_bst::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.insert(2);
    ///
    /// assert_eq!(tree.take(&2), Some(2));
    /// assert_eq!(tree.take(&2), None);
    /// ```
    pub fn take(&mut self, value: &T) -> Option<T>
    where
        T: Ord,
    {
        let mut depth = 0usize;
        let mut slot = &mut self.root;
        loop {
            let ordering = value.cmp(slot.as_deref()?.value());
            slot = match ordering {
                Ordering::Less => slot.as_mut()?.left_mut(),
                Ordering::Equal => break,
                Ordering::Greater => slot.as_mut()?.right_mut(),
            };
            depth += 1;
        }

        let node = slot.as_mut()?;
        let removed = if node.left().is_some() && node.right().is_some() {
            let successor = take_min(node.right_mut())?;
            trace!(depth, case = "two children", "replaced value with successor");
            mem::replace(node.value_mut(), successor)
        } else {
            let (removed, left, right) = slot.take()?.into_parts();
            *slot = left.or(right);
            trace!(depth, case = "at most one child", "unlinked node");
            removed
        };

        self.len -= 1;
        Some(removed)
    }

    /// Calls `visit` with every value once, in the order given by `strategy`.
    ///
    /// # Examples
    ///
    /// ```
    /// use plain_bst::{Traversal, Tree};
    ///
    /// let tree: Tree<_> = [2, 1, 3].into_iter().collect();
    ///
    /// let mut seen = Vec::new();
    /// tree.traverse(Traversal::PostOrder, |v| seen.push(*v));
    /// assert_eq!(seen, [1, 3, 2]);
    /// ```
    pub fn traverse<'a, F>(&'a self, strategy: Traversal, visit: F)
    where
        F: FnMut(&'a T),
    {
        traversal::walk(self.root(), strategy, visit);
    }

    /// Collects every value in the order given by `strategy`.
    pub fn values(&self, strategy: Traversal) -> Vec<&T> {
        let mut values = Vec::with_capacity(self.len);
        self.traverse(strategy, |v| values.push(v));
        values
    }

    /// Writes a traversal to `writer`: the strategy's label on its own line,
    /// then every value followed by a space, then a newline.
    ///
    /// # Examples
    ///
    /// ```
    /// use plain_bst::{Traversal, Tree};
    ///
    /// let tree: Tree<_> = [2, 1, 3].into_iter().collect();
    ///
    /// let mut out = Vec::new();
    /// tree.write_traversal(Traversal::LevelOrder, &mut out).unwrap();
    /// assert_eq!(out, b"LEVELORDER\n2 1 3 \n");
    /// ```
    pub fn write_traversal<W>(&self, strategy: Traversal, mut writer: W) -> io::Result<()>
    where
        T: std::fmt::Display,
        W: io::Write,
    {
        writeln!(writer, "{strategy}")?;
        let mut result = Ok(());
        self.traverse(strategy, |v| {
            if result.is_ok() {
                result = write!(writer, "{v} ");
            }
        });
        result?;
        writeln!(writer)?;
        writer.flush()
    }
}

/// Unlinks the leftmost node under `slot` and returns its value. Its right
/// child, if any, takes its place.
fn take_min<T>(mut slot: &mut Link<T>) -> Option<T> {
    while slot.as_deref()?.left().is_some() {
        slot = slot.as_mut()?.left_mut();
    }

    let (min, _, right) = slot.take()?.into_parts();
    *slot = right;
    Some(min)
}

impl<T: Ord> FromIterator<T> for Tree<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = Tree::new();
        tree.extend(iter);
        tree
    }
}

impl<T: Ord> Extend<T> for Tree<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}
