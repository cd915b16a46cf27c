use plain_bst::{Node, Traversal, Tree};
use quickcheck_macros::quickcheck;

use std::collections::{BTreeSet, HashSet};

use crate::Op;

/// Applies a set of operations to a tree and a set, checking after every step
/// that both agree on what was inserted/removed and on the sorted contents.
fn do_ops<T>(ops: &[Op<T>], tree: &mut Tree<T>, set: &mut BTreeSet<T>) -> bool
where
    T: Ord + Clone,
{
    for op in ops {
        let agrees = match op {
            Op::Insert(v) => tree.insert(v.clone()) == set.insert(v.clone()),
            Op::Remove(v) => tree.take(v).is_some() == set.remove(v),
            Op::Traverse => tree.values(Traversal::InOrder).into_iter().eq(set.iter()),
        };
        if !agrees || tree.len() != set.len() {
            return false;
        }
    }

    true
}

/// Walks the tree by hand and checks every node is within the bounds its
/// ancestors impose.
fn holds_invariant<T: Ord>(node: Option<&Node<T>>, low: Option<&T>, high: Option<&T>) -> bool {
    let Some(node) = node else {
        return true;
    };
    let value = node.value();

    low.map_or(true, |low| low < value)
        && high.map_or(true, |high| value < high)
        && holds_invariant(node.left(), low, Some(value))
        && holds_invariant(node.right(), Some(value), high)
}

#[quickcheck]
fn fuzz_multiple_operations_i8(ops: Vec<Op<i8>>) -> bool {
    let mut tree = Tree::new();
    let mut set = BTreeSet::new();

    do_ops(&ops, &mut tree, &mut set)
        && set.iter().all(|v| tree.contains(v))
        && holds_invariant(tree.root(), None, None)
}

#[quickcheck]
fn in_order_is_sorted(xs: Vec<i32>) -> bool {
    let tree: Tree<_> = xs.iter().copied().collect();
    let mut expected = xs;
    expected.sort_unstable();
    expected.dedup();

    tree.values(Traversal::InOrder).into_iter().eq(expected.iter())
}

#[quickcheck]
fn contains(xs: Vec<i8>) -> bool {
    let tree: Tree<_> = xs.iter().copied().collect();

    xs.iter().all(|x| tree.find(x).map(Node::value) == Some(x))
}

#[quickcheck]
fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
    let tree: Tree<_> = xs.iter().copied().collect();
    let added: HashSet<_> = xs.into_iter().collect();
    let nots: HashSet<_> = nots.into_iter().collect();
    let mut nots = nots.difference(&added);

    nots.all(|x| tree.find(x).is_none())
}

#[quickcheck]
fn insert_twice(xs: Vec<i8>, x: i8) -> bool {
    let mut tree: Tree<_> = xs.into_iter().filter(|v| *v != x).collect();
    let before = tree.len();

    tree.insert(x) && !tree.insert(x) && tree.len() == before + 1
}

#[quickcheck]
fn with_deletions(xs: Vec<i8>, deletes: Vec<i8>) -> bool {
    let mut tree: Tree<_> = xs.iter().copied().collect();
    for delete in &deletes {
        tree.remove(delete);
    }

    let still_present: Vec<_> = xs.iter().filter(|x| !deletes.contains(x)).collect();

    deletes.iter().all(|x| tree.find(x).is_none())
        && still_present.iter().all(|x| tree.find(x).is_some())
        && holds_invariant(tree.root(), None, None)
}

#[quickcheck]
fn removing_absent_changes_nothing(xs: Vec<i8>, missing: i8) -> bool {
    let mut tree: Tree<_> = xs.into_iter().filter(|v| *v != missing).collect();
    let before: Vec<i8> = tree.values(Traversal::PreOrder).into_iter().copied().collect();
    tree.remove(&missing);

    tree.values(Traversal::PreOrder).into_iter().eq(before.iter())
}

#[quickcheck]
fn every_traversal_visits_each_value_once(xs: Vec<i16>) -> bool {
    let tree: Tree<_> = xs.iter().copied().collect();
    let expected: BTreeSet<_> = xs.into_iter().collect();

    Traversal::ALL.into_iter().all(|strategy| {
        let mut seen = tree.values(strategy);
        seen.sort_unstable();
        seen.into_iter().eq(expected.iter())
    })
}

#[quickcheck]
fn level_order_depths_never_decrease(xs: Vec<i16>) -> bool {
    let tree: Tree<_> = xs.into_iter().collect();

    // Depth of a value is the number of comparisons `find` would make.
    let depth = |target: &i16| {
        let mut depth = 0;
        let mut node = tree.root();
        while let Some(n) = node {
            if n.value() == target {
                break;
            }
            depth += 1;
            node = if target < n.value() { n.left() } else { n.right() };
        }
        depth
    };

    let depths: Vec<usize> = tree
        .values(Traversal::LevelOrder)
        .into_iter()
        .map(depth)
        .collect();
    depths.windows(2).all(|w| w[0] <= w[1])
}
