//! Property tests pitting `OrderedTree` against `BTreeSet` as a model.

use std::collections::BTreeSet;

use ordered_tree::OrderedTree;
use quickcheck::{Arbitrary, Gen};

/// An enum for the various kinds of "things" to do to
/// an ordered tree in a quicktest.
#[derive(Copy, Clone, Debug)]
enum Op<T> {
    /// Insert the record into the tree.
    Insert(T),
    /// Remove the record from the tree.
    Remove(T),
}

impl<T> Arbitrary for Op<T>
where
    T: Arbitrary,
{
    /// Tells quickcheck how to randomly choose an operation.
    fn arbitrary(g: &mut Gen) -> Self {
        match g.choose(&[0, 1]).unwrap() {
            0 => Op::Insert(T::arbitrary(g)),
            _ => Op::Remove(T::arbitrary(g)),
        }
    }
}

/// Applies a set of operations to a tree and a `BTreeSet`.
/// This way we can ensure that after a random smattering of inserts
/// and removes we have the same set of records in both. Both structures
/// reject duplicates and hand removed records back, so every step must
/// agree, not just the end state.
fn do_ops(ops: &[Op<i8>], tree: &mut OrderedTree<i8>, set: &mut BTreeSet<i8>) {
    for op in ops {
        match op {
            Op::Insert(x) => assert_eq!(tree.insert(*x), set.insert(*x)),
            Op::Remove(x) => assert_eq!(tree.remove(x), set.take(x)),
        }
    }
}

quickcheck::quickcheck! {
    fn fuzz_matches_set_model(ops: Vec<Op<i8>>) -> bool {
        let mut tree = OrderedTree::new();
        let mut set = BTreeSet::new();

        do_ops(&ops, &mut tree, &mut set);
        tree.len() == set.len() && tree.iter().eq(set.iter())
    }

    fn contains(xs: Vec<i8>) -> bool {
        let mut tree = OrderedTree::new();
        for x in &xs {
            tree.insert(*x);
        }

        xs.iter().all(|x| tree.find(x) == Some(x))
    }

    fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
        let mut tree = OrderedTree::new();
        for x in &xs {
            tree.insert(*x);
        }
        let added: BTreeSet<_> = xs.into_iter().collect();
        let nots: BTreeSet<_> = nots.into_iter().collect();

        nots.difference(&added).all(|x| tree.find(x).is_none())
    }

    fn inorder_is_strictly_ascending(ops: Vec<Op<i8>>) -> bool {
        let mut tree = OrderedTree::new();
        let mut set = BTreeSet::new();
        do_ops(&ops, &mut tree, &mut set);

        let inorder: Vec<i8> = tree.iter().copied().collect();
        inorder.windows(2).all(|pair| pair[0] < pair[1])
    }

    fn drain_then_rebuild_balances(xs: Vec<i8>) -> bool {
        let mut tree = OrderedTree::new();
        for x in &xs {
            tree.insert(*x);
        }
        let snapshot: Vec<i8> = tree.iter().copied().collect();
        let n = tree.len();

        let drained = tree.drain_sorted();
        if !tree.is_empty() || drained != snapshot {
            return false;
        }

        let rebuilt = OrderedTree::from_sorted(drained);
        let minimal_height = (usize::BITS - n.leading_zeros()) as usize;
        rebuilt.height() == minimal_height && rebuilt.iter().eq(snapshot.iter())
    }

    fn insert_then_remove_fresh_record_is_identity(xs: Vec<i8>, x: i8) -> bool {
        let mut tree = OrderedTree::new();
        for v in &xs {
            tree.insert(*v);
        }
        if tree.find(&x).is_some() {
            // Only fresh records land as leaves.
            return true;
        }
        let before = tree.clone();

        tree.insert(x);
        tree.remove(&x) == Some(x) && tree == before
    }

    fn clone_is_deep(xs: Vec<i8>, removes: Vec<i8>) -> bool {
        let mut tree = OrderedTree::new();
        for x in &xs {
            tree.insert(*x);
        }
        let snapshot = tree.clone();
        if snapshot != tree {
            return false;
        }

        // Mutating the original must not leak into the copy.
        for x in &removes {
            tree.remove(x);
        }
        tree.insert(i8::MAX);

        let expected: BTreeSet<i8> = xs.into_iter().collect();
        snapshot.iter().eq(expected.iter())
    }
}
