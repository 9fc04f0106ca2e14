//! A Binary Search Tree (BST) of owned, ordered records.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, find, and delete stored records. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` owns one record and
//! sometimes has child `Node`s. The most important invariants of a BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree hold
//!    records less than its own record.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree hold
//!    records greater than its own record.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! The [`OrderedTree`] in this crate is a *plain* BST: it rejects duplicate
//! records and never rebalances itself on insertion, so searches take
//! `O(height)` where the height depends entirely on insertion order. Records
//! inserted in already-sorted order degenerate the tree into a list. Balance
//! is restored on demand by round-tripping through a sorted sequence:
//! [`OrderedTree::drain_sorted`] empties the tree in ascending order and
//! [`OrderedTree::from_sorted`] rebuilds a minimal-height tree, packaged
//! together as [`OrderedTree::rebalance`].
//!
//! Most operations recurse, so the native call stack grows proportionally to
//! the tree height - in the fully skewed worst case that is one frame per
//! stored record. Iteration ([`OrderedTree::iter`]) and teardown
//! ([`OrderedTree::clear`] and `Drop`) instead keep an explicit stack and are
//! safe on skewed trees of any size.

#![deny(missing_docs)]

pub mod tree;

pub use tree::{Iter, OrderedTree, Sideways};
