//! An owning BST with duplicate rejection and on-demand rebalancing.
//!
//! Mutating operations (`insert` or `remove`) work on the tree in place,
//! deletion promotes the inorder successor, and there is no rebalancing on
//! insert. Exporting the records with [`OrderedTree::drain_sorted`] and
//! rebuilding with [`OrderedTree::from_sorted`] restores minimal height.
//!
//! # Examples
//!
//! ```
//! use ordered_tree::OrderedTree;
//!
//! let mut tree = OrderedTree::new();
//!
//! // Nothing in here yet.
//! assert_eq!(tree.find(&1), None);
//!
//! assert!(tree.insert(1));
//! assert_eq!(tree.find(&1), Some(&1));
//!
//! // Equal records are rejected; the rejected record is dropped.
//! assert!(!tree.insert(1));
//!
//! // Removing a record hands its ownership back.
//! assert_eq!(tree.remove(&1), Some(1));
//! assert_eq!(tree.find(&1), None);
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::mem;

/// Indentation unit for the sideways view, one per depth level.
const INDENT: &str = "        ";

type Link<T> = Option<Box<Node<T>>>;

#[derive(Clone, Debug, PartialEq, Eq)]
struct Node<T> {
    value: T,
    left: Link<T>,
    right: Link<T>,
}

/// A binary search tree that owns its records.
///
/// Each record is its own ordering key; the tree holds no duplicates. The
/// tree never rebalances itself - see [`OrderedTree::rebalance`] for
/// restoring minimal height on demand.
///
/// Equality (`==`) is structural: two trees are equal when they have the same
/// shape and every corresponding pair of nodes holds equal records. `Clone`
/// produces a fully independent deep copy.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OrderedTree<T> {
    root: Link<T>,
}

impl<T> Default for OrderedTree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for OrderedTree<T> {
    // Box would otherwise drop the node chain recursively, which overflows
    // the stack on a badly skewed tree.
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T> OrderedTree<T> {
    /// Generates a new, empty tree.
    pub fn new() -> Self {
        Self { root: None }
    }

    /// Returns `true` when the tree holds no records.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::OrderedTree;
    ///
    /// let mut tree = OrderedTree::new();
    /// assert!(tree.is_empty());
    ///
    /// tree.insert(1);
    /// assert!(!tree.is_empty());
    /// ```
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Returns the number of records in the tree.
    pub fn len(&self) -> usize {
        self.root.as_deref().map_or(0, Node::count)
    }

    /// Returns the number of levels in the tree. An empty tree has height 0,
    /// a lone root has height 1.
    pub fn height(&self) -> usize {
        self.root.as_deref().map_or(0, Node::height)
    }

    /// Drops every record, leaving the tree empty and ready for reuse.
    ///
    /// Teardown is iterative so even a fully skewed tree is cleared without
    /// deep recursion.
    pub fn clear(&mut self) {
        let mut pending = Vec::new();
        pending.extend(self.root.take());
        while let Some(mut node) = pending.pop() {
            pending.extend(node.left.take());
            pending.extend(node.right.take());
        }
    }

    /// Inserts the record into the tree, taking ownership of it. Returns
    /// `true` on success. If an equal record is already present the tree is
    /// left unchanged, the new record is dropped, and `false` is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::OrderedTree;
    ///
    /// let mut tree = OrderedTree::new();
    ///
    /// assert!(tree.insert("carrot"));
    /// assert!(!tree.insert("carrot"));
    /// assert_eq!(tree.len(), 1);
    /// ```
    pub fn insert(&mut self, value: T) -> bool
    where
        T: Ord,
    {
        Self::insert_into(&mut self.root, value)
    }

    fn insert_into(link: &mut Link<T>, value: T) -> bool
    where
        T: Ord,
    {
        match link {
            None => {
                *link = Some(Box::new(Node::new(value)));
                true
            }
            Some(node) => match value.cmp(&node.value) {
                Ordering::Less => Self::insert_into(&mut node.left, value),
                Ordering::Equal => false,
                Ordering::Greater => Self::insert_into(&mut node.right, value),
            },
        }
    }

    /// Potentially finds the stored record equal to `target` and returns a
    /// reference to it. If no record compares equal, `None` is returned.
    ///
    /// Matching is by ordering equality, not identity, so any value that
    /// compares equal to the stored record locates it.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::OrderedTree;
    ///
    /// let mut tree = OrderedTree::new();
    /// tree.insert(2);
    ///
    /// assert_eq!(tree.find(&2), Some(&2));
    /// assert_eq!(tree.find(&42), None);
    /// ```
    pub fn find(&self, target: &T) -> Option<&T>
    where
        T: Ord,
    {
        self.root.as_deref().and_then(|node| node.find(target))
    }

    /// Removes the record equal to `target` and returns ownership of it. If
    /// no record compares equal, the tree is untouched and `None` is
    /// returned.
    ///
    /// A node with two children keeps its place in the structure: it yields
    /// its own record and takes over the record of its inorder successor
    /// (the minimum of the right subtree), which is spliced out instead.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::OrderedTree;
    ///
    /// let mut tree = OrderedTree::new();
    /// tree.insert(5);
    /// tree.insert(3);
    ///
    /// assert_eq!(tree.remove(&3), Some(3));
    /// assert_eq!(tree.remove(&3), None);
    /// ```
    pub fn remove(&mut self, target: &T) -> Option<T>
    where
        T: Ord,
    {
        Self::remove_from(&mut self.root, target)
    }

    fn remove_from(link: &mut Link<T>, target: &T) -> Option<T>
    where
        T: Ord,
    {
        match link {
            None => None,
            Some(node) if *target < node.value => Self::remove_from(&mut node.left, target),
            Some(node) if *target > node.value => Self::remove_from(&mut node.right, target),
            Some(_) => Some(Self::detach(link)),
        }
    }

    /// Unlinks the node at `link` and returns its record, reconnecting the
    /// node's children per the deletion rule table.
    fn detach(link: &mut Link<T>) -> T {
        match link {
            Some(node) if node.left.is_some() && node.right.is_some() => {
                let successor = Self::take_min(&mut node.right);
                mem::replace(&mut node.value, successor)
            }
            _ => {
                let node = *link.take().expect("detach is only called on a node");
                *link = node.left.or(node.right);
                node.value
            }
        }
    }

    /// Splices out the leftmost node below `link` and returns its record.
    /// The removed node's right child (if any) is promoted into its slot.
    fn take_min(link: &mut Link<T>) -> T {
        match link {
            Some(node) if node.left.is_some() => Self::take_min(&mut node.left),
            _ => {
                let node = *link.take().expect("take_min is only called on a subtree");
                *link = node.right;
                node.value
            }
        }
    }

    /// Returns a reference to the record held by the parent of the node
    /// equal to `target`. Fails with `None` when `target` is absent or is
    /// the root (the root has no parent).
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::OrderedTree;
    ///
    /// let mut tree = OrderedTree::new();
    /// for value in [5, 3, 8, 1, 4, 7, 9] {
    ///     tree.insert(value);
    /// }
    ///
    /// assert_eq!(tree.parent_of(&1), Some(&3));
    /// assert_eq!(tree.parent_of(&5), None); // the root
    /// assert_eq!(tree.parent_of(&2), None); // not in the tree
    /// ```
    pub fn parent_of(&self, target: &T) -> Option<&T>
    where
        T: Ord,
    {
        let (parent, _) = self.locate_with_parent(target)?;
        parent.map(|node| &node.value)
    }

    /// Returns a reference to the record held by the sibling of the node
    /// equal to `target`, i.e. the other child of its parent. Fails with
    /// `None` when `target` is absent, is the root, or its parent has no
    /// other child.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::OrderedTree;
    ///
    /// let mut tree = OrderedTree::new();
    /// for value in [5, 3, 8, 1, 4, 7, 9] {
    ///     tree.insert(value);
    /// }
    ///
    /// assert_eq!(tree.sibling_of(&1), Some(&4));
    /// assert_eq!(tree.sibling_of(&5), None); // the root
    /// ```
    pub fn sibling_of(&self, target: &T) -> Option<&T>
    where
        T: Ord,
    {
        let (parent, _) = self.locate_with_parent(target)?;
        let parent = parent?;
        // Duplicates are rejected on insert, so `target` is strictly on one
        // side of the parent and the sibling slot is the other one.
        let sibling = match target.cmp(&parent.value) {
            Ordering::Less => parent.right.as_deref(),
            _ => parent.left.as_deref(),
        };
        sibling.map(|node| &node.value)
    }

    /// Walks the comparison path to `target`, keeping the last node visited
    /// before it. Returns the matching node and its parent (`None` for the
    /// root). The equality check happens before descending, so the walk
    /// stops at the unique matching node.
    fn locate_with_parent<'a>(&'a self, target: &T) -> Option<(Option<&'a Node<T>>, &'a Node<T>)>
    where
        T: Ord,
    {
        let mut parent = None;
        let mut current = self.root.as_deref();
        while let Some(node) = current {
            match target.cmp(&node.value) {
                Ordering::Equal => return Some((parent, node)),
                Ordering::Less => {
                    parent = Some(node);
                    current = node.left.as_deref();
                }
                Ordering::Greater => {
                    parent = Some(node);
                    current = node.right.as_deref();
                }
            }
        }
        None
    }

    /// Moves every record out of the tree into a `Vec` in ascending order,
    /// leaving the tree empty. The emptied tree is reusable exactly like a
    /// freshly constructed one.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::OrderedTree;
    ///
    /// let mut tree = OrderedTree::new();
    /// for value in [5, 3, 8] {
    ///     tree.insert(value);
    /// }
    ///
    /// assert_eq!(tree.drain_sorted(), vec![3, 5, 8]);
    /// assert!(tree.is_empty());
    /// ```
    pub fn drain_sorted(&mut self) -> Vec<T> {
        let mut records = Vec::with_capacity(self.len());
        if let Some(root) = self.root.take() {
            Self::append_inorder(root, &mut records);
        }
        records
    }

    fn append_inorder(node: Box<Node<T>>, records: &mut Vec<T>) {
        let Node { value, left, right } = *node;
        if let Some(left) = left {
            Self::append_inorder(left, records);
        }
        records.push(value);
        if let Some(right) = right {
            Self::append_inorder(right, records);
        }
    }

    /// Builds a minimal-height tree from records sorted in strictly
    /// ascending order. Each subtree takes the middle record of its range as
    /// its root, giving a height of ⌈log2(N + 1)⌉.
    ///
    /// The input order is the caller's responsibility; it is only checked in
    /// debug builds.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::OrderedTree;
    ///
    /// let tree = OrderedTree::from_sorted((1..=7).collect());
    /// assert_eq!(tree.len(), 7);
    /// assert_eq!(tree.height(), 3);
    /// ```
    pub fn from_sorted(values: Vec<T>) -> Self
    where
        T: Ord,
    {
        if cfg!(debug_assertions) {
            assert!(values.windows(2).all(|pair| pair[0] < pair[1]));
        }
        let mut slots: Vec<Option<T>> = values.into_iter().map(Some).collect();
        let len = slots.len();
        let root = Self::build_balanced(&mut slots, 0, len);
        Self { root }
    }

    /// Builds the subtree for the half-open slot range `[start, end)`,
    /// rooting it at the middle slot.
    fn build_balanced(slots: &mut [Option<T>], start: usize, end: usize) -> Link<T> {
        if start >= end {
            return None;
        }
        let mid = (start + end - 1) / 2;
        let value = slots[mid].take().expect("each slot is taken exactly once");
        let left = Self::build_balanced(slots, start, mid);
        let right = Self::build_balanced(slots, mid + 1, end);
        Some(Box::new(Node { value, left, right }))
    }

    /// Restores minimal height by draining the records in order and
    /// rebuilding the tree from the sorted sequence.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::OrderedTree;
    ///
    /// let mut tree = OrderedTree::new();
    /// for value in 1..=7 {
    ///     tree.insert(value); // ascending inserts skew the tree
    /// }
    /// assert_eq!(tree.height(), 7);
    ///
    /// tree.rebalance();
    /// assert_eq!(tree.height(), 3);
    /// ```
    pub fn rebalance(&mut self)
    where
        T: Ord,
    {
        let records = self.drain_sorted();
        *self = Self::from_sorted(records);
    }

    /// Returns an iterator over the records in ascending order.
    ///
    /// The iterator keeps an explicit node stack, so it tolerates skewed
    /// trees that would exhaust the call stack under recursion.
    pub fn iter(&self) -> Iter<'_, T> {
        let mut iter = Iter { stack: Vec::new() };
        iter.descend_left(self.root.as_deref());
        iter
    }

    /// Returns a view that formats the tree rotated 90 degrees for visual
    /// inspection of its structure: the right subtree is printed above the
    /// root, the left subtree below, indented by depth.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::OrderedTree;
    ///
    /// let mut tree = OrderedTree::new();
    /// for value in [2, 1, 3] {
    ///     tree.insert(value);
    /// }
    ///
    /// let view = tree.sideways().to_string();
    /// let values: Vec<&str> = view.lines().map(str::trim_start).collect();
    /// assert_eq!(values, ["3", "2", "1"]);
    /// ```
    pub fn sideways(&self) -> Sideways<'_, T> {
        Sideways {
            root: self.root.as_deref(),
        }
    }
}

/// Formats the records in ascending order, each followed by a single space,
/// with a final line break: `"v1 v2 ... vn \n"`.
impl<T> fmt::Display for OrderedTree<T>
where
    T: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_inorder(self.root.as_deref(), f)?;
        writeln!(f)
    }
}

fn write_inorder<T>(link: Option<&Node<T>>, f: &mut fmt::Formatter<'_>) -> fmt::Result
where
    T: fmt::Display,
{
    let Some(node) = link else {
        return Ok(());
    };
    write_inorder(node.left.as_deref(), f)?;
    write!(f, "{} ", node.value)?;
    write_inorder(node.right.as_deref(), f)
}

impl<T> Node<T> {
    fn new(value: T) -> Self {
        Self {
            value,
            left: None,
            right: None,
        }
    }

    fn count(&self) -> usize {
        let left = self.left.as_deref().map_or(0, Node::count);
        let right = self.right.as_deref().map_or(0, Node::count);
        left + right + 1
    }

    fn height(&self) -> usize {
        let left = self.left.as_deref().map_or(0, Node::height);
        let right = self.right.as_deref().map_or(0, Node::height);
        left.max(right) + 1
    }

    fn find(&self, target: &T) -> Option<&T>
    where
        T: Ord,
    {
        match target.cmp(&self.value) {
            Ordering::Less => self.left.as_deref().and_then(|node| node.find(target)),
            Ordering::Equal => Some(&self.value),
            Ordering::Greater => self.right.as_deref().and_then(|node| node.find(target)),
        }
    }
}

/// An inorder (ascending) iterator over the records of an [`OrderedTree`],
/// returned by [`OrderedTree::iter`].
pub struct Iter<'a, T> {
    stack: Vec<&'a Node<T>>,
}

impl<'a, T> Iter<'a, T> {
    /// Pushes `link` and the spine of left descendants below it. The next
    /// record to yield is then on top of the stack.
    fn descend_left(&mut self, mut link: Option<&'a Node<T>>) {
        while let Some(node) = link {
            self.stack.push(node);
            link = node.left.as_deref();
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        let node = self.stack.pop()?;
        self.descend_left(node.right.as_deref());
        Some(&node.value)
    }
}

impl<'a, T> IntoIterator for &'a OrderedTree<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

/// A sideways rendering of an [`OrderedTree`], returned by
/// [`OrderedTree::sideways`]. One record per line, right subtree above the
/// root and left subtree below, indented proportionally to depth.
pub struct Sideways<'a, T> {
    root: Option<&'a Node<T>>,
}

impl<T> fmt::Display for Sideways<'_, T>
where
    T: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_sideways(self.root, 1, f)
    }
}

fn write_sideways<T>(link: Option<&Node<T>>, depth: usize, f: &mut fmt::Formatter<'_>) -> fmt::Result
where
    T: fmt::Display,
{
    let Some(node) = link else {
        return Ok(());
    };
    write_sideways(node.right.as_deref(), depth + 1, f)?;
    for _ in 0..=depth {
        f.write_str(INDENT)?;
    }
    writeln!(f, "{}", node.value)?;
    write_sideways(node.left.as_deref(), depth + 1, f)
}
