//! A string-keyed B-tree.
//!
//! A tree of order `m` holds up to `2m` keys per node. An insertion that leaves a node
//! with `2m + 1` keys splits it around its median: the lower `m` keys stay, the upper `m`
//! keys move to a new sibling and the median moves up into the parent. A split that
//! reaches the root grows the tree by one level.

use std::{fmt, mem};

use tracing::debug;

use crate::error::{Error, Result};

/// A key-value pair stored in a node
#[derive(Debug, Clone)]
struct Entry<V> {
    /// The key in the key-value pair
    key: String,
    /// The value associated with the key
    value: V,
}

/// Median entry and new right sibling produced by splitting an overfull node
type Split<V> = (Entry<V>, Node<V>);

/// A block of sorted entries. A leaf has no children; an internal node has exactly one
/// more child than it has entries.
#[derive(Debug, Clone)]
struct Node<V> {
    /// Entries sorted by key
    entries: Vec<Entry<V>>,
    /// Subtrees between and around the entries
    children: Vec<Node<V>>,
}

impl<V> Node<V> {
    /// An empty leaf
    fn leaf() -> Self {
        Self { entries: Vec::new(), children: Vec::new() }
    }

    /// Position of `key` among the entries, or the child to descend into
    fn search(&self, key: &str) -> std::result::Result<usize, usize> {
        self.entries.binary_search_by(|entry| entry.key.as_str().cmp(key))
    }

    /// Inserts into this subtree, returning the split if this node overflowed.
    ///
    /// The key is checked against every node on the way down before anything is
    /// modified, so a duplicate leaves the subtree untouched.
    fn insert(&mut self, key: String, value: V, max_keys: usize) -> Result<Option<Split<V>>> {
        let index = match self.search(&key) {
            Ok(_) => return Err(Error::KeyExists(key)),
            Err(index) => index,
        };

        match self.children.get_mut(index) {
            Some(child) => {
                if let Some((median, right)) = child.insert(key, value, max_keys)? {
                    self.entries.insert(index, median);
                    self.children.insert(index.saturating_add(1), right);
                }
            }
            None => self.entries.insert(index, Entry { key, value }),
        }

        Ok(if self.entries.len() > max_keys { self.split() } else { None })
    }

    /// Moves the entries above the median, and the children to their right, into a new
    /// sibling. Returns the median with that sibling.
    fn split(&mut self) -> Option<Split<V>> {
        let median = self.entries.len() / 2;
        let entries = self.entries.split_off(median.saturating_add(1));
        let children = if self.children.is_empty() {
            Vec::new()
        } else {
            self.children.split_off(median.saturating_add(1))
        };
        let median = self.entries.pop()?;

        Some((median, Self { entries, children }))
    }
}

/// An ordered string-keyed map stored as a B-tree of configurable order.
///
/// Keys are unique: inserting a key that is already present fails and leaves the tree
/// unchanged. Every leaf sits at the same depth, and every node other than the root holds
/// between `order` and `2 * order` keys.
#[derive(Debug, Clone)]
pub struct BTree<V> {
    /// Root node, a leaf while the tree has a single level
    root: Node<V>,
    /// Minimum number of keys in a non-root node
    order: usize,
    /// Maximum number of keys in any node
    max_keys: usize,
    /// Number of entries in the tree
    size: usize,
    /// Number of levels below the root
    height: usize,
}

impl<V> BTree<V> {
    /// Creates an empty tree whose nodes hold up to `2 * order` keys.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if `order` is zero or `2 * order` overflows.
    pub fn new(order: usize) -> Result<Self> {
        let max_keys = order.checked_mul(2).filter(|_| order >= 1).ok_or_else(|| {
            let most = usize::MAX / 2;
            Error::InvalidArgument(format!("b-tree order must be in 1..={most}, got {order}"))
        })?;

        Ok(Self { root: Node::leaf(), order, max_keys, size: 0, height: 0 })
    }

    /// Inserts a new key-value pair.
    ///
    /// # Errors
    ///
    /// Returns [`Error::KeyExists`] if the key is already present; the tree is unchanged.
    pub fn insert(&mut self, key: impl Into<String>, value: V) -> Result<()> {
        if let Some((median, right)) = self.root.insert(key.into(), value, self.max_keys)? {
            let left = mem::replace(&mut self.root, Node::leaf());
            self.root = Node { entries: vec![median], children: vec![left, right] };
            self.height = self.height.saturating_add(1);
            debug!(height = self.height, size = self.size, "b-tree root split");
        }
        self.size = self.size.saturating_add(1);
        Ok(())
    }

    /// Returns the value stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::KeyNotFound`] if the key is absent.
    pub fn get(&self, key: &str) -> Result<&V> {
        let mut node = &self.root;
        loop {
            match node.search(key) {
                Ok(index) => {
                    if let Some(entry) = node.entries.get(index) {
                        return Ok(&entry.value);
                    }
                    break;
                }
                Err(index) => match node.children.get(index) {
                    Some(child) => node = child,
                    None => break,
                },
            }
        }
        Err(Error::KeyNotFound(key.to_owned()))
    }

    /// Returns true if the tree holds `key`
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_ok()
    }

    /// Returns the number of entries in the tree
    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns true if the tree holds no entries
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Returns the number of levels below the root. A tree that is a single leaf has
    /// height 0.
    #[must_use]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Returns the order the tree was created with
    #[must_use]
    pub fn order(&self) -> usize {
        self.order
    }

    /// Returns an iterator over the entries in ascending key order
    #[must_use]
    pub fn iter(&self) -> Iter<'_, V> {
        let mut iter = Iter { stack: Vec::new() };
        iter.descend(&self.root);
        iter
    }
}

/// In-order iterator over the entries of a [`BTree`]
#[derive(Debug)]
pub struct Iter<'a, V> {
    /// Path from the root, each node paired with the position of its next entry
    stack: Vec<(&'a Node<V>, usize)>,
}

impl<'a, V> Iter<'a, V> {
    /// Pushes `node` and its leftmost descendants
    fn descend(&mut self, mut node: &'a Node<V>) {
        loop {
            self.stack.push((node, 0));
            match node.children.first() {
                Some(child) => node = child,
                None => break,
            }
        }
    }
}

impl<'a, V> Iterator for Iter<'a, V> {
    type Item = (&'a str, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let (node, position) = self.stack.pop()?;
            if let Some(entry) = node.entries.get(position) {
                let next = position.saturating_add(1);
                self.stack.push((node, next));
                if let Some(child) = node.children.get(next) {
                    self.descend(child);
                }
                return Some((entry.key.as_str(), &entry.value));
            }
        }
    }
}

/// Renders one block per line pair: `Level n` then the block's keys, each followed by a
/// space. Blocks are listed depth first starting from the root at level 1.
impl<V> fmt::Display for BTree<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut pending = vec![(&self.root, 1_usize)];
        while let Some((node, level)) = pending.pop() {
            writeln!(f, "Level {level}")?;
            for entry in &node.entries {
                write!(f, "{} ", entry.key)?;
            }
            writeln!(f)?;

            let below = level.saturating_add(1);
            pending.extend(node.children.iter().rev().map(|child| (child, below)));
        }
        Ok(())
    }
}
