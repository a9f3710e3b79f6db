//! Mutable ordered map based on a height-balanced binary search tree.
//!
//! This module provides [`BalancedMap`], an AVL-style ordered map that
//! rebalances itself after every insertion, keeping lookups and inserts
//! logarithmic for any insertion order.
//!
//! # Overview
//!
//! - O(log N) insert, with duplicate keys rejected instead of overwritten
//! - O(log N) get / search
//! - O(1) len, `is_empty` and height
//! - Diagnostic indented rendering of the tree shape
//!
//! # Internal Structure
//!
//! Nodes are stored in an index-addressed arena; every link between nodes
//! is a plain index. The tree maintains the following invariants after
//! every public operation:
//!
//! 1. Binary search tree ordering with unique keys: all keys in a node's
//!    left subtree are less than its key, all keys in the right subtree
//!    are greater
//! 2. AVL balance: the cached left and right subtree heights of every
//!    node differ by at most 1
//! 3. Height consistency: a cached height is 0 when the child is absent,
//!    otherwise 1 plus the child's larger cached height
//! 4. Parent consistency: children point back at their parent; the root
//!    has no parent
//!
//! These invariants bound the tree height by ~1.44·log2(N), which bounds
//! every descent.
//!
//! # Examples
//!
//! ```rust
//! use baltree::ordered::BalancedMap;
//!
//! let mut map = BalancedMap::new();
//! assert!(map.insert(3, "three"));
//! assert!(map.insert(1, "one"));
//! assert!(map.insert(2, "two"));
//!
//! // Inserting an existing key fails and changes nothing
//! assert!(!map.insert(2, "TWO"));
//! assert_eq!(map.get(&2), Some(&"two"));
//! ```

use std::borrow::Borrow;
use std::cmp::Ordering;
use std::fmt;
use std::ops::{Index, IndexMut};

use smallvec::SmallVec;

use super::arena::{NodeArena, NodeId};
use super::error::NotFoundError;

// =============================================================================
// Branch Selection
// =============================================================================

/// Which child slot of an attachment point receives a new leaf.
enum Branch {
    Left,
    Right,
}

// =============================================================================
// BalancedMap Definition
// =============================================================================

/// A mutable ordered map backed by a height-balanced binary search tree.
///
/// Keys must implement `Ord`. Each key maps to exactly one value;
/// [`insert`](Self::insert) reports a duplicate key by returning `false`
/// and never overwrites the stored value.
///
/// The tree restores the balance invariant after every insertion with
/// single or double rotations, so the height stays logarithmic even for
/// adversarial (sorted or reverse-sorted) insertion sequences.
///
/// # Time Complexity
///
/// | Operation        | Complexity   |
/// |------------------|--------------|
/// | `new`            | O(1)         |
/// | `insert`         | O(log N)     |
/// | `get` / `search` | O(log N)     |
/// | `contains_key`   | O(log N)     |
/// | `len`            | O(1)         |
/// | `is_empty`       | O(1)         |
/// | `height`         | O(1)         |
/// | `clear`          | O(N)         |
/// | `render`         | O(N)         |
///
/// # Examples
///
/// ```rust
/// use baltree::ordered::BalancedMap;
///
/// let mut map = BalancedMap::new();
/// for key in [50, 20, 70, 10, 30] {
///     map.insert(key, key.to_string());
/// }
///
/// assert_eq!(map.len(), 5);
/// assert_eq!(map.get(&30), Some(&"30".to_string()));
/// assert_eq!(map.search(&40).ok(), None);
/// ```
#[derive(Clone)]
pub struct BalancedMap<K, V> {
    /// Node storage; all tree links are indices into it.
    arena: NodeArena<K, V>,
    /// Index of the top node, absent when the map is empty.
    root: Option<NodeId>,
    /// Number of entries.
    length: usize,
}

impl<K, V> BalancedMap<K, V> {
    /// Creates a new empty map.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use baltree::ordered::BalancedMap;
    ///
    /// let map: BalancedMap<i32, String> = BalancedMap::new();
    /// assert!(map.is_empty());
    /// ```
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            arena: NodeArena::new(),
            root: None,
            length: 0,
        }
    }

    /// Returns the number of entries in the map.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use baltree::ordered::BalancedMap;
    ///
    /// let mut map = BalancedMap::new();
    /// map.insert(1, "one");
    /// map.insert(2, "two");
    /// assert_eq!(map.len(), 2);
    /// ```
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.length
    }

    /// Returns `true` if the map contains no entries.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use baltree::ordered::BalancedMap;
    ///
    /// let mut map = BalancedMap::new();
    /// assert!(map.is_empty());
    /// map.insert(1, "one");
    /// assert!(!map.is_empty());
    /// ```
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.length == 0
    }

    /// Returns the number of nodes on the longest root-to-leaf path.
    ///
    /// An empty map has height 0 and a single entry has height 1. After
    /// any sequence of insertions the height stays within the AVL bound
    /// of roughly 1.44·log2(N + 2).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use baltree::ordered::BalancedMap;
    ///
    /// let mut map = BalancedMap::new();
    /// assert_eq!(map.height(), 0);
    ///
    /// // Seven keys in ascending order still settle at height 3.
    /// for key in 1..=7 {
    ///     map.insert(key, ());
    /// }
    /// assert_eq!(map.height(), 3);
    /// ```
    #[must_use]
    pub fn height(&self) -> u32 {
        self.root
            .map_or(0, |root| self.arena.node(root).max_height() + 1)
    }

    /// Removes every entry from the map.
    ///
    /// Teardown is unconditional: the arena holding the nodes is emptied
    /// in one pass, with no per-node unlinking.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use baltree::ordered::BalancedMap;
    ///
    /// let mut map = BalancedMap::new();
    /// map.insert(1, "one");
    /// map.clear();
    /// assert!(map.is_empty());
    /// assert_eq!(map.get(&1), None);
    /// ```
    pub fn clear(&mut self) {
        self.arena.clear();
        self.root = None;
        self.length = 0;
    }

    /// Collects `(key, value)` references in ascending key order.
    ///
    /// Iterative with an explicit stack bounded by the tree height.
    fn entries_in_order(&self) -> Vec<(&K, &V)> {
        let mut entries = Vec::with_capacity(self.length);
        let mut stack: SmallVec<[NodeId; 16]> = SmallVec::new();
        let mut walk = self.root;
        loop {
            while let Some(current) = walk {
                stack.push(current);
                walk = self.arena.node(current).left;
            }
            let Some(current) = stack.pop() else { break };
            let node = self.arena.node(current);
            entries.push((&node.key, &node.value));
            walk = node.right;
        }
        entries
    }

    /// Recomputes the cached heights of `start` and every ancestor above
    /// it, walking the parent chain up to the root.
    fn update_heights_from(&mut self, start: NodeId) {
        let mut walk = Some(start);
        while let Some(current) = walk {
            let node = self.arena.node(current);
            let left_height = node
                .left
                .map_or(0, |child| self.arena.node(child).max_height() + 1);
            let right_height = node
                .right
                .map_or(0, |child| self.arena.node(child).max_height() + 1);
            let next = node.parent;

            let node = self.arena.node_mut(current);
            node.left_height = left_height;
            node.right_height = right_height;
            walk = next;
        }
    }

    /// Rotates the subtree rooted at `pivot` to the left.
    ///
    /// The pivot's right child takes the pivot's place under the pivot's
    /// former parent (or becomes the root), the pivot becomes its left
    /// child, and the child's former left subtree transfers to the pivot.
    /// In-order key sequence is preserved. No-op when the pivot has no
    /// right child.
    fn rotate_left(&mut self, pivot: NodeId) {
        let Some(substitute) = self.arena.node(pivot).right else {
            return;
        };
        let parent = self.arena.node(pivot).parent;
        let transferred = self.arena.node(substitute).left;
        let substitute_left_height = self.arena.node(substitute).left_height;

        // The transferred subtree keeps its height as seen by the pivot.
        let pivot_node = self.arena.node_mut(pivot);
        pivot_node.right = transferred;
        pivot_node.right_height = substitute_left_height;
        pivot_node.parent = Some(substitute);
        if let Some(child) = transferred {
            self.arena.node_mut(child).parent = Some(pivot);
        }

        let raised_height = self.arena.node(pivot).max_height() + 1;
        let substitute_node = self.arena.node_mut(substitute);
        substitute_node.left = Some(pivot);
        substitute_node.left_height = raised_height;
        substitute_node.parent = parent;

        match parent {
            Some(parent_id) => {
                let parent_node = self.arena.node_mut(parent_id);
                if parent_node.left == Some(pivot) {
                    parent_node.left = Some(substitute);
                } else {
                    parent_node.right = Some(substitute);
                }
            }
            None => self.root = Some(substitute),
        }

        self.update_heights_from(substitute);
    }

    /// Rotates the subtree rooted at `pivot` to the right.
    ///
    /// Exact mirror of [`rotate_left`](Self::rotate_left), using the left
    /// child as the substitute. No-op when the pivot has no left child.
    fn rotate_right(&mut self, pivot: NodeId) {
        let Some(substitute) = self.arena.node(pivot).left else {
            return;
        };
        let parent = self.arena.node(pivot).parent;
        let transferred = self.arena.node(substitute).right;
        let substitute_right_height = self.arena.node(substitute).right_height;

        let pivot_node = self.arena.node_mut(pivot);
        pivot_node.left = transferred;
        pivot_node.left_height = substitute_right_height;
        pivot_node.parent = Some(substitute);
        if let Some(child) = transferred {
            self.arena.node_mut(child).parent = Some(pivot);
        }

        let raised_height = self.arena.node(pivot).max_height() + 1;
        let substitute_node = self.arena.node_mut(substitute);
        substitute_node.right = Some(pivot);
        substitute_node.right_height = raised_height;
        substitute_node.parent = parent;

        match parent {
            Some(parent_id) => {
                let parent_node = self.arena.node_mut(parent_id);
                if parent_node.left == Some(pivot) {
                    parent_node.left = Some(substitute);
                } else {
                    parent_node.right = Some(substitute);
                }
            }
            None => self.root = Some(substitute),
        }

        self.update_heights_from(substitute);
    }

    /// Walks from `start` up to the root, restoring the balance invariant
    /// at every node along the way.
    ///
    /// Right-heavy nodes rotate left, after first rotating their right
    /// child right when that child leans the other way (the double-rotation
    /// case); mirrored for left-heavy nodes. Balanced nodes are untouched.
    /// Iterative on purpose: the walk length is the tree height, and no
    /// insert order can grow the call stack with it.
    fn rebalance(&mut self, start: NodeId) {
        let mut walk = Some(start);
        while let Some(current) = walk {
            // Capture the next ancestor before rotating: a rotation at
            // `current` reparents it under the substitute, and the walk
            // must continue from the node that was above this subtree.
            let next = self.arena.node(current).parent;

            let balance = self.arena.node(current).balance_factor();
            if balance > 1 {
                if let Some(right) = self.arena.node(current).right
                    && self.arena.node(right).left_height > self.arena.node(right).right_height
                {
                    self.rotate_right(right);
                }
                self.rotate_left(current);
            } else if balance < -1 {
                if let Some(left) = self.arena.node(current).left
                    && self.arena.node(left).right_height > self.arena.node(left).left_height
                {
                    self.rotate_left(left);
                }
                self.rotate_right(current);
            }

            walk = next;
        }
    }
}

// =============================================================================
// Insertion and Lookup
// =============================================================================

impl<K: Ord, V> BalancedMap<K, V> {
    /// Inserts a key-value pair into the map.
    ///
    /// Returns `true` when the entry was added. If the key is already
    /// present the map is left untouched, the existing value is kept, and
    /// `false` is returned.
    ///
    /// After attaching the new leaf, cached heights are repropagated up to
    /// the root and the rebalancing walk restores the balance invariant at
    /// every ancestor.
    ///
    /// # Complexity
    ///
    /// O(log N)
    ///
    /// # Examples
    ///
    /// ```rust
    /// use baltree::ordered::BalancedMap;
    ///
    /// let mut map = BalancedMap::new();
    /// assert!(map.insert(1, "one"));
    /// assert!(!map.insert(1, "ONE"));
    /// assert_eq!(map.get(&1), Some(&"one"));
    /// ```
    pub fn insert(&mut self, key: K, value: V) -> bool {
        let Some(root) = self.root else {
            let id = self.arena.alloc(key, value, None);
            self.root = Some(id);
            self.length = 1;
            return true;
        };

        let mut current = root;
        let branch = loop {
            let node = self.arena.node(current);
            match key.cmp(&node.key) {
                Ordering::Equal => return false,
                Ordering::Less => match node.left {
                    Some(child) => current = child,
                    None => break Branch::Left,
                },
                Ordering::Greater => match node.right {
                    Some(child) => current = child,
                    None => break Branch::Right,
                },
            }
        };

        let leaf = self.arena.alloc(key, value, Some(current));
        // A fresh leaf always contributes depth 1 below its parent, so the
        // attachment point's counter can be bumped instead of recomputed.
        let attachment = self.arena.node_mut(current);
        match branch {
            Branch::Left => {
                attachment.left = Some(leaf);
                attachment.left_height += 1;
            }
            Branch::Right => {
                attachment.right = Some(leaf);
                attachment.right_height += 1;
            }
        }

        self.update_heights_from(leaf);
        self.rebalance(leaf);
        self.length += 1;
        true
    }

    /// Pure read-only descent to the node holding `key`.
    fn locate<Q>(&self, key: &Q) -> Option<NodeId>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let mut walk = self.root;
        while let Some(current) = walk {
            let node = self.arena.node(current);
            match key.cmp(node.key.borrow()) {
                Ordering::Less => walk = node.left,
                Ordering::Greater => walk = node.right,
                Ordering::Equal => return Some(current),
            }
        }
        None
    }

    /// Returns a reference to the value corresponding to the key.
    ///
    /// The key may be any borrowed form of the map's key type, as long as
    /// the ordering on the borrowed form matches the key type's.
    ///
    /// # Complexity
    ///
    /// O(log N)
    ///
    /// # Examples
    ///
    /// ```rust
    /// use baltree::ordered::BalancedMap;
    ///
    /// let mut map = BalancedMap::new();
    /// map.insert("hello".to_string(), 42);
    ///
    /// // Can use &str to look up String keys
    /// assert_eq!(map.get("hello"), Some(&42));
    /// assert_eq!(map.get("world"), None);
    /// ```
    #[must_use]
    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.locate(key).map(|id| &self.arena.node(id).value)
    }

    /// Returns a mutable reference to the value corresponding to the key.
    ///
    /// The key itself stays immutable; only the payload can be changed.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use baltree::ordered::BalancedMap;
    ///
    /// let mut map = BalancedMap::new();
    /// map.insert(1, 10);
    /// if let Some(value) = map.get_mut(&1) {
    ///     *value += 5;
    /// }
    /// assert_eq!(map.get(&1), Some(&15));
    /// ```
    #[must_use]
    pub fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.locate(key)
            .map(|id| &mut self.arena.node_mut(id).value)
    }

    /// Looks up a key, failing explicitly when it is absent.
    ///
    /// Unlike [`get`](Self::get), a miss is reported as a dedicated error
    /// value, so it can be propagated with `?` and can never be mistaken
    /// for a stored default. Lookups on an empty map fail the same way.
    ///
    /// # Errors
    ///
    /// Returns [`NotFoundError`] when no entry has the given key.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use baltree::ordered::{BalancedMap, NotFoundError};
    ///
    /// let mut map = BalancedMap::new();
    /// map.insert(1, "one");
    ///
    /// assert_eq!(map.search(&1), Ok(&"one"));
    /// assert_eq!(map.search(&2), Err(NotFoundError));
    /// ```
    pub fn search<Q>(&self, key: &Q) -> Result<&V, NotFoundError>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.get(key).ok_or(NotFoundError)
    }

    /// Returns `true` if the map contains a value for the specified key.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use baltree::ordered::BalancedMap;
    ///
    /// let mut map = BalancedMap::new();
    /// map.insert(1, "one");
    /// assert!(map.contains_key(&1));
    /// assert!(!map.contains_key(&2));
    /// ```
    #[must_use]
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.locate(key).is_some()
    }
}

// =============================================================================
// Diagnostic Rendering
// =============================================================================

impl<K: fmt::Display, V> BalancedMap<K, V> {
    /// Writes an indented rendering of the tree shape into `writer`.
    ///
    /// One key per line; the right subtree is printed above its node, the
    /// left subtree below, and each level of depth indents by two spaces.
    /// Read sideways (right edge up), the output shows the tree shape.
    /// The format is diagnostic only and carries no stability contract.
    ///
    /// # Errors
    ///
    /// Forwards any error from the underlying writer.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use baltree::ordered::BalancedMap;
    ///
    /// let mut map = BalancedMap::new();
    /// for key in [2, 1, 3] {
    ///     map.insert(key, ());
    /// }
    ///
    /// let mut rendered = String::new();
    /// map.render_into(&mut rendered).unwrap();
    /// assert_eq!(rendered, "  3\n2\n  1\n");
    /// ```
    pub fn render_into<W: fmt::Write>(&self, writer: &mut W) -> fmt::Result {
        let mut stack: SmallVec<[(NodeId, usize); 16]> = SmallVec::new();
        self.push_right_spine(&mut stack, self.root, 0);
        while let Some((current, depth)) = stack.pop() {
            let node = self.arena.node(current);
            for _ in 0..depth {
                writer.write_str("  ")?;
            }
            writeln!(writer, "{}", node.key)?;
            self.push_right_spine(&mut stack, node.left, depth + 1);
        }
        Ok(())
    }

    /// Returns the diagnostic rendering as a `String`.
    ///
    /// See [`render_into`](Self::render_into) for the format. The empty
    /// map renders as the empty string.
    #[must_use]
    pub fn render(&self) -> String {
        let mut rendered = String::new();
        // Writing into a String cannot fail.
        let _ = self.render_into(&mut rendered);
        rendered
    }

    /// Pushes `from` and its chain of right descendants, tracking depth.
    fn push_right_spine(
        &self,
        stack: &mut SmallVec<[(NodeId, usize); 16]>,
        from: Option<NodeId>,
        depth: usize,
    ) {
        let mut walk = from;
        let mut level = depth;
        while let Some(current) = walk {
            stack.push((current, level));
            walk = self.arena.node(current).right;
            level += 1;
        }
    }
}

/// Renders the indented diagnostic view of the tree.
///
/// Same output as [`BalancedMap::render`].
impl<K: fmt::Display, V> fmt::Display for BalancedMap<K, V> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.render_into(formatter)
    }
}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<K, V> Default for BalancedMap<K, V> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for BalancedMap<K, V> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_map()
            .entries(self.entries_in_order())
            .finish()
    }
}

impl<K: PartialEq, V: PartialEq> PartialEq for BalancedMap<K, V> {
    /// Two maps are equal when they hold the same entries, regardless of
    /// insertion order or internal tree shape.
    fn eq(&self, other: &Self) -> bool {
        self.length == other.length
            && self
                .entries_in_order()
                .into_iter()
                .zip(other.entries_in_order())
                .all(|(left, right)| left == right)
    }
}

impl<K: Eq, V: Eq> Eq for BalancedMap<K, V> {}

impl<K: Ord, V> FromIterator<(K, V)> for BalancedMap<K, V> {
    /// Builds a map by inserting every pair in iteration order.
    ///
    /// Because duplicate keys are rejected, the FIRST occurrence of a key
    /// wins and later occurrences are dropped.
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Self::new();
        map.extend(iter);
        map
    }
}

impl<K: Ord, V> Extend<(K, V)> for BalancedMap<K, V> {
    /// Inserts every pair in iteration order; keys already present in the
    /// map (or earlier in the iterator) keep their existing values.
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

impl<K, Q, V> Index<&Q> for BalancedMap<K, V>
where
    K: Ord + Borrow<Q>,
    Q: Ord + ?Sized,
{
    type Output = V;

    /// Lookup-only indexing: `map[&key]` never inserts.
    ///
    /// # Panics
    ///
    /// Panics if the key is not present in the map.
    fn index(&self, key: &Q) -> &V {
        self.get(key).expect("key not found in map")
    }
}

impl<K, Q, V> IndexMut<&Q> for BalancedMap<K, V>
where
    K: Ord + Borrow<Q>,
    Q: Ord + ?Sized,
{
    /// Mutable lookup-only indexing: `map[&key] = value` updates an
    /// EXISTING entry's payload and never inserts.
    ///
    /// # Panics
    ///
    /// Panics if the key is not present in the map.
    fn index_mut(&mut self, key: &Q) -> &mut V {
        self.get_mut(key).expect("key not found in map")
    }
}

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl<K, V> serde::Serialize for BalancedMap<K, V>
where
    K: serde::Serialize,
    V: serde::Serialize,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeMap;
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (key, value) in self.entries_in_order() {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

#[cfg(feature = "serde")]
struct BalancedMapVisitor<K, V> {
    key_marker: std::marker::PhantomData<K>,
    value_marker: std::marker::PhantomData<V>,
}

#[cfg(feature = "serde")]
impl<K, V> BalancedMapVisitor<K, V> {
    const fn new() -> Self {
        Self {
            key_marker: std::marker::PhantomData,
            value_marker: std::marker::PhantomData,
        }
    }
}

#[cfg(feature = "serde")]
impl<'de, K, V> serde::de::Visitor<'de> for BalancedMapVisitor<K, V>
where
    K: serde::Deserialize<'de> + Ord,
    V: serde::Deserialize<'de>,
{
    type Value = BalancedMap<K, V>;

    fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
        formatter.write_str("a map")
    }

    fn visit_map<A>(self, mut access: A) -> Result<Self::Value, A::Error>
    where
        A: serde::de::MapAccess<'de>,
    {
        // Sequential inserts; a duplicate key in the source keeps the
        // first occurrence, matching the map's insertion semantics.
        let mut map = BalancedMap::new();
        while let Some((key, value)) = access.next_entry()? {
            map.insert(key, value);
        }
        Ok(map)
    }
}

#[cfg(feature = "serde")]
impl<'de, K, V> serde::Deserialize<'de> for BalancedMap<K, V>
where
    K: serde::Deserialize<'de> + Ord,
    V: serde::Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_map(BalancedMapVisitor::new())
    }
}

// =============================================================================
// Tests
// =============================================================================
