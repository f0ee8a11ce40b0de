//! `OrderedTree` - an arena-backed red-black tree.
//!
//! This module provides the main [`OrderedTree<T, C>`] type. The algorithms
//! live in submodules:
//!
//! - `insert` - descent and attachment of a new red leaf
//! - `rotate` - the single mirrored rotation primitive
//! - `fixup` - recoloring/rotation cases that restore the invariants
//! - `search` - read-only descents (search, count, min/max)
//! - `handle` - [`NodeRef`], a borrowed view of one node

use std::collections::TryReserveError;
use std::fmt as StdFmt;

use crate::arena::NodeArena;
use crate::node::{Color, NodeId};
use crate::ordering::{Comparator, NaturalOrder};
use crate::tracing_helpers::debug_log;

mod fixup;
mod handle;
mod insert;
mod rotate;
mod search;

pub use handle::NodeRef;

// ============================================================================
//  InsertError
// ============================================================================

/// Errors that can occur during [`OrderedTree::try_insert`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InsertError {
    /// The arena could not grow to hold one more node.
    /// The tree was not modified.
    AllocationFailed(TryReserveError),
}

impl StdFmt::Display for InsertError {
    fn fmt(&self, f: &mut StdFmt::Formatter<'_>) -> StdFmt::Result {
        match self {
            Self::AllocationFailed(_) => write!(f, "node allocation failed"),
        }
    }
}

impl std::error::Error for InsertError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::AllocationFailed(err) => Some(err),
        }
    }
}

// ============================================================================
//  OrderedTree
// ============================================================================

/// A red-black tree ordered by a comparator fixed at construction.
///
/// Equal elements are all kept (multiset semantics): an element that compares
/// equal to a node during descent is routed to that node's right subtree.
///
/// # Type Parameters
///
/// - `T` - The element type
/// - `C` - The [`Comparator`] used for every descent (defaults to [`NaturalOrder`])
///
/// # Example
///
/// ```
/// use ordtree::OrderedTree;
///
/// let mut tree = OrderedTree::new();
/// for v in [10, 20, 30] {
///     tree.insert(v);
/// }
///
/// assert_eq!(tree.root().map(|r| *r.value()), Some(20));
/// assert!(tree.search(&20).is_some());
/// assert!(tree.search(&25).is_none());
/// assert_eq!(tree.iter().copied().collect::<Vec<_>>(), [10, 20, 30]);
/// ```
#[derive(Clone)]
pub struct OrderedTree<T, C = NaturalOrder> {
    /// Owns every node. Slot 0 is the sentinel.
    pub(crate) arena: NodeArena<T>,

    /// Root node, or the sentinel when empty.
    pub(crate) root: NodeId,

    /// Total order used by every descent.
    pub(crate) comparator: C,
}

impl<T: Ord> OrderedTree<T> {
    /// Create an empty tree ordered by `T`'s [`Ord`] implementation.
    #[must_use]
    pub fn new() -> Self {
        Self::with_comparator(NaturalOrder)
    }

    /// Create an empty tree with room for `capacity` elements.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_capacity_and_comparator(capacity, NaturalOrder)
    }
}

impl<T: Ord> Default for OrderedTree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, C: Comparator<T>> OrderedTree<T, C> {
    /// Create an empty tree ordered by `comparator`.
    #[must_use]
    pub fn with_comparator(comparator: C) -> Self {
        Self::with_capacity_and_comparator(0, comparator)
    }

    /// Create an empty tree ordered by `comparator` with room for `capacity`
    /// elements.
    #[must_use]
    pub fn with_capacity_and_comparator(capacity: usize, comparator: C) -> Self {
        debug_log!(capacity, "OrderedTree: created");

        Self {
            arena: NodeArena::with_capacity(capacity),
            root: NodeId::SENTINEL,
            comparator,
        }
    }
}

impl<T, C> OrderedTree<T, C> {
    /// The comparator this tree was built with.
    #[must_use]
    #[inline(always)]
    pub const fn comparator(&self) -> &C {
        &self.comparator
    }

    /// Number of stored elements, duplicates included.
    #[must_use]
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.arena.len()
    }

    /// Whether the tree holds no elements.
    #[must_use]
    #[inline(always)]
    pub const fn is_empty(&self) -> bool {
        self.root.is_sentinel()
    }

    /// Handle to the root node, or `None` when the tree is empty.
    #[must_use]
    pub fn root(&self) -> Option<NodeRef<'_, T, C>> {
        NodeRef::resolve(self, self.root)
    }

    /// Re-resolve a [`NodeId`] previously returned by this tree.
    ///
    /// Returns `None` for ids this tree never issued. Ids stay valid until
    /// [`clear`](Self::clear).
    #[must_use]
    pub fn node(&self, id: NodeId) -> Option<NodeRef<'_, T, C>> {
        if self.arena.contains(id) {
            NodeRef::resolve(self, id)
        } else {
            None
        }
    }

    /// Number of nodes on the longest root-to-leaf path (0 when empty).
    #[must_use]
    pub fn height(&self) -> usize {
        let mut max_depth: usize = 0;
        let mut stack: Vec<(NodeId, usize)> = Vec::new();

        if !self.root.is_sentinel() {
            stack.push((self.root, 1));
        }

        while let Some((id, depth)) = stack.pop() {
            max_depth = max_depth.max(depth);

            for child in [self.arena.left(id), self.arena.right(id)] {
                if !child.is_sentinel() {
                    stack.push((child, depth + 1));
                }
            }
        }

        max_depth
    }

    /// Black-height of the root: black nodes on the path from the root down to
    /// a sentinel, counting the sentinel and excluding the root itself.
    ///
    /// Returns 0 for an empty tree. Every path gives the same count, so the
    /// leftmost one is walked.
    #[must_use]
    pub fn black_height(&self) -> usize {
        if self.root.is_sentinel() {
            return 0;
        }

        // The sentinel at the end of the walk is black.
        let mut count: usize = 1;
        let mut current: NodeId = self.arena.left(self.root);

        while !current.is_sentinel() {
            if self.arena.color(current).is_black() {
                count += 1;
            }
            current = self.arena.left(current);
        }

        count
    }

    /// Remove every element. Previously issued [`NodeId`]s become invalid.
    pub fn clear(&mut self) {
        debug_log!(len = self.arena.len(), "OrderedTree: cleared");

        self.arena.clear();
        self.root = NodeId::SENTINEL;
    }

    /// Color of the root, or `None` when empty.
    #[must_use]
    pub fn root_color(&self) -> Option<Color> {
        if self.root.is_sentinel() {
            None
        } else {
            Some(self.arena.color(self.root))
        }
    }
}

impl<T: StdFmt::Debug, C> StdFmt::Debug for OrderedTree<T, C> {
    fn fmt(&self, f: &mut StdFmt::Formatter<'_>) -> StdFmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T, C: Comparator<T>> Extend<T> for OrderedTree<T, C> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<T: Ord> FromIterator<T> for OrderedTree<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let iter = iter.into_iter();
        let mut tree: Self = Self::with_capacity(iter.size_hint().0);
        tree.extend(iter);
        tree
    }
}

// ============================================================================
//  Tests
// ============================================================================
