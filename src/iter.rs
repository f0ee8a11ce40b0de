//! In-order iteration.
//!
//! Traversal keeps an explicit stack of pending ancestors instead of
//! recursing, so a tree of any shape is walked in O(height) extra space.
//! Each call to [`OrderedTree::iter`] starts a fresh walk.

use std::iter::FusedIterator;

use crate::arena::NodeArena;
use crate::node::NodeId;
use crate::tree::OrderedTree;

// ============================================================================
//  InOrderIds
// ============================================================================

/// In-order walk over node ids. Shared by the value iterators and the
/// invariant checker.
#[derive(Debug, Clone)]
pub(crate) struct InOrderIds<'a, T> {
    arena: &'a NodeArena<T>,
    /// Nodes whose left subtree is done or being walked, deepest on top.
    stack: Vec<NodeId>,
    remaining: usize,
}

impl<'a, T> InOrderIds<'a, T> {
    pub(crate) fn new(arena: &'a NodeArena<T>, root: NodeId) -> Self {
        let mut iter: Self = Self {
            arena,
            stack: Vec::new(),
            remaining: arena.len(),
        };
        iter.push_left_spine(root);
        iter
    }

    fn push_left_spine(&mut self, mut id: NodeId) {
        while !id.is_sentinel() {
            self.stack.push(id);
            id = self.arena.left(id);
        }
    }
}

impl<T> Iterator for InOrderIds<'_, T> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        let id: NodeId = self.stack.pop()?;
        self.push_left_spine(self.arena.right(id));
        self.remaining = self.remaining.saturating_sub(1);
        Some(id)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

// ============================================================================
//  Iter
// ============================================================================

/// Borrowing in-order iterator over the elements of an [`OrderedTree`].
///
/// Created by [`OrderedTree::iter`]. Yields elements in non-decreasing order;
/// equal elements appear in insertion order.
#[derive(Debug, Clone)]
pub struct Iter<'a, T> {
    ids: InOrderIds<'a, T>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<&'a T> {
        let arena: &'a NodeArena<T> = self.ids.arena;
        self.ids.next().map(|id: NodeId| arena.value(id))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.ids.size_hint()
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

// ============================================================================
//  IntoIter
// ============================================================================

/// Owning in-order iterator, created by [`OrderedTree::into_iter`].
#[derive(Debug)]
pub struct IntoIter<T> {
    inner: std::vec::IntoIter<T>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<T> {
        self.inner.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    #[inline]
    fn next_back(&mut self) -> Option<T> {
        self.inner.next_back()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}

// ============================================================================
//  OrderedTree entry points
// ============================================================================

impl<T, C> OrderedTree<T, C> {
    /// Iterate over the elements in order.
    ///
    /// Lazy and restartable: every call begins a new walk from the root.
    ///
    /// # Example
    ///
    /// ```
    /// use ordtree::OrderedTree;
    ///
    /// let tree: OrderedTree<_> = [3, 1, 2, 1].into_iter().collect();
    ///
    /// assert_eq!(tree.iter().copied().collect::<Vec<_>>(), [1, 1, 2, 3]);
    /// assert_eq!(tree.iter().len(), 4);
    /// ```
    #[must_use]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            ids: self.in_order_ids(),
        }
    }

    pub(crate) fn in_order_ids(&self) -> InOrderIds<'_, T> {
        InOrderIds::new(&self.arena, self.root)
    }
}

impl<'a, T, C> IntoIterator for &'a OrderedTree<T, C> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

impl<T, C> IntoIterator for OrderedTree<T, C> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    /// Consume the tree, yielding elements in order.
    fn into_iter(self) -> IntoIter<T> {
        let order: Vec<NodeId> = self.in_order_ids().collect();
        IntoIter {
            inner: self.arena.into_values_ordered(&order).into_iter(),
        }
    }
}
