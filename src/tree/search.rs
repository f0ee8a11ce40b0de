//! Read-only descents. None of these touch colors or links.

use std::cmp::Ordering;

use crate::node::{NodeId, Side};
use crate::ordering::Comparator;

use super::{NodeRef, OrderedTree};

impl<T, C: Comparator<T>> OrderedTree<T, C> {
    /// Find a node whose value compares equal to `value`.
    ///
    /// Descends like [`insert`](Self::insert) and stops at the first equal
    /// node. Reaching the sentinel means not found. With duplicates present,
    /// which of the equal nodes is returned depends on the current shape.
    #[must_use]
    pub fn search(&self, value: &T) -> Option<NodeRef<'_, T, C>> {
        NodeRef::resolve(self, self.find(value))
    }

    /// Whether some element compares equal to `value`.
    #[must_use]
    #[inline(always)]
    pub fn contains(&self, value: &T) -> bool {
        !self.find(value).is_sentinel()
    }

    /// Reference to a stored element equal to `value`.
    #[must_use]
    pub fn get(&self, value: &T) -> Option<&T> {
        let id: NodeId = self.find(value);
        if id.is_sentinel() {
            None
        } else {
            Some(self.arena.value(id))
        }
    }

    /// Number of stored elements comparing equal to `value`.
    ///
    /// Equal elements are contiguous in order, but rotations can spread them
    /// across both subtrees of an equal node, so both sides are explored below
    /// every match. O(log n + k) for `k` matches.
    #[must_use]
    pub fn count(&self, value: &T) -> usize {
        let mut count: usize = 0;
        let mut stack: Vec<NodeId> = vec![self.root];

        while let Some(id) = stack.pop() {
            if id.is_sentinel() {
                continue;
            }

            match self.comparator.compare(value, self.arena.value(id)) {
                Ordering::Less => stack.push(self.arena.left(id)),
                Ordering::Greater => stack.push(self.arena.right(id)),
                Ordering::Equal => {
                    count += 1;
                    stack.push(self.arena.left(id));
                    stack.push(self.arena.right(id));
                }
            }
        }

        count
    }

    /// Descend toward `value`; returns the sentinel when absent.
    fn find(&self, value: &T) -> NodeId {
        let mut current: NodeId = self.root;

        while !current.is_sentinel() {
            match self.comparator.compare(value, self.arena.value(current)) {
                Ordering::Equal => return current,
                Ordering::Less => current = self.arena.left(current),
                Ordering::Greater => current = self.arena.right(current),
            }
        }

        current
    }
}

impl<T, C> OrderedTree<T, C> {
    /// Smallest element (leftmost node).
    #[must_use]
    pub fn first(&self) -> Option<&T> {
        self.extreme(Side::Left).map(|id: NodeId| self.arena.value(id))
    }

    /// Largest element (rightmost node). Among equal maxima this is the one
    /// inserted last.
    #[must_use]
    pub fn last(&self) -> Option<&T> {
        self.extreme(Side::Right).map(|id: NodeId| self.arena.value(id))
    }

    /// Follow `side` links from the root to the last real node.
    fn extreme(&self, side: Side) -> Option<NodeId> {
        if self.root.is_sentinel() {
            return None;
        }

        let mut current: NodeId = self.root;
        loop {
            let next: NodeId = self.arena.child(current, side);
            if next.is_sentinel() {
                return Some(current);
            }
            current = next;
        }
    }
}
