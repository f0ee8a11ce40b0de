//! Insertion: descend to a sentinel, hang a red leaf there, then fix up.

use std::cmp::Ordering;

use crate::node::{NodeId, Side};
use crate::ordering::Comparator;
use crate::tracing_helpers::{trace_log, warn_log};

use super::{InsertError, OrderedTree};

impl<T, C: Comparator<T>> OrderedTree<T, C> {
    /// Insert `value` and return the id of its node.
    ///
    /// Never fails on duplicates: a value equal to an existing element is
    /// stored alongside it, to the right of the first equal node met during
    /// descent. Runs in O(log n).
    ///
    /// # Example
    ///
    /// ```
    /// use ordtree::OrderedTree;
    ///
    /// let mut tree = OrderedTree::new();
    /// for _ in 0..3 {
    ///     tree.insert(5);
    /// }
    ///
    /// assert_eq!(tree.len(), 3);
    /// assert_eq!(tree.count(&5), 3);
    /// ```
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(level = "trace", skip_all, fields(len = self.arena.len()))
    )]
    pub fn insert(&mut self, value: T) -> NodeId {
        let z: NodeId = self.arena.push(value);
        self.attach(z);

        debug_assert!(self.arena.color(self.root).is_black());
        z
    }

    /// Insert `value`, reporting allocation failure instead of aborting.
    ///
    /// # Errors
    ///
    /// Returns [`InsertError::AllocationFailed`] if the node storage cannot
    /// grow. The tree is left exactly as it was.
    pub fn try_insert(&mut self, value: T) -> Result<NodeId, InsertError> {
        if let Err(err) = self.arena.try_reserve_one() {
            warn_log!(len = self.arena.len(), "try_insert: reservation failed");
            return Err(InsertError::AllocationFailed(err));
        }

        // Capacity is reserved, so the pushes inside cannot reallocate.
        Ok(self.insert(value))
    }

    /// Link the detached node `z` under the correct leaf and rebalance.
    fn attach(&mut self, z: NodeId) {
        let mut parent: NodeId = NodeId::SENTINEL;
        let mut side: Side = Side::Left;
        let mut current: NodeId = self.root;

        while !current.is_sentinel() {
            parent = current;
            side = self.descend_side(z, current);
            current = self.arena.child(current, side);
        }

        self.arena.set_parent(z, parent);

        if parent.is_sentinel() {
            trace_log!(node = ?z, "insert: tree was empty, new root");
            self.root = z;
        } else {
            trace_log!(node = ?z, parent = ?parent, side = ?side, "insert: attached leaf");
            self.arena.set_child(parent, side, z);
        }

        self.insert_fixup(z);
    }

    /// Strictly-less goes left; equal or greater goes right.
    #[inline(always)]
    fn descend_side(&self, z: NodeId, against: NodeId) -> Side {
        match self
            .comparator
            .compare(self.arena.value(z), self.arena.value(against))
        {
            Ordering::Less => Side::Left,
            Ordering::Equal | Ordering::Greater => Side::Right,
        }
    }
}
