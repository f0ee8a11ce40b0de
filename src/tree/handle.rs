//! `NodeRef` - a borrowed, read-only view of one node.

use std::fmt as StdFmt;

use crate::node::{Color, NodeId};

use super::OrderedTree;

/// Handle to a real node of an [`OrderedTree`].
///
/// Borrows the tree, so it cannot outlive the next `insert`. Navigation
/// returns `None` where the node links to the sentinel.
pub struct NodeRef<'a, T, C> {
    tree: &'a OrderedTree<T, C>,
    id: NodeId,
}

impl<'a, T, C> NodeRef<'a, T, C> {
    /// Wrap `id`, mapping the sentinel to `None`.
    #[inline(always)]
    pub(super) const fn resolve(tree: &'a OrderedTree<T, C>, id: NodeId) -> Option<Self> {
        if id.is_sentinel() {
            None
        } else {
            Some(Self { tree, id })
        }
    }

    /// Stable id of this node.
    #[must_use]
    #[inline(always)]
    pub const fn id(&self) -> NodeId {
        self.id
    }

    /// The stored value.
    #[must_use]
    #[inline(always)]
    pub fn value(&self) -> &'a T {
        self.tree.arena.value(self.id)
    }

    /// Current color. Rotations do not change it, fixups may.
    #[must_use]
    #[inline(always)]
    pub fn color(&self) -> Color {
        self.tree.arena.color(self.id)
    }

    /// Parent node, `None` at the root.
    #[must_use]
    pub fn parent(&self) -> Option<Self> {
        Self::resolve(self.tree, self.tree.arena.parent(self.id))
    }

    /// Left child.
    #[must_use]
    pub fn left(&self) -> Option<Self> {
        Self::resolve(self.tree, self.tree.arena.left(self.id))
    }

    /// Right child.
    #[must_use]
    pub fn right(&self) -> Option<Self> {
        Self::resolve(self.tree, self.tree.arena.right(self.id))
    }

    /// Whether this node is the root of its tree.
    #[must_use]
    #[inline(always)]
    pub fn is_root(&self) -> bool {
        self.tree.root == self.id
    }
}

impl<T, C> Clone for NodeRef<'_, T, C> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T, C> Copy for NodeRef<'_, T, C> {}

impl<T, C> PartialEq for NodeRef<'_, T, C> {
    /// Identity comparison: same tree, same node.
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.tree, other.tree) && self.id == other.id
    }
}

impl<T, C> Eq for NodeRef<'_, T, C> {}

impl<T: StdFmt::Debug, C> StdFmt::Debug for NodeRef<'_, T, C> {
    fn fmt(&self, f: &mut StdFmt::Formatter<'_>) -> StdFmt::Result {
        f.debug_struct("NodeRef")
            .field("id", &self.id)
            .field("value", self.value())
            .field("color", &self.color())
            .finish()
    }
}
