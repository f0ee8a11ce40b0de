//! Index arena that owns every node of an [`OrderedTree`](crate::OrderedTree).
//!
//! Nodes are never freed individually (there is no delete), so the arena is a
//! pair of append-only vectors:
//!
//! - `links[i]` holds color and parent/left/right of node `i`. Slot 0 is the
//!   sentinel.
//! - `values[i - 1]` holds the value of node `i`. The sentinel has no value
//!   slot at all, so there is nothing for a comparison to accidentally read.
//!
//! Parent links are plain indices, never ownership edges. Ownership of every
//! value sits with the arena, which is dropped with the tree.

use std::collections::TryReserveError;

use crate::node::{Color, Links, NodeId, Side};

/// Append-only node storage with a reserved sentinel slot.
#[derive(Debug, Clone)]
pub(crate) struct NodeArena<T> {
    links: Vec<Links>,
    values: Vec<T>,
}

impl<T> NodeArena<T> {
    /// Create an arena with room for `capacity` nodes besides the sentinel.
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        let mut links: Vec<Links> = Vec::with_capacity(capacity.saturating_add(1));
        links.push(Links::SENTINEL);

        Self {
            links,
            values: Vec::with_capacity(capacity),
        }
    }

    /// Number of real (non-sentinel) nodes.
    #[inline(always)]
    pub(crate) fn len(&self) -> usize {
        self.values.len()
    }

    /// Make room for one more node without allocating inside [`push`](Self::push).
    ///
    /// # Errors
    ///
    /// Returns the allocator's error if either vector cannot grow. Nothing is
    /// modified in that case.
    pub(crate) fn try_reserve_one(&mut self) -> Result<(), TryReserveError> {
        self.links.try_reserve(1)?;
        self.values.try_reserve(1)?;
        Ok(())
    }

    /// Store `value` as a detached red node and return its id.
    pub(crate) fn push(&mut self, value: T) -> NodeId {
        let id: NodeId = NodeId::from_index(self.links.len());
        self.links.push(Links::LEAF);
        self.values.push(value);

        debug_assert_eq!(self.links.len(), self.values.len() + 1);
        id
    }

    /// Drop every node, keeping the sentinel and the allocations.
    pub(crate) fn clear(&mut self) {
        self.links.truncate(1);
        self.values.clear();
    }

    /// Whether `id` names a real node of this arena.
    #[inline(always)]
    pub(crate) fn contains(&self, id: NodeId) -> bool {
        !id.is_sentinel() && id.index() < self.links.len()
    }

    // ========================================================================
    //  Link access
    // ========================================================================

    #[inline(always)]
    pub(crate) fn links(&self, id: NodeId) -> &Links {
        &self.links[id.index()]
    }

    #[inline(always)]
    fn links_mut(&mut self, id: NodeId) -> &mut Links {
        debug_assert!(!id.is_sentinel(), "sentinel links are never written");
        &mut self.links[id.index()]
    }

    /// Color of `id`. The sentinel always reads black.
    #[inline(always)]
    pub(crate) fn color(&self, id: NodeId) -> Color {
        if id.is_sentinel() {
            return Color::Black;
        }
        self.links[id.index()].color
    }

    /// Recolor a real node. The sentinel is fixed black and never repainted.
    #[inline(always)]
    pub(crate) fn set_color(&mut self, id: NodeId, color: Color) {
        if id.is_sentinel() {
            debug_assert!(color.is_black(), "attempted to paint the sentinel red");
            return;
        }
        self.links[id.index()].color = color;
    }

    #[inline(always)]
    pub(crate) fn parent(&self, id: NodeId) -> NodeId {
        self.links(id).parent
    }

    #[inline(always)]
    pub(crate) fn set_parent(&mut self, id: NodeId, parent: NodeId) {
        self.links_mut(id).parent = parent;
    }

    #[inline(always)]
    pub(crate) fn child(&self, id: NodeId, side: Side) -> NodeId {
        self.links(id).child(side)
    }

    #[inline(always)]
    pub(crate) fn set_child(&mut self, id: NodeId, side: Side, child: NodeId) {
        *self.links_mut(id).child_mut(side) = child;
    }

    #[inline(always)]
    pub(crate) fn left(&self, id: NodeId) -> NodeId {
        self.links(id).left
    }

    #[inline(always)]
    pub(crate) fn right(&self, id: NodeId) -> NodeId {
        self.links(id).right
    }

    /// Which side of its parent `id` hangs from.
    ///
    /// Only meaningful for nodes with a real parent.
    #[inline(always)]
    pub(crate) fn side_of(&self, id: NodeId) -> Side {
        let parent: NodeId = self.parent(id);
        if self.left(parent) == id {
            Side::Left
        } else {
            Side::Right
        }
    }

    // ========================================================================
    //  Value access
    // ========================================================================

    /// Value of a real node.
    ///
    /// Callers guarantee `id` is not the sentinel; the descent loops stop
    /// before reaching it.
    #[inline(always)]
    pub(crate) fn value(&self, id: NodeId) -> &T {
        debug_assert!(!id.is_sentinel(), "the sentinel carries no value");
        &self.values[id.index() - 1]
    }

    /// Move every value out, ordered by the given id sequence.
    ///
    /// `order` must name each real node exactly once.
    pub(crate) fn into_values_ordered(self, order: &[NodeId]) -> Vec<T> {
        let mut slots: Vec<Option<T>> = self.values.into_iter().map(Some).collect();

        order
            .iter()
            .filter_map(|id: &NodeId| slots.get_mut(id.index() - 1).and_then(Option::take))
            .collect()
    }
}
