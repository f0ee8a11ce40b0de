//! Local restructuring around a pivot.
//!
//! A rotation never recolors and never changes the in-order sequence. It is
//! only called from the fixup loop.

use crate::node::{NodeId, Side};
use crate::tracing_helpers::trace_log;

use super::OrderedTree;

impl<T, C> OrderedTree<T, C> {
    /// Rotate `x` down toward `dir`.
    ///
    /// The child of `x` on the opposite side (`y`) takes `x`'s place, `x`
    /// becomes `y`'s `dir` child, and `y`'s former `dir` subtree moves over to
    /// `x`. `rotate(x, Side::Left)` is the classic left rotation and
    /// `rotate(x, Side::Right)` its mirror.
    ///
    /// ```text
    ///      x                y
    ///     / \              / \
    ///    a   y     =>     x   c
    ///       / \          / \
    ///      b   c        a   b
    /// ```
    pub(super) fn rotate(&mut self, x: NodeId, dir: Side) {
        let up: Side = dir.opposite();
        let y: NodeId = self.arena.child(x, up);
        debug_assert!(!y.is_sentinel(), "rotation pivot needs a real child");

        trace_log!(pivot = ?x, child = ?y, dir = ?dir, "rotate");

        // y's inner subtree becomes x's outer child.
        let inner: NodeId = self.arena.child(y, dir);
        self.arena.set_child(x, up, inner);
        if !inner.is_sentinel() {
            self.arena.set_parent(inner, x);
        }

        // y replaces x under x's parent (or as root).
        let parent: NodeId = self.arena.parent(x);
        self.arena.set_parent(y, parent);
        if parent.is_sentinel() {
            self.root = y;
        } else {
            let slot: Side = self.arena.side_of(x);
            self.arena.set_child(parent, slot, y);
        }

        // x hangs under y.
        self.arena.set_child(y, dir, x);
        self.arena.set_parent(x, y);
    }
}
