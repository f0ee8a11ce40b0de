//! Post-insertion rebalancing.
//!
//! Entered with `z` freshly attached and red. On every loop iteration `z` is
//! red and the only red-red edge in the tree is `z -- parent(z)`. The branch
//! where the parent is a left child and its mirror are the same code run
//! with [`Side`] swapped:
//!
//! | Case | Uncle | Shape | Action |
//! |------|-------|-------|--------|
//! | A | red | any | recolor parent/uncle black, grandparent red, move `z` up two levels |
//! | B | black | triangle (`z` on the inner side) | rotate parent outward, continue as C |
//! | C | black | line (`z` on the outer side) | recolor, rotate grandparent the other way, done |
//!
//! Only case A repeats, and it climbs two levels each time, so the loop is
//! O(log n) with at most two rotations overall.

use crate::node::{Color, NodeId, Side};
use crate::tracing_helpers::trace_log;

use super::OrderedTree;

impl<T, C> OrderedTree<T, C> {
    /// Restore the red-black invariants after `z` was attached as a red leaf.
    pub(super) fn insert_fixup(&mut self, mut z: NodeId) {
        // A red parent is never the root, so the grandparent is real.
        while self.arena.color(self.arena.parent(z)).is_red() {
            let parent: NodeId = self.arena.parent(z);
            let grandparent: NodeId = self.arena.parent(parent);
            let parent_side: Side = self.arena.side_of(parent);
            let uncle: NodeId = self.arena.child(grandparent, parent_side.opposite());

            if self.arena.color(uncle).is_red() {
                trace_log!(node = ?z, uncle = ?uncle, side = ?parent_side, "fixup: case A (red uncle)");

                self.arena.set_color(parent, Color::Black);
                self.arena.set_color(uncle, Color::Black);
                self.arena.set_color(grandparent, Color::Red);
                z = grandparent;
                continue;
            }

            if self.arena.side_of(z) != parent_side {
                trace_log!(node = ?z, side = ?parent_side, "fixup: case B (triangle)");

                z = parent;
                self.rotate(z, parent_side);
            }

            trace_log!(node = ?z, side = ?parent_side, "fixup: case C (line)");

            let parent: NodeId = self.arena.parent(z);
            let grandparent: NodeId = self.arena.parent(parent);
            self.arena.set_color(parent, Color::Black);
            self.arena.set_color(grandparent, Color::Red);
            self.rotate(grandparent, parent_side.opposite());
        }

        self.arena.set_color(self.root, Color::Black);
    }
}
