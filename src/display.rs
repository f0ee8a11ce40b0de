//! Human-readable dump of a tree: each element with its color, in order.

use std::fmt as StdFmt;

use crate::tree::OrderedTree;

/// [`Display`](StdFmt::Display) adapter returned by [`OrderedTree::dump`].
///
/// Renders `value(Color)` pairs in order, separated by single spaces.
pub struct Dump<'a, T, C> {
    tree: &'a OrderedTree<T, C>,
}

impl<T, C> OrderedTree<T, C> {
    /// Render the elements in order, each tagged with its node color.
    ///
    /// ```
    /// use ordtree::OrderedTree;
    ///
    /// let tree: OrderedTree<_> = [10, 20, 30].into_iter().collect();
    ///
    /// assert_eq!(tree.dump().to_string(), "10(Red) 20(Black) 30(Red)");
    /// ```
    #[must_use]
    pub const fn dump(&self) -> Dump<'_, T, C> {
        Dump { tree: self }
    }
}

impl<T: StdFmt::Display, C> StdFmt::Display for Dump<'_, T, C> {
    fn fmt(&self, f: &mut StdFmt::Formatter<'_>) -> StdFmt::Result {
        let arena = &self.tree.arena;

        for (i, id) in self.tree.in_order_ids().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}({})", arena.value(id), arena.color(id))?;
        }

        Ok(())
    }
}
