//! Node identity, color, and link layout.
//!
//! Nodes live in a [`NodeArena`](crate::arena::NodeArena) and refer to each
//! other by [`NodeId`]. Index 0 is reserved for the sentinel: every absent
//! parent or child is `NodeId::SENTINEL`, so the tree algorithms never branch
//! on `Option` when following a link.

use std::fmt as StdFmt;

// ============================================================================
//  Color
// ============================================================================

/// Node color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    /// Freshly inserted nodes start red.
    Red,
    /// The root and the sentinel are always black.
    Black,
}

impl Color {
    /// Returns `true` for [`Color::Red`].
    #[must_use]
    #[inline(always)]
    pub const fn is_red(self) -> bool {
        matches!(self, Self::Red)
    }

    /// Returns `true` for [`Color::Black`].
    #[must_use]
    #[inline(always)]
    pub const fn is_black(self) -> bool {
        matches!(self, Self::Black)
    }
}

impl StdFmt::Display for Color {
    fn fmt(&self, f: &mut StdFmt::Formatter<'_>) -> StdFmt::Result {
        match self {
            Self::Red => f.write_str("Red"),
            Self::Black => f.write_str("Black"),
        }
    }
}

// ============================================================================
//  Side
// ============================================================================

/// Which child slot of a parent a node occupies.
///
/// The rotation and fixup code is written once in terms of `Side` and run
/// with `Left`/`Right` swapped for the mirror case.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Side {
    Left,
    Right,
}

impl Side {
    #[must_use]
    #[inline(always)]
    pub(crate) const fn opposite(self) -> Self {
        match self {
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }
}

// ============================================================================
//  NodeId
// ============================================================================

/// Stable index of a node inside its tree.
///
/// Ids are assigned in insertion order starting at 1 and never change, even
/// when rotations move the node around. An id is only meaningful for the tree
/// that returned it.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(usize);

impl NodeId {
    /// The shared sentinel slot. Never handed out by the public API as a
    /// valid node.
    pub(crate) const SENTINEL: Self = Self(0);

    #[inline(always)]
    pub(crate) const fn from_index(index: usize) -> Self {
        Self(index)
    }

    /// Raw arena index of this node.
    #[must_use]
    #[inline(always)]
    pub const fn index(self) -> usize {
        self.0
    }

    #[inline(always)]
    pub(crate) const fn is_sentinel(self) -> bool {
        self.0 == Self::SENTINEL.0
    }
}

impl StdFmt::Debug for NodeId {
    fn fmt(&self, f: &mut StdFmt::Formatter<'_>) -> StdFmt::Result {
        if self.is_sentinel() {
            f.write_str("NodeId(nil)")
        } else {
            write!(f, "NodeId({})", self.0)
        }
    }
}

// ============================================================================
//  Links
// ============================================================================

/// Structural half of a node: color plus the three relations.
///
/// The value half is stored separately by the arena so that the sentinel slot
/// carries links but no value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Links {
    pub(crate) color: Color,
    pub(crate) parent: NodeId,
    pub(crate) left: NodeId,
    pub(crate) right: NodeId,
}

impl Links {
    /// Links of the sentinel slot.
    pub(crate) const SENTINEL: Self = Self {
        color: Color::Black,
        parent: NodeId::SENTINEL,
        left: NodeId::SENTINEL,
        right: NodeId::SENTINEL,
    };

    /// Links of a freshly created node: red, both children and parent nil.
    pub(crate) const LEAF: Self = Self {
        color: Color::Red,
        parent: NodeId::SENTINEL,
        left: NodeId::SENTINEL,
        right: NodeId::SENTINEL,
    };

    #[inline(always)]
    pub(crate) const fn child(&self, side: Side) -> NodeId {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }

    #[inline(always)]
    pub(crate) const fn child_mut(&mut self, side: Side) -> &mut NodeId {
        match side {
            Side::Left => &mut self.left,
            Side::Right => &mut self.right,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_predicates() {
        assert!(Color::Red.is_red());
        assert!(!Color::Red.is_black());
        assert!(Color::Black.is_black());
        assert!(!Color::Black.is_red());
    }

    #[test]
    fn test_color_display() {
        assert_eq!(Color::Red.to_string(), "Red");
        assert_eq!(Color::Black.to_string(), "Black");
    }

    #[test]
    fn test_side_opposite() {
        assert_eq!(Side::Left.opposite(), Side::Right);
        assert_eq!(Side::Right.opposite(), Side::Left);
    }

    #[test]
    fn test_sentinel_id() {
        assert!(NodeId::SENTINEL.is_sentinel());
        assert!(!NodeId::from_index(1).is_sentinel());
        assert_eq!(format!("{:?}", NodeId::SENTINEL), "NodeId(nil)");
        assert_eq!(format!("{:?}", NodeId::from_index(3)), "NodeId(3)");
    }

    #[test]
    fn test_links_child_access() {
        let mut links = Links::LEAF;
        assert_eq!(links.color, Color::Red);

        *links.child_mut(Side::Left) = NodeId::from_index(4);
        *links.child_mut(Side::Right) = NodeId::from_index(5);

        assert_eq!(links.child(Side::Left), NodeId::from_index(4));
        assert_eq!(links.child(Side::Right), NodeId::from_index(5));
        assert_eq!(Links::SENTINEL.color, Color::Black);
    }
}
