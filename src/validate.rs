//! Structural invariant checker.
//!
//! [`OrderedTree::validate`] walks the whole tree and reports the first broken
//! invariant. It is O(n) and meant for tests, fuzzing, and debug assertions in
//! callers, not for hot paths.

use std::cmp::Ordering;
use std::fmt as StdFmt;

use crate::node::{Color, NodeId, Side};
use crate::ordering::Comparator;
use crate::tree::OrderedTree;

// ============================================================================
//  InvariantViolation
// ============================================================================

/// A broken red-black or linkage invariant, with the node where it was found.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvariantViolation {
    /// The root is red.
    RedRoot,

    /// The sentinel slot was repainted red.
    RedSentinel,

    /// A red node has a red child.
    RedRedEdge {
        /// The red parent.
        parent: NodeId,
        /// Its red child.
        child: NodeId,
    },

    /// Two sentinel-terminated paths disagree on the number of black nodes.
    BlackHeightMismatch {
        /// Node whose sentinel child ended the offending path.
        node: NodeId,
        /// Black-height of the first path seen.
        expected: usize,
        /// Black-height of this path.
        found: usize,
    },

    /// In-order traversal is not non-decreasing at this node.
    OutOfOrder {
        /// The node that compares less than its in-order predecessor.
        node: NodeId,
    },

    /// A child's parent link does not point back, or the root has a parent.
    BrokenParentLink {
        /// The node whose parent link is wrong.
        node: NodeId,
    },

    /// The number of reachable nodes differs from the number stored.
    LengthMismatch {
        /// Nodes reachable from the root.
        reachable: usize,
        /// Nodes owned by the tree.
        stored: usize,
    },
}

impl StdFmt::Display for InvariantViolation {
    fn fmt(&self, f: &mut StdFmt::Formatter<'_>) -> StdFmt::Result {
        match self {
            Self::RedRoot => write!(f, "root is red"),

            Self::RedSentinel => write!(f, "sentinel is red"),

            Self::RedRedEdge { parent, child } => {
                write!(f, "red node {parent:?} has red child {child:?}")
            }

            Self::BlackHeightMismatch {
                node,
                expected,
                found,
            } => write!(
                f,
                "black-height {found} below {node:?} differs from {expected}"
            ),

            Self::OutOfOrder { node } => {
                write!(f, "{node:?} is out of order with its predecessor")
            }

            Self::BrokenParentLink { node } => {
                write!(f, "parent link of {node:?} is inconsistent")
            }

            Self::LengthMismatch { reachable, stored } => {
                write!(f, "{reachable} nodes reachable but {stored} stored")
            }
        }
    }
}

impl std::error::Error for InvariantViolation {}

// ============================================================================
//  TreeStats
// ============================================================================

/// Shape summary returned by a successful [`OrderedTree::validate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TreeStats {
    /// Number of elements.
    pub len: usize,
    /// Nodes on the longest root-to-leaf path.
    pub height: usize,
    /// Black nodes from below the root down to a sentinel, sentinel included.
    pub black_height: usize,
    /// Number of red nodes.
    pub red_nodes: usize,
}

// ============================================================================
//  Validation
// ============================================================================

impl<T, C: Comparator<T>> OrderedTree<T, C> {
    /// Check every structural invariant.
    ///
    /// - the root and the sentinel are black
    /// - no red node has a red child
    /// - every root-to-sentinel path has the same black-height
    /// - in-order traversal is non-decreasing under the comparator
    /// - parent and child links agree, and every stored node is reachable
    ///
    /// # Errors
    ///
    /// Returns the first [`InvariantViolation`] found.
    pub fn validate(&self) -> Result<TreeStats, InvariantViolation> {
        if self.arena.links(NodeId::SENTINEL).color.is_red() {
            return Err(InvariantViolation::RedSentinel);
        }

        if self.root.is_sentinel() {
            return self.check_length(0).map(|()| TreeStats::default());
        }

        if self.arena.color(self.root).is_red() {
            return Err(InvariantViolation::RedRoot);
        }
        if !self.arena.parent(self.root).is_sentinel() {
            return Err(InvariantViolation::BrokenParentLink { node: self.root });
        }

        let mut stats: TreeStats = self.check_structure()?;
        self.check_length(stats.len)?;
        self.check_order()?;

        stats.black_height = stats.black_height.saturating_sub(1);
        Ok(stats)
    }

    /// Depth-first walk checking colors, black-heights, and back-links.
    ///
    /// The returned `black_height` still counts the root.
    fn check_structure(&self) -> Result<TreeStats, InvariantViolation> {
        let mut stats: TreeStats = TreeStats::default();
        let mut expected_black: Option<usize> = None;

        // (node, black nodes on the path above it, depth)
        let mut stack: Vec<(NodeId, usize, usize)> = vec![(self.root, 0, 1)];

        while let Some((id, blacks_above, depth)) = stack.pop() {
            let color: Color = self.arena.color(id);
            let blacks: usize = blacks_above + usize::from(color.is_black());

            stats.len += 1;
            if stats.len > self.arena.len() {
                // More visits than nodes: the links form a cycle.
                return Err(InvariantViolation::LengthMismatch {
                    reachable: stats.len,
                    stored: self.arena.len(),
                });
            }
            stats.height = stats.height.max(depth);
            if color.is_red() {
                stats.red_nodes += 1;
            }

            for side in [Side::Left, Side::Right] {
                let child: NodeId = self.arena.child(id, side);

                if child.is_sentinel() {
                    // The sentinel itself is one more black node.
                    let found: usize = blacks + 1;
                    match expected_black {
                        None => expected_black = Some(found),
                        Some(expected) if expected != found => {
                            return Err(InvariantViolation::BlackHeightMismatch {
                                node: id,
                                expected,
                                found,
                            });
                        }
                        Some(_) => {}
                    }
                    continue;
                }

                if self.arena.parent(child) != id {
                    return Err(InvariantViolation::BrokenParentLink { node: child });
                }
                if color.is_red() && self.arena.color(child).is_red() {
                    return Err(InvariantViolation::RedRedEdge { parent: id, child });
                }

                stack.push((child, blacks, depth + 1));
            }
        }

        stats.black_height = expected_black.unwrap_or(0);
        Ok(stats)
    }

    fn check_length(&self, reachable: usize) -> Result<(), InvariantViolation> {
        let stored: usize = self.arena.len();
        if reachable == stored {
            Ok(())
        } else {
            Err(InvariantViolation::LengthMismatch { reachable, stored })
        }
    }

    fn check_order(&self) -> Result<(), InvariantViolation> {
        let mut prev: Option<NodeId> = None;

        for id in self.in_order_ids() {
            if let Some(p) = prev {
                let ordering: Ordering = self
                    .comparator
                    .compare(self.arena.value(p), self.arena.value(id));
                if ordering == Ordering::Greater {
                    return Err(InvariantViolation::OutOfOrder { node: id });
                }
            }
            prev = Some(id);
        }

        Ok(())
    }
}
