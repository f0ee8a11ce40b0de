//! # `ordtree`
//!
//! An ordered multiset built on a red-black tree.
//!
//! - O(log n) worst-case insert and search, height at most `2 * log2(n + 1)`
//! - Duplicates are kept: an element equal to an existing one goes to its right
//! - Lazy in-order iteration, equal elements in insertion order
//! - Ordering is a [`Comparator`] value fixed when the tree is built
//!
//! ## Status
//!
//! | Feature | Status |
//! |---------|--------|
//! | Insert | Works (with fallible `try_insert`) |
//! | Search / count / min / max | Works |
//! | In-order iteration | Works (borrowing and owning) |
//! | Invariant checking | Works (`validate`) |
//! | Deletion | Not implemented |
//! | Range queries | Not implemented |
//!
//! ## Design
//!
//! All nodes live in an arena owned by the tree and refer to each other by
//! index. Index 0 is a sentinel that stands for every missing parent or child,
//! is permanently black, and holds no value. The algorithms therefore follow
//! links and read colors without ever checking for "no node".
//!
//! ```text
//! OrderedTree
//! ├── root: NodeId ──────────────┐
//! └── arena                      ▼
//!     links:  [nil] [1] [2] [3] ...   color + parent/left/right
//!     values:       [1] [2] [3] ...   one per real node
//! ```
//!
//! ## Thread Safety
//!
//! Not internally synchronized. `OrderedTree<T, C>` is `Send`/`Sync` when `T`
//! and `C` are; mutation needs `&mut self`, so sharing across threads requires
//! the caller's own lock.
//!
//! ## Example
//!
//! ```rust
//! use ordtree::OrderedTree;
//!
//! let mut tree = OrderedTree::new();
//! for v in [5, 1, 4, 1, 3] {
//!     tree.insert(v);
//! }
//!
//! assert_eq!(tree.len(), 5);
//! assert_eq!(tree.count(&1), 2);
//! assert!(tree.search(&2).is_none());
//! assert_eq!(tree.iter().copied().collect::<Vec<_>>(), [1, 1, 3, 4, 5]);
//! tree.validate().expect("red-black invariants hold");
//! ```
//!
//! ## Feature Flags
//!
//! - `tracing` - emit fixup and rotation events through the `tracing` crate

#![deny(missing_docs)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
// Hot-path accessors are forced inline.
#![allow(clippy::inline_always)]

mod arena;
mod tracing_helpers;

pub mod display;
pub mod iter;
pub mod node;
pub mod ordering;
pub mod tree;
pub mod validate;

// Re-export main types for convenience
pub use display::Dump;
pub use iter::{IntoIter, Iter};
pub use node::{Color, NodeId};
pub use ordering::{Comparator, NaturalOrder, Reverse};
pub use tree::{InsertError, NodeRef, OrderedTree};
pub use validate::{InvariantViolation, TreeStats};
