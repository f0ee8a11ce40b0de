//! Ordering capability that parameterizes [`OrderedTree`](crate::OrderedTree).
//!
//! The comparator is chosen once, when the tree is constructed, and stored
//! inside it. Every descent (insert, search, count) goes through the same
//! instance.
//!
//! A comparator must describe a total order. The tree cannot detect an
//! inconsistent one; feeding it one leaves the in-order sequence unspecified
//! but never causes memory unsafety or a panic inside the tree.

use std::cmp::Ordering;

/// A total order over `T`.
///
/// Implemented for [`NaturalOrder`], [`Reverse`], and any
/// `Fn(&T, &T) -> Ordering` closure.
///
/// # Example
///
/// ```
/// use ordtree::OrderedTree;
///
/// // Order strings by length only; equal lengths form a multiset run.
/// let mut tree = OrderedTree::with_comparator(|a: &&str, b: &&str| a.len().cmp(&b.len()));
/// tree.insert("ccc");
/// tree.insert("a");
/// tree.insert("bb");
///
/// let ordered: Vec<_> = tree.iter().copied().collect();
/// assert_eq!(ordered, ["a", "bb", "ccc"]);
/// ```
pub trait Comparator<T: ?Sized> {
    /// Compare `a` against `b`.
    fn compare(&self, a: &T, b: &T) -> Ordering;
}

/// Uses the element's own [`Ord`] implementation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct NaturalOrder;

impl<T: Ord + ?Sized> Comparator<T> for NaturalOrder {
    #[inline(always)]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        a.cmp(b)
    }
}

/// Flips the order produced by another comparator.
///
/// `Reverse(NaturalOrder)` yields a tree whose in-order traversal is
/// non-increasing under `Ord`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Reverse<C>(pub C);

impl<T: ?Sized, C: Comparator<T>> Comparator<T> for Reverse<C> {
    #[inline(always)]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self.0.compare(b, a)
    }
}

impl<T: ?Sized, F> Comparator<T> for F
where
    F: Fn(&T, &T) -> Ordering,
{
    #[inline(always)]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self(a, b)
    }
}
