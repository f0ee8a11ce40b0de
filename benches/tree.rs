//! Benchmarks for `OrderedTree` insert and search using Divan.
//!
//! Run with: `cargo bench --bench tree`


use std::collections::BTreeMap;

use divan::{Bencher, black_box};
use ordtree::OrderedTree;

fn main() {
    divan::main();
}

// =============================================================================
// Construction
// =============================================================================

#[divan::bench_group]
mod construction {
    use super::OrderedTree;

    #[divan::bench]
    fn new_tree() -> OrderedTree<u64> {
        OrderedTree::new()
    }

    #[divan::bench(args = [64, 1024])]
    fn with_capacity(capacity: usize) -> OrderedTree<u64> {
        OrderedTree::with_capacity(capacity)
    }
}

// =============================================================================
// Insert Operations
// =============================================================================

#[divan::bench_group]
mod insert {
    use super::{Bencher, OrderedTree, bench_utils, black_box};

    #[divan::bench]
    fn insert_single(bencher: Bencher) {
        bencher
            .with_inputs(OrderedTree::<u64>::new)
            .bench_local_values(|mut tree| {
                let _ = tree.insert(black_box(42));
                tree
            });
    }

    #[divan::bench(args = [100, 1_000, 10_000])]
    fn insert_ascending(bencher: Bencher, n: usize) {
        let values = bench_utils::ascending(n);

        bencher
            .with_inputs(|| OrderedTree::<u64>::with_capacity(n))
            .bench_local_values(|mut tree| {
                for v in &values {
                    tree.insert(black_box(*v));
                }
                tree
            });
    }

    #[divan::bench(args = [100, 1_000, 10_000])]
    fn insert_scattered(bencher: Bencher, n: usize) {
        let values = bench_utils::scattered(n);

        bencher
            .with_inputs(|| OrderedTree::<u64>::with_capacity(n))
            .bench_local_values(|mut tree| {
                for v in &values {
                    tree.insert(black_box(*v));
                }
                tree
            });
    }

    #[divan::bench(args = [1, 16, 256])]
    fn insert_duplicates(bencher: Bencher, distinct: u64) {
        let values = bench_utils::duplicated(4_096, distinct);

        bencher
            .with_inputs(|| OrderedTree::<u64>::with_capacity(values.len()))
            .bench_local_values(|mut tree| {
                for v in &values {
                    tree.insert(black_box(*v));
                }
                tree
            });
    }

    #[divan::bench(args = [1_000, 10_000])]
    fn try_insert_scattered(bencher: Bencher, n: usize) {
        let values = bench_utils::scattered(n);

        bencher
            .with_inputs(OrderedTree::<u64>::new)
            .bench_local_values(|mut tree| {
                for v in &values {
                    let _ = tree.try_insert(black_box(*v));
                }
                tree
            });
    }
}

// =============================================================================
// Search Operations
// =============================================================================

#[divan::bench_group]
mod search {
    use super::{Bencher, OrderedTree, bench_utils, black_box};

    #[divan::bench]
    fn search_empty(bencher: Bencher) {
        let tree = OrderedTree::<u64>::new();
        bencher.bench_local(|| tree.contains(black_box(&7)));
    }

    #[divan::bench(args = [100, 10_000, 100_000])]
    fn search_hit(bencher: Bencher, n: usize) {
        let values = bench_utils::scattered(n);
        let tree: OrderedTree<u64> = values.iter().copied().collect();
        let probe = values[n / 2];

        bencher.bench_local(|| tree.search(black_box(&probe)).map(|node| node.id()));
    }

    #[divan::bench(args = [100, 10_000, 100_000])]
    fn search_miss(bencher: Bencher, n: usize) {
        // Ascending values leave every odd probe absent.
        let tree: OrderedTree<u64> = (0..n as u64).map(|v| v * 2).collect();

        bencher.bench_local(|| tree.contains(black_box(&(n as u64 | 1))));
    }

    #[divan::bench(args = [1, 16, 256])]
    fn count_duplicates(bencher: Bencher, distinct: u64) {
        let tree: OrderedTree<u64> = bench_utils::duplicated(4_096, distinct).into_iter().collect();

        bencher.bench_local(|| tree.count(black_box(&0)));
    }

    #[divan::bench(args = [10_000])]
    fn first_last(bencher: Bencher, n: usize) {
        let tree = bench_utils::scattered_tree(n);

        bencher.bench_local(|| (tree.first().copied(), tree.last().copied()));
    }
}

// =============================================================================
// Comparison against std
// =============================================================================

#[divan::bench_group]
mod btreemap {
    use super::{BTreeMap, Bencher, bench_utils, black_box};

    /// Multiset via counts, the usual std stand-in.
    #[divan::bench(args = [1_000, 10_000])]
    fn insert_scattered(bencher: Bencher, n: usize) {
        let values = bench_utils::scattered(n);

        bencher
            .with_inputs(BTreeMap::<u64, usize>::new)
            .bench_local_values(|mut map| {
                for v in &values {
                    *map.entry(black_box(*v)).or_default() += 1;
                }
                map
            });
    }

    #[divan::bench(args = [10_000, 100_000])]
    fn search_hit(bencher: Bencher, n: usize) {
        let values = bench_utils::scattered(n);
        let map: BTreeMap<u64, usize> = values.iter().map(|v| (*v, 1)).collect();
        let probe = values[n / 2];

        bencher.bench_local(|| map.contains_key(black_box(&probe)));
    }
}

// =============================================================================
// Validation
// =============================================================================

#[divan::bench(args = [1_000, 10_000])]
fn validate(bencher: Bencher, n: usize) {
    let tree = bench_utils::scattered_tree(n);

    bencher.bench_local(|| tree.validate().is_ok());
}
