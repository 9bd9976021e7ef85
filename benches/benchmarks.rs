//! Criterion benchmarks for algokit.

use criterion::{criterion_group, criterion_main, Criterion};
use rand::Rng;

use algokit::graph::AdjacencyGraph;
use algokit::list::SinglyLinkedList;
use algokit::search::{binary_search, linear_search};
use algokit::sort::{bubble_sort, merge_sort, quick_sort};
use algokit::tree::BinarySearchTree;

/// Uniformly random values for sort/search inputs.
fn make_random_values(count: usize) -> Vec<i64> {
    let mut rng = rand::thread_rng();
    (0..count).map(|_| rng.gen_range(-1_000_000..1_000_000)).collect()
}

/// A random directed graph over `vertex_count` vertices.
fn make_random_graph(vertex_count: usize, edge_count: usize) -> AdjacencyGraph {
    let mut rng = rand::thread_rng();
    let mut graph = AdjacencyGraph::new();
    for _ in 0..edge_count {
        graph.add_edge(
            rng.gen_range(0..vertex_count),
            rng.gen_range(0..vertex_count),
        );
    }
    graph
}

fn bench_bubble_sort(c: &mut Criterion) {
    let input = make_random_values(1_000);

    c.bench_function("bubble_sort_1k", |b| {
        b.iter(|| {
            let mut values = input.clone();
            bubble_sort(&mut values);
        })
    });
}

fn bench_merge_sort(c: &mut Criterion) {
    let input = make_random_values(10_000);

    c.bench_function("merge_sort_10k", |b| {
        b.iter(|| {
            let mut values = input.clone();
            merge_sort(&mut values);
        })
    });
}

fn bench_quick_sort(c: &mut Criterion) {
    let input = make_random_values(10_000);

    c.bench_function("quick_sort_10k", |b| {
        b.iter(|| {
            let mut values = input.clone();
            quick_sort(&mut values);
        })
    });
}

fn bench_linear_search(c: &mut Criterion) {
    let values = make_random_values(100_000);
    let mut rng = rand::thread_rng();

    c.bench_function("linear_search_100k", |b| {
        b.iter(|| {
            let target = rng.gen_range(-1_000_000..1_000_000);
            let _ = linear_search(&values, &target);
        })
    });
}

fn bench_binary_search(c: &mut Criterion) {
    let mut values = make_random_values(100_000);
    values.sort();
    let mut rng = rand::thread_rng();

    c.bench_function("binary_search_100k", |b| {
        b.iter(|| {
            let target = rng.gen_range(-1_000_000..1_000_000);
            let _ = binary_search(&values, &target);
        })
    });
}

fn bench_bst_insert(c: &mut Criterion) {
    let keys = make_random_values(10_000);

    c.bench_function("bst_insert_10k", |b| {
        b.iter(|| {
            let tree: BinarySearchTree<i64> = keys.iter().copied().collect();
            tree.len()
        })
    });
}

fn bench_bst_search(c: &mut Criterion) {
    let keys = make_random_values(10_000);
    let tree: BinarySearchTree<i64> = keys.iter().copied().collect();
    let mut rng = rand::thread_rng();

    c.bench_function("bst_search_10k", |b| {
        b.iter(|| {
            let key = rng.gen_range(-1_000_000..1_000_000);
            tree.contains(&key)
        })
    });
}

fn bench_bfs(c: &mut Criterion) {
    let graph = make_random_graph(10_000, 30_000);
    let mut rng = rand::thread_rng();

    c.bench_function("bfs_10k", |b| {
        b.iter(|| {
            let start = rng.gen_range(0..10_000);
            graph.bfs(start).count()
        })
    });
}

fn bench_dfs(c: &mut Criterion) {
    let graph = make_random_graph(10_000, 30_000);
    let mut rng = rand::thread_rng();

    c.bench_function("dfs_10k", |b| {
        b.iter(|| {
            let start = rng.gen_range(0..10_000);
            graph.dfs(start).count()
        })
    });
}

fn bench_list_append(c: &mut Criterion) {
    c.bench_function("list_append_1k", |b| {
        b.iter(|| {
            let mut list = SinglyLinkedList::new();
            for i in 0..1_000i64 {
                list.append(i);
            }
            list.len()
        })
    });
}

criterion_group!(
    benches,
    bench_bubble_sort,
    bench_merge_sort,
    bench_quick_sort,
    bench_linear_search,
    bench_binary_search,
    bench_bst_insert,
    bench_bst_search,
    bench_bfs,
    bench_dfs,
    bench_list_append,
);
criterion_main!(benches);
