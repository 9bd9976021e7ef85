//! Core graph structure — adjacency lists keyed by vertex id.

use std::collections::{HashMap, HashSet};

use super::{Bfs, Dfs};

/// A directed graph stored as adjacency lists.
///
/// Vertices are arbitrary non-negative integer ids; an entry is created
/// for a vertex the first time it gains an outgoing edge. Out-neighbors
/// keep insertion order and duplicates are permitted (multi-edges). A
/// vertex that only ever appears as a target is still a valid traversal
/// destination; it simply has no outgoing entry.
#[derive(Debug, Default)]
pub struct AdjacencyGraph {
    adjacency: HashMap<usize, Vec<usize>>,
}

impl AdjacencyGraph {
    /// Create a new, empty graph.
    pub fn new() -> Self {
        Self {
            adjacency: HashMap::new(),
        }
    }

    /// Create a graph from an edge sequence, preserving edge order.
    pub fn from_edges<I: IntoIterator<Item = (usize, usize)>>(edges: I) -> Self {
        let mut graph = Self::new();
        for (u, v) in edges {
            graph.add_edge(u, v);
        }
        graph
    }

    /// Add a directed edge `u -> v`.
    ///
    /// Appends `v` to `u`'s adjacency list, creating the entry if `u` was
    /// not seen before. O(1) amortized; no range validation, and a
    /// repeated `(u, v)` becomes a multi-edge.
    pub fn add_edge(&mut self, u: usize, v: usize) {
        self.adjacency.entry(u).or_default().push(v);
    }

    /// Out-neighbors of a vertex, in edge insertion order.
    ///
    /// Empty for vertices without outgoing edges, including ids the graph
    /// has never seen.
    pub fn neighbors(&self, vertex: usize) -> &[usize] {
        self.adjacency
            .get(&vertex)
            .map(|v| v.as_slice())
            .unwrap_or(&[])
    }

    /// Number of directed edges (multi-edges counted).
    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(|list| list.len()).sum()
    }

    /// Number of distinct vertices appearing as a source or a target.
    pub fn vertex_count(&self) -> usize {
        self.collect_vertices().len()
    }

    /// All distinct vertex ids (sources and targets), sorted ascending.
    pub fn vertices(&self) -> Vec<usize> {
        let mut ids: Vec<usize> = self.collect_vertices().into_iter().collect();
        ids.sort_unstable();
        ids
    }

    /// Whether a vertex id appears anywhere in the graph.
    pub fn contains_vertex(&self, vertex: usize) -> bool {
        self.adjacency.contains_key(&vertex)
            || self.adjacency.values().any(|list| list.contains(&vertex))
    }

    /// Whether the graph has no edges.
    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    /// Breadth-first traversal from `start`, as a lazy iterator.
    ///
    /// Yields `start` first, then vertices in FIFO discovery order,
    /// visiting each reachable vertex exactly once. Any id is a valid
    /// start, including one the graph has never seen (the traversal then
    /// yields just that id).
    pub fn bfs(&self, start: usize) -> Bfs<'_> {
        Bfs::new(self, start)
    }

    /// Depth-first traversal from `start`, as a lazy iterator.
    ///
    /// Yields vertices in recursive preorder (each vertex before its
    /// unvisited neighbors, neighbors explored in adjacency order), but
    /// is driven by an explicit stack so traversal depth never consumes
    /// call-stack space.
    pub fn dfs(&self, start: usize) -> Dfs<'_> {
        Dfs::new(self, start)
    }

    fn collect_vertices(&self) -> HashSet<usize> {
        let mut ids: HashSet<usize> = self.adjacency.keys().copied().collect();
        for list in self.adjacency.values() {
            ids.extend(list.iter().copied());
        }
        ids
    }
}
