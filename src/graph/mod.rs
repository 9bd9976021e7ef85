//! Directed adjacency-list graph and its traversals.

pub mod adjacency;
pub mod traversal;

pub use adjacency::AdjacencyGraph;
pub use traversal::{Bfs, Dfs, TraversalOrder};
