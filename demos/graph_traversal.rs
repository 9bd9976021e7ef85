//! Graph construction and BFS/DFS traversal output.

use algokit::AdjacencyGraph;

fn main() {
    let graph = AdjacencyGraph::from_edges([(0, 1), (0, 2), (1, 2), (2, 0), (2, 3), (3, 3)]);

    println!(
        "Graph has {} vertices and {} edges",
        graph.vertex_count(),
        graph.edge_count()
    );

    let bfs: Vec<usize> = graph.bfs(2).collect();
    println!("BFS starting from 2: {:?}", bfs);

    let dfs: Vec<usize> = graph.dfs(2).collect();
    println!("DFS starting from 2: {:?}", dfs);

    // Traversal iterators are lazy; a prefix costs only what it visits
    let first_two: Vec<usize> = graph.bfs(0).take(2).collect();
    println!("First two from 0: {:?}", first_two);
}
