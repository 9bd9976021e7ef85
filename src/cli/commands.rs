//! CLI command implementations.

use log::debug;
use serde::Serialize;

use crate::graph::{AdjacencyGraph, TraversalOrder};
use crate::list::{NodeId, SinglyLinkedList};
use crate::search::SearchAlgo;
use crate::sort::SortAlgo;
use crate::tree::BinarySearchTree;
use crate::types::{AlgoError, AlgoResult};

/// Sort a sequence of integers and print the result.
pub fn cmd_sort(algo: SortAlgo, values: Vec<i64>, json: bool) -> AlgoResult<()> {
    debug!("sorting {} values with {}", values.len(), algo);
    let mut sorted = values.clone();
    algo.run(&mut sorted);

    if json {
        let report = serde_json::json!({
            "algorithm": algo.name(),
            "input": values,
            "sorted": sorted
        });
        println!(
            "{}",
            serde_json::to_string_pretty(&report).unwrap_or_default()
        );
    } else {
        println!("Sorted with {}: {}", algo.name(), join(&sorted));
    }
    Ok(())
}

/// Search a sequence of integers for a target value.
pub fn cmd_search(algo: SearchAlgo, target: i64, values: Vec<i64>, json: bool) -> AlgoResult<()> {
    debug!(
        "searching {} values for {} with {}",
        values.len(),
        target,
        algo
    );
    let found = algo.run(&values, &target);

    if json {
        let report = serde_json::json!({
            "algorithm": algo.name(),
            "target": target,
            "index": found
        });
        println!(
            "{}",
            serde_json::to_string_pretty(&report).unwrap_or_default()
        );
    } else {
        match found {
            Some(index) => println!("Element {} is present at index {}", target, index),
            None => println!("Element {} is not present", target),
        }
    }
    Ok(())
}

/// Report printed by `cmd_bst` in JSON mode.
#[derive(Serialize)]
struct BstReport {
    len: usize,
    height: usize,
    min: Option<i64>,
    max: Option<i64>,
    inorder: Vec<i64>,
    searched: Option<i64>,
    found: Option<bool>,
}

/// Build a binary search tree from keys and walk it in order.
pub fn cmd_bst(keys: Vec<i64>, search: Option<i64>, json: bool) -> AlgoResult<()> {
    debug!("building BST from {} keys", keys.len());
    let tree: BinarySearchTree<i64> = keys.into_iter().collect();
    let inorder: Vec<i64> = tree.inorder().copied().collect();
    let found = search.map(|key| tree.contains(&key));

    if json {
        let report = BstReport {
            len: tree.len(),
            height: tree.height(),
            min: tree.min().copied(),
            max: tree.max().copied(),
            inorder,
            searched: search,
            found,
        };
        println!(
            "{}",
            serde_json::to_string_pretty(&report).unwrap_or_default()
        );
    } else {
        println!("Inorder traversal: {}", join(&inorder));
        println!("Height: {}", tree.height());
        if let (Some(key), Some(found)) = (search, found) {
            if found {
                println!("Search for {}: Found", key);
            } else {
                println!("Search for {}: Not Found", key);
            }
        }
    }
    Ok(())
}

/// Report printed by `cmd_graph` in JSON mode.
#[derive(Serialize)]
struct TraversalReport {
    order: TraversalOrder,
    start: usize,
    vertices: usize,
    edges: usize,
    visited: Vec<usize>,
}

/// Build a directed graph from edge specs and traverse it.
pub fn cmd_graph(
    edges: Vec<String>,
    start: usize,
    order: TraversalOrder,
    json: bool,
) -> AlgoResult<()> {
    let mut graph = AdjacencyGraph::new();
    for spec in &edges {
        let (u, v) = parse_edge(spec)?;
        graph.add_edge(u, v);
    }
    debug!(
        "graph has {} vertices, {} edges; running {} from {}",
        graph.vertex_count(),
        graph.edge_count(),
        order,
        start
    );
    let visited = order.run(&graph, start);

    if json {
        let report = TraversalReport {
            order,
            start,
            vertices: graph.vertex_count(),
            edges: graph.edge_count(),
            visited,
        };
        println!(
            "{}",
            serde_json::to_string_pretty(&report).unwrap_or_default()
        );
    } else {
        println!(
            "{} starting from {}: {}",
            order.name().to_uppercase(),
            start,
            visited
                .iter()
                .map(|v| v.to_string())
                .collect::<Vec<_>>()
                .join(" ")
        );
    }
    Ok(())
}

/// One parsed linked-list operation.
enum ListOp {
    Push(i64),
    Append(i64),
    After(usize, i64),
}

/// Apply a sequence of operations to a singly linked list.
///
/// Operations are `push:<v>`, `append:<v>`, and `after:<n>:<v>` where
/// `<n>` refers to the node created by the n-th operation so far
/// (0-based).
pub fn cmd_list(ops: Vec<String>, json: bool) -> AlgoResult<()> {
    let mut list: SinglyLinkedList<i64> = SinglyLinkedList::new();
    let mut created: Vec<NodeId> = Vec::new();

    for op in &ops {
        let id = match parse_list_op(op)? {
            ListOp::Push(value) => list.push(value),
            ListOp::Append(value) => list.append(value),
            ListOp::After(n, value) => {
                let target = created
                    .get(n)
                    .copied()
                    .ok_or(AlgoError::InvalidNode(n))?;
                list.insert_after(target, value)?
            }
        };
        created.push(id);
    }
    debug!("list holds {} elements after {} ops", list.len(), ops.len());

    let values: Vec<i64> = list.iter().copied().collect();
    if json {
        let report = serde_json::json!({
            "len": list.len(),
            "values": values
        });
        println!(
            "{}",
            serde_json::to_string_pretty(&report).unwrap_or_default()
        );
    } else {
        for value in &values {
            print!("{} -> ", value);
        }
        println!("None");
    }
    Ok(())
}

/// Parse an `u:v` edge spec.
fn parse_edge(spec: &str) -> AlgoResult<(usize, usize)> {
    let mut parts = spec.splitn(2, ':');
    let u = parts.next().and_then(|s| s.trim().parse().ok());
    let v = parts.next().and_then(|s| s.trim().parse().ok());
    match (u, v) {
        (Some(u), Some(v)) => Ok((u, v)),
        _ => Err(AlgoError::InvalidEdge(spec.to_string())),
    }
}

/// Parse a single list operation string.
fn parse_list_op(op: &str) -> AlgoResult<ListOp> {
    let bad = || AlgoError::InvalidListOp(op.to_string());
    let mut parts = op.split(':');
    match parts.next() {
        Some("push") => {
            let value = parts.next().and_then(|s| s.parse().ok()).ok_or_else(bad)?;
            Ok(ListOp::Push(value))
        }
        Some("append") => {
            let value = parts.next().and_then(|s| s.parse().ok()).ok_or_else(bad)?;
            Ok(ListOp::Append(value))
        }
        Some("after") => {
            let n = parts.next().and_then(|s| s.parse().ok()).ok_or_else(bad)?;
            let value = parts.next().and_then(|s| s.parse().ok()).ok_or_else(bad)?;
            Ok(ListOp::After(n, value))
        }
        _ => Err(bad()),
    }
}

fn join(values: &[i64]) -> String {
    values
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}
