//! Graph algorithms for analysis

use crate::error::{BrokerError, Result};
use crate::graph::CompressedGraph;
use rayon::prelude::*;
use std::collections::{HashMap, VecDeque};

/// Extract the subgraph induced by `members`
///
/// Node `i` of the result is `members[i]`; only edges with both endpoints
/// among the members survive.
pub fn induced_subgraph(graph: &CompressedGraph, members: &[u32]) -> CompressedGraph {
    // Mapping from original to subgraph indices, sized to the members only
    let orig_to_sub: HashMap<u32, u32> = members
        .iter()
        .enumerate()
        .map(|(i, &member)| (member, i as u32))
        .collect();

    let adjacency: Vec<Vec<u32>> = members
        .iter()
        .map(|&member| {
            let mut list: Vec<u32> = graph
                .neighbors(member as usize)
                .iter()
                .filter_map(|target| orig_to_sub.get(target).copied())
                .collect();
            list.sort_unstable();
            list
        })
        .collect();

    CompressedGraph::from_adjacency(adjacency)
}

/// Sum of hop distances from `source` to every other node, or `None` if
/// some node is unreachable
fn distance_sum_from(graph: &CompressedGraph, source: usize) -> Option<u64> {
    let mut dist = vec![u32::MAX; graph.node_count];
    let mut queue = VecDeque::with_capacity(graph.node_count);
    dist[source] = 0;
    queue.push_back(source);

    let mut reached = 1;
    let mut total: u64 = 0;
    while let Some(node) = queue.pop_front() {
        let next = dist[node] + 1;
        for &neighbor in graph.neighbors(node) {
            let neighbor = neighbor as usize;
            if dist[neighbor] == u32::MAX {
                dist[neighbor] = next;
                total += u64::from(next);
                reached += 1;
                queue.push_back(neighbor);
            }
        }
    }

    (reached == graph.node_count).then_some(total)
}

/// Mean hop distance over all pairs of distinct nodes
///
/// BFS runs from every node; graphs with at least `parallel_threshold`
/// nodes spread the sources over the rayon pool.
pub fn average_shortest_path_length(
    graph: &CompressedGraph,
    parallel_threshold: usize,
) -> Result<f64> {
    let n = graph.node_count;
    if n < 2 {
        return Err(BrokerError::TooFewNodes { nodes: n });
    }

    let total: Option<u64> = if n < parallel_threshold {
        (0..n).map(|source| distance_sum_from(graph, source)).sum()
    } else {
        (0..n)
            .into_par_iter()
            .map(|source| distance_sum_from(graph, source))
            .sum()
    };

    let total = total.ok_or(BrokerError::DisconnectedGraph)?;
    Ok(total as f64 / (n * (n - 1)) as f64)
}
