//! Memory-efficient undirected graph representation

use serde::{Deserialize, Serialize};

/// Compressed sparse representation of an undirected graph
///
/// Every undirected edge is stored twice, once in each endpoint's
/// adjacency list, so `neighbors` needs no reverse lookup.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompressedGraph {
    /// Number of nodes in the graph
    pub node_count: usize,

    /// Offset array: index where each node's neighbors begin
    /// offsets[i] to offsets[i+1] defines the neighbor range for node i
    pub offsets: Vec<u32>,

    /// Neighbor array: concatenated, sorted adjacency lists
    pub edges: Vec<u32>,
}

impl CompressedGraph {
    /// Create a new graph with pre-allocated capacity
    pub fn with_capacity(node_count: usize, edge_count: usize) -> Self {
        Self {
            node_count,
            offsets: Vec::with_capacity(node_count + 1),
            edges: Vec::with_capacity(edge_count),
        }
    }

    /// Build a graph straight from sorted, deduplicated adjacency lists
    pub fn from_adjacency(adjacency: Vec<Vec<u32>>) -> Self {
        let edge_count = adjacency.iter().map(Vec::len).sum();
        let mut graph = Self::with_capacity(adjacency.len(), edge_count);

        graph.offsets.push(0);
        let mut offset = 0;
        for list in adjacency {
            offset += list.len() as u32;
            graph.edges.extend(list);
            graph.offsets.push(offset);
        }

        graph
    }

    /// Get the neighbors of a node
    pub fn neighbors(&self, node: usize) -> &[u32] {
        let start = self.offsets[node] as usize;
        let end = self.offsets[node + 1] as usize;
        &self.edges[start..end]
    }

    /// Check if there's an edge between a and b
    pub fn has_edge(&self, a: usize, b: u32) -> bool {
        self.neighbors(a).binary_search(&b).is_ok()
    }

    pub fn degree(&self, node: usize) -> usize {
        self.neighbors(node).len()
    }

    /// Number of undirected edges
    pub fn edge_count(&self) -> usize {
        self.edges.len() / 2
    }
}
