//! Graph construction module

use crate::graph::CompressedGraph;
use crate::Label;
use std::collections::HashMap;

/// Builder that maps external node ids onto a dense `CompressedGraph`
///
/// Nodes must be registered before edges; node indices follow
/// registration order.
pub struct GraphBuilder<N> {
    /// Mapping from external IDs to node indices
    id_to_index: HashMap<N, u32>,

    /// Adjacency lists for each node
    adjacency_lists: Vec<Vec<u32>>,
}

impl<N: Label> GraphBuilder<N> {
    /// Create a new graph builder with the given capacity
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            id_to_index: HashMap::with_capacity(capacity),
            adjacency_lists: Vec::with_capacity(capacity),
        }
    }

    /// Register a node, returning its index. A repeated id keeps its first index.
    pub fn add_node(&mut self, id: &N) -> u32 {
        if let Some(&idx) = self.id_to_index.get(id) {
            return idx;
        }

        let idx = self.adjacency_lists.len() as u32;
        self.id_to_index.insert(id.clone(), idx);
        self.adjacency_lists.push(Vec::new());

        idx
    }

    /// Look up the index of a registered node
    pub fn index_of(&self, id: &N) -> Option<u32> {
        self.id_to_index.get(id).copied()
    }

    /// Add an undirected edge between two registered nodes.
    ///
    /// Returns `false` and leaves the graph untouched when either endpoint
    /// is unknown.
    pub fn add_edge(&mut self, a: &N, b: &N) -> bool {
        let (Some(a_idx), Some(b_idx)) = (self.index_of(a), self.index_of(b)) else {
            return false;
        };

        // Self-loops never shorten a path
        if a_idx != b_idx {
            self.adjacency_lists[a_idx as usize].push(b_idx);
            self.adjacency_lists[b_idx as usize].push(a_idx);
        }

        true
    }

    pub fn node_count(&self) -> usize {
        self.adjacency_lists.len()
    }

    /// Build the compressed graph
    pub fn build(mut self) -> CompressedGraph {
        for list in &mut self.adjacency_lists {
            // Sort for binary search; (a,b) and (b,a) collapse to one edge
            list.sort_unstable();
            list.dedup();
        }

        CompressedGraph::from_adjacency(self.adjacency_lists)
    }
}
