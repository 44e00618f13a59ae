//! Bridging edge detection and broker annotation

pub mod detection;

pub use detection::{annotate_brokers, detect_bridging_edges, detect_bridging_edges_with};

use serde::{Deserialize, Serialize};

/// A labeled input node
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Node<N, C> {
    pub id: N,
    pub community_id: C,
}

impl<N, C> Node<N, C> {
    pub fn new(id: N, community_id: C) -> Self {
        Self { id, community_id }
    }
}

/// An undirected input edge; `(a, b)` and `(b, a)` are the same relation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Edge<N> {
    pub a: N,
    pub b: N,
}

impl<N> Edge<N> {
    pub fn new(a: N, b: N) -> Self {
        Self { a, b }
    }
}

/// An edge whose endpoints sit in different communities
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BridgingEdge<N, C> {
    pub a: N,
    pub b: N,
    pub community_id_a: C,
    pub community_id_b: C,

    /// Always `true`; intra-community edges never make it into the output
    pub community_broker: bool,
}

/// Node annotated with its broker role
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrokerNode<N, C> {
    pub id: N,
    pub community_id: C,

    /// Endpoint of at least one bridging edge
    pub is_broker: bool,

    /// Number of bridging edge incidences touching this node
    pub broker_count: usize,
}
