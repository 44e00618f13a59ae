//! Error types for the broker score pipeline

use thiserror::Error;

/// Result alias for this crate
pub type Result<T> = std::result::Result<T, BrokerError>;

/// Errors that abort a pipeline run. None of them leave partial output.
#[derive(Debug, Error)]
pub enum BrokerError {
    /// A community needs at least two members for its cohesion to exist
    #[error("community {community} has {n_people} member(s); at least 2 are required")]
    SingletonCommunity { community: String, n_people: usize },

    /// Some members of a community cannot reach each other inside it
    #[error("community {community} is disconnected; cohesion is undefined")]
    DisconnectedCommunity { community: String },

    /// Average shortest path length asked of a graph with fewer than 2 nodes
    #[error("average shortest path length needs at least 2 nodes, got {nodes}")]
    TooFewNodes { nodes: usize },

    /// Average shortest path length asked of a disconnected graph
    #[error("graph is disconnected")]
    DisconnectedGraph,

    /// An edge references a node id missing from the node set
    #[error("edge ({edge}) references unknown node {node}")]
    UnknownEndpoint { edge: String, node: String },

    /// Scoring met a community with no profile
    #[error("no profile for community {community}")]
    UnknownCommunity { community: String },

    #[error("failed to build worker pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}
