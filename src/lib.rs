//! Community broker scores for networks with a known community partition
//!
//! A node is a community broker when at least one of its ties crosses into a
//! different community. Its score grows with the size of the communities it
//! reaches, shrinks with their cohesion and with the number of cobrokers
//! filling the same bridging role.

pub mod broker;
pub mod community;
pub mod config;
pub mod error;
pub mod graph;
pub mod pipeline;
pub mod score;

use std::fmt::Display;
use std::hash::Hash;

pub use broker::{BridgingEdge, BrokerNode, Edge, Node};
pub use community::CommunityProfile;
pub use config::{Config, EndpointPolicy};
pub use error::{BrokerError, Result};
pub use pipeline::{local_community_broker_score, BrokerPipeline, BrokerScores};
pub use score::ScoredNode;

/// Key type usable as a node id or a community id
pub trait Label: Clone + Eq + Hash + Display + Send + Sync {}

impl<T> Label for T where T: Clone + Eq + Hash + Display + Send + Sync {}
