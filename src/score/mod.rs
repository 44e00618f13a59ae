//! Broker score combination

pub mod calculator;

pub use calculator::compute_scores;

use serde::{Deserialize, Serialize};

/// Node with its broker role and final score
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredNode<N, C> {
    pub id: N,
    pub community_id: C,
    pub is_broker: bool,
    pub broker_count: usize,

    /// Community broker score; zero for non-brokers
    pub broker_score: f64,
}
