//! End-to-end scoring for one network partition

use crate::broker::{annotate_brokers, detect_bridging_edges_with, BridgingEdge, Edge, Node};
use crate::community::{profile_communities, CommunityProfile};
use crate::config::Config;
use crate::error::Result;
use crate::score::{compute_scores, ScoredNode};
use crate::Label;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use statrs::statistics::Statistics;

/// Everything one pipeline run produces
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BrokerScores<N, C> {
    /// Scored nodes, in input order
    pub nodes: Vec<ScoredNode<N, C>>,

    /// Community profiles, in first-seen order
    pub communities: Vec<CommunityProfile<C>>,

    /// Edges crossing community boundaries, in input order
    pub bridging_edges: Vec<BridgingEdge<N, C>>,
}

impl<N: Label, C: Label> BrokerScores<N, C> {
    /// Score of the node with the given id
    pub fn score_of(&self, id: &N) -> Option<f64> {
        self.nodes
            .iter()
            .find(|node| &node.id == id)
            .map(|node| node.broker_score)
    }

    pub fn brokers(&self) -> impl Iterator<Item = &ScoredNode<N, C>> {
        self.nodes.iter().filter(|node| node.is_broker)
    }

    pub fn community(&self, id: &C) -> Option<&CommunityProfile<C>> {
        self.communities.iter().find(|c| &c.community_id == id)
    }

    /// Summary statistics of the run
    pub fn summary(&self) -> Value {
        let scores: Vec<f64> = self.nodes.iter().map(|n| n.broker_score).collect();
        let broker_scores: Vec<f64> = self.brokers().map(|n| n.broker_score).collect();
        let cohesions: Vec<f64> = self.communities.iter().map(|c| c.cohesion).collect();

        json!({
            "node_count": self.nodes.len(),
            "bridging_edge_count": self.bridging_edges.len(),
            "broker_count": broker_scores.len(),
            "community_count": self.communities.len(),
            "score_stats": {
                "mean": mean_or_zero(&scores),
                "max": max_or_zero(&scores),
                "mean_broker": mean_or_zero(&broker_scores),
            },
            "avg_cohesion": mean_or_zero(&cohesions),
        })
    }
}

/// Empty runs report 0.0 rather than NaN
fn mean_or_zero(values: &[f64]) -> f64 {
    if values.is_empty() {
        0.0
    } else {
        values.iter().mean()
    }
}

fn max_or_zero(values: &[f64]) -> f64 {
    if values.is_empty() {
        0.0
    } else {
        Statistics::max(values.iter())
    }
}

/// Runs detection, annotation, profiling and scoring on a sized worker pool
#[derive(Debug, Clone, Default)]
pub struct BrokerPipeline {
    config: Config,
}

impl BrokerPipeline {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Score every node of one partitioned network
    pub fn run<N: Label, C: Label>(
        &self,
        nodes: &[Node<N, C>],
        edges: &[Edge<N>],
    ) -> Result<BrokerScores<N, C>> {
        let threads = self.config.effective_threads();
        log::info!(
            "Scoring community brokers for {} nodes and {} edges using {} worker threads",
            nodes.len(),
            edges.len(),
            threads
        );

        let pool = rayon::ThreadPoolBuilder::new().num_threads(threads).build()?;
        pool.install(|| self.run_stages(nodes, edges))
    }

    fn run_stages<N: Label, C: Label>(
        &self,
        nodes: &[Node<N, C>],
        edges: &[Edge<N>],
    ) -> Result<BrokerScores<N, C>> {
        // 1. Bridging edges
        let bridging_edges =
            detect_bridging_edges_with(nodes, edges, self.config.unknown_endpoints)?;

        // 2. Broker roles
        let brokers = annotate_brokers(nodes, &bridging_edges);

        // 3. Community profiles
        let communities = profile_communities(&brokers, edges, self.config.parallel_threshold)?;

        // 4. Scores
        let scored = compute_scores(&brokers, &bridging_edges, &communities)?;

        log::info!(
            "Scored {} nodes across {} communities",
            scored.len(),
            communities.len()
        );

        Ok(BrokerScores {
            nodes: scored,
            communities,
            bridging_edges,
        })
    }
}

/// Community broker scores for a single partition with the default config
///
/// Community detection algorithms that yield a different partition on each
/// run need several calls, one per partition; averaging is up to the caller.
pub fn local_community_broker_score<N: Label, C: Label>(
    nodes: &[Node<N, C>],
    edges: &[Edge<N>],
) -> Result<BrokerScores<N, C>> {
    BrokerPipeline::default().run(nodes, edges)
}
