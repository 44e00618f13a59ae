//! Bridging edge detection and per-node broker counts

use crate::broker::{BridgingEdge, BrokerNode, Edge, Node};
use crate::config::EndpointPolicy;
use crate::error::{BrokerError, Result};
use crate::Label;
use std::collections::{HashMap, HashSet};

/// Map every node id to its community; a repeated id keeps its first label
fn community_lookup<N: Label, C: Label>(nodes: &[Node<N, C>]) -> HashMap<&N, &C> {
    let mut lookup = HashMap::with_capacity(nodes.len());
    for node in nodes {
        lookup.entry(&node.id).or_insert(&node.community_id);
    }
    lookup
}

/// Keep only the edges that connect two different communities,
/// silently dropping edges with an unknown endpoint
pub fn detect_bridging_edges<N: Label, C: Label>(
    nodes: &[Node<N, C>],
    edges: &[Edge<N>],
) -> Vec<BridgingEdge<N, C>> {
    let lookup = community_lookup(nodes);
    edges
        .iter()
        .filter_map(|edge| bridge_for(&lookup, edge))
        .collect()
}

/// Same as [`detect_bridging_edges`], with explicit handling of edges
/// whose endpoints are missing from `nodes`
pub fn detect_bridging_edges_with<N: Label, C: Label>(
    nodes: &[Node<N, C>],
    edges: &[Edge<N>],
    policy: EndpointPolicy,
) -> Result<Vec<BridgingEdge<N, C>>> {
    let lookup = community_lookup(nodes);
    let mut bridging = Vec::new();
    let mut dropped = 0usize;

    for edge in edges {
        let missing = [&edge.a, &edge.b]
            .into_iter()
            .find(|id| !lookup.contains_key(id));

        if let Some(node) = missing {
            match policy {
                EndpointPolicy::Reject => {
                    return Err(BrokerError::UnknownEndpoint {
                        edge: format!("{}, {}", edge.a, edge.b),
                        node: node.to_string(),
                    });
                }
                EndpointPolicy::Drop => {
                    log::debug!("Dropping edge ({}, {}): unknown node {}", edge.a, edge.b, node);
                    dropped += 1;
                    continue;
                }
            }
        }

        if let Some(bridge) = bridge_for(&lookup, edge) {
            bridging.push(bridge);
        }
    }

    if dropped > 0 {
        log::warn!("Dropped {} edge(s) referencing unknown nodes", dropped);
    }
    log::info!("Found {} bridging edges out of {} edges", bridging.len(), edges.len());

    Ok(bridging)
}

fn bridge_for<N: Label, C: Label>(
    lookup: &HashMap<&N, &C>,
    edge: &Edge<N>,
) -> Option<BridgingEdge<N, C>> {
    let community_a = *lookup.get(&edge.a)?;
    let community_b = *lookup.get(&edge.b)?;

    (community_a != community_b).then(|| BridgingEdge {
        a: edge.a.clone(),
        b: edge.b.clone(),
        community_id_a: community_a.clone(),
        community_id_b: community_b.clone(),
        community_broker: true,
    })
}

/// Flag brokers and count their bridging incidences
///
/// Each bridging edge adds one to both of its endpoints. Output order
/// follows `nodes`; a repeated id keeps only its first row.
pub fn annotate_brokers<N: Label, C: Label>(
    nodes: &[Node<N, C>],
    bridging_edges: &[BridgingEdge<N, C>],
) -> Vec<BrokerNode<N, C>> {
    let mut incidences: HashMap<&N, usize> = HashMap::new();
    for edge in bridging_edges {
        *incidences.entry(&edge.a).or_insert(0) += 1;
        *incidences.entry(&edge.b).or_insert(0) += 1;
    }

    let mut seen: HashSet<&N> = HashSet::with_capacity(nodes.len());
    let annotated: Vec<BrokerNode<N, C>> = nodes
        .iter()
        .filter(|node| {
            let first = seen.insert(&node.id);
            if !first {
                log::warn!("Ignoring repeated node id {}", node.id);
            }
            first
        })
        .map(|node| {
            let broker_count = incidences.get(&node.id).copied().unwrap_or(0);
            BrokerNode {
                id: node.id.clone(),
                community_id: node.community_id.clone(),
                is_broker: broker_count > 0,
                broker_count,
            }
        })
        .collect();

    log::info!(
        "Annotated {} brokers among {} nodes",
        annotated.iter().filter(|n| n.is_broker).count(),
        annotated.len()
    );

    annotated
}
