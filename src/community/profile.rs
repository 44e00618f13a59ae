//! Per-community size, broker count and cohesion

use crate::broker::{BrokerNode, Edge};
use crate::community::CommunityProfile;
use crate::error::{BrokerError, Result};
use crate::graph::{average_shortest_path_length, induced_subgraph, CompressedGraph, GraphBuilder};
use crate::Label;
use rayon::prelude::*;
use std::collections::HashMap;

/// Members of one community, as indices into the full graph
struct Membership<'a, C> {
    community_id: &'a C,
    members: Vec<u32>,
    n_brokers: usize,
}

/// Build the full network and group node indices by community,
/// communities in first-seen order
fn group_members<'a, N: Label, C: Label>(
    nodes: &'a [BrokerNode<N, C>],
    edges: &[Edge<N>],
) -> (CompressedGraph, Vec<Membership<'a, C>>) {
    let mut builder = GraphBuilder::with_capacity(nodes.len());
    let mut position: HashMap<&C, usize> = HashMap::new();
    let mut groups: Vec<Membership<'a, C>> = Vec::new();

    for node in nodes {
        let before = builder.node_count();
        let idx = builder.add_node(&node.id);
        if idx as usize != before {
            log::warn!("Ignoring repeated node id {}", node.id);
            continue;
        }

        let slot = *position.entry(&node.community_id).or_insert_with(|| {
            groups.push(Membership {
                community_id: &node.community_id,
                members: Vec::new(),
                n_brokers: 0,
            });
            groups.len() - 1
        });
        groups[slot].members.push(idx);
        if node.is_broker {
            groups[slot].n_brokers += 1;
        }
    }

    for edge in edges {
        builder.add_edge(&edge.a, &edge.b);
    }

    (builder.build(), groups)
}

/// Profile every community present among `nodes`
///
/// Fails without partial output if any community has fewer than two
/// members or falls apart into several components. Cohesion is computed
/// for all communities in parallel; results keep first-seen order.
pub fn profile_communities<N: Label, C: Label>(
    nodes: &[BrokerNode<N, C>],
    edges: &[Edge<N>],
    parallel_threshold: usize,
) -> Result<Vec<CommunityProfile<C>>> {
    let (graph, groups) = group_members(nodes, edges);

    log::info!(
        "Profiling {} communities over {} nodes and {} edges",
        groups.len(),
        graph.node_count,
        graph.edge_count()
    );

    if let Some(group) = groups.iter().find(|g| g.members.len() <= 1) {
        return Err(BrokerError::SingletonCommunity {
            community: group.community_id.to_string(),
            n_people: group.members.len(),
        });
    }

    let cohesions: Vec<Result<f64>> = groups
        .par_iter()
        .map(|group| {
            let subgraph = induced_subgraph(&graph, &group.members);
            average_shortest_path_length(&subgraph, parallel_threshold).map_err(|_| {
                BrokerError::DisconnectedCommunity {
                    community: group.community_id.to_string(),
                }
            })
        })
        .collect();

    groups
        .iter()
        .zip(cohesions)
        .map(|(group, cohesion)| {
            let cohesion = cohesion?;
            log::debug!(
                "Community {}: {} people, {} brokers, cohesion {:.4}",
                group.community_id,
                group.members.len(),
                group.n_brokers,
                cohesion
            );
            Ok(CommunityProfile {
                community_id: group.community_id.clone(),
                n_people: group.members.len(),
                n_brokers: group.n_brokers,
                cohesion,
            })
        })
        .collect()
}
