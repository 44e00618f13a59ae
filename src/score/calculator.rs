//! Community broker score calculation
//!
//! For a broker `u` in community `Cu`:
//!
//! ```text
//! score(u) = Σ_{Cv ∈ targets(u)} n(Cv) / (cohesion(Cv) · √cobrokers(Cu → Cv))
//!          + n(Cu) / cohesion(Cu)
//! ```
//!
//! where `cobrokers(Cu → Cv)` counts the directed ties from `Cu` into `Cv`.
//! A relation listed twice, in either orientation, yields its ties once.

use crate::broker::{BridgingEdge, BrokerNode};
use crate::community::CommunityProfile;
use crate::error::{BrokerError, Result};
use crate::score::ScoredNode;
use crate::Label;
use itertools::Itertools;
use std::collections::{HashMap, HashSet};

/// One directed bridging role: `node` in `source` reaching into `target`
struct Tie<'a, N, C> {
    node: &'a N,
    source: &'a C,
    target: &'a C,
}

fn directed_ties<N: Label, C: Label>(bridging_edges: &[BridgingEdge<N, C>]) -> Vec<Tie<'_, N, C>> {
    let mut seen: HashSet<(&N, &N)> = HashSet::with_capacity(bridging_edges.len() * 2);
    let mut ties = Vec::with_capacity(bridging_edges.len() * 2);

    for edge in bridging_edges {
        if seen.insert((&edge.a, &edge.b)) {
            ties.push(Tie {
                node: &edge.a,
                source: &edge.community_id_a,
                target: &edge.community_id_b,
            });
        }
        if seen.insert((&edge.b, &edge.a)) {
            ties.push(Tie {
                node: &edge.b,
                source: &edge.community_id_b,
                target: &edge.community_id_a,
            });
        }
    }

    ties
}

/// `(n_people, cohesion)` of a community; its value is their ratio
fn community_value<C: Label>(
    profiles: &HashMap<&C, &CommunityProfile<C>>,
    community: &C,
) -> Result<(f64, f64)> {
    let profile = profiles
        .get(community)
        .ok_or_else(|| BrokerError::UnknownCommunity {
            community: community.to_string(),
        })?;
    Ok((profile.n_people as f64, profile.cohesion))
}

/// Combine broker roles and community profiles into per-node scores
///
/// Output order follows `nodes`; a repeated id keeps only its first row.
/// Fails if a node or a bridging edge names a community missing from
/// `communities`.
pub fn compute_scores<N: Label, C: Label>(
    nodes: &[BrokerNode<N, C>],
    bridging_edges: &[BridgingEdge<N, C>],
    communities: &[CommunityProfile<C>],
) -> Result<Vec<ScoredNode<N, C>>> {
    let profiles: HashMap<&C, &CommunityProfile<C>> = communities
        .iter()
        .map(|profile| (&profile.community_id, profile))
        .collect();

    let ties = directed_ties(bridging_edges);

    let mut cobrokers: HashMap<(&C, &C), usize> = HashMap::new();
    let mut targets: HashMap<&N, Vec<&C>> = HashMap::new();
    for tie in &ties {
        *cobrokers.entry((tie.source, tie.target)).or_insert(0) += 1;
        targets.entry(tie.node).or_default().push(tie.target);
    }

    log::info!(
        "Scoring {} directed ties across {} community pairs",
        ties.len(),
        cobrokers.len()
    );

    let mut seen: HashSet<&N> = HashSet::with_capacity(nodes.len());
    nodes
        .iter()
        .filter(|node| seen.insert(&node.id))
        .map(|node| {
            let broker_score = if node.is_broker {
                let (own_people, own_cohesion) = community_value(&profiles, &node.community_id)?;
                let score_ca = own_people / own_cohesion;

                let mut score_cb = 0.0;
                let reached = targets.get(&node.id).map(Vec::as_slice).unwrap_or_default();
                for &target in reached.iter().unique() {
                    let (people, cohesion) = community_value(&profiles, target)?;
                    let crowd = cobrokers
                        .get(&(&node.community_id, target))
                        .copied()
                        .unwrap_or(1);
                    score_cb += people / (cohesion * (crowd as f64).sqrt());
                }

                score_cb + score_ca
            } else {
                0.0
            };

            Ok(ScoredNode {
                id: node.id.clone(),
                community_id: node.community_id.clone(),
                is_broker: node.is_broker,
                broker_count: node.broker_count,
                broker_score,
            })
        })
        .collect()
}
