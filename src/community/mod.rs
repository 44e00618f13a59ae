//! Community profiling module

pub mod profile;

pub use profile::profile_communities;

use serde::{Deserialize, Serialize};

/// Aggregate description of one community
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommunityProfile<C> {
    /// Identifier of this community
    pub community_id: C,

    /// Number of member nodes (always > 1)
    pub n_people: usize,

    /// Number of members that are brokers
    pub n_brokers: usize,

    /// Average shortest path length inside the community's induced subgraph.
    /// Lower values mean a more tightly knit community.
    pub cohesion: f64,
}
