//! Configuration management for the broker score pipeline

use serde::{Deserialize, Serialize};

/// What to do with an edge that references an id missing from the node set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum EndpointPolicy {
    /// Drop the edge from every downstream computation (logged at warn level)
    #[default]
    Drop,

    /// Abort the run with [`crate::BrokerError::UnknownEndpoint`]
    Reject,
}

/// Default configuration for the broker score pipeline
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Handling of edges with an endpoint absent from the node set
    pub unknown_endpoints: EndpointPolicy,

    /// Community size from which cohesion BFS sources run in parallel
    pub parallel_threshold: usize,

    /// Number of worker threads (0 = use all available cores)
    pub threads: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            unknown_endpoints: EndpointPolicy::Drop,
            parallel_threshold: 1000,
            threads: 0,
        }
    }
}

impl Config {
    /// Create a new configuration with custom values
    pub fn new(
        unknown_endpoints: EndpointPolicy,
        parallel_threshold: usize,
        threads: usize,
    ) -> Self {
        Self {
            unknown_endpoints,
            parallel_threshold,
            threads,
        }
    }

    pub fn with_unknown_endpoints(mut self, policy: EndpointPolicy) -> Self {
        self.unknown_endpoints = policy;
        self
    }

    pub fn with_parallel_threshold(mut self, threshold: usize) -> Self {
        self.parallel_threshold = threshold;
        self
    }

    pub fn with_threads(mut self, threads: usize) -> Self {
        self.threads = threads;
        self
    }

    /// Worker threads actually used, resolving 0 to the core count
    pub fn effective_threads(&self) -> usize {
        if self.threads > 0 {
            self.threads
        } else {
            num_cpus::get()
        }
    }
}
