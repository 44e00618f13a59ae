//! Graph representation and algorithms module

pub mod algorithms;
pub mod builder;
pub mod compressed;

pub use algorithms::{average_shortest_path_length, induced_subgraph};
pub use builder::GraphBuilder;
pub use compressed::CompressedGraph;
