//! In-memory graph operations — the core data structure and its algorithms.

pub mod adjacency;
pub mod analysis;
pub mod builder;
pub mod traversal;

pub use adjacency::Graph;
pub use builder::GraphBuilder;
