//! graphwalk — in-memory directed and undirected graphs keyed by vertex ID.
//!
//! Vertices and edges are added incrementally; a fixed suite of traversal
//! (BFS, DFS, shortest path, reachability) and analysis (bipartiteness,
//! cycles, topological ordering) algorithms runs read-only over the
//! adjacency lists.

pub mod cli;
pub mod graph;
pub mod types;

// Re-export commonly used types at the crate root
pub use graph::{Graph, GraphBuilder};
pub use types::{GraphError, GraphResult, VertexId};
