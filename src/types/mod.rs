//! Shared types for the graphwalk library.

pub mod error;
pub mod vertex;

pub use error::{GraphError, GraphResult};
pub use vertex::VertexId;
