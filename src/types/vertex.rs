//! Vertex identifiers.

use std::fmt::Debug;
use std::hash::Hash;

/// An opaque, comparable token naming a graph vertex.
///
/// Blanket-implemented for every `Clone + Eq + Hash + Debug` type, so
/// `&str`, `String` and integer ids all work out of the box.
pub trait VertexId: Clone + Eq + Hash + Debug {}

impl<T: Clone + Eq + Hash + Debug> VertexId for T {}
