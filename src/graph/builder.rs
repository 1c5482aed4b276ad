//! Fluent API for building Graph instances.

use crate::types::VertexId;

use super::Graph;

/// Fluent builder for constructing a [`Graph`].
///
/// Vertices and edges are applied in call order, with the same semantics
/// as [`Graph::add_vertex`] and [`Graph::add_edge`].
pub struct GraphBuilder<V: VertexId> {
    graph: Graph<V>,
}

impl<V: VertexId> GraphBuilder<V> {
    /// Start building a directed graph.
    pub fn directed() -> Self {
        Self {
            graph: Graph::directed(),
        }
    }

    /// Start building an undirected graph.
    pub fn undirected() -> Self {
        Self {
            graph: Graph::undirected(),
        }
    }

    /// Add a vertex.
    pub fn vertex(mut self, id: V) -> Self {
        self.graph.add_vertex(id);
        self
    }

    /// Add several vertices, in order.
    pub fn vertices<I>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = V>,
    {
        for id in ids {
            self.graph.add_vertex(id);
        }
        self
    }

    /// Add an edge between two vertices.
    pub fn edge(mut self, start: V, end: V) -> Self {
        self.graph.add_edge(start, end);
        self
    }

    /// Add several edges, in order.
    pub fn edges<I>(mut self, pairs: I) -> Self
    where
        I: IntoIterator<Item = (V, V)>,
    {
        for (start, end) in pairs {
            self.graph.add_edge(start, end);
        }
        self
    }

    /// Build the final Graph.
    pub fn build(self) -> Graph<V> {
        self.graph
    }
}

impl<V: VertexId> Default for GraphBuilder<V> {
    fn default() -> Self {
        Self::directed()
    }
}
