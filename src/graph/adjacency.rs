//! Core graph structure — vertices + ordered adjacency lists.

use std::collections::HashMap;
use std::fmt;

use crate::types::{GraphError, GraphResult, VertexId};

/// An in-memory directed or undirected graph keyed by vertex identifier.
///
/// Vertices are kept in insertion order and every neighbor sequence keeps
/// the order its edges were added in; both orders drive traversal output.
#[derive(Debug, Clone)]
pub struct Graph<V: VertexId> {
    /// Whether edges go in only one direction.
    directed: bool,
    /// Vertex IDs in insertion order.
    order: Vec<V>,
    /// Adjacency index: vertex -> outgoing neighbors.
    adjacency: HashMap<V, Vec<V>>,
}

impl<V: VertexId> Graph<V> {
    /// Create a new empty graph.
    pub fn new(directed: bool) -> Self {
        Self {
            directed,
            order: Vec::new(),
            adjacency: HashMap::new(),
        }
    }

    /// Create a new empty directed graph.
    pub fn directed() -> Self {
        Self::new(true)
    }

    /// Create a new empty undirected graph.
    pub fn undirected() -> Self {
        Self::new(false)
    }

    /// Whether this graph is directed.
    pub fn is_directed(&self) -> bool {
        self.directed
    }

    /// Number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.order.len()
    }

    /// Number of stored adjacency entries. An undirected edge counts twice.
    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(Vec::len).sum()
    }

    /// True when the graph has no vertices.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Add a vertex with no neighbors. Adding an existing vertex is a no-op.
    pub fn add_vertex(&mut self, id: V) {
        if self.adjacency.contains_key(&id) {
            return;
        }
        self.order.push(id.clone());
        self.adjacency.insert(id, Vec::new());
    }

    /// Add an edge from `start` to `end`, adding either endpoint if missing.
    ///
    /// Self-loops and repeated edges are stored as given.
    pub fn add_edge(&mut self, start: V, end: V) {
        self.add_vertex(start.clone());
        self.add_vertex(end.clone());

        if !self.directed {
            if let Some(list) = self.adjacency.get_mut(&end) {
                list.push(start.clone());
            }
        }
        if let Some(list) = self.adjacency.get_mut(&start) {
            list.push(end);
        }
    }

    /// Return true if the vertex is contained in the graph.
    pub fn contains_vertex(&self, id: &V) -> bool {
        self.adjacency.contains_key(id)
    }

    /// Return true if an edge from `start` to `end` exists.
    pub fn contains_edge(&self, start: &V, end: &V) -> bool {
        self.adjacency
            .get(start)
            .is_some_and(|neighbors| neighbors.contains(end))
    }

    /// All vertex IDs, in insertion order.
    pub fn vertices(&self) -> &[V] {
        &self.order
    }

    /// The ordered neighbors of `id`.
    pub fn neighbors(&self, id: &V) -> GraphResult<&[V]> {
        self.adjacency
            .get(id)
            .map(Vec::as_slice)
            .ok_or_else(|| GraphError::not_found(id))
    }

    /// Neighbors of a vertex already known to be present; empty otherwise.
    pub(crate) fn adjacent(&self, id: &V) -> &[V] {
        self.adjacency.get(id).map(Vec::as_slice).unwrap_or(&[])
    }
}

impl<V: VertexId> Default for Graph<V> {
    fn default() -> Self {
        Self::directed()
    }
}

impl<V: VertexId> fmt::Display for Graph<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Graph with vertices:")?;
        for vertex in &self.order {
            write!(f, "\n{:?} -> {:?}", vertex, self.adjacent(vertex))?;
        }
        Ok(())
    }
}
