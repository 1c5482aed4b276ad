//! Structural analysis: bipartiteness, cycles, topological ordering.

use std::collections::{HashMap, HashSet, VecDeque};

use crate::types::{GraphError, GraphResult, VertexId};

use super::Graph;

impl<V: VertexId> Graph<V> {
    /// Check whether the graph can be 2-colored.
    ///
    /// Only the vertices reachable from the first inserted vertex are
    /// colored and checked. To answer for a disconnected graph, check each
    /// component separately. An empty graph is bipartite.
    pub fn is_bipartite(&self) -> bool {
        let Some(first) = self.vertices().first() else {
            return true;
        };

        let mut side: HashMap<&V, bool> = HashMap::new();
        let mut queue: VecDeque<&V> = VecDeque::new();

        side.insert(first, false);
        queue.push_back(first);

        while let Some(current) = queue.pop_front() {
            let current_side = side[current];
            for neighbor in self.adjacent(current) {
                if !side.contains_key(neighbor) {
                    side.insert(neighbor, !current_side);
                    queue.push_back(neighbor);
                }
            }
        }

        for (vertex, vertex_side) in &side {
            for neighbor in self.adjacent(vertex) {
                if side.get(neighbor) == Some(vertex_side) {
                    log::debug!("{:?} and {:?} share a side", vertex, neighbor);
                    return false;
                }
            }
        }

        true
    }

    /// Walk from the first inserted vertex, always taking the first outgoing
    /// edge, and report whether the walk runs back into itself.
    ///
    /// Branches other than the first neighbor are never examined, so a
    /// cycle off that single walk goes unnoticed. See [`Graph::has_cycle`]
    /// for a complete check.
    pub fn contains_cycle(&self) -> bool {
        let Some(mut current) = self.vertices().first() else {
            return false;
        };

        let mut walk: HashSet<&V> = HashSet::new();
        walk.insert(current);

        while let Some(next) = self.adjacent(current).first() {
            if !walk.insert(next) {
                log::debug!("First-neighbor walk returns to {:?}", next);
                return true;
            }
            current = next;
        }

        false
    }

    /// Whether any directed cycle exists anywhere in the graph.
    ///
    /// Self-loops count. Undirected edges are stored in both directions, so
    /// any undirected edge forms a cycle here.
    pub fn has_cycle(&self) -> bool {
        !self.cycle_reaching_vertices().is_empty()
    }

    /// Vertices from which some cycle can be reached.
    ///
    /// Repeatedly strips vertices whose every outgoing edge leads to an
    /// already stripped vertex; whatever survives can reach a cycle.
    pub(crate) fn cycle_reaching_vertices(&self) -> HashSet<&V> {
        let mut out_degree: HashMap<&V, usize> = HashMap::new();
        let mut predecessors: HashMap<&V, Vec<&V>> = HashMap::new();

        for vertex in self.vertices() {
            let neighbors = self.adjacent(vertex);
            out_degree.insert(vertex, neighbors.len());
            for neighbor in neighbors {
                predecessors.entry(neighbor).or_default().push(vertex);
            }
        }

        let mut sinks: Vec<&V> = self
            .vertices()
            .iter()
            .filter(|vertex| out_degree.get(vertex) == Some(&0))
            .collect();

        while let Some(sink) = sinks.pop() {
            out_degree.remove(sink);
            for &predecessor in predecessors.get(sink).map(Vec::as_slice).unwrap_or(&[]) {
                if let Some(degree) = out_degree.get_mut(predecessor) {
                    *degree -= 1;
                    if *degree == 0 {
                        sinks.push(predecessor);
                    }
                }
            }
        }

        out_degree.into_keys().collect()
    }

    /// Order vertices after a first-neighbor cycle check.
    ///
    /// Fails with `CycleDetected` when [`Graph::contains_cycle`] does. Every
    /// vertex, in insertion order, is marked along with whatever it reaches
    /// and then pushed; the last pushed vertex is finally moved to the
    /// front. The result is therefore the insertion order with its last
    /// vertex rotated to the front, which is not in general consistent with
    /// edge direction. Use [`Graph::topological_order`] for a true ordering.
    pub fn topological_sort(&self) -> GraphResult<Vec<V>> {
        if self.contains_cycle() {
            return Err(GraphError::CycleDetected);
        }

        let mut visited: HashSet<&V> = HashSet::new();
        let mut stack: Vec<V> = Vec::with_capacity(self.vertex_count());

        for vertex in self.vertices() {
            visited.insert(vertex);
            self.mark_reachable(vertex, &mut visited);
            stack.push(vertex.clone());
        }

        if let Some(top) = stack.pop() {
            stack.insert(0, top);
        }

        Ok(stack)
    }

    /// Depth-first marking of every unvisited vertex reachable from `start`.
    fn mark_reachable<'a>(&'a self, start: &'a V, visited: &mut HashSet<&'a V>) {
        let mut pending: Vec<&V> = vec![start];
        while let Some(current) = pending.pop() {
            for neighbor in self.adjacent(current).iter().rev() {
                if visited.insert(neighbor) {
                    pending.push(neighbor);
                }
            }
        }
    }

    /// A linear ordering consistent with every edge (Kahn's algorithm).
    ///
    /// Vertices with no incoming edges are emitted in insertion order, and
    /// vertices they free up follow in the order they were freed. Fails
    /// with `CycleDetected` if any cycle exists.
    pub fn topological_order(&self) -> GraphResult<Vec<V>> {
        let mut in_degree: HashMap<&V, usize> =
            self.vertices().iter().map(|vertex| (vertex, 0)).collect();
        for vertex in self.vertices() {
            for neighbor in self.adjacent(vertex) {
                if let Some(degree) = in_degree.get_mut(neighbor) {
                    *degree += 1;
                }
            }
        }

        let mut ready: VecDeque<&V> = self
            .vertices()
            .iter()
            .filter(|vertex| in_degree.get(vertex) == Some(&0))
            .collect();
        let mut order: Vec<V> = Vec::with_capacity(self.vertex_count());

        while let Some(current) = ready.pop_front() {
            order.push(current.clone());
            for neighbor in self.adjacent(current) {
                if let Some(degree) = in_degree.get_mut(neighbor) {
                    *degree -= 1;
                    if *degree == 0 {
                        ready.push_back(neighbor);
                    }
                }
            }
        }

        if order.len() < self.vertex_count() {
            log::debug!(
                "Only {} of {} vertices could be ordered",
                order.len(),
                self.vertex_count()
            );
            return Err(GraphError::CycleDetected);
        }

        Ok(order)
    }
}
