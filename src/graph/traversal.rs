//! Graph traversal and search algorithms (BFS, DFS, shortest path).

use std::collections::{HashMap, HashSet, VecDeque};

use crate::types::{GraphError, GraphResult, VertexId};

use super::Graph;

impl<V: VertexId> Graph<V> {
    /// Visit every vertex reachable from `start` in breadth-first order.
    pub fn bfs_traversal(&self, start: &V) -> GraphResult<Vec<V>> {
        if !self.contains_vertex(start) {
            return Err(GraphError::not_found(start));
        }

        let mut seen: HashSet<&V> = HashSet::new();
        let mut queue: VecDeque<&V> = VecDeque::new();
        let mut order: Vec<V> = Vec::new();

        seen.insert(start);
        queue.push_back(start);

        while let Some(current) = queue.pop_front() {
            log::debug!("Processing vertex {:?}", current);
            order.push(current.clone());

            for neighbor in self.neighbors(current)? {
                if seen.insert(neighbor) {
                    queue.push_back(neighbor);
                }
            }
        }

        Ok(order)
    }

    /// Find a path with the fewest edges from `start` to `target`.
    ///
    /// Returns `Ok(None)` when `target` is unreachable. Only fails up front
    /// when neither endpoint is in the graph; a missing `start` alone surfaces
    /// as `NotFound` from its neighbor lookup.
    pub fn find_shortest_path(&self, start: &V, target: &V) -> GraphResult<Option<Vec<V>>> {
        if !self.contains_vertex(start) && !self.contains_vertex(target) {
            return Err(GraphError::not_found(start));
        }

        // Each discovered vertex maps to the vertex that discovered it.
        let mut parents: HashMap<&V, Option<&V>> = HashMap::new();
        let mut queue: VecDeque<&V> = VecDeque::new();

        parents.insert(start, None);
        queue.push_back(start);

        while let Some(current) = queue.pop_front() {
            if current == target {
                break;
            }

            for neighbor in self.neighbors(current)? {
                if !parents.contains_key(neighbor) {
                    parents.insert(neighbor, Some(current));
                    queue.push_back(neighbor);
                }
            }
        }

        if !parents.contains_key(target) {
            log::debug!("No path from {:?} to {:?}", start, target);
            return Ok(None);
        }

        let mut path = vec![target.clone()];
        let mut cursor = target;
        while let Some(&Some(parent)) = parents.get(cursor) {
            path.push(parent.clone());
            cursor = parent;
        }
        path.reverse();
        Ok(Some(path))
    }

    /// All vertices whose breadth-first distance from `start` is exactly `distance`.
    pub fn find_vertices_n_away(&self, start: &V, distance: usize) -> GraphResult<HashSet<V>> {
        if !self.contains_vertex(start) {
            return Err(GraphError::not_found(start));
        }

        let mut distances: HashMap<&V, usize> = HashMap::new();
        let mut queue: VecDeque<&V> = VecDeque::new();
        let mut found: HashSet<V> = HashSet::new();

        distances.insert(start, 0);
        queue.push_back(start);

        while let Some(current) = queue.pop_front() {
            let current_distance = distances[current];
            if current_distance == distance {
                found.insert(current.clone());
                // Anything discovered from here is farther than requested.
                continue;
            }

            for neighbor in self.adjacent(current) {
                if !distances.contains_key(neighbor) {
                    distances.insert(neighbor, current_distance + 1);
                    queue.push_back(neighbor);
                }
            }
        }

        Ok(found)
    }

    /// Group vertices by reachability.
    ///
    /// Every vertex not yet seen seeds a new group holding the seed followed
    /// by everything reachable from it in breadth-first order. Reachability
    /// follows edge direction, so on a directed graph a later group may
    /// repeat vertices already listed in an earlier one.
    pub fn find_connected_components(&self) -> Vec<Vec<V>> {
        let mut visited: HashSet<&V> = HashSet::new();
        let mut components: Vec<Vec<V>> = Vec::new();

        for vertex in self.vertices() {
            if visited.insert(vertex) {
                let component = self.collect_reachable(vertex, |reached| {
                    visited.insert(reached);
                });
                log::trace!("Component seeded at {:?}: {:?}", vertex, component);
                components.push(component);
            }
        }

        components
    }

    /// BFS from `seed` with its own seen-set, reporting each newly reached vertex.
    fn collect_reachable<'a>(&'a self, seed: &'a V, mut visit: impl FnMut(&'a V)) -> Vec<V> {
        let mut seen: HashSet<&V> = HashSet::new();
        let mut queue: VecDeque<&V> = VecDeque::new();
        let mut reached = vec![seed.clone()];

        seen.insert(seed);
        queue.push_back(seed);

        while let Some(current) = queue.pop_front() {
            for neighbor in self.adjacent(current) {
                if seen.insert(neighbor) {
                    queue.push_back(neighbor);
                    reached.push(neighbor.clone());
                    visit(neighbor);
                }
            }
        }

        reached
    }

    /// Depth-first search for `target` using an explicit stack.
    ///
    /// Every popped vertex is appended to the returned path and all of its
    /// neighbors are pushed without checking whether they were seen, so the
    /// last neighbor is explored first and revisited vertices show up again.
    /// A walk that would circle a cycle forever without meeting `target`
    /// fails with `PathNotFound`, as does an exhausted stack.
    pub fn find_path_dfs_iter(&self, start: &V, target: &V) -> GraphResult<Vec<V>> {
        if !self.contains_vertex(start) && !self.contains_vertex(target) {
            return Err(GraphError::not_found(start));
        }

        // Once the walk pops a vertex that can reach a cycle it never
        // returns below that point, and each later such vertex is the next
        // step of an endless descent. Popping one of them twice means the
        // descent has started repeating itself.
        let unbounded = self.cycle_reaching_vertices();
        let mut descended: HashSet<&V> = HashSet::new();

        let mut stack: Vec<&V> = vec![start];
        let mut path: Vec<V> = Vec::new();

        while let Some(current) = stack.pop() {
            path.push(current.clone());

            if current == target {
                return Ok(path);
            }

            if unbounded.contains(current) && !descended.insert(current) {
                log::debug!(
                    "DFS from {:?} repeats through {:?} without reaching {:?}",
                    start,
                    current,
                    target
                );
                break;
            }

            let neighbors = self.neighbors(current)?;
            log::trace!("Pushing {} neighbors of {:?}", neighbors.len(), current);
            stack.extend(neighbors);
        }

        Err(GraphError::path_not_found(start, target))
    }

    /// Visit every vertex reachable from `start` in depth-first pre-order.
    ///
    /// Each unvisited neighbor is explored completely before the next one,
    /// matching the recursive formulation without its depth limit.
    pub fn dfs_traversal(&self, start: &V) -> GraphResult<Vec<V>> {
        if !self.contains_vertex(start) {
            return Err(GraphError::not_found(start));
        }

        let mut visited: HashSet<&V> = HashSet::new();
        let mut order: Vec<V> = Vec::new();
        // (vertex, index of the next neighbor to try)
        let mut frames: Vec<(&V, usize)> = Vec::new();

        log::debug!("Visiting vertex {:?}", start);
        visited.insert(start);
        order.push(start.clone());
        frames.push((start, 0));

        while let Some(top) = frames.last_mut() {
            let (vertex, next) = *top;
            match self.adjacent(vertex).get(next) {
                Some(neighbor) => {
                    top.1 += 1;
                    if visited.insert(neighbor) {
                        log::debug!("Visiting vertex {:?}", neighbor);
                        order.push(neighbor.clone());
                        frames.push((neighbor, 0));
                    }
                }
                None => {
                    frames.pop();
                }
            }
        }

        Ok(order)
    }
}
