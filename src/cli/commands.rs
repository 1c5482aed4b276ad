//! CLI command implementations.

use serde::Serialize;

use crate::graph::Graph;
use crate::types::{GraphError, GraphResult};

/// JSON shape of `gwalk show`.
#[derive(Serialize)]
struct GraphSummary<'a> {
    directed: bool,
    vertices: usize,
    edges: usize,
    adjacency: Vec<AdjacencyEntry<'a>>,
}

#[derive(Serialize)]
struct AdjacencyEntry<'a> {
    vertex: &'a str,
    neighbors: &'a [String],
}

/// Split a `FROM:TO` argument into its two endpoints.
pub fn parse_edge(spec: &str) -> GraphResult<(String, String)> {
    match spec.split_once(':') {
        Some((start, end)) if !start.is_empty() && !end.is_empty() => {
            Ok((start.to_string(), end.to_string()))
        }
        _ => Err(GraphError::InvalidEdgeSpec(spec.to_string())),
    }
}

/// Build a graph from explicit vertices followed by `FROM:TO` edges.
pub fn build_graph(
    undirected: bool,
    vertices: &[String],
    edges: &[String],
) -> GraphResult<Graph<String>> {
    let mut graph = Graph::new(!undirected);
    for vertex in vertices {
        graph.add_vertex(vertex.clone());
    }
    for spec in edges {
        let (start, end) = parse_edge(spec)?;
        graph.add_edge(start, end);
    }
    log::debug!(
        "Built graph with {} vertices and {} adjacency entries",
        graph.vertex_count(),
        graph.edge_count()
    );
    Ok(graph)
}

/// Print every vertex with its neighbors.
pub fn cmd_show(graph: &Graph<String>, json: bool) -> GraphResult<()> {
    if json {
        let mut adjacency = Vec::with_capacity(graph.vertex_count());
        for vertex in graph.vertices() {
            adjacency.push(AdjacencyEntry {
                vertex: vertex.as_str(),
                neighbors: graph.neighbors(vertex)?,
            });
        }
        let info = GraphSummary {
            directed: graph.is_directed(),
            vertices: graph.vertex_count(),
            edges: graph.edge_count(),
            adjacency,
        };
        println!(
            "{}",
            serde_json::to_string_pretty(&info).unwrap_or_default()
        );
    } else {
        println!("{}", graph);
    }
    Ok(())
}

/// Breadth-first traversal from a starting vertex.
pub fn cmd_bfs(graph: &Graph<String>, start: &str, json: bool) -> GraphResult<()> {
    let order = graph.bfs_traversal(&start.to_string())?;
    print_sequence("BFS order", &order, json);
    Ok(())
}

/// Depth-first traversal from a starting vertex.
pub fn cmd_dfs(graph: &Graph<String>, start: &str, json: bool) -> GraphResult<()> {
    let order = graph.dfs_traversal(&start.to_string())?;
    print_sequence("DFS order", &order, json);
    Ok(())
}

/// Shortest (fewest edges) path between two vertices.
pub fn cmd_shortest(
    graph: &Graph<String>,
    start: &str,
    target: &str,
    json: bool,
) -> GraphResult<()> {
    let path = graph.find_shortest_path(&start.to_string(), &target.to_string())?;
    if json {
        println!(
            "{}",
            serde_json::json!({"start": start, "target": target, "path": path})
        );
    } else {
        match path {
            Some(path) => println!("Shortest path: {}", path.join(" -> ")),
            None => println!("No path from {} to {}", start, target),
        }
    }
    Ok(())
}

/// Iterative depth-first path search between two vertices.
pub fn cmd_path(
    graph: &Graph<String>,
    start: &str,
    target: &str,
    json: bool,
) -> GraphResult<()> {
    let path = graph.find_path_dfs_iter(&start.to_string(), &target.to_string())?;
    print_sequence("DFS path", &path, json);
    Ok(())
}

/// Vertices at an exact distance from a starting vertex.
pub fn cmd_n_away(
    graph: &Graph<String>,
    start: &str,
    distance: usize,
    json: bool,
) -> GraphResult<()> {
    let mut found: Vec<String> = graph
        .find_vertices_n_away(&start.to_string(), distance)?
        .into_iter()
        .collect();
    found.sort();

    if json {
        println!(
            "{}",
            serde_json::json!({"start": start, "distance": distance, "vertices": found})
        );
    } else {
        println!(
            "Vertices {} away from {}: {}",
            distance,
            start,
            found.join(", ")
        );
    }
    Ok(())
}

/// Bipartiteness of the part reachable from the first vertex.
pub fn cmd_bipartite(graph: &Graph<String>, json: bool) -> GraphResult<()> {
    let bipartite = graph.is_bipartite();
    if json {
        println!("{}", serde_json::json!({ "bipartite": bipartite }));
    } else {
        println!("Bipartite: {}", bipartite);
    }
    Ok(())
}

/// Reachability groups.
pub fn cmd_components(graph: &Graph<String>, json: bool) -> GraphResult<()> {
    let components = graph.find_connected_components();
    if json {
        println!("{}", serde_json::json!({ "components": components }));
    } else {
        println!("Components: {}", components.len());
        for (i, component) in components.iter().enumerate() {
            println!("  {}: {}", i, component.join(", "));
        }
    }
    Ok(())
}

/// Cycle check, either the first-neighbor walk or the complete one.
pub fn cmd_cycle(graph: &Graph<String>, full: bool, json: bool) -> GraphResult<()> {
    let cycle = if full {
        graph.has_cycle()
    } else {
        graph.contains_cycle()
    };
    if json {
        println!("{}", serde_json::json!({ "cycle": cycle, "full": full }));
    } else {
        println!("Contains cycle: {}", cycle);
    }
    Ok(())
}

/// Topological ordering, either the rotated insertion-order sort or Kahn's algorithm.
pub fn cmd_topo(graph: &Graph<String>, kahn: bool, json: bool) -> GraphResult<()> {
    let order = if kahn {
        graph.topological_order()?
    } else {
        graph.topological_sort()?
    };
    print_sequence("Topological order", &order, json);
    Ok(())
}

fn print_sequence(label: &str, sequence: &[String], json: bool) {
    if json {
        println!("{}", serde_json::json!(sequence));
    } else {
        println!("{}: {}", label, sequence.join(", "));
    }
}
