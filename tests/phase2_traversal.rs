//! Phase 2 tests: traversal and search algorithms.

use std::collections::{HashMap, HashSet, VecDeque};

use rand::Rng;

use graphwalk::graph::{Graph, GraphBuilder};
use graphwalk::types::GraphError;

// ==================== Helpers ====================

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// A → B, B → C, B → D, C → E, D → E, F → G
fn sample_directed() -> Graph<&'static str> {
    GraphBuilder::directed()
        .vertices(["A", "B", "C", "D", "E", "F", "G"])
        .edges([
            ("A", "B"),
            ("B", "C"),
            ("B", "D"),
            ("C", "E"),
            ("D", "E"),
            ("F", "G"),
        ])
        .build()
}

/// Random directed graph over `0..vertex_count`.
fn random_graph(vertex_count: u32, edge_count: usize) -> Graph<u32> {
    let mut rng = rand::thread_rng();
    let mut graph = Graph::directed();
    for v in 0..vertex_count {
        graph.add_vertex(v);
    }
    for _ in 0..edge_count {
        let start = rng.gen_range(0..vertex_count);
        let end = rng.gen_range(0..vertex_count);
        graph.add_edge(start, end);
    }
    graph
}

/// Reference BFS distances, computed independently of the library's traversals.
fn reference_distances(graph: &Graph<u32>, start: u32) -> HashMap<u32, usize> {
    let mut distances = HashMap::from([(start, 0)]);
    let mut queue = VecDeque::from([start]);
    while let Some(current) = queue.pop_front() {
        let d = distances[&current];
        for &n in graph.neighbors(&current).unwrap() {
            distances.entry(n).or_insert_with(|| {
                queue.push_back(n);
                d + 1
            });
        }
    }
    distances
}

// ==================== BFS Tests ====================

#[test]
fn test_bfs_order() {
    init_logging();
    let graph = sample_directed();
    assert_eq!(
        graph.bfs_traversal(&"A").unwrap(),
        vec!["A", "B", "C", "D", "E"]
    );
}

#[test]
fn test_bfs_missing_start() {
    let graph = sample_directed();
    assert!(matches!(
        graph.bfs_traversal(&"Z"),
        Err(GraphError::NotFound(_))
    ));
}

#[test]
fn test_bfs_undirected_cycle_visits_once() {
    let graph = GraphBuilder::undirected()
        .edges([("A", "B"), ("B", "C"), ("C", "A"), ("C", "D")])
        .build();
    assert_eq!(
        graph.bfs_traversal(&"A").unwrap(),
        vec!["A", "B", "C", "D"]
    );
}

#[test]
fn test_bfs_random_nondecreasing_distance() {
    let graph = random_graph(60, 150);
    for start in [0, 17, 42] {
        let order = graph.bfs_traversal(&start).unwrap();
        let distances = reference_distances(&graph, start);

        let unique: HashSet<u32> = order.iter().copied().collect();
        assert_eq!(unique.len(), order.len(), "a vertex was visited twice");
        assert_eq!(unique.len(), distances.len());
        for pair in order.windows(2) {
            assert!(distances[&pair[0]] <= distances[&pair[1]]);
        }
    }
}

// ==================== Shortest Path Tests ====================

#[test]
fn test_shortest_path_tie_broken_by_first_discovery() {
    let graph = sample_directed();
    assert_eq!(
        graph.find_shortest_path(&"A", &"E").unwrap(),
        Some(vec!["A", "B", "C", "E"])
    );
}

#[test]
fn test_shortest_path_to_self() {
    let graph = sample_directed();
    assert_eq!(
        graph.find_shortest_path(&"D", &"D").unwrap(),
        Some(vec!["D"])
    );
}

#[test]
fn test_shortest_path_unreachable() {
    let graph = sample_directed();
    assert_eq!(graph.find_shortest_path(&"A", &"G").unwrap(), None);
    assert_eq!(graph.find_shortest_path(&"E", &"A").unwrap(), None);
}

#[test]
fn test_shortest_path_existence_checks() {
    let graph = sample_directed();

    // Both missing: rejected up front.
    assert!(matches!(
        graph.find_shortest_path(&"Y", &"Z"),
        Err(GraphError::NotFound(_))
    ));
    // Only the target missing: simply unreachable.
    assert_eq!(graph.find_shortest_path(&"A", &"Z").unwrap(), None);
    // Only the start missing: its neighbor lookup fails.
    assert!(matches!(
        graph.find_shortest_path(&"Z", &"A"),
        Err(GraphError::NotFound(_))
    ));
}

#[test]
fn test_shortest_path_random_matches_bfs_distance() {
    let graph = random_graph(50, 120);
    let distances = reference_distances(&graph, 0);

    for target in 0..50 {
        let path = graph.find_shortest_path(&0, &target).unwrap();
        match distances.get(&target) {
            Some(&d) => {
                let path = path.expect("reachable target must have a path");
                assert_eq!(path.len() - 1, d);
                assert_eq!(path[0], 0);
                assert_eq!(*path.last().unwrap(), target);
                for step in path.windows(2) {
                    assert!(graph.contains_edge(&step[0], &step[1]));
                }
            }
            None => assert!(path.is_none()),
        }
    }
}

// ==================== N-Away Tests ====================

#[test]
fn test_vertices_n_away() {
    let graph = sample_directed();

    assert_eq!(
        graph.find_vertices_n_away(&"A", 0).unwrap(),
        HashSet::from(["A"])
    );
    assert_eq!(
        graph.find_vertices_n_away(&"A", 2).unwrap(),
        HashSet::from(["C", "D"])
    );
    // E is reachable by two routes of the same length.
    assert_eq!(
        graph.find_vertices_n_away(&"A", 3).unwrap(),
        HashSet::from(["E"])
    );
    assert!(graph.find_vertices_n_away(&"A", 4).unwrap().is_empty());
}

#[test]
fn test_vertices_n_away_uses_minimum_distance() {
    // A reaches C directly and through B.
    let graph = GraphBuilder::directed()
        .edges([("A", "B"), ("B", "C"), ("A", "C")])
        .build();
    assert_eq!(
        graph.find_vertices_n_away(&"A", 1).unwrap(),
        HashSet::from(["B", "C"])
    );
    assert!(graph.find_vertices_n_away(&"A", 2).unwrap().is_empty());
}

#[test]
fn test_vertices_n_away_missing_start() {
    let graph = sample_directed();
    assert!(matches!(
        graph.find_vertices_n_away(&"Z", 0),
        Err(GraphError::NotFound(_))
    ));
}

#[test]
fn test_vertices_n_away_random() {
    let graph = random_graph(40, 90);
    let distances = reference_distances(&graph, 5);
    for n in 0..6 {
        let expected: HashSet<u32> = distances
            .iter()
            .filter(|(_, &d)| d == n)
            .map(|(&v, _)| v)
            .collect();
        assert_eq!(graph.find_vertices_n_away(&5, n).unwrap(), expected);
    }
}

// ==================== Connected Component Tests ====================

#[test]
fn test_components_two_chains() {
    let graph = GraphBuilder::directed()
        .edges([("A", "B"), ("C", "D")])
        .build();
    assert_eq!(
        graph.find_connected_components(),
        vec![vec!["A", "B"], vec!["C", "D"]]
    );
}

#[test]
fn test_components_follow_edge_direction() {
    // A is inserted first but only reachable from B.
    let graph = GraphBuilder::directed()
        .vertex("A")
        .edge("B", "A")
        .build();
    assert_eq!(
        graph.find_connected_components(),
        vec![vec!["A"], vec!["B", "A"]]
    );
}

#[test]
fn test_components_undirected_partition() {
    let graph = GraphBuilder::undirected()
        .vertex("lonely")
        .edges([("A", "B"), ("B", "C"), ("X", "Y")])
        .build();
    assert_eq!(
        graph.find_connected_components(),
        vec![vec!["lonely"], vec!["A", "B", "C"], vec!["X", "Y"]]
    );
}

#[test]
fn test_components_empty_graph() {
    let graph: Graph<&str> = Graph::undirected();
    assert!(graph.find_connected_components().is_empty());
}

// ==================== DFS Path Tests ====================

#[test]
fn test_dfs_path_explores_last_neighbor_first() {
    init_logging();
    let graph = sample_directed();
    // B pushes C then D, so D is popped first.
    assert_eq!(
        graph.find_path_dfs_iter(&"A", &"E").unwrap(),
        vec!["A", "B", "D", "E"]
    );
    assert_eq!(
        graph.find_path_dfs_iter(&"A", &"C").unwrap(),
        vec!["A", "B", "D", "E", "C"]
    );
}

#[test]
fn test_dfs_path_keeps_revisits() {
    // Diamond: E is reached again through C after the D branch.
    let graph = GraphBuilder::directed()
        .edges([("A", "C"), ("A", "D"), ("C", "E"), ("D", "E"), ("E", "F")])
        .vertex("T")
        .build();
    assert!(matches!(
        graph.find_path_dfs_iter(&"A", &"T"),
        Err(GraphError::PathNotFound { .. })
    ));

    let graph = GraphBuilder::directed()
        .edges([
            ("A", "B"),
            ("A", "D"),
            ("D", "E"),
            ("B", "E"),
            ("E", "F"),
            ("A", "G"),
        ])
        .build();
    // A pushes B, D, G; G is popped first, then the whole D branch, then B.
    assert_eq!(
        graph.find_path_dfs_iter(&"A", &"B").unwrap(),
        vec!["A", "G", "D", "E", "F", "B"]
    );
}

#[test]
fn test_dfs_path_unreachable() {
    let graph = sample_directed();
    match graph.find_path_dfs_iter(&"A", &"G") {
        Err(GraphError::PathNotFound { start, target }) => {
            assert_eq!(start, "\"A\"");
            assert_eq!(target, "\"G\"");
        }
        other => panic!("Expected PathNotFound error, got {:?}", other),
    }
}

#[test]
fn test_dfs_path_existence_checks() {
    let graph = sample_directed();
    assert!(matches!(
        graph.find_path_dfs_iter(&"Y", &"Z"),
        Err(GraphError::NotFound(_))
    ));
    assert!(matches!(
        graph.find_path_dfs_iter(&"A", &"Z"),
        Err(GraphError::PathNotFound { .. })
    ));
    assert!(matches!(
        graph.find_path_dfs_iter(&"Z", &"A"),
        Err(GraphError::NotFound(_))
    ));
}

#[test]
fn test_dfs_path_cycle_without_target_terminates() {
    let graph = GraphBuilder::undirected()
        .edges([("A", "B"), ("B", "C")])
        .vertex("Z")
        .build();
    assert!(matches!(
        graph.find_path_dfs_iter(&"A", &"Z"),
        Err(GraphError::PathNotFound { .. })
    ));
}

#[test]
fn test_dfs_path_cycle_hides_reachable_target() {
    // A pushes T then B; B loops back to A forever before T is ever popped.
    let graph = GraphBuilder::directed()
        .edges([("A", "T"), ("A", "B"), ("B", "A")])
        .build();
    assert!(matches!(
        graph.find_path_dfs_iter(&"A", &"T"),
        Err(GraphError::PathNotFound { .. })
    ));
}

#[test]
fn test_dfs_path_finds_target_inside_cycle() {
    let graph = GraphBuilder::directed()
        .edges([("A", "B"), ("B", "C"), ("C", "A"), ("C", "D")])
        .build();
    assert_eq!(
        graph.find_path_dfs_iter(&"A", &"D").unwrap(),
        vec!["A", "B", "C", "D"]
    );
}

#[test]
fn test_dfs_path_finds_target_in_finite_branch_of_cycle() {
    // From B, the finite branch X → T is explored before the loop back to A.
    let graph = GraphBuilder::directed()
        .edges([("A", "B"), ("B", "A"), ("B", "X"), ("X", "T")])
        .build();
    assert_eq!(
        graph.find_path_dfs_iter(&"A", &"T").unwrap(),
        vec!["A", "B", "X", "T"]
    );
}

// ==================== DFS Traversal Tests ====================

#[test]
fn test_dfs_traversal_preorder() {
    init_logging();
    let graph = sample_directed();
    assert_eq!(
        graph.dfs_traversal(&"A").unwrap(),
        vec!["A", "B", "C", "E", "D"]
    );
}

#[test]
fn test_dfs_traversal_undirected() {
    let graph = GraphBuilder::undirected()
        .edges([("A", "B"), ("A", "C"), ("B", "D"), ("C", "D")])
        .build();
    assert_eq!(
        graph.dfs_traversal(&"A").unwrap(),
        vec!["A", "B", "D", "C"]
    );
}

#[test]
fn test_dfs_traversal_missing_start() {
    let graph = sample_directed();
    assert!(matches!(
        graph.dfs_traversal(&"Z"),
        Err(GraphError::NotFound(_))
    ));
}

#[test]
fn test_dfs_traversal_deep_chain() {
    let mut graph = Graph::directed();
    for i in 0..200_000u32 {
        graph.add_edge(i, i + 1);
    }
    let order = graph.dfs_traversal(&0).unwrap();
    assert_eq!(order.len(), 200_001);
    assert_eq!(order[199_999], 199_999);
}

#[test]
fn test_dfs_traversal_random_reaches_same_set_as_bfs() {
    let graph = random_graph(80, 200);
    for start in [0, 1, 79] {
        let dfs: HashSet<u32> = graph.dfs_traversal(&start).unwrap().into_iter().collect();
        let bfs: HashSet<u32> = graph.bfs_traversal(&start).unwrap().into_iter().collect();
        assert_eq!(dfs, bfs);
    }
}
