use frontier_sssp::algorithm::dijkstra::Dijkstra;
use frontier_sssp::algorithm::relaxation::ParallelRelaxation;
use frontier_sssp::algorithm::ShortestPathAlgorithm;
use frontier_sssp::graph::generators::random_edge_list_with_rng;
use frontier_sssp::graph::{AdjacencyGraph, Graph};
use frontier_sssp::Error;
use rand::rngs::StdRng;
use rand::SeedableRng;

// Test helper to build a graph from edge triples
fn build_graph(vertices: usize, edges: &[(usize, usize, u64)]) -> AdjacencyGraph {
    AdjacencyGraph::from_edges(vertices, edges).unwrap()
}

#[test]
fn test_two_routes_shorter_wins() {
    // (0->1,5) (1->2,3) (0->2,10): the two-hop route to 2 beats the direct edge
    let graph = build_graph(3, &[(0, 1, 5), (1, 2, 3), (0, 2, 10)]);
    let result = ParallelRelaxation::new()
        .compute_shortest_paths(&graph, 0)
        .unwrap();

    assert_eq!(result.distances, vec![Some(0), Some(5), Some(8)]);
    assert_eq!(result.source, 0);
}

#[test]
fn test_isolated_vertex_is_unreachable() {
    // vertex 3 has no incident edges at all
    let graph = build_graph(4, &[(0, 1, 1), (1, 2, 1)]);
    let result = ParallelRelaxation::new()
        .compute_shortest_paths(&graph, 0)
        .unwrap();

    assert_eq!(result.distances, vec![Some(0), Some(1), Some(2), None]);
    assert_eq!(result.reachable_count(), 3);
}

#[test]
fn test_cycle_terminates() {
    // the 0 <-> 1 cycle must not keep the engine looping
    let graph = build_graph(3, &[(0, 1, 1), (1, 0, 1), (0, 2, 100)]);
    let result = ParallelRelaxation::new()
        .compute_shortest_paths(&graph, 0)
        .unwrap();

    assert_eq!(result.distances, vec![Some(0), Some(1), Some(100)]);
}

#[test]
fn test_source_distance_is_zero() {
    let graph = build_graph(3, &[(0, 1, 7), (1, 2, 7), (2, 0, 7)]);
    for source in 0..3 {
        let result = ParallelRelaxation::new()
            .compute_shortest_paths(&graph, source)
            .unwrap();
        assert_eq!(result.distances[source], Some(0));
    }
}

#[test]
fn test_zero_weight_edges() {
    let graph = build_graph(4, &[(0, 1, 0), (1, 2, 0), (2, 3, 5)]);
    let result = ParallelRelaxation::new()
        .compute_shortest_paths(&graph, 0)
        .unwrap();

    assert_eq!(result.distances, vec![Some(0), Some(0), Some(0), Some(5)]);
}

#[test]
fn test_parallel_edges_take_cheapest() {
    let graph = build_graph(2, &[(0, 1, 9), (0, 1, 3), (0, 1, 6)]);
    let result = ParallelRelaxation::new()
        .compute_shortest_paths(&graph, 0)
        .unwrap();

    assert_eq!(result.distances[1], Some(3));
}

#[test]
fn test_single_vertex_graph() {
    let graph = build_graph(1, &[]);
    let result = ParallelRelaxation::new()
        .compute_shortest_paths(&graph, 0)
        .unwrap();

    assert_eq!(result.distances, vec![Some(0)]);
}

#[test]
fn test_source_out_of_range_fails() {
    let graph = build_graph(3, &[(0, 1, 1)]);

    let relaxation = ParallelRelaxation::new().compute_shortest_paths(&graph, 3);
    assert!(matches!(relaxation, Err(Error::SourceNotFound(3))));

    let dijkstra = Dijkstra::new().compute_shortest_paths(&graph, 7);
    assert!(matches!(dijkstra, Err(Error::SourceNotFound(7))));
}

#[test]
fn test_empty_graph_rejects_any_source() {
    let graph = build_graph(0, &[]);
    let result = ParallelRelaxation::new().compute_shortest_paths(&graph, 0);
    assert!(matches!(result, Err(Error::SourceNotFound(0))));
}

#[test]
fn test_edge_endpoint_out_of_range_fails() {
    let result = AdjacencyGraph::from_edges(2, &[(0, 2, 1)]);
    assert!(matches!(result, Err(Error::InvalidEdge(0, 2))));

    let result = AdjacencyGraph::from_edges(2, &[(5, 1, 1)]);
    assert!(matches!(result, Err(Error::InvalidEdge(5, 1))));
}

#[test]
fn test_round_limit_trips_before_convergence() {
    // Any improving first round forces a second round, so a limit of one
    // must trip as long as the source has an outgoing edge.
    let graph = build_graph(2, &[(0, 1, 1)]);
    let result = ParallelRelaxation::new()
        .with_round_limit(1)
        .compute_shortest_paths(&graph, 0);
    assert!(matches!(result, Err(Error::NonConvergence(1))));
}

#[test]
fn test_round_limit_large_enough_converges() {
    // A chain converges within hop count + 1 rounds under any scheduling
    let graph = build_graph(4, &[(0, 1, 1), (1, 2, 1), (2, 3, 1)]);
    let result = ParallelRelaxation::new()
        .with_round_limit(10)
        .compute_shortest_paths(&graph, 0)
        .unwrap();
    assert_eq!(result.distances, vec![Some(0), Some(1), Some(2), Some(3)]);
}

#[test]
fn test_matches_dijkstra_on_random_graphs() {
    let configs = [(100, 400), (500, 3_000), (1_000, 2_000)];
    let dijkstra = Dijkstra::new();
    let relaxation = ParallelRelaxation::new();

    for (seed, &(vertices, edges)) in configs.iter().enumerate() {
        let mut rng = StdRng::seed_from_u64(seed as u64);
        let edge_list = random_edge_list_with_rng(vertices, edges, 1_000, &mut rng);
        let graph = build_graph(vertices, &edge_list);

        let expected = dijkstra.compute_shortest_paths(&graph, 0).unwrap();
        let actual = relaxation.compute_shortest_paths(&graph, 0).unwrap();

        assert_eq!(
            actual.distances, expected.distances,
            "engines disagree on graph with {} vertices and {} edges",
            vertices, edges
        );
    }
}

#[test]
fn test_no_edge_remains_improvable() {
    let mut rng = StdRng::seed_from_u64(42);
    let vertices = 300;
    let edge_list = random_edge_list_with_rng(vertices, 1_500, 500, &mut rng);
    let graph = build_graph(vertices, &edge_list);

    let result = ParallelRelaxation::new()
        .compute_shortest_paths(&graph, 0)
        .unwrap();

    // Fixpoint property: dist[v] <= dist[u] + w for every edge (u, v, w)
    for u in 0..vertices {
        if let Some(dist_u) = result.distances[u] {
            for edge in graph.outgoing_edges(u) {
                let dist_v = result.distances[edge.to]
                    .expect("vertex with a reachable predecessor must be reachable");
                assert!(
                    dist_v <= dist_u + edge.weight,
                    "edge ({}, {}, {}) is still improvable: {} > {} + {}",
                    u,
                    edge.to,
                    edge.weight,
                    dist_v,
                    dist_u,
                    edge.weight
                );
            }
        }
    }
}

#[test]
fn test_repeated_runs_are_identical() {
    let mut rng = StdRng::seed_from_u64(9);
    let edge_list = random_edge_list_with_rng(400, 2_400, 250, &mut rng);
    let graph = build_graph(400, &edge_list);
    let relaxation = ParallelRelaxation::new();

    let first = relaxation.compute_shortest_paths(&graph, 0).unwrap();
    let second = relaxation.compute_shortest_paths(&graph, 0).unwrap();

    assert_eq!(first, second);
}

#[test]
fn test_algorithm_names() {
    let relaxation = ParallelRelaxation::new();
    let dijkstra = Dijkstra::new();
    assert_eq!(
        ShortestPathAlgorithm::<AdjacencyGraph>::name(&relaxation),
        "parallel-relaxation"
    );
    assert_eq!(
        ShortestPathAlgorithm::<AdjacencyGraph>::name(&dijkstra),
        "dijkstra"
    );
}
