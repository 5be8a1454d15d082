use std::time::{Duration, Instant};

use frontier_sssp::algorithm::{
    dijkstra::Dijkstra, relaxation::ParallelRelaxation, ShortestPathAlgorithm,
};
use frontier_sssp::graph::generators::random_edge_list;
use frontier_sssp::graph::{AdjacencyGraph, Graph};

// Function to benchmark an algorithm on a graph
fn benchmark_algorithm<A>(name: &str, algorithm: &A, graph: &AdjacencyGraph, source: usize) -> Duration
where
    A: ShortestPathAlgorithm<AdjacencyGraph>,
{
    println!(
        "Running {} on graph with {} vertices...",
        name,
        graph.vertex_count()
    );

    let start = Instant::now();
    let result = algorithm.compute_shortest_paths(graph, source).unwrap();
    let duration = start.elapsed();

    println!(
        "  - Found {} reachable vertices in {:?}",
        result.reachable_count(),
        duration
    );

    duration
}

fn main() {
    env_logger::init();

    // Define graph sizes to test
    let graph_sizes = vec![
        // Small graphs - Dijkstra usually wins here
        1_000,
        10_000,
        // Medium graphs
        50_000,
        100_000,
        // Large graphs - parallel rounds should pay off
        500_000,
    ];

    // Edge factor: average number of edges per vertex
    let edge_factor = 10;
    let max_weight = 100_000;

    println!("=====================================================");
    println!("Benchmark: Dijkstra vs ParallelRelaxation");
    println!("Edge factor: {} edges per vertex (on average)", edge_factor);
    println!("=====================================================");

    let dijkstra = Dijkstra::new();
    let relaxation = ParallelRelaxation::new();

    let mut results = Vec::new();

    for &size in &graph_sizes {
        println!("\nGenerating random graph with {} vertices...", size);
        let edge_list = random_edge_list(size, size * edge_factor, max_weight);
        let graph = AdjacencyGraph::from_edges(size, &edge_list).unwrap();
        let source = 0;

        let dijkstra_time = benchmark_algorithm("Dijkstra", &dijkstra, &graph, source);
        let relaxation_time =
            benchmark_algorithm("ParallelRelaxation", &relaxation, &graph, source);

        let speedup = dijkstra_time.as_secs_f64() / relaxation_time.as_secs_f64();
        println!("Speedup - ParallelRelaxation vs Dijkstra: {:.2}x", speedup);

        results.push((size, dijkstra_time, relaxation_time));
    }

    println!("\n=====================================================");
    println!("Summary of Results");
    println!("=====================================================");
    println!(
        "{:<10} | {:<15} | {:<18} | {:<10}",
        "Vertices", "Dijkstra (ms)", "Relaxation (ms)", "SpeedUp"
    );
    println!("-----------------------------------------------------");

    for (size, dijkstra_time, relaxation_time) in &results {
        let speedup = dijkstra_time.as_secs_f64() / relaxation_time.as_secs_f64();
        println!(
            "{:<10} | {:<15.2} | {:<18.2} | {:<10.2}",
            size,
            dijkstra_time.as_millis(),
            relaxation_time.as_millis(),
            speedup
        );
    }
}
