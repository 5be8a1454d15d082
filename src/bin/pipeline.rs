use std::time::Instant;

use frontier_sssp::algorithm::{relaxation::ParallelRelaxation, ShortestPathAlgorithm};
use frontier_sssp::graph::generators::random_edge_list;
use frontier_sssp::graph::{AdjacencyGraph, Graph};
use frontier_sssp::io::{write_edge_list, DistanceSink, GraphSource, TextDistanceFile, TextGraphFile};

// End-to-end pipeline: generate a random graph file, load it back, relax in
// parallel, write the distances, and report per-phase timings.
fn main() -> frontier_sssp::Result<()> {
    env_logger::init();

    let vertices = 1_000_000;
    let edges = 10_000_000;
    let max_weight = 20_000_000;
    let source = 0;
    let graph_file = "graph.txt";
    let dist_file = "distances.txt";

    println!(
        "Generating graph with {} vertices and {} edges...",
        vertices, edges
    );
    let t_generate = Instant::now();
    let edge_list = random_edge_list(vertices, edges, max_weight);
    write_edge_list(graph_file, vertices, &edge_list)?;
    let generation = t_generate.elapsed();

    let t_read = Instant::now();
    let (loaded_vertices, triples) = TextGraphFile::new(graph_file).load()?;
    let graph = AdjacencyGraph::from_edges(loaded_vertices, &triples)?;
    let reading = t_read.elapsed();
    println!(
        "Loaded graph with {} vertices and {} edges",
        graph.vertex_count(),
        graph.edge_count()
    );

    let t_relax = Instant::now();
    let result = ParallelRelaxation::new().compute_shortest_paths(&graph, source)?;
    let relaxation = t_relax.elapsed();
    println!(
        "Reached {} of {} vertices from source {}",
        result.reachable_count(),
        graph.vertex_count(),
        source
    );

    let t_write = Instant::now();
    TextDistanceFile::new(dist_file).publish(&result.distances)?;
    let writing = t_write.elapsed();

    println!("Generation: {:.3} sec", generation.as_secs_f64());
    println!("Reading:    {:.3} sec", reading.as_secs_f64());
    println!("Relaxation: {:.3} sec", relaxation.as_secs_f64());
    println!("Writing:    {:.3} sec", writing.as_secs_f64());

    Ok(())
}
