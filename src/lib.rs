//! Frontier SSSP - Parallel Label-Correcting Single-Source Shortest Paths
//!
//! This library computes shortest-path distances from one source vertex to
//! every vertex of a static directed graph with non-negative integer edge
//! weights.
//!
//! The main engine relaxes edges in synchronized parallel rounds over an
//! active-vertex frontier (Bellman-Ford-style label correcting) rather than
//! with a priority queue. Distances only ever decrease, so lock-free
//! compare-and-swap updates keep concurrent relaxation correct without any
//! per-vertex locks. A sequential Dijkstra is included as the reference
//! implementation the parallel engine is checked against.

pub mod algorithm;
pub mod data_structures;
pub mod graph;
pub mod io;

pub use algorithm::{
    dijkstra::Dijkstra, relaxation::ParallelRelaxation, ShortestPathAlgorithm, ShortestPathResult,
};
pub use data_structures::{DistanceVector, FrontierSet, INF};
/// Re-export main types for convenient use
pub use graph::adjacency::{AdjacencyGraph, Edge};

/// Error types for the library
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Invalid edge: from {0} to {1}")]
    InvalidEdge(usize, usize),

    #[error("Negative edge weight: {0}")]
    NegativeWeight(i64),

    #[error("Source vertex {0} not found in graph")]
    SourceNotFound(usize),

    #[error("Relaxation did not converge within {0} rounds")]
    NonConvergence(usize),

    #[error("Malformed graph input: {0}")]
    MalformedInput(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for the library
pub type Result<T> = std::result::Result<T, Error>;
