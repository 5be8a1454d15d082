use crate::graph::traits::Graph;
use crate::{Error, Result};

/// A directed edge towards `to` with a non-negative weight
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge {
    /// Target vertex of the edge
    pub to: usize,
    /// Edge weight
    pub weight: u64,
}

/// An immutable directed graph stored as per-vertex adjacency lists
///
/// Built once from an edge list and queried read-only afterwards. Because
/// nothing mutates the lists after construction, worker threads may traverse
/// them concurrently without locks.
#[derive(Debug, Clone)]
pub struct AdjacencyGraph {
    /// Outgoing edges for each vertex, indexed by vertex id
    outgoing: Vec<Vec<Edge>>,
    /// Total number of edges
    edge_count: usize,
}

impl AdjacencyGraph {
    /// Builds a graph with `vertex_count` vertices from `(from, to, weight)` triples.
    ///
    /// Fails with [`Error::InvalidEdge`] if either endpoint lies outside
    /// `0..vertex_count`. Edge order within a vertex follows input order; the
    /// relaxation algorithms never depend on it.
    pub fn from_edges(vertex_count: usize, edges: &[(usize, usize, u64)]) -> Result<Self> {
        let mut outgoing = vec![Vec::new(); vertex_count];
        for &(from, to, weight) in edges {
            if from >= vertex_count || to >= vertex_count {
                return Err(Error::InvalidEdge(from, to));
            }
            outgoing[from].push(Edge { to, weight });
        }
        Ok(AdjacencyGraph {
            outgoing,
            edge_count: edges.len(),
        })
    }
}

impl Graph for AdjacencyGraph {
    fn vertex_count(&self) -> usize {
        self.outgoing.len()
    }

    fn edge_count(&self) -> usize {
        self.edge_count
    }

    fn outgoing_edges(&self, vertex: usize) -> &[Edge] {
        self.outgoing.get(vertex).map(Vec::as_slice).unwrap_or(&[])
    }
}
