use crate::graph::Graph;
use crate::Result;

/// Result of a shortest path algorithm execution
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortestPathResult {
    /// Distances from source to each vertex, indexed by vertex id;
    /// `None` marks vertices unreachable from the source
    pub distances: Vec<Option<u64>>,

    /// Source vertex ID
    pub source: usize,
}

impl ShortestPathResult {
    /// Number of vertices reachable from the source (the source included)
    pub fn reachable_count(&self) -> usize {
        self.distances.iter().filter(|d| d.is_some()).count()
    }
}

/// Trait for shortest path algorithms
pub trait ShortestPathAlgorithm<G: Graph> {
    /// Compute shortest paths from a source vertex to all other vertices
    fn compute_shortest_paths(&self, graph: &G, source: usize) -> Result<ShortestPathResult>;

    /// Get the name of the algorithm
    fn name(&self) -> &'static str;
}
