use crate::algorithm::{ShortestPathAlgorithm, ShortestPathResult};
use crate::data_structures::MinQueue;
use crate::graph::Graph;
use crate::{Error, Result};

/// Classic Dijkstra's algorithm implementation
///
/// Sequential label setting with a binary heap. Kept as the reference
/// implementation the parallel engine is validated against; it is not the
/// crate's main engine.
#[derive(Debug, Default)]
pub struct Dijkstra;

impl Dijkstra {
    /// Creates a new Dijkstra algorithm instance
    pub fn new() -> Self {
        Dijkstra
    }
}

impl<G: Graph> ShortestPathAlgorithm<G> for Dijkstra {
    fn name(&self) -> &'static str {
        "dijkstra"
    }

    fn compute_shortest_paths(&self, graph: &G, source: usize) -> Result<ShortestPathResult> {
        if !graph.has_vertex(source) {
            return Err(Error::SourceNotFound(source));
        }

        let n = graph.vertex_count();
        let mut distances: Vec<Option<u64>> = vec![None; n];
        distances[source] = Some(0);

        let mut queue = MinQueue::new();
        queue.push(source, 0);

        while let Some((u, dist_u)) = queue.pop() {
            // Skip entries made stale by an earlier, shorter path to u
            if let Some(current) = distances[u] {
                if current < dist_u {
                    continue;
                }
            }

            for edge in graph.outgoing_edges(u) {
                let next = dist_u.saturating_add(edge.weight);
                let improves = match distances[edge.to] {
                    None => true,
                    Some(current) => next < current,
                };
                if improves {
                    distances[edge.to] = Some(next);
                    queue.push(edge.to, next);
                }
            }
        }

        Ok(ShortestPathResult { distances, source })
    }
}
