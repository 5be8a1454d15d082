use std::sync::atomic::{AtomicBool, Ordering};

use log::{debug, info};
use rayon::prelude::*;

use crate::algorithm::{ShortestPathAlgorithm, ShortestPathResult};
use crate::data_structures::{DistanceVector, FrontierSet};
use crate::graph::Graph;
use crate::{Error, Result};

/// Parallel label-correcting shortest path engine
///
/// Distances propagate in synchronized rounds. Each round scans the whole
/// vertex range in parallel, drains the vertices whose distance changed since
/// they were last expanded, and relaxes their outgoing edges through lock-free
/// compare-and-swap updates on the shared [`DistanceVector`]. The engine
/// converges when a full round improves nothing.
///
/// This is Bellman-Ford-style label correcting, not priority-queue Dijkstra:
/// a vertex may be re-expanded several times as better distances arrive, and
/// an improvement written early in a round can feed later relaxations of the
/// same round, so convergence usually takes far fewer rounds than the
/// worst-case shortest-path hop count. The extra relaxation work is the price
/// paid for fewer synchronization rounds.
///
/// One approximation is inherent to the round protocol: draining a vertex
/// clears its active flag before its edges are scanned, so a concurrent
/// re-mark of that vertex defers its re-expansion to the following round.
/// Every re-mark follows a successful relaxation, which also raises the
/// round's change flag and thereby schedules that following round, so the
/// deferral affects the round count only, never the published distances.
#[derive(Debug, Default)]
pub struct ParallelRelaxation {
    /// Abort after this many rounds instead of looping (None = run to convergence)
    round_limit: Option<usize>,
}

impl ParallelRelaxation {
    /// Creates an engine that runs until convergence
    pub fn new() -> Self {
        ParallelRelaxation { round_limit: None }
    }

    /// Caps the number of rounds, failing with [`Error::NonConvergence`] once
    /// exceeded while improvements are still being found.
    ///
    /// With non-negative weights convergence is guaranteed within the longest
    /// shortest-path hop count plus the terminating empty round, so the cap
    /// is a fail-safe for callers that prefer an error to an unexpectedly
    /// long run.
    pub fn with_round_limit(mut self, limit: usize) -> Self {
        self.round_limit = Some(limit);
        self
    }
}

impl<G> ShortestPathAlgorithm<G> for ParallelRelaxation
where
    G: Graph + Sync,
{
    fn name(&self) -> &'static str {
        "parallel-relaxation"
    }

    fn compute_shortest_paths(&self, graph: &G, source: usize) -> Result<ShortestPathResult> {
        if !graph.has_vertex(source) {
            return Err(Error::SourceNotFound(source));
        }

        let n = graph.vertex_count();
        let distances = DistanceVector::new(n, source);
        let frontier = FrontierSet::new(n, source);
        let changed = AtomicBool::new(true);
        let mut rounds = 0usize;

        while changed.load(Ordering::Relaxed) {
            changed.store(false, Ordering::Relaxed);

            (0..n).into_par_iter().for_each(|vertex| {
                if !frontier.take(vertex) {
                    return;
                }
                for edge in graph.outgoing_edges(vertex) {
                    // The distance read here may be stale by the time the CAS
                    // runs, but slots only shrink: a late read yields an
                    // equal-or-smaller candidate, never a wrong increase.
                    // saturating_add keeps INF + w at INF.
                    let candidate = distances.get(vertex).saturating_add(edge.weight);
                    if distances.try_relax(edge.to, candidate) {
                        frontier.mark(edge.to);
                        // Benign race: any worker observing true is correct.
                        changed.store(true, Ordering::Relaxed);
                    }
                }
            });
            // for_each returning is the round barrier: every relaxation of
            // this round has finished before the change flag is inspected.

            rounds += 1;
            debug!(
                "round {} finished, improvements: {}",
                rounds,
                changed.load(Ordering::Relaxed)
            );

            if let Some(limit) = self.round_limit {
                if rounds >= limit && changed.load(Ordering::Relaxed) {
                    return Err(Error::NonConvergence(limit));
                }
            }
        }

        info!("converged after {} rounds over {} vertices", rounds, n);

        Ok(ShortestPathResult {
            distances: distances.into_distances(),
            source,
        })
    }
}
