use std::sync::atomic::{AtomicU64, Ordering};

/// Sentinel distance for vertices not yet reached from the source
pub const INF: u64 = u64::MAX;

/// Shared array of per-vertex best-known distances from the source
///
/// Every slot starts at [`INF`] and only ever shrinks toward the true
/// shortest distance. Relaxed atomics are sufficient for both loads and the
/// compare-and-swap: a stale read is still a valid upper bound thanks to the
/// monotone-decrease invariant, and the engine's round barrier orders the
/// slots between rounds.
#[derive(Debug)]
pub struct DistanceVector {
    slots: Vec<AtomicU64>,
}

impl DistanceVector {
    /// Creates a vector of `len` slots, all [`INF`] except `source` at zero.
    ///
    /// Panics if `source` is out of range; callers validate the source before
    /// constructing the vector.
    pub fn new(len: usize, source: usize) -> Self {
        let slots: Vec<AtomicU64> = (0..len).map(|_| AtomicU64::new(INF)).collect();
        slots[source].store(0, Ordering::Relaxed);
        DistanceVector { slots }
    }

    /// Returns the number of slots
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Returns true if the vector has no slots
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Current best-known distance of a vertex, non-blocking
    pub fn get(&self, vertex: usize) -> u64 {
        self.slots[vertex].load(Ordering::Relaxed)
    }

    /// Lowers the vertex's distance to `candidate` iff it improves on the
    /// value held at the moment of the attempt, returning whether the write
    /// happened.
    ///
    /// Implemented as a compare-and-swap retry loop, the sole concurrency
    /// control on distances. A failed exchange means another worker lowered
    /// the slot concurrently; the loop re-reads and either retries or finds
    /// the competitor already did at least as well, so no improving update is
    /// ever lost. Retries are bounded because the competing value itself only
    /// decreases.
    pub fn try_relax(&self, vertex: usize, candidate: u64) -> bool {
        let slot = &self.slots[vertex];
        let mut current = slot.load(Ordering::Relaxed);
        while candidate < current {
            match slot.compare_exchange_weak(
                current,
                candidate,
                Ordering::Relaxed,
                Ordering::Relaxed,
            ) {
                Ok(_) => return true,
                Err(observed) => current = observed,
            }
        }
        false
    }

    /// Consumes the vector into published distances, mapping the [`INF`]
    /// sentinel to `None`.
    pub fn into_distances(self) -> Vec<Option<u64>> {
        self.slots
            .into_iter()
            .map(|slot| {
                let distance = slot.into_inner();
                if distance == INF {
                    None
                } else {
                    Some(distance)
                }
            })
            .collect()
    }
}
