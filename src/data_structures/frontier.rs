use std::sync::atomic::{AtomicBool, Ordering};

/// Shared set of per-vertex "active" flags
///
/// A set flag means the vertex's latest distance has not yet been propagated
/// along its outgoing edges. The set is transient working state of the
/// relaxation engine, reset as vertices are drained each round.
#[derive(Debug)]
pub struct FrontierSet {
    flags: Vec<AtomicBool>,
}

impl FrontierSet {
    /// Creates `len` flags, all clear except `source`.
    pub fn new(len: usize, source: usize) -> Self {
        let flags: Vec<AtomicBool> = (0..len).map(|_| AtomicBool::new(false)).collect();
        flags[source].store(true, Ordering::Relaxed);
        FrontierSet { flags }
    }

    /// Returns the number of flags
    pub fn len(&self) -> usize {
        self.flags.len()
    }

    /// Returns true if the set has no flags
    pub fn is_empty(&self) -> bool {
        self.flags.is_empty()
    }

    /// Flags a vertex for relaxation in a following round.
    ///
    /// Idempotent; concurrent marks of the same vertex compose to the same
    /// end state.
    pub fn mark(&self, vertex: usize) {
        self.flags[vertex].store(true, Ordering::Relaxed);
    }

    /// Atomically clears a vertex's flag, returning whether it was set.
    ///
    /// Fetch-and-clear guarantees at most one worker per round observes the
    /// flag as set for a given vertex. A mark landing after the clear, while
    /// the vertex's edges are still being scanned, stays set for the next
    /// round; see the engine documentation for why that only affects round
    /// count.
    pub fn take(&self, vertex: usize) -> bool {
        self.flags[vertex].swap(false, Ordering::Relaxed)
    }
}
