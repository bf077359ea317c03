use crate::facet::Facet;
use layouter_types::NodeId;
use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Observes facet resolution during a pass.
///
/// This allows us to swap implementations. Production passes use [`NoOpProbe`]; tests and
/// diagnostics use [`CountingProbe`] to verify memoization.
pub trait PassProbe: Send + Sync {
    /// A calculator function was invoked for `facet` of `node`.
    fn record_evaluation(&self, node: NodeId, facet: Facet);
    /// A facet read was served from the memo.
    fn count_hit(&self);
    fn reset(&self);
}

/// A no-op probe for production use.
/// The compiler will inline these and eliminate the overhead.
pub struct NoOpProbe;

impl PassProbe for NoOpProbe {
    #[inline(always)]
    fn record_evaluation(&self, _node: NodeId, _facet: Facet) {}
    #[inline(always)]
    fn count_hit(&self) {}
    #[inline(always)]
    fn reset(&self) {}
}

/// Counts calculator evaluations per (node, facet) and memo hits.
pub struct CountingProbe {
    evaluations: Mutex<HashMap<(NodeId, Facet), usize>>,
    hits: AtomicUsize,
    misses: AtomicUsize,
}

impl CountingProbe {
    pub fn new() -> Self {
        Self {
            evaluations: Mutex::new(HashMap::new()),
            hits: AtomicUsize::new(0),
            misses: AtomicUsize::new(0),
        }
    }

    /// How often the calculator for `facet` of `node` ran.
    pub fn evaluations(&self, node: NodeId, facet: Facet) -> usize {
        self.evaluations
            .lock()
            .map(|e| e.get(&(node, facet)).copied().unwrap_or(0))
            .unwrap_or(0)
    }

    pub fn total_evaluations(&self) -> usize {
        self.misses.load(Ordering::Acquire)
    }

    pub fn hits(&self) -> usize {
        self.hits.load(Ordering::Acquire)
    }

    /// The largest evaluation count of any single (node, facet).
    pub fn max_evaluations(&self) -> usize {
        self.evaluations
            .lock()
            .map(|e| e.values().copied().max().unwrap_or(0))
            .unwrap_or(0)
    }

    pub fn log_summary(&self) {
        let hits = self.hits();
        let misses = self.total_evaluations();
        let total = hits + misses;
        if total == 0 {
            return;
        }
        log::info!(
            "Facet reads: {} ({} evaluated, {} memo hits, {:.1}% hit rate)",
            total,
            misses,
            hits,
            (hits as f64 / total as f64) * 100.0
        );
    }
}

impl Default for CountingProbe {
    fn default() -> Self {
        Self::new()
    }
}

impl PassProbe for CountingProbe {
    fn record_evaluation(&self, node: NodeId, facet: Facet) {
        if let Ok(mut e) = self.evaluations.lock() {
            *e.entry((node, facet)).or_default() += 1;
        }
        self.misses.fetch_add(1, Ordering::Release);
    }

    fn count_hit(&self) {
        self.hits.fetch_add(1, Ordering::Release);
    }

    fn reset(&self) {
        if let Ok(mut e) = self.evaluations.lock() {
            e.clear();
        }
        self.hits.store(0, Ordering::Release);
        self.misses.store(0, Ordering::Release);
    }
}
