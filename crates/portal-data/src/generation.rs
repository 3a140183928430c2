//! Stale-response guard for overlapping fetches.
//!
//! Listing pages refetch on every filter or locale change; when requests
//! overlap, a slow earlier response can land after a newer one. Each fetch
//! takes a generation number, and only the latest generation's result may
//! be applied to state.

use std::sync::atomic::{AtomicU64, Ordering};
use tracing::warn;

/// Monotonic generation counter shared by one view's fetches.
#[derive(Debug, Default)]
pub struct RequestGeneration {
    latest: AtomicU64,
}

impl RequestGeneration {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new fetch, superseding all outstanding ones.
    pub fn begin(&self) -> u64 {
        self.latest.fetch_add(1, Ordering::SeqCst) + 1
    }

    /// Whether a fetch begun at `generation` is still the newest.
    pub fn is_current(&self, generation: u64) -> bool {
        self.latest.load(Ordering::SeqCst) == generation
    }

    /// Accept or drop a completed fetch's result.
    ///
    /// Returns false (and logs) for superseded generations; the caller
    /// must discard the result instead of writing it to state.
    pub fn accept(&self, generation: u64) -> bool {
        let current = self.is_current(generation);
        if !current {
            warn!(
                generation,
                latest = self.latest.load(Ordering::SeqCst),
                "dropping stale fetch result"
            );
        }
        current
    }
}
