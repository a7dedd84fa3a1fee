//! Arena statistics

use std::sync::atomic::{AtomicUsize, Ordering};

/// Counters updated by the arena pool as it slices parcels
#[derive(Debug, Default)]
pub struct ArenaStats {
    /// Number of backing arenas allocated so far
    arenas_allocated: AtomicUsize,
    /// Number of parcels handed out to engines
    parcels_issued: AtomicUsize,
    /// Total bytes reserved across all arenas
    bytes_reserved: AtomicUsize,
}

/// Point-in-time copy of [`ArenaStats`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ArenaStatsSnapshot {
    pub arenas_allocated: usize,
    pub parcels_issued: usize,
    pub bytes_reserved: usize,
}

impl ArenaStats {
    /// Create new statistics tracker
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a freshly allocated arena of `size` bytes
    pub fn record_arena(&self, size: usize) {
        self.arenas_allocated.fetch_add(1, Ordering::Relaxed);
        self.bytes_reserved.fetch_add(size, Ordering::Relaxed);
    }

    /// Record a parcel handed out to an engine
    pub fn record_parcel(&self) {
        self.parcels_issued.fetch_add(1, Ordering::Relaxed);
    }

    /// Get a snapshot of current statistics
    pub fn snapshot(&self) -> ArenaStatsSnapshot {
        ArenaStatsSnapshot {
            arenas_allocated: self.arenas_allocated.load(Ordering::Relaxed),
            parcels_issued: self.parcels_issued.load(Ordering::Relaxed),
            bytes_reserved: self.bytes_reserved.load(Ordering::Relaxed),
        }
    }
}

impl ArenaStatsSnapshot {
    /// Average number of parcels served per arena
    pub fn parcels_per_arena(&self) -> f64 {
        if self.arenas_allocated == 0 {
            0.0
        } else {
            self.parcels_issued as f64 / self.arenas_allocated as f64
        }
    }
}
