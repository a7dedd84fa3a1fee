//! Arena slicing for engine block buffers

use super::ArenaConfig;
use super::stats::{ArenaStats, ArenaStatsSnapshot};
use crate::hashing::sha1::BLOCK_LEN;
use bytes::BytesMut;
use log::debug;
use std::ops::{Deref, DerefMut};
use std::sync::{Mutex, PoisonError};

/// One engine's slice of scratch memory
///
/// Parcels cut from the same arena share its allocation but never overlap,
/// and a parcel is never handed out twice. The backing arena is freed once
/// every parcel cut from it has been dropped.
pub struct Parcel {
    bytes: BytesMut,
}

impl Parcel {
    /// Allocate a parcel on its own, outside of any arena
    pub fn standalone() -> Self {
        Self {
            bytes: BytesMut::zeroed(BLOCK_LEN),
        }
    }

    fn from_arena(bytes: BytesMut) -> Self {
        debug_assert!(bytes.len() >= BLOCK_LEN);
        Self { bytes }
    }
}

impl Deref for Parcel {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        &self.bytes
    }
}

impl DerefMut for Parcel {
    fn deref_mut(&mut self) -> &mut [u8] {
        &mut self.bytes
    }
}

impl std::fmt::Debug for Parcel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Parcel").field("len", &self.bytes.len()).finish()
    }
}

/// A pool that slices large arenas into fixed-size parcels
pub struct ArenaPool {
    /// Parcel and arena sizing
    config: ArenaConfig,
    /// Unsliced remainder of the current arena
    arena: Mutex<BytesMut>,
    /// Statistics
    stats: ArenaStats,
}

impl ArenaPool {
    /// Create a pool with the default configuration
    pub fn new() -> Self {
        Self::build(ArenaConfig::default())
    }

    /// Create a pool with a custom configuration
    pub fn with_config(config: ArenaConfig) -> crate::Result<Self> {
        config.validate()?;
        Ok(Self::build(config))
    }

    fn build(config: ArenaConfig) -> Self {
        Self {
            config,
            arena: Mutex::new(BytesMut::new()),
            stats: ArenaStats::new(),
        }
    }

    /// Get the process-wide pool used by the algorithm factory
    pub fn global() -> &'static Self {
        static INSTANCE: once_cell::sync::OnceCell<ArenaPool> = once_cell::sync::OnceCell::new();
        INSTANCE.get_or_init(Self::new)
    }

    /// Slice the next parcel, allocating a new arena when the current one is spent
    pub fn acquire(&self) -> Parcel {
        let size = self.config.parcel_size;
        // The remainder is always a valid arena, even after a panic elsewhere.
        let mut arena = self.arena.lock().unwrap_or_else(PoisonError::into_inner);

        if arena.len() < size {
            *arena = self.allocate_arena();
        }

        self.stats.record_parcel();
        Parcel::from_arena(arena.split_to(size))
    }

    fn allocate_arena(&self) -> BytesMut {
        let total = self.config.arena_bytes();
        debug!(
            "Allocating arena of {total} bytes ({} parcels of {} bytes)",
            self.config.parcels_per_arena, self.config.parcel_size
        );
        self.stats.record_arena(total);
        BytesMut::zeroed(total)
    }

    /// Parcels still available in the current arena
    pub fn remaining(&self) -> usize {
        let arena = self.arena.lock().unwrap_or_else(PoisonError::into_inner);
        arena.len() / self.config.parcel_size
    }

    /// Get the pool configuration
    pub fn config(&self) -> &ArenaConfig {
        &self.config
    }

    /// Get a snapshot of the pool statistics
    pub fn stats(&self) -> ArenaStatsSnapshot {
        self.stats.snapshot()
    }
}

impl Default for ArenaPool {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for ArenaPool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ArenaPool")
            .field("config", &self.config)
            .field("stats", &self.stats.snapshot())
            .finish()
    }
}
