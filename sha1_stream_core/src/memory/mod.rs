//! Arena memory for engine block buffers
//!
//! Each engine needs a small scratch block. Instead of allocating one per
//! engine, an [`ArenaPool`] reserves a large region up front and slices it
//! into fixed-size parcels:
//! - one parcel per engine, never shared between engines
//! - a new arena is allocated when the current one is exhausted
//! - engines work the same with a standalone parcel (see [`Parcel::standalone`])

use crate::error::ValidationError;
use crate::hashing::sha1::BLOCK_LEN;
use serde::{Deserialize, Serialize};

mod pool;
mod stats;

pub use pool::{ArenaPool, Parcel};
pub use stats::{ArenaStats, ArenaStatsSnapshot};

/// Default parcel size: exactly one message block
pub const DEFAULT_PARCEL_SIZE: usize = BLOCK_LEN;

/// Default number of parcels carved from one arena
pub const DEFAULT_PARCELS_PER_ARENA: usize = 100;

/// Sizing for the arena pool
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArenaConfig {
    /// Bytes handed to each engine; must hold at least one block
    pub parcel_size: usize,
    /// Parcels carved from each arena before a new one is allocated
    pub parcels_per_arena: usize,
}

impl Default for ArenaConfig {
    fn default() -> Self {
        Self {
            parcel_size: DEFAULT_PARCEL_SIZE,
            parcels_per_arena: DEFAULT_PARCELS_PER_ARENA,
        }
    }
}

impl ArenaConfig {
    /// Check that the sizing can back an engine
    pub fn validate(&self) -> crate::Result<()> {
        if self.parcel_size < BLOCK_LEN {
            return Err(ValidationError::invalid_configuration(format!(
                "parcel_size must be at least {BLOCK_LEN} bytes, got {}",
                self.parcel_size
            ))
            .into());
        }
        if self.parcels_per_arena == 0 {
            return Err(ValidationError::invalid_configuration(
                "parcels_per_arena must be greater than zero",
            )
            .into());
        }
        if self.parcel_size.checked_mul(self.parcels_per_arena).is_none() {
            return Err(ValidationError::invalid_configuration(
                "arena size overflows the address space",
            )
            .into());
        }
        Ok(())
    }

    /// Total bytes reserved per arena
    pub fn arena_bytes(&self) -> usize {
        self.parcel_size * self.parcels_per_arena
    }
}
