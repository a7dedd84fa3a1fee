//! Engine configuration
//!
//! Sources are layered: built-in defaults, then an optional TOML file, then
//! `SHA1_`-prefixed environment variables with nested keys separated by `__`
//! (e.g. `SHA1_ARENA__PARCELS_PER_ARENA=256`).

use crate::Result;
use crate::memory::{ArenaConfig, ArenaPool};
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Environment variable prefix
pub const ENV_PREFIX: &str = "SHA1_";

/// Top-level configuration
#[derive(Deserialize, Serialize, Debug, Default, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    #[serde(default)]
    pub arena: ArenaConfig,
}

impl EngineConfig {
    /// Load configuration with layered priority: ENV > File > Defaults
    ///
    /// A `path` that does not exist is skipped.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut figment = Figment::new().merge(Serialized::defaults(EngineConfig::default()));

        if let Some(path) = path
            && path.exists()
        {
            figment = figment.merge(Toml::file(path));
        }

        figment = figment.merge(Env::prefixed(ENV_PREFIX).split("__"));

        let config: EngineConfig = figment.extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Load from defaults and the environment only
    pub fn from_env() -> Result<Self> {
        Self::load(None)
    }

    pub fn validate(&self) -> Result<()> {
        self.arena.validate()
    }

    /// Build an arena pool sized by this configuration
    pub fn arena_pool(&self) -> Result<ArenaPool> {
        ArenaPool::with_config(self.arena.clone())
    }
}
