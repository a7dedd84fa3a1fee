//! Central registry for hash algorithm implementations

use super::traits::{HashAlgorithmImpl, StreamingHasher};
use crate::Result;
use crate::error::ValidationError;
use log::debug;
use once_cell::sync::OnceCell;
use std::collections::HashMap;
use std::sync::Arc;

/// Central registry for all hash algorithms
///
/// Populated once at startup and read-only afterwards.
pub struct AlgorithmRegistry {
    algorithms: HashMap<&'static str, Arc<dyn HashAlgorithmImpl>>,
}

impl AlgorithmRegistry {
    /// Create a new empty registry
    fn new() -> Self {
        Self {
            algorithms: HashMap::new(),
        }
    }

    /// Get the global registry instance
    pub fn global() -> &'static Self {
        static INSTANCE: OnceCell<AlgorithmRegistry> = OnceCell::new();
        INSTANCE.get_or_init(|| {
            let mut registry = Self::new();
            super::algorithms::register_all(&mut registry);
            registry
        })
    }

    /// Register a new algorithm
    pub fn register(&mut self, algorithm: impl HashAlgorithmImpl + 'static) {
        self.algorithms.insert(algorithm.id(), Arc::new(algorithm));
    }

    /// Get algorithm by ID, ignoring ASCII case
    pub fn get(&self, id: &str) -> Option<Arc<dyn HashAlgorithmImpl>> {
        self.algorithms.get(id.to_ascii_lowercase().as_str()).cloned()
    }

    /// Get algorithm by ID or fail with an unsupported algorithm error
    pub fn resolve(&self, id: &str) -> Result<Arc<dyn HashAlgorithmImpl>> {
        match self.get(id) {
            Some(algorithm) => {
                debug!("Resolved digest algorithm '{id}' to {}", algorithm.display_name());
                Ok(algorithm)
            }
            None => {
                debug!("Rejected unsupported digest algorithm '{id}'");
                Err(ValidationError::unsupported_algorithm(id).into())
            }
        }
    }

    /// Create a streaming hasher for the named algorithm
    pub fn create_hasher(&self, id: &str) -> Result<Box<dyn StreamingHasher>> {
        Ok(self.resolve(id)?.create_hasher())
    }

    /// List all registered algorithm IDs, sorted
    pub fn list(&self) -> Vec<&'static str> {
        let mut ids: Vec<_> = self.algorithms.keys().copied().collect();
        ids.sort_unstable();
        ids
    }
}
