//! Hash algorithm implementations

use super::registry::AlgorithmRegistry;

mod sha1;

/// Register all built-in algorithms with the registry
pub(crate) fn register_all(registry: &mut AlgorithmRegistry) {
    registry.register(sha1::Sha1Algorithm);
}
