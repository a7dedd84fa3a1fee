//! Core traits for the hash algorithm registry

/// Core trait that every registered algorithm implements
pub trait HashAlgorithmImpl: Send + Sync {
    /// Unique lowercase identifier used for lookup
    fn id(&self) -> &'static str;

    /// Display name for user interfaces
    fn display_name(&self) -> &'static str;

    /// Create a new streaming hasher instance
    fn create_hasher(&self) -> Box<dyn StreamingHasher>;

    /// Calculate the hex digest of in-memory data
    fn hash_bytes(&self, data: &[u8]) -> String {
        let mut hasher = self.create_hasher();
        hasher.update(data);
        hasher.finalize()
    }

    /// Bytes of scratch memory each hasher holds
    fn memory_overhead(&self) -> usize;
}

/// Trait for streaming hash calculation over raw bytes
pub trait StreamingHasher: Send {
    /// Update the hasher with new data
    fn update(&mut self, data: &[u8]);

    /// Finalize the hash calculation and return the hex digest
    fn finalize(self: Box<Self>) -> String;
}
