//! SHA-1 registry entry

use crate::hashing::Sha1;
use crate::hashing::sha1::BLOCK_LEN;
use crate::hashing::traits::{HashAlgorithmImpl, StreamingHasher};
use crate::memory::ArenaPool;

pub struct Sha1Algorithm;

impl StreamingHasher for Sha1 {
    fn update(&mut self, data: &[u8]) {
        Sha1::update(self, data);
    }

    fn finalize(self: Box<Self>) -> String {
        (*self).digest_hex()
    }
}

impl HashAlgorithmImpl for Sha1Algorithm {
    fn id(&self) -> &'static str {
        "sha1"
    }

    fn display_name(&self) -> &'static str {
        "SHA-1"
    }

    fn create_hasher(&self) -> Box<dyn StreamingHasher> {
        Box::new(Sha1::with_pool(ArenaPool::global()))
    }

    fn memory_overhead(&self) -> usize {
        // State, cursor and encoder plus one parcel
        std::mem::size_of::<Sha1>() + ArenaPool::global().config().parcel_size.max(BLOCK_LEN)
    }
}
