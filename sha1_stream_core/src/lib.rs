//! SHA-1 Streaming Core Library
//!
//! An incremental SHA-1 digest engine. Input arrives in any chunking as
//! text, UTF-16 code units or byte views; the digest comes out once as raw
//! bytes or lowercase hex.
//!
//! ```
//! use sha1_stream_core::{DigestFormat, Sha1};
//!
//! let mut engine = Sha1::new();
//! engine.update("The quick brown fox ").update(&b"jumps over the lazy dog"[..]);
//! let digest = engine.digest(DigestFormat::Hex);
//! assert_eq!(digest.to_string(), "2fd4e1c67a2d28fced849ee1bb76e7391b93eb12");
//! ```

pub mod config;
pub mod error;
pub mod hashing;
pub mod memory;

// Re-export main types
pub use config::EngineConfig;
pub use error::{Error, Result};
pub use hashing::{
    AlgorithmRegistry, ByteSpan, Chunk, DIGEST_LEN, Digest, DigestFormat, Element, HEX_DIGEST_LEN,
    HashAlgorithm, Sha1, StreamingHasher, create_hash, digest_once,
};
pub use memory::{ArenaConfig, ArenaPool, ArenaStatsSnapshot, Parcel};
