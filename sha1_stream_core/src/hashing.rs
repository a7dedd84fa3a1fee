//! Hash calculation for the SHA-1 streaming engine
//!
//! The engine itself lives in [`sha1`]. This module adds the name-based
//! factory ([`create_hash`]), the algorithm registry used for dynamic
//! lookup, and the input and output types shared by both.

use crate::memory::ArenaPool;
use crate::{Error, Result, error::ValidationError};
use log::debug;
use serde::{Deserialize, Serialize};

mod algorithms;
mod digest;
mod input;
mod registry;
pub mod sha1;
mod traits;

pub use digest::{DIGEST_LEN, Digest, DigestFormat, HEX_DIGEST_LEN};
pub use input::{ByteSpan, Chunk, Element};
pub use registry::AlgorithmRegistry;
pub use self::sha1::Sha1;
pub use traits::{HashAlgorithmImpl, StreamingHasher};

/// Digest algorithms supported by the factory
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HashAlgorithm {
    /// SHA-1 (FIPS 180-4)
    SHA1,
}

impl std::fmt::Display for HashAlgorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HashAlgorithm::SHA1 => write!(f, "sha1"),
        }
    }
}

impl std::str::FromStr for HashAlgorithm {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "sha1" => Ok(HashAlgorithm::SHA1),
            _ => Err(ValidationError::unsupported_algorithm(s).into()),
        }
    }
}

/// Create an engine for the named algorithm
///
/// The name is looked up in [`AlgorithmRegistry::global`], ignoring case.
/// `None` or an empty name selects SHA-1. Engines created here take their block buffer from
/// [`ArenaPool::global`].
pub fn create_hash(algorithm: Option<&str>) -> Result<Sha1> {
    let algorithm: HashAlgorithm = match algorithm.filter(|name| !name.is_empty()) {
        Some(name) => AlgorithmRegistry::global().resolve(name)?.id().parse()?,
        None => HashAlgorithm::SHA1,
    };
    debug!("Creating {algorithm} engine");

    match algorithm {
        HashAlgorithm::SHA1 => Ok(Sha1::with_pool(ArenaPool::global())),
    }
}

/// Digest a single chunk in one call
pub fn digest_once<'a>(chunk: impl Into<Chunk<'a>>, format: DigestFormat) -> Digest {
    let mut engine = Sha1::new();
    engine.update(chunk);
    engine.digest(format)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_algorithm_parsing() {
        assert_eq!("sha1".parse::<HashAlgorithm>().unwrap(), HashAlgorithm::SHA1);
        assert_eq!("SHA1".parse::<HashAlgorithm>().unwrap(), HashAlgorithm::SHA1);
        assert_eq!(HashAlgorithm::SHA1.to_string(), "sha1");

        let error = "invalid".parse::<HashAlgorithm>().unwrap_err();
        assert!(error.is_unsupported_algorithm());
        assert!(error.to_string().contains("invalid"));
    }

    #[test]
    fn test_create_hash_accepts_sha1_names() {
        for name in [None, Some(""), Some("sha1"), Some("SHA1"), Some("sHa1")] {
            let mut engine = create_hash(name).unwrap();
            engine.update("");
            assert_eq!(
                engine.digest_hex(),
                "da39a3ee5e6b4b0d3255bfef95601890afd80709",
                "factory name {name:?}"
            );
        }
    }

    #[test]
    fn test_create_hash_rejects_other_algorithms() {
        for name in ["invalid", "md5", "sha256", "sha-1", " "] {
            let error = create_hash(Some(name)).unwrap_err();
            assert!(error.is_unsupported_algorithm(), "expected rejection of {name:?}");
        }
    }

    #[test]
    fn test_digest_once() {
        let digest = digest_once("The quick brown fox jumps over the lazy dog", DigestFormat::Hex);
        assert_eq!(
            digest.as_hex(),
            Some("2fd4e1c67a2d28fced849ee1bb76e7391b93eb12")
        );
    }

    #[test]
    fn test_algorithm_serialization_is_stable() {
        let json = serde_json::to_string(&HashAlgorithm::SHA1).unwrap();
        assert_eq!(json, "\"SHA1\"");
        let parsed: HashAlgorithm = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, HashAlgorithm::SHA1);
    }
}
