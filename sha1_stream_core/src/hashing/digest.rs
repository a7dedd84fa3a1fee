//! Digest output formats

use crate::error::ValidationError;
use crate::{Error, Result};
use std::fmt::Write as _;

/// Length of a SHA-1 digest in bytes
pub const DIGEST_LEN: usize = 20;

/// Length of a SHA-1 digest in hexadecimal characters
pub const HEX_DIGEST_LEN: usize = DIGEST_LEN * 2;

/// Output encoding requested at finalization
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DigestFormat {
    /// Raw 20-byte big-endian digest
    #[default]
    Binary,
    /// 40 lowercase hexadecimal characters
    Hex,
}

/// Unknown encoding names are rejected rather than treated as binary.
impl std::str::FromStr for DigestFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "hex" => Ok(DigestFormat::Hex),
            "binary" | "bin" | "buffer" => Ok(DigestFormat::Binary),
            _ => Err(ValidationError::invalid_input(
                "format",
                format!("unknown digest encoding '{s}'"),
            )
            .into()),
        }
    }
}

impl std::fmt::Display for DigestFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DigestFormat::Binary => write!(f, "binary"),
            DigestFormat::Hex => write!(f, "hex"),
        }
    }
}

/// A finalized digest in the requested format
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Digest {
    Binary([u8; DIGEST_LEN]),
    Hex(String),
}

impl Digest {
    /// Encode the final state words in network byte order
    pub(crate) fn from_state(state: &[u32; 5], format: DigestFormat) -> Self {
        match format {
            DigestFormat::Binary => Digest::Binary(state_to_bytes(state)),
            DigestFormat::Hex => Digest::Hex(state_to_hex(state)),
        }
    }

    pub fn format(&self) -> DigestFormat {
        match self {
            Digest::Binary(_) => DigestFormat::Binary,
            Digest::Hex(_) => DigestFormat::Hex,
        }
    }

    /// The raw bytes, if this is a binary digest
    pub fn as_bytes(&self) -> Option<&[u8; DIGEST_LEN]> {
        match self {
            Digest::Binary(bytes) => Some(bytes),
            Digest::Hex(_) => None,
        }
    }

    /// The hex string, if this is a hex digest
    pub fn as_hex(&self) -> Option<&str> {
        match self {
            Digest::Binary(_) => None,
            Digest::Hex(hex) => Some(hex),
        }
    }

    /// Lowercase hex regardless of the stored format
    pub fn to_hex(&self) -> String {
        match self {
            Digest::Binary(bytes) => bytes_to_hex(bytes),
            Digest::Hex(hex) => hex.clone(),
        }
    }
}

impl std::fmt::Display for Digest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Digest::Binary(bytes) => f.write_str(&bytes_to_hex(bytes)),
            Digest::Hex(hex) => f.write_str(hex),
        }
    }
}

pub(crate) fn state_to_bytes(state: &[u32; 5]) -> [u8; DIGEST_LEN] {
    let mut out = [0u8; DIGEST_LEN];
    for (chunk, word) in out.chunks_exact_mut(4).zip(state) {
        chunk.copy_from_slice(&word.to_be_bytes());
    }
    out
}

pub(crate) fn state_to_hex(state: &[u32; 5]) -> String {
    let mut hex = String::with_capacity(HEX_DIGEST_LEN);
    for word in state {
        let _ = write!(hex, "{word:08x}");
    }
    hex
}

fn bytes_to_hex(bytes: &[u8]) -> String {
    let mut hex = String::with_capacity(bytes.len() * 2);
    for byte in bytes {
        let _ = write!(hex, "{byte:02x}");
    }
    hex
}
