//! Reference digests computed with the RustCrypto `sha1` crate

use sha1::{Digest, Sha1};

/// Reference digest as 40 lowercase hex characters
pub fn reference_hex(data: &[u8]) -> String {
    format!("{:x}", Sha1::digest(data))
}

/// Reference digest as raw bytes
pub fn reference_bytes(data: &[u8]) -> [u8; 20] {
    Sha1::digest(data).into()
}
