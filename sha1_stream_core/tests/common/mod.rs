//! Common test utilities for integration tests
//!
//! Shared helpers for feeding the engine in different chunkings.

#![allow(dead_code)]

use sha1_stream_core::{Chunk, Sha1};

/// Route `log` output through the test harness; `RUST_LOG=debug` shows it
pub fn init_logging() {
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .is_test(true)
        .try_init();
}

/// Encode text as UTF-16 code units
pub fn utf16(text: &str) -> Vec<u16> {
    text.encode_utf16().collect()
}

/// Digest a sequence of chunks with a fresh engine
pub fn hex_of_chunks<'a>(chunks: impl IntoIterator<Item = Chunk<'a>>) -> String {
    let mut engine = Sha1::new();
    for chunk in chunks {
        engine.update(chunk);
    }
    engine.digest_hex()
}

/// Digest byte slices with a fresh engine
pub fn hex_of_bytes(chunks: &[&[u8]]) -> String {
    hex_of_chunks(chunks.iter().map(|&c| Chunk::Bytes(c)))
}

/// Digest UTF-16 slices with a fresh engine
pub fn hex_of_utf16(chunks: &[&[u16]]) -> String {
    hex_of_chunks(chunks.iter().map(|&c| Chunk::Utf16(c)))
}
