//! Test utilities for the SHA-1 streaming engine
//!
//! This crate provides reference digests, known test vectors and builders
//! for chunked input scenarios.

pub mod builders;
pub mod reference;

// Re-export commonly used types
pub use builders::{ChunkPlan, KNOWN_VECTORS, TestDataBuilder, TestVector, generate_test_data};
pub use reference::{reference_bytes, reference_hex};
