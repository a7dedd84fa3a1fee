//! Builders and fixtures for digest test scenarios

mod chunks;
mod test_data;

pub use chunks::ChunkPlan;
pub use test_data::{KNOWN_VECTORS, TestDataBuilder, TestVector, generate_test_data};
