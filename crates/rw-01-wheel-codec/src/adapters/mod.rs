//! Adapters Layer - Port implementations

pub mod start_index;

pub use start_index::{FixedStartIndex, RandomStartIndex};
