//! Start index sources
//!
//! Implements [`StartIndexSource`] for production (random) and for tests or
//! operator overrides (fixed).

use rand::Rng;

use crate::ports::StartIndexSource;

/// Uniformly random start index, one draw per report
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomStartIndex;

impl RandomStartIndex {
    pub fn new() -> Self {
        Self
    }
}

impl StartIndexSource for RandomStartIndex {
    fn next_start_index(&self, max_start_index: usize) -> usize {
        rand::thread_rng().gen_range(0..=max_start_index)
    }
}

/// Always the same start index
///
/// The index is not checked here. An index past `max_start_index` is passed
/// through and rejected by the encoder like any other bad input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedStartIndex(pub usize);

impl StartIndexSource for FixedStartIndex {
    fn next_start_index(&self, _max_start_index: usize) -> usize {
        self.0
    }
}
