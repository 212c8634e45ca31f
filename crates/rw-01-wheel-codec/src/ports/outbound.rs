//! Outbound Ports (Driven Ports)
//!
//! Dependencies the wheel service needs from the outside world.

/// Source of the wheel's start index
///
/// Physical wheels differ by which prime they start on. The service asks this
/// port for a start index so tests can pin it and production can randomise it.
pub trait StartIndexSource: Send + Sync {
    /// Pick a start index in `0..=max_start_index`.
    fn next_start_index(&self, max_start_index: usize) -> usize;
}
