//! # Reporting Wheel Benchmarks
//!
//! Encode and decode are on the SMS hot path; the lookup tables are built
//! once per process.

pub mod rw_01_wheel_codec;
