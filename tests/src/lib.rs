//! # Reporting Wheel Test Suite
//!
//! Unified test crate containing:
//!
//! ## Structure
//!
//! ```text
//! tests/src/
//! ├── benchmarks/       # Criterion benchmarks per crate
//! │   └── rw_01_wheel_codec.rs
//! │
//! └── integration/      # Operator CLI → SMS gateway flows
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! # All tests
//! cargo test -p rw-tests
//!
//! # Benchmarks
//! cargo bench -p rw-tests
//! ```

pub mod benchmarks;
pub mod integration;
