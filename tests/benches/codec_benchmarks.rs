//! # Reporting Wheel Codec Benchmarks
//!
//! | Operation | Target |
//! |-----------|--------|
//! | encode | < 1µs |
//! | decode | < 5µs |
//! | lookup table build | < 1ms |

use criterion::{criterion_group, criterion_main};
use rw_tests::benchmarks::rw_01_wheel_codec::register_benchmarks;

criterion_group!(benches, register_benchmarks);
criterion_main!(benches);
