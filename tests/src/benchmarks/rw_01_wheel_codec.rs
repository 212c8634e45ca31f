//! # RW-01 Wheel Codec Benchmarks
//!
//! - Encoding a single report
//! - Decoding valid, invalid and ambiguous codes
//! - Building the lookup tables from scratch
//! - Decoding a burst of random 9-digit strings

use criterion::{black_box, BenchmarkId, Criterion, Throughput};
use rand::Rng;
use rw_01_wheel_codec::{decode, encode, ConditionType, LookupTables, MAX_START_INDEX};

pub fn bench_encode(c: &mut Criterion) {
    let mut group = c.benchmark_group("rw-01-encode");

    for start in [0, MAX_START_INDEX] {
        group.bench_with_input(BenchmarkId::new("encode", start), &start, |b, &start| {
            b.iter(|| encode(black_box(17), ConditionType::Dengue, black_box(9), start))
        });
    }

    group.finish();
}

pub fn bench_decode(c: &mut Criterion) {
    let mut group = c.benchmark_group("rw-01-decode");

    let cases = [
        ("valid_start_0", "002003005"),
        ("valid_start_6", "527133460"),
        ("valid_start_8", "713203620"),
        ("ambiguous", "006015035"),
        ("invalid", "999999999"),
        ("wrong_length", "12345"),
    ];
    for (name, code) in cases {
        group.bench_function(name, |b| b.iter(|| decode(black_box(code))));
    }

    group.finish();
}

pub fn bench_table_build(c: &mut Criterion) {
    c.bench_function("rw-01-lookup-build", |b| b.iter(LookupTables::build));
}

pub fn bench_random_burst(c: &mut Criterion) {
    let mut rng = rand::thread_rng();
    let codes: Vec<String> = (0..1_000)
        .map(|_| format!("{:09}", rng.gen_range(0..1_000_000_000u32)))
        .collect();

    let mut group = c.benchmark_group("rw-01-decode-burst");
    group.throughput(Throughput::Elements(codes.len() as u64));
    group.bench_function("random_1000", |b| {
        b.iter(|| codes.iter().filter(|code| decode(code).is_some()).count())
    });
    group.finish();
}

pub fn register_benchmarks(c: &mut Criterion) {
    bench_encode(c);
    bench_decode(c);
    bench_table_build(c);
    bench_random_burst(c);
}
