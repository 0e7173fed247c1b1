//! Benchmarks for the PolyShift and RouteTable ciphers.
//!
//! Measures key setup, encryption and decryption throughput over a fixed
//! message, and RouteTable encryption across different column counts.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use cyrcipher::{PolyShift, RouteTable};

/// Key used consistently across the PolyShift benchmarks.
const BENCH_KEY: &str = "ШИФРОВАНИЕ";

/// Natural-language message, normalized by every `encrypt` call.
const BENCH_TEXT: &str = "Съешь же ещё этих мягких французских булок, да выпей чаю. ";

/// Repeats the bench text into a message of roughly 4 KiB.
fn message() -> String {
    BENCH_TEXT.repeat(40)
}

/// Benchmarks `PolyShift::new()` key validation.
fn bench_poly_shift_new(c: &mut Criterion) {
    c.bench_function("poly_shift_new", |b| {
        b.iter(|| PolyShift::new(black_box(BENCH_KEY)).unwrap());
    });
}

/// Benchmarks PolyShift encryption and decryption of the same message.
fn bench_poly_shift(c: &mut Criterion) {
    let cipher = PolyShift::new(BENCH_KEY).unwrap();
    let plain = message();
    let secret = cipher.encrypt(&plain).unwrap();

    let mut group = c.benchmark_group("poly_shift");
    group.throughput(Throughput::Bytes(plain.len() as u64));

    group.bench_function("encrypt", |b| {
        b.iter(|| cipher.encrypt(black_box(&plain)).unwrap());
    });
    group.bench_function("decrypt", |b| {
        b.iter(|| cipher.decrypt(black_box(&secret)).unwrap());
    });

    group.finish();
}

/// Benchmarks RouteTable encryption across column counts.
///
/// One column is the identity route, a count above the message length
/// collapses the table to a single reversed row.
fn bench_route_table_cols_scaling(c: &mut Criterion) {
    let col_counts: &[i64] = &[1, 7, 64, 100_000];
    let plain = message();

    let mut group = c.benchmark_group("route_table_encrypt");
    group.throughput(Throughput::Bytes(plain.len() as u64));

    for &cols in col_counts {
        let cipher = RouteTable::new(cols).unwrap();
        group.bench_with_input(BenchmarkId::from_parameter(cols), &cols, |b, _| {
            b.iter(|| cipher.encrypt(black_box(&plain)).unwrap());
        });
    }

    group.finish();
}

/// Benchmarks RouteTable decryption with a ragged last row.
fn bench_route_table_decrypt(c: &mut Criterion) {
    let cipher = RouteTable::new(7).unwrap();
    let secret = cipher.encrypt(&message()).unwrap();

    let mut group = c.benchmark_group("route_table_decrypt");
    group.throughput(Throughput::Bytes(secret.len() as u64));
    group.bench_function("7_cols", |b| {
        b.iter(|| cipher.decrypt(black_box(&secret)).unwrap());
    });
    group.finish();
}

criterion_group!(
    benches,
    bench_poly_shift_new,
    bench_poly_shift,
    bench_route_table_cols_scaling,
    bench_route_table_decrypt,
);
criterion_main!(benches);
