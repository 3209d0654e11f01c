//! Scan throughput benchmarks

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use slen::{length, length_of, strlen, Cursor};

fn terminated(len: usize) -> Vec<u8> {
    let mut bytes = vec![b'x'; len];
    bytes.push(0);
    bytes
}

fn benchmark_scan(c: &mut Criterion) {
    let mut group = c.benchmark_group("scan");
    for len in [16usize, 1024, 65_536] {
        let seq = terminated(len);

        group.bench_with_input(BenchmarkId::new("length", len), &seq, |b, seq| {
            b.iter(|| length(black_box(seq.as_slice())))
        });
        group.bench_with_input(BenchmarkId::new("length_of", len), &seq, |b, seq| {
            b.iter(|| length_of(Cursor::new(black_box(seq.as_slice())).expect("non-null")))
        });
        group.bench_with_input(BenchmarkId::new("strlen", len), &seq, |b, seq| {
            // SAFETY: `seq` ends with a terminator and outlives the scan.
            b.iter(|| unsafe { strlen(black_box(seq.as_ptr())) })
        });
    }
    group.finish();
}

criterion_group!(benches, benchmark_scan);
criterion_main!(benches);
