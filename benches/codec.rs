//! Benchmarks for the literal codec.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use litpak::{encode, measure, pack, Decoder};

/// Repeat a representative literal out to `len` bytes.
fn sample_text(len: usize) -> Vec<u8> {
    b"Error: could not open \"config.toml\" (os error 2) "
        .iter()
        .copied()
        .cycle()
        .take(len)
        .collect()
}

fn bench_measure(c: &mut Criterion) {
    let mut group = c.benchmark_group("measure");

    for len in [16, 64, 256, 1024] {
        let input = sample_text(len);

        group.throughput(Throughput::Bytes(len as u64));
        group.bench_with_input(BenchmarkId::new("text", len), &input, |bench, input| {
            bench.iter(|| measure(black_box(input)))
        });
    }

    group.finish();
}

fn bench_encode(c: &mut Criterion) {
    let mut group = c.benchmark_group("encode");

    for len in [16, 64, 256, 1024] {
        let input = sample_text(len);
        let mut buf = vec![0u8; measure(&input)];

        group.throughput(Throughput::Bytes(len as u64));
        group.bench_with_input(BenchmarkId::new("text", len), &input, |bench, input| {
            bench.iter(|| {
                buf.fill(0);
                encode(black_box(input), black_box(&mut buf))
            })
        });
    }

    group.finish();
}

fn bench_decode(c: &mut Criterion) {
    let mut group = c.benchmark_group("decode");

    for len in [16, 64, 256, 1024] {
        let input = sample_text(len);
        let mut encoded = vec![0u8; measure(&input)];
        encode(&input, &mut encoded);

        group.throughput(Throughput::Bytes(len as u64));
        group.bench_with_input(BenchmarkId::new("text", len), &len, |bench, &len| {
            bench.iter(|| {
                Decoder::new(black_box(&encoded), black_box(len)).collect::<Vec<u8>>()
            })
        });
    }

    group.finish();
}

fn bench_pack(c: &mut Criterion) {
    let mut group = c.benchmark_group("pack");

    for len in [16, 64, 256, 1024] {
        let input = sample_text(len);

        group.throughput(Throughput::Bytes(len as u64));
        group.bench_with_input(BenchmarkId::new("text", len), &input, |bench, input| {
            bench.iter(|| pack(black_box(input)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_measure, bench_encode, bench_decode, bench_pack);
criterion_main!(benches);
