use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use runic32::{decode, encode};
use std::hint::black_box;

const SIZES: [usize; 5] = [64, 256, 1024, 4096, 16384];

fn bench_encode(c: &mut Criterion) {
    let mut group = c.benchmark_group("encode_runic32");

    for size in SIZES.iter() {
        group.throughput(Throughput::Bytes(*size as u64));
        let data: Vec<u8> = (0..*size).map(|i| (i % 256) as u8).collect();

        group.bench_with_input(BenchmarkId::from_parameter(size), &data, |b, data| {
            b.iter(|| encode(black_box(data)));
        });
    }
    group.finish();
}

fn bench_decode(c: &mut Criterion) {
    let mut group = c.benchmark_group("decode_runic32");

    for size in SIZES.iter() {
        let data: Vec<u8> = (0..*size).map(|i| (i % 256) as u8).collect();
        let encoded = encode(&data);

        group.throughput(Throughput::Bytes(*size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &encoded, |b, encoded| {
            b.iter(|| decode(black_box(encoded)).unwrap());
        });
    }
    group.finish();
}

fn bench_encode_tail(c: &mut Criterion) {
    let mut group = c.benchmark_group("encode_runic32_tail");

    // One group per tail length, padding included
    for tail in 1..=4usize {
        let data: Vec<u8> = (0..tail).map(|i| i as u8).collect();

        group.bench_with_input(BenchmarkId::from_parameter(tail), &data, |b, data| {
            b.iter(|| encode(black_box(data)));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_encode, bench_decode, bench_encode_tail);
criterion_main!(benches);
