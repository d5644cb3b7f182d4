//! Encode+decode throughput on 100, 1,000 and 5,000 byte inputs.
//!
//! Run with: cargo bench --bench codec

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rand::{rngs::StdRng, Rng, SeedableRng};

fn bench_codec(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(0);
    let mut group = c.benchmark_group("encode_decode");

    for size in [100usize, 1_000, 5_000] {
        let data: Vec<u8> = (0..size).map(|_| rng.gen()).collect();
        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &data, |b, data| {
            b.iter(|| {
                let encoded = qbase58::encode(black_box(data));
                qbase58::decode(black_box(&encoded)).unwrap()
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_codec);
criterion_main!(benches);
