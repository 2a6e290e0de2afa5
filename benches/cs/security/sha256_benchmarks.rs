use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use mdforge::sha256::{compress, sha256_digest, State, BLOCK_SIZE};

fn bench_compress(c: &mut Criterion) {
    let block = [0x61u8; BLOCK_SIZE];
    c.bench_function("compress_single_block", |b| {
        b.iter(|| compress(black_box(&block), black_box(State::INITIAL)))
    });
}

fn bench_digest(c: &mut Criterion) {
    let mut group = c.benchmark_group("sha256_digest");
    for size in [0usize, 64, 1024, 16 * 1024] {
        let data = vec![0xa5u8; size];
        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &data, |b, data| {
            b.iter(|| sha256_digest(black_box(data)))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_compress, bench_digest);
criterion_main!(benches);
