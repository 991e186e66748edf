use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use zstd_session::service::ZstdService;

fn sample(len: usize) -> Vec<u8> {
    (0..len).map(|i| ((i * 7) % 61) as u8).collect()
}

fn bench_session_compress(c: &mut Criterion) {
    let svc = ZstdService::default();
    let data = sample(256 * 1024);

    let mut group = c.benchmark_group("session_compress");
    group.throughput(Throughput::Bytes(data.len() as u64));
    for level in [1, 3, 9, 19] {
        let session = svc.create_session(level, 22).unwrap();
        group.bench_with_input(BenchmarkId::from_parameter(level), &data, |b, d| {
            b.iter(|| session.compress(black_box(d)).unwrap())
        });
    }
    group.finish();
}

fn bench_session_decompress(c: &mut Criterion) {
    let svc = ZstdService::default();
    let session = svc.create_session(3, 22).unwrap();
    let data = sample(256 * 1024);
    let frame = session.compress(&data).unwrap();

    let mut group = c.benchmark_group("session_decompress");
    group.throughput(Throughput::Bytes(data.len() as u64));
    group.bench_function("level_3", |b| b.iter(|| session.decompress(black_box(&frame)).unwrap()));
    group.finish();
}

fn bench_quick(c: &mut Criterion) {
    let svc = ZstdService::default();
    let data = sample(64 * 1024);
    c.bench_function("quick_compress_64k", |b| b.iter(|| svc.quick_compress(black_box(&data), 3).unwrap()));
}

criterion_group!(benches, bench_session_compress, bench_session_decompress, bench_quick);
criterion_main!(benches);
