use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};

use golay24::{decode, encode};

fn bench_codec(c: &mut Criterion) {
    // 1 MiB, large for the embedded systems this codec targets.
    let payload: Vec<u8> = (0..1024 * 1024).map(|i| (i * 31 >> 3) as u8).collect();
    let enc = encode(&payload);

    let mut group = c.benchmark_group("codec");

    group.throughput(Throughput::Bytes(payload.len() as u64));
    group.bench_function("encode", |b| b.iter(|| encode(black_box(&payload))));

    group.throughput(Throughput::Bytes(enc.bytes.len() as u64));
    group.bench_function("decode", |b| b.iter(|| decode(black_box(&enc.bytes))));

    group.finish();
}

criterion_group!(benches, bench_codec);
criterion_main!(benches);
