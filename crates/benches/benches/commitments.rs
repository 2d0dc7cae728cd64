//! Benchmarks for Pedersen commitments

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use zkp_benches::{blind_for, Commitment, Secp256k1Zkp};

fn bench_commit(c: &mut Criterion) {
    let ctx = Secp256k1Zkp::new().unwrap();
    let blind = blind_for(1);

    c.bench_function("commit", |b| {
        b.iter(|| ctx.commit(black_box(45_690_000), black_box(&blind)).unwrap())
    });
    c.bench_function("blind_switch", |b| {
        b.iter(|| ctx.blind_switch(black_box(45_690_000), black_box(&blind)).unwrap())
    });
}

fn bench_commit_sum(c: &mut Criterion) {
    let mut group = c.benchmark_group("commit_sum");
    let ctx = Secp256k1Zkp::new().unwrap();

    for count in [2usize, 8, 32, 128] {
        group.throughput(Throughput::Elements(count as u64));

        let commits: Vec<Commitment> = (0..count as u64)
            .map(|i| ctx.commit(i * 1000, &blind_for(i)).unwrap())
            .collect();
        let (positives, negatives) = commits.split_at(count / 2);

        group.bench_with_input(BenchmarkId::new("sum", count), &count, |b, _| {
            b.iter(|| ctx.commit_sum(black_box(positives), black_box(negatives)).unwrap());
        });
    }

    group.finish();
}

fn bench_blind_sum(c: &mut Criterion) {
    let mut group = c.benchmark_group("blind_sum");
    let ctx = Secp256k1Zkp::new().unwrap();

    for count in [2usize, 8, 32, 128] {
        group.throughput(Throughput::Elements(count as u64));
        let blinds: Vec<[u8; 32]> = (0..count as u64).map(blind_for).collect();
        let (positives, negatives) = blinds.split_at(count / 2);

        group.bench_with_input(BenchmarkId::new("sum", count), &count, |b, _| {
            b.iter(|| ctx.blind_sum(black_box(positives), black_box(negatives)).unwrap());
        });
    }

    group.finish();
}

criterion_group!(benches, bench_commit, bench_commit_sum, bench_blind_sum);
criterion_main!(benches);
