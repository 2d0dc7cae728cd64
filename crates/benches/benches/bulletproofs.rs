//! Benchmarks for bulletproof generation, verification and rewinding

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use zkp_benches::{blind_for, ProveOptions, Secp256k1Zkp};

const VALUES: [u64; 3] = [0, 45_690_000, u64::MAX];

fn bench_prove(c: &mut Criterion) {
    let mut group = c.benchmark_group("bulletproof_prove");
    let ctx = Secp256k1Zkp::new().unwrap();
    let blind = blind_for(1);
    let nonce = blind_for(2);
    group.throughput(Throughput::Elements(64));

    for value in VALUES {
        group.bench_with_input(BenchmarkId::new("prove", value), &value, |b, &value| {
            b.iter(|| {
                let proof = ctx
                    .bulletproof_prove(
                        black_box(value),
                        &blind,
                        &nonce,
                        &blind,
                        ProveOptions::default(),
                    )
                    .unwrap();
                black_box(proof)
            });
        });
    }

    group.finish();
}

fn bench_verify(c: &mut Criterion) {
    let mut group = c.benchmark_group("bulletproof_verify");
    let ctx = Secp256k1Zkp::new().unwrap();
    let blind = blind_for(1);
    let nonce = blind_for(2);
    group.throughput(Throughput::Elements(64));

    for value in VALUES {
        let commit = ctx.commit(value, &blind).unwrap();
        let proof = ctx
            .bulletproof_prove(value, &blind, &nonce, &blind, ProveOptions::default())
            .unwrap();

        group.bench_with_input(BenchmarkId::new("verify", value), &value, |b, _| {
            b.iter(|| {
                assert!(ctx
                    .bulletproof_verify(black_box(&commit), black_box(&proof), None, 0)
                    .unwrap());
            });
        });
    }

    group.finish();
}

fn bench_rewind(c: &mut Criterion) {
    let ctx = Secp256k1Zkp::new().unwrap();
    let blind = blind_for(1);
    let nonce = blind_for(2);
    let options = ProveOptions {
        message: Some(b"bench".as_slice()),
        ..Default::default()
    };
    let commit = ctx.commit(45_690_000, &blind).unwrap();
    let proof = ctx
        .bulletproof_prove(45_690_000, &blind, &nonce, &blind, options)
        .unwrap();

    c.bench_function("bulletproof_rewind", |b| {
        b.iter(|| {
            ctx.bulletproof_rewind(black_box(&commit), &blind, None, black_box(&proof), 0)
                .unwrap()
        })
    });
}

fn bench_proof_size(_c: &mut Criterion) {
    let ctx = Secp256k1Zkp::new().unwrap();
    let blind = blind_for(1);
    let proof = ctx
        .bulletproof_prove(1, &blind, &blind_for(2), &blind, ProveOptions::default())
        .unwrap();
    println!("Bulletproof size for 64 bits: {} bytes", proof.len());
}

criterion_group!(
    benches,
    bench_prove,
    bench_verify,
    bench_rewind,
    bench_proof_size
);
criterion_main!(benches);
