//! Benchmarks for Borromean range proof generation and verification

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use zkp_benches::{blind_for, RangeProofConfig, Secp256k1Zkp, ZkpConfig};

const VALUE: u64 = 100;

fn context(min_bits: u8) -> Secp256k1Zkp {
    let config = ZkpConfig {
        range_proof: RangeProofConfig {
            min_bits,
            ..Default::default()
        },
        ..Default::default()
    };
    Secp256k1Zkp::with_config(config).unwrap()
}

fn bench_range_proof_generation(c: &mut Criterion) {
    let mut group = c.benchmark_group("range_proof_generation");
    let blind = blind_for(7);

    for bits in [8u8, 16, 32, 64] {
        group.throughput(Throughput::Elements(bits as u64));
        let ctx = context(bits);
        let commit = ctx.commit(VALUE, &blind).unwrap();

        group.bench_with_input(BenchmarkId::new("sign", bits), &bits, |b, _| {
            b.iter(|| {
                let proof = ctx
                    .range_proof_sign(0, black_box(&commit), &blind, &blind, b"", black_box(VALUE))
                    .unwrap();
                black_box(proof)
            });
        });
    }

    group.finish();
}

fn bench_range_proof_verification(c: &mut Criterion) {
    let mut group = c.benchmark_group("range_proof_verification");
    let blind = blind_for(7);

    for bits in [8u8, 16, 32, 64] {
        group.throughput(Throughput::Elements(bits as u64));

        // Pre-generate the proof for the verification benchmark
        let ctx = context(bits);
        let commit = ctx.commit(VALUE, &blind).unwrap();
        let proof = ctx
            .range_proof_sign(0, &commit, &blind, &blind, b"", VALUE)
            .unwrap();

        group.bench_with_input(BenchmarkId::new("verify", bits), &bits, |b, _| {
            b.iter(|| {
                ctx.range_proof_verify(black_box(&commit), black_box(&proof))
                    .unwrap()
                    .unwrap()
            });
        });
        group.bench_with_input(BenchmarkId::new("rewind", bits), &bits, |b, _| {
            b.iter(|| {
                ctx.range_proof_rewind(black_box(&commit), black_box(&proof), &blind)
                    .unwrap()
            });
        });
    }

    group.finish();
}

fn bench_range_proof_size(_c: &mut Criterion) {
    let blind = blind_for(7);
    for bits in [8u8, 16, 32, 64] {
        let ctx = context(bits);
        let commit = ctx.commit(VALUE, &blind).unwrap();
        let proof = ctx
            .range_proof_sign(0, &commit, &blind, &blind, b"", VALUE)
            .unwrap();
        println!("Range proof size for {} bits: {} bytes", bits, proof.len());
    }
}

criterion_group!(
    benches,
    bench_range_proof_generation,
    bench_range_proof_verification,
    bench_range_proof_size
);
criterion_main!(benches);
