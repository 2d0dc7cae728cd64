//! Benchmarks for MLSAG ring signatures over growing rings

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use zkp_benches::{KeyPair, MlsagMatrix, Secp256k1Zkp};

/// A two-row ring of seeded keys with the signer's secrets
fn ring(ctx: &Secp256k1Zkp, n_cols: usize, signer: usize) -> (MlsagMatrix, Vec<[u8; 32]>) {
    let mut matrix = MlsagMatrix::new(2, n_cols).unwrap();
    let mut secret_keys = Vec::new();
    for row in 0..2 {
        for col in 0..n_cols {
            let pair: KeyPair = ctx.key_pair_from_seed(&[row as u8, col as u8]).unwrap();
            matrix
                .set_cell(row, col, &pair.public_key().to_compressed().unwrap())
                .unwrap();
            if col == signer {
                secret_keys.push(*pair.private_key().as_bytes());
            }
        }
    }
    (matrix, secret_keys)
}

fn bench_mlsag_generate(c: &mut Criterion) {
    let mut group = c.benchmark_group("mlsag_generate");
    let ctx = Secp256k1Zkp::new().unwrap();
    let nonce = [0x5au8; 32];
    let preimage = [0x42u8; 32];

    for n_cols in [2usize, 4, 8, 16, 32] {
        group.throughput(Throughput::Elements(n_cols as u64));
        let signer = n_cols / 2;
        let (matrix, secret_keys) = ring(&ctx, n_cols, signer);

        group.bench_with_input(BenchmarkId::new("generate", n_cols), &n_cols, |b, _| {
            b.iter(|| {
                let sig = ctx
                    .mlsag_generate(&nonce, black_box(&preimage), signer, &secret_keys, &matrix)
                    .unwrap();
                black_box(sig)
            });
        });
    }

    group.finish();
}

fn bench_mlsag_verify(c: &mut Criterion) {
    let mut group = c.benchmark_group("mlsag_verify");
    let ctx = Secp256k1Zkp::new().unwrap();
    let nonce = [0x5au8; 32];
    let preimage = [0x42u8; 32];

    for n_cols in [2usize, 4, 8, 16, 32] {
        group.throughput(Throughput::Elements(n_cols as u64));
        let signer = n_cols / 2;
        let (matrix, secret_keys) = ring(&ctx, n_cols, signer);
        let sig = ctx
            .mlsag_generate(&nonce, &preimage, signer, &secret_keys, &matrix)
            .unwrap();

        group.bench_with_input(BenchmarkId::new("verify", n_cols), &n_cols, |b, _| {
            b.iter(|| {
                assert!(ctx
                    .mlsag_verify(black_box(&preimage), &matrix, black_box(&sig))
                    .unwrap());
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_mlsag_generate, bench_mlsag_verify);
criterion_main!(benches);
