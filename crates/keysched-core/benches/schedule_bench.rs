use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha20Rng;

use keysched_core::{
    expand_aes_key, expand_des_key, expand_triple_des_key, permute, AesKey, DesKey, TripleDesKey,
    PC1,
};

fn bench_des(c: &mut Criterion) {
    let mut rng = ChaCha20Rng::from_seed([1u8; 32]);
    let mut des = [0u8; 8];
    let mut tdes = [0u8; 24];
    rng.fill_bytes(&mut des);
    rng.fill_bytes(&mut tdes);
    let des = DesKey::from(des);
    let tdes = TripleDesKey::from(tdes);

    let mut group = c.benchmark_group("des");
    group.bench_function("pc1_permute", |b| {
        b.iter(|| permute(black_box(des.as_u64()), 64, &PC1))
    });
    group.bench_function("des_key_schedule", |b| {
        b.iter(|| expand_des_key(black_box(&des)))
    });
    group.bench_function("triple_des_three_key", |b| {
        b.iter(|| expand_triple_des_key(black_box(&tdes)))
    });
    group.finish();
}

fn bench_aes(c: &mut Criterion) {
    let mut rng = ChaCha20Rng::from_seed([2u8; 32]);
    let mut k128 = [0u8; 16];
    let mut k192 = [0u8; 24];
    let mut k256 = [0u8; 32];
    rng.fill_bytes(&mut k128);
    rng.fill_bytes(&mut k192);
    rng.fill_bytes(&mut k256);

    let mut group = c.benchmark_group("aes");
    for (name, key) in [
        ("aes128_expand", AesKey::from(k128)),
        ("aes192_expand", AesKey::from(k192)),
        ("aes256_expand", AesKey::from(k256)),
    ] {
        group.bench_function(name, |b| b.iter(|| expand_aes_key(black_box(&key))));
    }
    group.finish();
}

criterion_group!(benches, bench_des, bench_aes);
criterion_main!(benches);
