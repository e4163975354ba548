use coinkey_types::PrivateKey;
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn sha256_bench(c: &mut Criterion) {
    let data = [0xABu8; 256];

    c.bench_function("sha256_256B", |b| {
        b.iter(|| coinkey_crypto::sha256(black_box(&data)))
    });
}

fn hash160_bench(c: &mut Criterion) {
    let pubkey = [0x02u8; 33];

    c.bench_function("hash160_33B", |b| {
        b.iter(|| coinkey_crypto::hash160(black_box(&pubkey)))
    });
}

fn encode_check_bench(c: &mut Criterion) {
    let payload = [0x80u8; 34];

    c.bench_function("base58check_encode_34B", |b| {
        b.iter(|| coinkey_crypto::encode_check(black_box(&payload)))
    });
}

fn decode_check_bench(c: &mut Criterion) {
    let text = coinkey_crypto::encode_check(&[0x80u8; 34]);

    c.bench_function("base58check_decode_34B", |b| {
        b.iter(|| coinkey_crypto::decode_check(black_box(&text)))
    });
}

fn derive_public_key_bench(c: &mut Criterion) {
    let key = PrivateKey::new([0x11u8; 32]);

    c.bench_function("secp256k1_derive_compressed", |b| {
        b.iter(|| coinkey_crypto::derive_public_key(black_box(&key), true))
    });
}

criterion_group!(
    benches,
    sha256_bench,
    hash160_bench,
    encode_check_bench,
    decode_check_bench,
    derive_public_key_bench,
);
criterion_main!(benches);
