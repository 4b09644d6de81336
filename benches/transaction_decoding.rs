use blvm_decoder::crypto::hash256;
use blvm_decoder::{DecodeLimits, Decoder};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

const GENESIS_COINBASE_TX_HEX: &str = "01000000010000000000000000000000000000000000000000000000000000000000000000ffffffff4d04ffff001d0104455468652054696d65732030332f4a616e2f32303039204368616e63656c6c6f72206f6e206272696e6b206f66207365636f6e64206261696c6f757420666f722062616e6b73ffffffff0100f2052a01000000434104678afdb0fe5548271967f1a67130b7105cd6a828e03909a67962e0ea1f61deb649f6bc3f4cef38c4f35504e51ec112de5c384df7ba0b8d578a4c702b6bf11d5fac00000000";

fn genesis_tx() -> Vec<u8> {
    hex::decode(GENESIS_COINBASE_TX_HEX).expect("valid hex")
}

/// 2000 copies of the genesis coinbase behind a 0xfd count prefix
fn large_block() -> Vec<u8> {
    let tx = genesis_tx();
    let count: u16 = 2000;
    let mut data = vec![0xfd];
    data.extend_from_slice(&count.to_le_bytes());
    for _ in 0..count {
        data.extend_from_slice(&tx);
    }
    data
}

fn benchmark_read_tx(c: &mut Criterion) {
    let data = genesis_tx();

    c.bench_function("read_tx_genesis_coinbase", |b| {
        b.iter(|| {
            let mut d = Decoder::with_limits(black_box(&data), DecodeLimits::default());
            black_box(d.read_tx().expect("decodes"))
        })
    });
}

fn benchmark_read_block(c: &mut Criterion) {
    let data = large_block();

    c.bench_function("read_block_2000_txs", |b| {
        b.iter(|| {
            let mut d = Decoder::with_limits(black_box(&data), DecodeLimits::default());
            black_box(d.read_block().expect("decodes"))
        })
    });

    c.bench_function("read_block_2000_txs_no_hash", |b| {
        let noop = |_: &[u8]| [0u8; 32];
        b.iter(|| {
            let mut d = Decoder::with_limits(black_box(&data), DecodeLimits::default());
            black_box(d.read_block_with(&noop).expect("decodes"))
        })
    });
}

fn benchmark_hash256(c: &mut Criterion) {
    let data = genesis_tx();

    c.bench_function("hash256_genesis_coinbase", |b| {
        b.iter(|| black_box(hash256(black_box(&data))))
    });
}

criterion_group!(
    benches,
    benchmark_read_tx,
    benchmark_read_block,
    benchmark_hash256
);
criterion_main!(benches);
