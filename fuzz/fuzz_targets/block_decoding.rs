#![no_main]
use blvm_decoder::crypto::hash256;
use blvm_decoder::{DecodeLimits, Decoder};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let mut decoder = Decoder::with_limits(data, DecodeLimits::default());
    if let Ok(block) = decoder.read_block() {
        assert_eq!(block.tx_hashes().len(), block.txs().len());

        // Re-walk the spans and check every hash covers exactly one transaction
        let mut walker = Decoder::with_limits(data, DecodeLimits::default());
        walker.read_varint().expect("count decoded once already");
        for hash in block.tx_hashes() {
            let start = walker.position();
            walker.read_tx().expect("transaction decoded once already");
            assert_eq!(*hash, hash256(&data[start..walker.position()]));
        }
        assert_eq!(walker.position(), decoder.position());
    }
});
