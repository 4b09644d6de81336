#![no_main]
use blvm_decoder::{DecodeLimits, Decoder};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let mut decoder = Decoder::with_limits(data, DecodeLimits::default());
    let result = decoder.read_tx();
    assert!(decoder.position() <= data.len());

    if let Ok(tx) = result {
        // Same bytes, same transaction
        let mut again = Decoder::with_limits(&data[..decoder.position()], DecodeLimits::default());
        assert_eq!(again.read_tx().ok(), Some(tx.clone()));
        assert!(again.is_exhausted());

        let _ = tx.is_coinbase();
    }
});
