//! Transaction decoding against known vectors and hand-built fixtures


use blvm_decoder::crypto::hash256;
use blvm_decoder::{
    deserialize_transaction, deserialize_transaction_with_offset, hash_to_display_hex,
    DecodeError, DecodeLimits, Decoder, Error, OutPoint,
};
use test_helpers::*;

#[test]
fn test_minimal_coinbase_end_to_end() {
    let data = minimal_coinbase_tx();
    let mut d = Decoder::with_limits(&data, DecodeLimits::default());
    let tx = d.read_tx().unwrap();

    assert_eq!(tx.version(), 1);
    assert_eq!(tx.is_coinbase(), Ok(true));
    assert_eq!(tx.inputs()[0].sequence(), 0xffff_ffff);
    assert!(tx.inputs()[0].script().is_empty());
    assert_eq!(tx.outputs()[0].value(), 5_000_000_000);
    assert_eq!(tx.outputs()[0].pk_script(), &[0x51]);
    assert_eq!(tx.locktime(), 0);
    assert_eq!(d.position(), data.len());
}

#[test]
fn test_genesis_coinbase() {
    let data = hex::decode(GENESIS_COINBASE_TX_HEX).unwrap();
    let tx = deserialize_transaction(&data).unwrap();

    assert_eq!(tx.version(), 1);
    assert_eq!(tx.inputs().len(), 1);
    assert_eq!(*tx.inputs()[0].prevout(), OutPoint::null());
    assert_eq!(tx.inputs()[0].script().len(), 77);
    assert_eq!(tx.outputs().len(), 1);
    assert_eq!(tx.outputs()[0].value(), 50 * 100_000_000);
    assert_eq!(tx.outputs()[0].pk_script().len(), 67);
    assert_eq!(tx.outputs()[0].pk_script().last(), Some(&0xac));
    assert_eq!(tx.is_coinbase(), Ok(true));
    assert_eq!(hash_to_display_hex(&hash256(&data)), GENESIS_COINBASE_TXID);
}

#[test]
fn test_missing_locktime_byte_is_truncation() {
    let data = minimal_coinbase_tx();
    let short = &data[..data.len() - 1];
    let mut d = Decoder::with_limits(short, DecodeLimits::default());
    let err = d.read_tx().unwrap_err();
    assert_eq!(
        err,
        Error::Decode(DecodeError::Truncated {
            offset: short.len() - 3,
            needed: 4,
            remaining: 3,
        })
    );
}

#[test]
fn test_field_order_and_endianness() {
    let prev = [0x42; 32];
    let data = encode_tx(
        0x0102_0304,
        &[
            spend_input(prev, 7, &[0x01, 0xaa]),
            spend_input(prev, 8, &[]),
        ],
        &[output(1, &[0x51]), output(-2, &[])],
        0x0506_0708,
    );
    let tx = deserialize_transaction(&data).unwrap();

    assert_eq!(&data[..4], &[0x04, 0x03, 0x02, 0x01]);
    assert_eq!(tx.version(), 0x0102_0304);
    assert_eq!(tx.inputs()[0].prevout().index, 7);
    assert_eq!(tx.inputs()[1].prevout().index, 8);
    assert_eq!(tx.inputs()[0].script(), &[0x01, 0xaa]);
    assert_eq!(tx.inputs()[1].sequence(), 0xffff_fffe);
    assert_eq!(tx.outputs()[0].value(), 1);
    assert_eq!(tx.outputs()[1].value(), -2);
    assert_eq!(tx.locktime(), 0x0506_0708);
    assert_eq!(tx.is_coinbase(), Ok(false));
}

#[test]
fn test_negative_version() {
    let data = encode_tx(-1, &[coinbase_input(&[])], &[], 0);
    let tx = deserialize_transaction(&data).unwrap();
    assert_eq!(tx.version(), -1);
    assert!(tx.outputs().is_empty());
}

#[test]
fn test_decoding_is_deterministic() {
    let data = hex::decode(GENESIS_COINBASE_TX_HEX).unwrap();
    let a = deserialize_transaction(&data).unwrap();
    let b = deserialize_transaction(&data).unwrap();
    assert_eq!(a, b);
}

#[test]
fn test_prefix_decode_reports_consumed() {
    let first = minimal_coinbase_tx();
    let second = encode_tx(2, &[spend_input([1; 32], 0, &[])], &[], 9);
    let mut data = first.clone();
    data.extend_from_slice(&second);

    let (tx, consumed) = deserialize_transaction_with_offset(&data).unwrap();
    assert_eq!(consumed, first.len());
    assert_eq!(tx.version(), 1);

    let (tx, consumed) = deserialize_transaction_with_offset(&data[consumed..]).unwrap();
    assert_eq!(consumed, second.len());
    assert_eq!(tx.locktime(), 9);
}

#[test]
fn test_long_script_uses_wide_prefix() {
    let script = vec![0x6a; 300];
    let data = encode_tx(1, &[coinbase_input(&[])], &[output(0, &script)], 0);
    let tx = deserialize_transaction(&data).unwrap();
    assert_eq!(tx.outputs()[0].pk_script(), script.as_slice());
}

#[test]
fn test_zero_inputs_decodes_but_coinbase_check_fails() {
    let data = encode_tx(1, &[], &[output(10, &[])], 0);
    let tx = deserialize_transaction(&data).unwrap();
    assert!(tx.inputs().is_empty());
    assert_eq!(
        tx.is_coinbase(),
        Err(Error::Decode(DecodeError::EmptyInputList))
    );
}

#[test]
fn test_output_count_above_one_million_decodes() {
    let count = 1_000_001;
    let outputs = vec![output(0, &[]); count];
    let data = encode_tx(1, &[coinbase_input(&[])], &outputs, 0);
    let tx = deserialize_transaction(&data).unwrap();
    assert_eq!(tx.outputs().len(), count);
    assert!(tx.outputs()[count - 1].pk_script().is_empty());
}
