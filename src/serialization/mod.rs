//! Bitcoin wire format deserialization
//!
//! Layers, leaves first: [`reader`] (bounds-checked fixed-width reads),
//! [`varint`] (CompactSize and length-prefixed bytes), [`transaction`]
//! (outpoints, inputs, outputs, transactions) and [`block`] (transaction lists
//! with content hashes). All integers are little-endian.

pub mod block;
pub mod reader;
pub mod transaction;
pub mod varint;

pub use block::{deserialize_block, DecodedBlock};
pub use reader::Decoder;
pub use transaction::{deserialize_transaction, deserialize_transaction_with_offset};
pub use varint::decode_varint;
