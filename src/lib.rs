//! # blvm-decoder
//!
//! Byte-exact decoder for Bitcoin-style transactions and transaction lists.
//!
//! Turns a raw byte buffer into immutable [`types::Tx`] records and, for a
//! transaction list, the content hash of each transaction computed over the
//! exact bytes it occupied. Decoding only; there is no encoder.
//!
//! ## Architecture
//!
//! Data flows one way:
//! - [`serialization::reader`]: bounds-checked little-endian reads
//! - [`serialization::varint`]: CompactSize integers and length-prefixed bytes
//! - [`serialization::transaction`]: outpoints, inputs, outputs, transactions
//! - [`serialization::block`]: transaction lists plus content hashes
//!
//! Script interpretation ([`script::ScriptParser`]) and hashing
//! ([`crypto::TxHasher`]) are injected collaborators.
//!
//! ## Usage
//!
//! ```rust
//! use blvm_decoder::Decoder;
//!
//! let raw = hex::decode(concat!(
//!     "01000000",
//!     "01",
//!     "0000000000000000000000000000000000000000000000000000000000000000ffffffff",
//!     "00",
//!     "ffffffff",
//!     "01",
//!     "00f2052a01000000",
//!     "0151",
//!     "00000000",
//! ))
//! .unwrap();
//!
//! let mut decoder = Decoder::new(&raw);
//! let tx = decoder.read_tx().unwrap();
//! assert!(tx.is_coinbase().unwrap());
//! assert_eq!(tx.outputs()[0].value(), 5_000_000_000);
//! assert!(decoder.is_exhausted());
//! ```

pub mod config;
pub mod constants;
pub mod crypto;
pub mod error;
pub mod script;
pub mod serialization;
pub mod types;

pub use config::{DecodeLimits, DecoderConfig};
pub use crypto::{DoubleSha256, TxHasher};
pub use error::{DecodeError, Error, Result, ScriptError};
pub use script::{PayTo, ScriptParser, ScriptSigInfo};
pub use serialization::{
    deserialize_block, deserialize_transaction, deserialize_transaction_with_offset,
    DecodedBlock, Decoder,
};
pub use types::{hash_to_display_hex, Hash, OutPoint, Tx, TxInput, TxOutput};
