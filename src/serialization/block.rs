//! Block transaction list deserialization
//!
//! Format:
//! - VarInt: transaction count
//! - Transactions back to back, each in the format of
//!   [`super::transaction`]
//!
//! Each transaction is hashed over the exact bytes it occupied in the input.
//! There is no encoder, so hashes are never computed over a re-serialization.

use super::reader::Decoder;
use crate::crypto::{DoubleSha256, TxHasher};
use crate::error::Result;
use crate::types::{Hash, Tx};
use serde::{Deserialize, Serialize};

/// Transactions of a block with their content hashes
///
/// `tx_hashes[i]` is the hash of `txs[i]`. Hashes are in natural (serialized)
/// byte order; reverse them for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecodedBlock {
    tx_hashes: Vec<Hash>,
    txs: Vec<Tx>,
}

impl DecodedBlock {
    pub fn tx_hashes(&self) -> &[Hash] {
        &self.tx_hashes
    }

    pub fn txs(&self) -> &[Tx] {
        &self.txs
    }

    pub fn len(&self) -> usize {
        self.txs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.txs.is_empty()
    }

    /// (hash, transaction) pairs in block order
    pub fn iter(&self) -> impl Iterator<Item = (&Hash, &Tx)> {
        self.tx_hashes.iter().zip(self.txs.iter())
    }

    pub fn into_parts(self) -> (Vec<Hash>, Vec<Tx>) {
        (self.tx_hashes, self.txs)
    }
}

impl<'a> Decoder<'a> {
    /// Read a transaction-count-prefixed list of transactions, hashing each
    /// with double SHA256
    pub fn read_block(&mut self) -> Result<DecodedBlock> {
        self.read_block_with(&DoubleSha256)
    }

    /// Same as [`Decoder::read_block`] with an injected hash function
    ///
    /// Any failure aborts the whole block; no partial result is returned.
    pub fn read_block_with<H>(&mut self, hasher: &H) -> Result<DecodedBlock>
    where
        H: TxHasher + ?Sized,
    {
        let block_start = self.position();
        let tx_count = self.read_count("transaction", self.limits().max_transactions)?;
        let capacity = self.capacity_hint(tx_count);
        let mut tx_hashes = Vec::with_capacity(capacity);
        let mut txs = Vec::with_capacity(capacity);

        for index in 0..tx_count {
            let start = self.position();
            let tx = self.read_tx().map_err(|e| {
                log::debug!("block decode aborted at tx {index} (offset {start}): {e}");
                e
            })?;
            let raw = &self.data()[start..self.position()];
            log::trace!("decoded tx {index}: {} bytes at offset {start}", raw.len());
            tx_hashes.push(hasher.hash(raw));
            txs.push(tx);
        }

        log::debug!(
            "decoded block: {} transactions, {} bytes",
            txs.len(),
            self.position() - block_start
        );
        Ok(DecodedBlock { tx_hashes, txs })
    }
}

/// Deserialize a block transaction list from the start of `data`
pub fn deserialize_block(data: &[u8]) -> Result<DecodedBlock> {
    Decoder::new(data).read_block()
}
