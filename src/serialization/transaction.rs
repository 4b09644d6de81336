//! Transaction wire format deserialization
//!
//! Format (non-SegWit):
//! - Version (4 bytes, little-endian, signed)
//! - Input count (VarInt)
//! - For each input:
//!   - Previous output hash (32 bytes)
//!   - Previous output index (4 bytes, little-endian)
//!   - Script length (VarInt)
//!   - Script bytes
//!   - Sequence (4 bytes, little-endian)
//! - Output count (VarInt)
//! - For each output:
//!   - Value (8 bytes, little-endian, signed)
//!   - Script length (VarInt)
//!   - Script bytes
//! - Lock time (4 bytes, little-endian)

use super::reader::Decoder;
use crate::constants::HASH_SIZE;
use crate::error::{DecodeError, Result};
use crate::types::{Hash, OutPoint, Tx, TxInput, TxOutput};

impl<'a> Decoder<'a> {
    /// Previous output hash (kept in serialized order) and index
    pub fn read_outpoint(&mut self) -> Result<OutPoint> {
        let mut hash: Hash = [0u8; HASH_SIZE];
        hash.copy_from_slice(self.read_bytes(HASH_SIZE)?);
        let index = self.read_u32_le()?;
        Ok(OutPoint::new(hash, index))
    }

    pub fn read_input(&mut self) -> Result<TxInput> {
        let prevout = self.read_outpoint()?;
        let script = self.read_varbytes()?;
        let sequence = self.read_u32_le()?;
        Ok(TxInput::new(prevout, script, sequence))
    }

    pub fn read_inputs(&mut self) -> Result<Vec<TxInput>> {
        let count = self.read_count("input", self.limits().max_inputs)?;
        let mut inputs = Vec::with_capacity(self.capacity_hint(count));
        for _ in 0..count {
            inputs.push(self.read_input()?);
        }
        Ok(inputs)
    }

    pub fn read_output(&mut self) -> Result<TxOutput> {
        let value = self.read_i64_le()?;
        let pk_script = self.read_varbytes()?;
        Ok(TxOutput::new(value, pk_script))
    }

    pub fn read_outputs(&mut self) -> Result<Vec<TxOutput>> {
        let count = self.read_count("output", self.limits().max_outputs)?;
        let mut outputs = Vec::with_capacity(self.capacity_hint(count));
        for _ in 0..count {
            outputs.push(self.read_output()?);
        }
        Ok(outputs)
    }

    /// Version, inputs, outputs, lock time, in that order
    pub fn read_tx(&mut self) -> Result<Tx> {
        let version = self.read_i32_le()?;
        let inputs = self.read_inputs()?;
        let outputs = self.read_outputs()?;
        let locktime = self.read_u32_le()?;
        Ok(Tx::new(version, inputs, outputs, locktime))
    }

    /// Every wire item takes at least one byte, so a count can never usefully
    /// exceed the bytes left in the buffer.
    pub(crate) fn capacity_hint(&self, count: u64) -> usize {
        usize::try_from(count)
            .unwrap_or(usize::MAX)
            .min(self.remaining())
    }
}

/// Deserialize a transaction occupying the whole of `data`
///
/// Fails with [`DecodeError::TrailingBytes`] if bytes remain after the lock
/// time.
pub fn deserialize_transaction(data: &[u8]) -> Result<Tx> {
    let (tx, consumed) = deserialize_transaction_with_offset(data)?;
    if consumed != data.len() {
        return Err(DecodeError::TrailingBytes {
            consumed,
            total: data.len(),
        }
        .into());
    }
    Ok(tx)
}

/// Deserialize a transaction from the start of `data`
///
/// Returns the transaction and the number of bytes it occupied.
pub fn deserialize_transaction_with_offset(data: &[u8]) -> Result<(Tx, usize)> {
    let mut decoder = Decoder::new(data);
    let tx = decoder.read_tx()?;
    Ok((tx, decoder.position()))
}
