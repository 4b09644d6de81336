//! Bitcoin VarInt (CompactSize) decoding
//!
//! VarInt is a compact encoding for integers used throughout Bitcoin's wire
//! format. It uses 1, 3, 5 or 9 bytes selected by the first byte:
//! - 0x00-0xfc: the byte itself is the value
//! - 0xfd: 2 more bytes, little-endian u16
//! - 0xfe: 4 more bytes, little-endian u32
//! - 0xff: 8 more bytes, little-endian u64
//!
//! Every first byte selects a branch, so there is no malformed prefix. Values
//! written with a wider prefix than needed (e.g. 1 as `fd 01 00`) are accepted
//! at face value.

use super::reader::Decoder;
use crate::config::DecodeLimits;
use crate::constants::{VARINT_PREFIX_U16, VARINT_PREFIX_U32, VARINT_PREFIX_U64};
use crate::error::{DecodeError, Result};

impl<'a> Decoder<'a> {
    /// Read one CompactSize integer
    pub fn read_varint(&mut self) -> Result<u64> {
        match self.read_u8()? {
            VARINT_PREFIX_U16 => self.read_u16_le().map(u64::from),
            VARINT_PREFIX_U32 => self.read_u32_le().map(u64::from),
            VARINT_PREFIX_U64 => self.read_u64_le(),
            b => Ok(u64::from(b)),
        }
    }

    /// Read a varint length followed by that many raw bytes
    pub fn read_varbytes(&mut self) -> Result<Vec<u8>> {
        let len = self.read_count("byte string", self.limits().max_varbytes_len)?;
        let n = usize::try_from(len).map_err(|_| DecodeError::LengthOverflow(len))?;
        Ok(self.read_bytes(n)?.to_vec())
    }

    /// Read a varint item count and check it against `limit`
    pub(crate) fn read_count(&mut self, kind: &'static str, limit: u64) -> Result<u64> {
        let count = self.read_varint()?;
        if count > limit {
            return Err(DecodeError::CountTooLarge { kind, count, limit }.into());
        }
        Ok(count)
    }
}

/// Decode a Bitcoin VarInt from the start of `data`
///
/// Returns the decoded value and the number of bytes consumed.
///
/// # Examples
///
/// ```
/// use blvm_decoder::serialization::varint::decode_varint;
///
/// assert_eq!(decode_varint(&[252]).unwrap(), (252, 1));
/// assert_eq!(decode_varint(&[0xfd, 0x00, 0x01]).unwrap(), (256, 3));
/// assert_eq!(decode_varint(&[0xfe, 1, 0, 0, 0]).unwrap(), (1, 5));
/// assert!(decode_varint(&[]).is_err());
/// ```
pub fn decode_varint(data: &[u8]) -> Result<(u64, usize)> {
    let mut decoder = Decoder::with_limits(data, DecodeLimits::unbounded());
    let value = decoder.read_varint()?;
    Ok((value, decoder.position()))
}
