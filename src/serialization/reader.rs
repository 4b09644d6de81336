//! Cursor over a borrowed byte buffer
//!
//! Every read is bounds checked: a read that would run past the end of the
//! buffer fails with [`DecodeError::Truncated`] and leaves the cursor where it
//! was. The cursor only moves forward.

use crate::config::{get_decoder_config, DecodeLimits};
use crate::error::{DecodeError, Result};

/// Single-pass decoder over an in-memory buffer
///
/// Holds a read-only view of the input for the duration of decoding; decoded
/// records copy the bytes they keep. One instance must not be shared between
/// concurrent callers, distinct instances are independent.
#[derive(Debug, Clone)]
pub struct Decoder<'a> {
    data: &'a [u8],
    cursor: usize,
    limits: DecodeLimits,
}

impl<'a> Decoder<'a> {
    /// Decoder using the global [`crate::config::DecoderConfig`] limits
    pub fn new(data: &'a [u8]) -> Self {
        Self::with_limits(data, get_decoder_config().limits)
    }

    pub fn with_limits(data: &'a [u8], limits: DecodeLimits) -> Self {
        Decoder {
            data,
            cursor: 0,
            limits,
        }
    }

    /// Offset of the next unread byte
    #[inline]
    pub fn position(&self) -> usize {
        self.cursor
    }

    #[inline]
    pub fn remaining(&self) -> usize {
        self.data.len() - self.cursor
    }

    #[inline]
    pub fn is_exhausted(&self) -> bool {
        self.cursor == self.data.len()
    }

    /// The whole underlying buffer, including consumed bytes
    pub fn data(&self) -> &'a [u8] {
        self.data
    }

    pub fn limits(&self) -> &DecodeLimits {
        &self.limits
    }

    pub(crate) fn truncated(&self, needed: u64) -> DecodeError {
        DecodeError::Truncated {
            offset: self.cursor,
            needed,
            remaining: self.remaining(),
        }
    }

    /// Next `n` bytes, advancing the cursor by `n`
    pub fn read_bytes(&mut self, n: usize) -> Result<&'a [u8]> {
        if self.remaining() < n {
            return Err(self.truncated(n as u64).into());
        }
        let start = self.cursor;
        self.cursor += n;
        Ok(&self.data[start..self.cursor])
    }

    #[inline]
    fn read_array<const N: usize>(&mut self) -> Result<[u8; N]> {
        let mut out = [0u8; N];
        out.copy_from_slice(self.read_bytes(N)?);
        Ok(out)
    }

    pub fn read_u8(&mut self) -> Result<u8> {
        Ok(self.read_array::<1>()?[0])
    }

    pub fn read_u16_le(&mut self) -> Result<u16> {
        self.read_array().map(u16::from_le_bytes)
    }

    pub fn read_u32_le(&mut self) -> Result<u32> {
        self.read_array().map(u32::from_le_bytes)
    }

    pub fn read_u64_le(&mut self) -> Result<u64> {
        self.read_array().map(u64::from_le_bytes)
    }

    pub fn read_i32_le(&mut self) -> Result<i32> {
        self.read_array().map(i32::from_le_bytes)
    }

    pub fn read_i64_le(&mut self) -> Result<i64> {
        self.read_array().map(i64::from_le_bytes)
    }
}
