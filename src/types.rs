//! Decoded transaction records
//!
//! All records are immutable once built: fields are private and exposed by
//! reference, construction is the only mutation point. Derived properties are
//! computed on first access and cached per instance. Equality compares the
//! wire fields only; cached values never take part.

use crate::constants::{COINBASE_PREVOUT_HASH, COINBASE_PREVOUT_INDEX};
use crate::error::{DecodeError, Result};
use crate::script::{PayTo, ScriptParser, ScriptSigInfo};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::OnceLock;

/// Hash type: 256-bit hash, natural (serialized) byte order
pub type Hash = [u8; 32];

/// Byte string type
pub type ByteString = Vec<u8>;

/// Hex-encode a hash for human display (byte-reversed)
///
/// Hashes are kept in serialized order everywhere else.
pub fn hash_to_display_hex(hash: &Hash) -> String {
    let mut reversed = *hash;
    reversed.reverse();
    hex::encode(reversed)
}

/// Lazily computed value attached to a record
///
/// Concurrent first accesses may both compute; the first stored value wins and
/// later results are dropped. Failed computations are not cached.
#[derive(Clone)]
pub(crate) struct Memo<T>(OnceLock<T>);

impl<T> Memo<T> {
    pub(crate) fn new() -> Self {
        Memo(OnceLock::new())
    }

    pub(crate) fn get_or_init(&self, f: impl FnOnce() -> T) -> &T {
        self.0.get_or_init(f)
    }

    pub(crate) fn get_or_try_init<E>(
        &self,
        f: impl FnOnce() -> std::result::Result<T, E>,
    ) -> std::result::Result<&T, E> {
        if let Some(value) = self.0.get() {
            return Ok(value);
        }
        let value = f()?;
        Ok(self.0.get_or_init(|| value))
    }

    #[cfg(test)]
    pub(crate) fn is_initialized(&self) -> bool {
        self.0.get().is_some()
    }
}

impl<T> Default for Memo<T> {
    fn default() -> Self {
        Memo::new()
    }
}

impl<T> PartialEq for Memo<T> {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

impl<T> Eq for Memo<T> {}

impl<T: fmt::Debug> fmt::Debug for Memo<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.get().fmt(f)
    }
}

/// Reference to a previously created output
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OutPoint {
    /// Transaction hash, serialized byte order
    pub hash: Hash,
    pub index: u32,
}

impl OutPoint {
    pub fn new(hash: Hash, index: u32) -> Self {
        OutPoint { hash, index }
    }

    /// The sentinel prevout carried by coinbase inputs
    pub fn null() -> Self {
        OutPoint {
            hash: COINBASE_PREVOUT_HASH,
            index: COINBASE_PREVOUT_INDEX,
        }
    }

    pub fn is_null(&self) -> bool {
        self.index == COINBASE_PREVOUT_INDEX && self.hash == COINBASE_PREVOUT_HASH
    }
}

/// Transaction input
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TxInput {
    prevout: OutPoint,
    script: ByteString,
    sequence: u32,
    #[serde(skip)]
    is_coinbase: Memo<bool>,
    #[serde(skip)]
    script_sig_info: Memo<Option<ScriptSigInfo>>,
}

impl TxInput {
    pub fn new(prevout: OutPoint, script: ByteString, sequence: u32) -> Self {
        TxInput {
            prevout,
            script,
            sequence,
            is_coinbase: Memo::new(),
            script_sig_info: Memo::new(),
        }
    }

    pub fn prevout(&self) -> &OutPoint {
        &self.prevout
    }

    /// Unparsed scriptSig
    pub fn script(&self) -> &[u8] {
        &self.script
    }

    pub fn sequence(&self) -> u32 {
        self.sequence
    }

    /// True iff the prevout is the coinbase sentinel
    pub fn is_coinbase(&self) -> bool {
        *self.is_coinbase.get_or_init(|| self.prevout.is_null())
    }

    /// Parsed scriptSig, absent for coinbase inputs
    ///
    /// The parser is not consulted for coinbase inputs. The first successful
    /// answer is cached for the lifetime of this input, so later calls return
    /// it regardless of which parser they pass.
    pub fn script_sig_info<P>(&self, parser: &P) -> Result<Option<&ScriptSigInfo>>
    where
        P: ScriptParser + ?Sized,
    {
        if self.is_coinbase() {
            return Ok(None);
        }
        let info = self
            .script_sig_info
            .get_or_try_init(|| parser.parse_script_sig(&self.script))?;
        Ok(info.as_ref())
    }
}

impl fmt::Display for TxInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Input(prevout=({}, {}), script={}, sequence={})",
            hex::encode(self.prevout.hash),
            self.prevout.index,
            hex::encode(&self.script),
            self.sequence
        )
    }
}

/// Transaction output
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TxOutput {
    /// Amount; signed on the wire, not range checked
    value: i64,
    pk_script: ByteString,
    #[serde(skip)]
    pay_to: Memo<PayTo>,
}

impl TxOutput {
    pub fn new(value: i64, pk_script: ByteString) -> Self {
        TxOutput {
            value,
            pk_script,
            pay_to: Memo::new(),
        }
    }

    pub fn value(&self) -> i64 {
        self.value
    }

    /// Unparsed locking script
    pub fn pk_script(&self) -> &[u8] {
        &self.pk_script
    }

    /// Destination of this output, cached after the first successful parse
    pub fn pay_to<P>(&self, parser: &P) -> Result<&PayTo>
    where
        P: ScriptParser + ?Sized,
    {
        Ok(self
            .pay_to
            .get_or_try_init(|| parser.parse_pk_script(&self.pk_script))?)
    }
}

/// Decoded transaction
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tx {
    version: i32,
    inputs: Vec<TxInput>,
    outputs: Vec<TxOutput>,
    locktime: u32,
    #[serde(skip)]
    is_coinbase: Memo<bool>,
}

impl Tx {
    pub fn new(version: i32, inputs: Vec<TxInput>, outputs: Vec<TxOutput>, locktime: u32) -> Self {
        Tx {
            version,
            inputs,
            outputs,
            locktime,
            is_coinbase: Memo::new(),
        }
    }

    pub fn version(&self) -> i32 {
        self.version
    }

    pub fn inputs(&self) -> &[TxInput] {
        &self.inputs
    }

    pub fn outputs(&self) -> &[TxOutput] {
        &self.outputs
    }

    pub fn locktime(&self) -> u32 {
        self.locktime
    }

    /// Whether the first input is a coinbase input
    ///
    /// Fails with [`DecodeError::EmptyInputList`] when the transaction has no
    /// inputs.
    pub fn is_coinbase(&self) -> Result<bool> {
        let first = self.inputs.first().ok_or(DecodeError::EmptyInputList)?;
        Ok(*self.is_coinbase.get_or_init(|| first.is_coinbase()))
    }
}
