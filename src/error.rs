//! Error types for wire decoding

use std::borrow::Cow;
use thiserror::Error;

/// Malformed or truncated wire data
#[derive(Error, Debug, PartialEq, Eq, Clone)]
pub enum DecodeError {
    #[error("Truncated input: needed {needed} bytes at offset {offset}, {remaining} remaining")]
    Truncated {
        offset: usize,
        needed: u64,
        remaining: usize,
    },

    #[error("Empty input list")]
    EmptyInputList,

    #[error("{kind} count {count} exceeds limit {limit}")]
    CountTooLarge {
        kind: &'static str,
        count: u64,
        limit: u64,
    },

    #[error("Length {0} does not fit in addressable memory")]
    LengthOverflow(u64),

    #[error("Trailing bytes: consumed {consumed} of {total}")]
    TrailingBytes { consumed: usize, total: usize },
}

/// Failure reported by the script collaborator
///
/// Carried through unchanged inside [`Error::Script`].
#[derive(Error, Debug, PartialEq, Eq, Clone)]
#[error("Script parse failed: {0}")]
pub struct ScriptError(pub Cow<'static, str>);

impl ScriptError {
    pub fn new(msg: impl Into<Cow<'static, str>>) -> Self {
        ScriptError(msg.into())
    }
}

#[derive(Error, Debug, PartialEq, Eq, Clone)]
pub enum Error {
    #[error(transparent)]
    Decode(#[from] DecodeError),

    #[error(transparent)]
    Script(#[from] ScriptError),
}

impl Error {
    /// True for truncated or otherwise malformed wire data
    pub fn is_decode(&self) -> bool {
        matches!(self, Error::Decode(_))
    }

    /// True for failures raised by the script collaborator
    pub fn is_script(&self) -> bool {
        matches!(self, Error::Script(_))
    }
}

pub type Result<T> = std::result::Result<T, Error>;
