//! Script collaborator contract
//!
//! Script grammar lives outside this crate. The decoder only needs two
//! capabilities, expressed by [`ScriptParser`], and the value types those
//! capabilities return. Records call into an injected parser lazily and cache
//! the answer (see [`crate::types::TxInput::script_sig_info`] and
//! [`crate::types::TxOutput::pay_to`]).

use crate::error::ScriptError;
use crate::types::ByteString;
use serde::{Deserialize, Serialize};

/// What an input's unlocking script (scriptSig) provides
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScriptSigInfo {
    /// `<sig> <pubkey>`
    PubKeyHash {
        signature: ByteString,
        pubkey: ByteString,
    },
    /// `<sig>`
    PubKey { signature: ByteString },
    /// `OP_0 <sig>... <redeem script>`
    ScriptHash {
        signatures: Vec<ByteString>,
        redeem_script: ByteString,
    },
}

/// Destination classification of an output's locking script (pk_script)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PayTo {
    PubKeyHash([u8; 20]),
    ScriptHash([u8; 20]),
    PubKey(ByteString),
    /// Provably unspendable, e.g. `OP_RETURN <data>`
    Unspendable,
    NonStandard,
}

/// Injected script interpretation
///
/// `parse_script_sig` is only ever invoked for non-coinbase inputs;
/// `parse_pk_script` for every output that is asked for its destination.
/// Returning `Ok(None)` from `parse_script_sig` means the script was
/// well-formed but not recognised.
pub trait ScriptParser {
    fn parse_script_sig(&self, script: &[u8]) -> Result<Option<ScriptSigInfo>, ScriptError>;

    fn parse_pk_script(&self, script: &[u8]) -> Result<PayTo, ScriptError>;
}
