//! Content hashing for decoded transactions
//!
//! The block decoder hashes each transaction over the exact bytes it consumed.
//! The hash function is a collaborator: anything implementing [`TxHasher`] can
//! be injected, with [`DoubleSha256`] (the Bitcoin txid hash) as the default.

use crate::types::Hash;
use sha2::{Digest, Sha256};

/// Hash collaborator used by the block decoder
///
/// Implementations must be deterministic and pure: the same bytes always map
/// to the same digest.
pub trait TxHasher {
    fn hash(&self, data: &[u8]) -> Hash;
}

impl<F> TxHasher for F
where
    F: Fn(&[u8]) -> Hash,
{
    fn hash(&self, data: &[u8]) -> Hash {
        self(data)
    }
}

/// SHA256(SHA256(data)), stored in natural (serialized) byte order
#[derive(Debug, Clone, Copy, Default)]
pub struct DoubleSha256;

impl DoubleSha256 {
    pub fn new() -> Self {
        Self
    }
}

impl TxHasher for DoubleSha256 {
    #[inline]
    fn hash(&self, data: &[u8]) -> Hash {
        hash256(data)
    }
}

/// Single SHA256
pub fn sha256(data: &[u8]) -> Hash {
    let digest = Sha256::digest(data);
    let mut result = [0u8; 32];
    result.copy_from_slice(&digest);
    result
}

/// Double SHA256 (Bitcoin standard)
pub fn hash256(data: &[u8]) -> Hash {
    sha256(&sha256(data))
}
