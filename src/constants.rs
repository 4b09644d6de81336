//! Wire format constants

/// Size of a transaction or block hash in bytes
pub const HASH_SIZE: usize = 32;

/// Prevout index marking a coinbase input (together with an all-zero hash)
pub const COINBASE_PREVOUT_INDEX: u32 = 0xffff_ffff;

/// Prevout hash marking a coinbase input
pub const COINBASE_PREVOUT_HASH: [u8; HASH_SIZE] = [0u8; HASH_SIZE];

/// CompactSize prefix: value follows as u16 little-endian
pub const VARINT_PREFIX_U16: u8 = 0xfd;

/// CompactSize prefix: value follows as u32 little-endian
pub const VARINT_PREFIX_U32: u8 = 0xfe;

/// CompactSize prefix: value follows as u64 little-endian
pub const VARINT_PREFIX_U64: u8 = 0xff;
