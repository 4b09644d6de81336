//! Configuration for blvm-decoder
//!
//! Optional caps on wire counts and byte-string lengths. By default nothing
//! is capped and every complete input decodes exactly as the wire format
//! dictates; oversized prefixes already fail as truncated reads. Callers that
//! want an earlier, policy-level rejection set tighter limits. Settings can be
//! loaded from environment variables, deserialized from a config file, or
//! passed programmatically.

use serde::{Deserialize, Serialize};

/// Upper bounds on wire counts and lengths (unbounded unless set)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecodeLimits {
    /// Maximum inputs in a single transaction
    #[serde(default = "unlimited")]
    pub max_inputs: u64,

    /// Maximum outputs in a single transaction
    #[serde(default = "unlimited")]
    pub max_outputs: u64,

    /// Maximum transactions in a block
    #[serde(default = "unlimited")]
    pub max_transactions: u64,

    /// Maximum length of a single length-prefixed byte string (scripts)
    #[serde(default = "unlimited")]
    pub max_varbytes_len: u64,
}

fn unlimited() -> u64 {
    u64::MAX
}

impl Default for DecodeLimits {
    fn default() -> Self {
        Self::unbounded()
    }
}

impl DecodeLimits {
    /// Limits that never reject a count or length
    pub fn unbounded() -> Self {
        Self {
            max_inputs: u64::MAX,
            max_outputs: u64::MAX,
            max_transactions: u64::MAX,
            max_varbytes_len: u64::MAX,
        }
    }
}

/// Top-level decoder configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecoderConfig {
    #[serde(default)]
    pub limits: DecodeLimits,
}

impl DecoderConfig {
    /// Load configuration from environment variables
    ///
    /// Environment variables follow the pattern: `BLVM_DECODER_<SECTION>_<KEY>`
    ///
    /// Examples:
    /// - `BLVM_DECODER_LIMITS_MAX_INPUTS=5000`
    /// - `BLVM_DECODER_LIMITS_MAX_VARBYTES_LEN=10000`
    ///
    /// Unset or unparsable variables leave the default in place.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(v) = env_u64("BLVM_DECODER_LIMITS_MAX_INPUTS") {
            config.limits.max_inputs = v;
        }
        if let Some(v) = env_u64("BLVM_DECODER_LIMITS_MAX_OUTPUTS") {
            config.limits.max_outputs = v;
        }
        if let Some(v) = env_u64("BLVM_DECODER_LIMITS_MAX_TRANSACTIONS") {
            config.limits.max_transactions = v;
        }
        if let Some(v) = env_u64("BLVM_DECODER_LIMITS_MAX_VARBYTES_LEN") {
            config.limits.max_varbytes_len = v;
        }

        config
    }
}

fn env_u64(key: &str) -> Option<u64> {
    let raw = std::env::var(key).ok()?;
    match raw.trim().parse::<u64>() {
        Ok(v) => Some(v),
        Err(_) => {
            log::debug!("ignoring unparsable {key}={raw:?}");
            None
        }
    }
}

/// Global decoder configuration instance
static GLOBAL_DECODER_CONFIG: std::sync::OnceLock<DecoderConfig> = std::sync::OnceLock::new();

/// Initialize global decoder configuration
///
/// Call once at startup before decoding. Returns the rejected config if the
/// global was already initialized, either by an earlier call or by the first
/// [`get_decoder_config`].
pub fn init_decoder_config(config: DecoderConfig) -> Result<(), DecoderConfig> {
    GLOBAL_DECODER_CONFIG.set(config)
}

/// Get global decoder configuration
///
/// Returns the global config. If none was installed, the environment is read
/// once and the result fixed for the life of the process.
pub fn get_decoder_config() -> DecoderConfig {
    GLOBAL_DECODER_CONFIG
        .get_or_init(DecoderConfig::from_env)
        .clone()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_limits_are_unbounded() {
        assert_eq!(DecodeLimits::default(), DecodeLimits::unbounded());
    }

    #[test]
    fn test_unbounded_limits() {
        let limits = DecodeLimits::unbounded();
        assert_eq!(limits.max_inputs, u64::MAX);
        assert_eq!(limits.max_varbytes_len, u64::MAX);
    }
}
