//! Parser configuration.

use super::parse::{env_bool, env_parse};
use super::ConfigError;
use crate::target::DecodeMode;

/// Request-target parser configuration loaded from environment.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ParserConfig {
    /// Query decoding mode (QUERY_DECODE_MODE).
    pub mode: DecodeMode,
}

impl ParserConfig {
    /// Load configuration from environment variables.
    ///
    /// QUERY_DECODE_MODE: strict (default) or form.
    /// QUERY_PLUS_AS_SPACE=1 is shorthand for form.
    pub fn from_env() -> Result<Self, ConfigError> {
        let mode = env_parse("QUERY_DECODE_MODE", DecodeMode::Strict)?;

        let mode = if env_bool("QUERY_PLUS_AS_SPACE", false) {
            DecodeMode::Form
        } else {
            mode
        };

        Ok(Self { mode })
    }
}
