//! Configuration module for request_target.
//!
//! Configuration is loaded from environment variables.
//!
//! # Example
//!
//! ```rust,ignore
//! use request_target::config::Config;
//!
//! let config = Config::from_env()?;
//! println!("Decode mode: {:?}", config.parser.mode);
//! ```

mod error;
mod logging;
mod parse;
mod parser;

pub use error::ConfigError;
pub use logging::{LogFormat, LoggingConfig};
pub use parser::ParserConfig;

/// Complete application configuration.
#[derive(Clone, Debug, Default)]
pub struct Config {
    /// Parser configuration.
    pub parser: ParserConfig,
    /// Logging configuration.
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            parser: ParserConfig::from_env()?,
            logging: LoggingConfig::from_env()?,
        })
    }

    /// Print configuration summary to log.
    pub fn log_summary(&self) {
        use tracing::debug;

        debug!("Configuration loaded:");
        debug!("  Decode mode: {}", self.parser.mode.as_str());
        debug!("  Log filter: {}", self.logging.filter);
        debug!("  Log format: {:?}", self.logging.format);
        debug!("  Service: {}", self.logging.service_name);
    }
}
