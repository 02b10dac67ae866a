//! Request-target parsing.
//!
//! Turns the path-and-query portion of a request line into a [`ParsedTarget`]:
//! the path verbatim and the query as decoded, insertion-ordered parameters.
//! Parsing is total; malformed input degrades instead of failing.
//!
//! # Example
//!
//! ```rust
//! use request_target::target::parse;
//! use request_target::types::QueryValue;
//!
//! let target = parse("/users?ids=1&ids=34&sort=desc#top");
//!
//! assert_eq!(target.path, "/users");
//! assert_eq!(target.query["ids"], QueryValue::from(vec!["1", "34"]));
//! assert_eq!(target.first("sort"), Some("desc"));
//! ```

mod decode;
mod parser;

pub use decode::{decode_component, DecodeMode};
pub use parser::{parse_query_string, split_target};

use crate::config::ParserConfig;
use crate::types::ParsedTarget;

/// Parse a request-target with the default (strict) decoding mode.
#[inline]
pub fn parse(raw: &str) -> ParsedTarget {
    parser::parse_target(raw, DecodeMode::Strict)
}

/// Request-target parser with an explicit decoding mode.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TargetParser {
    mode: DecodeMode,
}

impl TargetParser {
    pub fn new(mode: DecodeMode) -> Self {
        Self { mode }
    }

    pub fn from_config(config: &ParserConfig) -> Self {
        Self::new(config.mode)
    }

    #[inline]
    pub fn mode(&self) -> DecodeMode {
        self.mode
    }

    /// Parse a raw request-target.
    #[inline]
    pub fn parse(&self, raw: &str) -> ParsedTarget {
        parser::parse_target(raw, self.mode)
    }
}
