//! Query component decoding.
//!
//! Malformed escapes never fail: a `%` not followed by two hex digits is kept
//! as written, and decoded bytes that are not valid UTF-8 become U+FFFD.

use serde::{Deserialize, Serialize};

/// How query keys and values are decoded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DecodeMode {
    /// Percent-decoding only; `+` stays a literal plus.
    #[default]
    Strict,
    /// HTML form semantics: `+` is a space, then percent-decoding.
    Form,
}

impl DecodeMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            DecodeMode::Strict => "strict",
            DecodeMode::Form => "form",
        }
    }
}

impl std::str::FromStr for DecodeMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "strict" => Ok(DecodeMode::Strict),
            "form" => Ok(DecodeMode::Form),
            other => Err(format!("unknown decode mode '{}', expected: strict, form", other)),
        }
    }
}

/// Decode a single query key or value.
///
/// Components with nothing to decode are copied without running the decoder.
#[inline]
pub fn decode_component(s: &str, mode: DecodeMode) -> String {
    match mode {
        DecodeMode::Strict => {
            if s.contains('%') {
                percent_decode(s)
            } else {
                s.to_string()
            }
        }
        DecodeMode::Form => {
            if s.contains('+') {
                percent_decode(&s.replace('+', " "))
            } else if s.contains('%') {
                percent_decode(s)
            } else {
                s.to_string()
            }
        }
    }
}

#[inline]
fn percent_decode(s: &str) -> String {
    percent_encoding::percent_decode_str(s)
        .decode_utf8_lossy()
        .into_owned()
}
