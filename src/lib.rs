//! request_target - request-target parsing for HTTP routers.
//!
//! Parses the path-and-query portion of an HTTP request line
//! (`/users?ids=1&ids=2#top`) into a verbatim path and decoded,
//! insertion-ordered query parameters.
//!
//! # Features
//!
//! - **Total**: every input parses; malformed escapes degrade, never fail
//! - **Repeated keys**: a key's value upgrades from scalar to list on its second occurrence
//! - **Explicit decoding modes**: strict percent-decoding, or form mode with `+` as space
//! - **Router seam**: [`core::Request`] wraps an `http::Request` and exposes its parsed target
//!
//! # Example
//!
//! ```rust
//! use request_target::parse;
//!
//! let target = parse("/users?sort=desc&limit=25");
//! assert_eq!(target.path, "/users");
//! assert_eq!(target.first("limit"), Some("25"));
//! ```

/// Package version from Cargo.toml
pub const PKG_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Git commit hash (8 chars) with optional "-dirty" suffix
pub const BUILD_VERSION: &str = env!("BUILD_VERSION");

/// Full version string: "0.1.0 (abc12345)" or "0.1.0 (abc12345-dirty)"
pub const VERSION: &str = concat!(env!("CARGO_PKG_VERSION"), " (", env!("BUILD_VERSION"), ")");

pub mod config;
pub mod core;
pub mod logging;
pub mod target;
pub mod types;

// Re-exports for convenience
pub use config::Config;
pub use target::{parse, DecodeMode, TargetParser};
pub use types::{ParsedTarget, QueryMap, QueryValue};
