//! Core types for routers consuming parsed request-targets.
//!
//! - [`Request`] - request head with access to its parsed target
//! - [`Error`] - crate error type for the fallible outer surfaces
//!
//! # Example
//!
//! ```rust,ignore
//! use request_target::core::Request;
//!
//! fn route(req: &Request) {
//!     let target = req.target();
//!     match target.path.as_str() {
//!         "/users" => list_users(target.get_all("ids")),
//!         _ => not_found(),
//!     }
//! }
//! ```

mod error;
mod request;

pub use error::{Error, Result};
pub use request::Request;
