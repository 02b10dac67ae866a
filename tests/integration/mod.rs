//! Integration tests for request_target
//!
//! Exercise the public parsing API and the `request-target` binary.
//! Run with: cargo test --test integration

mod helpers;

mod cli;
mod properties;
