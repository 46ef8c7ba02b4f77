//! # Console Runtime Library
//!
//! Configuration and server assembly for the `gangwayd` binary, exposed as
//! a library so the integration test suite can drive the same code paths.

#![warn(clippy::all)]
#![deny(unsafe_code)]

pub mod config;
pub mod service;

pub use config::{ConfigError, ConsoleConfig, ListenConfig};
pub use service::{ConsoleError, ConsoleService};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
