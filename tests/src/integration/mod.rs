//! # Gangway Integration Tests
//!
//! Cross-crate flows: filter decisions observed through the console router,
//! policy assembly from config files, and round trips over real sockets.

pub mod live_server;
