//! Logging utilities.
//!
//! The crate logs through the `log` facade only. [`init_logging`] installs an
//! `env_logger` backend for binaries and tests that want to see the output.

mod init;

pub use init::{LoggingConfig, init_logging};
