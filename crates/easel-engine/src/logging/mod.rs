//! Logging setup.
//!
//! Library code logs through the `log` facade only; binaries and tests call
//! [`init_logging`] to install `env_logger`.

mod init;

pub use init::{init_logging, LoggingConfig};
