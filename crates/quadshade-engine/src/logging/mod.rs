//! Logger setup for binaries and tests built on this crate.
//!
//! Library code only talks to the `log` facade; `env_logger` is wired up
//! here for callers that want a ready-made backend.

mod init;

pub use init::{init_logging, LoggingConfig};
