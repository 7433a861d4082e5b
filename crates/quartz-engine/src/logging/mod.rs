//! Logging utilities.
//!
//! Centralizes logger initialization. Library code only talks to the `log`
//! facade; the backend is installed here by the host binary.

mod init;

pub use init::{init_logging, LoggingConfig};
