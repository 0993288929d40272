//! Logging setup.
//!
//! The engine only talks to the `log` facade. Geometry builds are reported at
//! `debug`, cache hits at `trace`, and transform-stack misuse at `error`;
//! [`init_logging`] wires `env_logger` behind the facade for binaries and tests.

mod init;

pub use init::{LoggingConfig, init_logging};
