//! # policyforge
//!
//! Library half of the `policyforge` binary: argument definitions, command
//! handlers and logging setup. The policy model and renderers live in
//! `policyforge-core`, `policyforge-dialect` and `policyforge-policy`.
//!
//! ## Modules
//!
//! - [`cli`] - Command-line interface
//! - [`logging`] - `tracing` subscriber initialization

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod cli;
pub mod logging;

pub use cli::{Cli, Commands};
pub use logging::{init_logging, verbosity_to_level, LogConfig, LogError, LogFormat, LogGuard, LogLevel};
