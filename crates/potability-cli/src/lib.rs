//! Potability CLI library.
//!
//! This library provides the core functionality for the potability command-line
//! interface, including the interactive entry form, command execution,
//! configuration management and report formatting.

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod form;
pub mod output;

pub use cli::{Cli, Command};
pub use config::Config;
pub use error::{CliError, Result};
pub use output::Formatter;
