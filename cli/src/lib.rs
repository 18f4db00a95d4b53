//! declorder command-line library.
//!
//! The pieces around the analyzer that make it usable on a source tree:
//!
//! - `config`: JSON configuration (severity, message overrides, extensions)
//! - `runner`: collects files and checks each one independently
//! - `report`: renders findings as plain text or JSON
//! - `error`: the error type for the above

mod config;
mod error;
mod report;
mod runner;

pub use config::{Config, Severity};
pub use error::{CliError, CliResult, ConfigError};
pub use report::{render, FileFailure, FileReport, Finding, Format, Report};
pub use runner::{check_source, Runner};
