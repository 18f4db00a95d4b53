//! CLI error types.

use declorder_analyzer::CheckError;
use declorder_core::CoreError;
use declorder_parser::ParseError;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur while checking a source tree.
#[derive(Debug, Error)]
pub enum CliError {
    /// Failed to read a file.
    #[error("Failed to read '{}': {}", .path.display(), .source)]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A path given on the command line does not exist.
    #[error("No such file or directory: '{}'", .0.display())]
    MissingPath(PathBuf),

    /// A source file could not be parsed.
    #[error("{}:{}:{}: {}", .path.display(), .source.line(), .source.column(), .source.message)]
    Parse {
        path: PathBuf,
        #[source]
        source: ParseError,
    },

    /// The checker was driven incorrectly.
    #[error("Checking '{}' failed: {}", .path.display(), .source)]
    Check {
        path: PathBuf,
        #[source]
        source: CheckError,
    },

    /// Invalid configuration.
    #[error("Invalid configuration in '{}': {}", .path.display(), .source)]
    Config {
        path: PathBuf,
        #[source]
        source: ConfigError,
    },

    /// Directory traversal failed.
    #[error("Failed to walk directory: {0}")]
    Walk(#[from] ignore::Error),

    /// Report serialization failed.
    #[error("Failed to serialize report: {0}")]
    Json(#[from] serde_json::Error),
}

impl CliError {
    pub fn file_read(path: &Path, source: std::io::Error) -> Self {
        Self::FileRead {
            path: path.to_path_buf(),
            source,
        }
    }

    pub fn parse(path: &Path, source: ParseError) -> Self {
        Self::Parse {
            path: path.to_path_buf(),
            source,
        }
    }

    pub fn check(path: &Path, source: CheckError) -> Self {
        Self::Check {
            path: path.to_path_buf(),
            source,
        }
    }

    pub fn config(path: &Path, source: ConfigError) -> Self {
        Self::Config {
            path: path.to_path_buf(),
            source,
        }
    }
}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

/// Errors in configuration text.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Not valid JSON, or not the expected shape.
    #[error("{0}")]
    Json(#[from] serde_json::Error),

    /// A message override names no known message.
    #[error("{0}")]
    Message(#[from] CoreError),

    #[error("'extensions' must name at least one extension")]
    NoExtensions,
}
