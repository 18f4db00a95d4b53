//! Configuration for a checking run.
//!
//! Loaded from a JSON file; every key is optional:
//!
//! ```json
//! {
//!   "severity": "warning",
//!   "messages": { "static": "Move static fields to the top." },
//!   "extensions": ["java"]
//! }
//! ```

use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::Path;

use declorder_core::MessageKind;
use serde::Deserialize;

use crate::error::{CliError, CliResult, ConfigError};

/// How findings are classed in the report and the exit status.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    #[default]
    Error,
    Warning,
}

impl Severity {
    pub fn name(self) -> &'static str {
        match self {
            Severity::Error => "error",
            Severity::Warning => "warning",
        }
    }
}

/// Configuration as written on disk.
#[derive(Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct RawConfig {
    severity: Severity,
    messages: BTreeMap<String, String>,
    extensions: Vec<String>,
}

impl Default for RawConfig {
    fn default() -> Self {
        Self {
            severity: Severity::default(),
            messages: BTreeMap::new(),
            extensions: default_extensions(),
        }
    }
}

fn default_extensions() -> Vec<String> {
    vec!["java".to_string()]
}

/// Validated configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub severity: Severity,
    messages: HashMap<MessageKind, String>,
    pub extensions: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            severity: Severity::default(),
            messages: HashMap::new(),
            extensions: default_extensions(),
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load and validate a configuration file.
    pub fn load(path: &Path) -> CliResult<Self> {
        let source = fs::read_to_string(path).map_err(|e| CliError::file_read(path, e))?;
        Self::from_json(&source).map_err(|e| CliError::config(path, e))
    }

    /// Parse configuration text.
    pub fn from_json(source: &str) -> Result<Self, ConfigError> {
        let raw: RawConfig = serde_json::from_str(source)?;

        let mut messages = HashMap::new();
        for (tag, text) in raw.messages {
            messages.insert(MessageKind::from_tag(&tag)?, text);
        }

        let extensions: Vec<String> = raw
            .extensions
            .into_iter()
            .map(|ext| ext.trim_start_matches('.').to_string())
            .collect();
        if extensions.is_empty() {
            return Err(ConfigError::NoExtensions);
        }

        Ok(Self {
            severity: raw.severity,
            messages,
            extensions,
        })
    }

    pub fn with_severity(mut self, severity: Severity) -> Self {
        self.severity = severity;
        self
    }

    pub fn with_message(mut self, kind: MessageKind, text: impl Into<String>) -> Self {
        self.messages.insert(kind, text.into());
        self
    }

    /// Text for a message, honouring overrides.
    pub fn message_text(&self, kind: MessageKind) -> &str {
        self.messages
            .get(&kind)
            .map(String::as_str)
            .unwrap_or_else(|| kind.default_text())
    }

    /// Should a file found while walking a directory be checked?
    pub fn accepts(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| self.extensions.iter().any(|e| e == ext))
    }
}
