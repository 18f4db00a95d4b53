//! Rendering findings.

use std::path::PathBuf;

use declorder_analyzer::{Violation, Violations};
use serde::Serialize;

use crate::config::{Config, Severity};
use crate::error::CliResult;

/// Output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum Format {
    #[default]
    Plain,
    Json,
}

/// Findings for one file that was checked.
#[derive(Debug, Clone)]
pub struct FileReport {
    pub path: PathBuf,
    pub violations: Violations,
}

/// A file that could not be checked.
#[derive(Debug, Clone)]
pub struct FileFailure {
    pub path: PathBuf,
    pub error: String,
}

/// Outcome of a run.
#[derive(Debug, Clone, Default)]
pub struct Report {
    pub files: Vec<FileReport>,
    pub failures: Vec<FileFailure>,
}

impl Report {
    pub fn violation_count(&self) -> usize {
        self.files.iter().map(|f| f.violations.len()).sum()
    }

    pub fn files_checked(&self) -> usize {
        self.files.len()
    }

    /// Process exit status for this report.
    pub fn exit_code(&self, severity: Severity) -> i32 {
        if !self.failures.is_empty() {
            2
        } else if severity == Severity::Error && self.violation_count() > 0 {
            1
        } else {
            0
        }
    }

    /// Every finding, flattened, in file then position order.
    pub fn findings<'a>(&'a self, config: &'a Config) -> impl Iterator<Item = Finding> + 'a {
        self.files.iter().flat_map(move |file| {
            file.violations
                .iter()
                .map(move |v| Finding::new(file.path.display().to_string(), v, config))
        })
    }
}

/// One finding as written to the JSON report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Finding {
    pub file: String,
    pub line: usize,
    pub column: usize,
    pub severity: &'static str,
    pub key: &'static str,
    pub message: String,
    pub member: String,
    pub actual_kind: &'static str,
}

impl Finding {
    fn new(file: String, violation: &Violation, config: &Config) -> Self {
        Self {
            file,
            line: violation.line(),
            column: violation.column(),
            severity: config.severity.name(),
            key: violation.message_key(),
            message: config.message_text(violation.message).to_string(),
            member: violation.identifier.clone(),
            actual_kind: violation.actual.name(),
        }
    }
}

/// Render a report.
pub fn render(report: &Report, config: &Config, format: Format) -> CliResult<String> {
    match format {
        Format::Plain => Ok(render_plain(report, config)),
        Format::Json => {
            let findings: Vec<Finding> = report.findings(config).collect();
            Ok(serde_json::to_string_pretty(&findings)?)
        }
    }
}

fn render_plain(report: &Report, config: &Config) -> String {
    let mut out: String = report
        .findings(config)
        .map(|f| {
            format!(
                "{}:{}:{}: {}: {} [{}]\n",
                f.file, f.line, f.column, f.severity, f.message, f.key
            )
        })
        .collect();

    let count = report.violation_count();
    out.push_str(&format!(
        "{} {} in {} {} checked",
        count,
        plural(count, "violation", "violations"),
        report.files_checked(),
        plural(report.files_checked(), "file", "files"),
    ));
    if !report.failures.is_empty() {
        out.push_str(&format!(", {} could not be checked", report.failures.len()));
    }
    out.push('\n');

    out
}

fn plural(n: usize, one: &'static str, many: &'static str) -> &'static str {
    if n == 1 {
        one
    } else {
        many
    }
}
