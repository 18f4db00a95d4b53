//! File-set driver.
//!
//! Every file is parsed and checked on its own, with its own scope stack;
//! a file that fails to parse is recorded and the run carries on.

use std::fs;
use std::path::{Path, PathBuf};

use declorder_analyzer::{Checker, Violations};
use declorder_parser::parse_compilation_unit;
use ignore::WalkBuilder;
use tracing::{debug, info, warn};

use crate::config::Config;
use crate::error::{CliError, CliResult};
use crate::report::{FileFailure, FileReport, Report};

/// Parse and check one source text.
pub fn check_source(path: &Path, source: &str) -> CliResult<Violations> {
    let unit = parse_compilation_unit(source).map_err(|e| CliError::parse(path, e))?;
    let mut violations = Checker::check_unit(&unit).map_err(|e| CliError::check(path, e))?;
    violations.sort_by_position();
    Ok(violations)
}

/// Checks a set of files and directories.
pub struct Runner<'c> {
    config: &'c Config,
}

impl<'c> Runner<'c> {
    pub fn new(config: &'c Config) -> Self {
        Self { config }
    }

    /// Expand the given paths into the files to check, in a stable order.
    ///
    /// Files named explicitly are always checked; files found by walking a
    /// directory are filtered by extension and `.gitignore` rules.
    pub fn collect_files(&self, paths: &[PathBuf]) -> CliResult<Vec<PathBuf>> {
        let mut files = Vec::new();

        for path in paths {
            if path.is_file() {
                files.push(path.clone());
            } else if path.is_dir() {
                for entry in WalkBuilder::new(path).build() {
                    let entry = entry?;
                    let is_file = entry.file_type().is_some_and(|t| t.is_file());
                    if is_file && self.config.accepts(entry.path()) {
                        files.push(entry.into_path());
                    }
                }
            } else {
                return Err(CliError::MissingPath(path.clone()));
            }
        }

        files.sort();
        files.dedup();
        Ok(files)
    }

    /// Read, parse and check one file.
    pub fn check_file(&self, path: &Path) -> CliResult<Violations> {
        let source = fs::read_to_string(path).map_err(|e| CliError::file_read(path, e))?;
        check_source(path, &source)
    }

    /// Check everything under `paths`.
    pub fn run(&self, paths: &[PathBuf]) -> CliResult<Report> {
        let files = self.collect_files(paths)?;
        info!(files = files.len(), "checking declaration order");

        let mut report = Report::default();
        for path in files {
            match self.check_file(&path) {
                Ok(violations) => {
                    debug!(path = %path.display(), found = violations.len(), "checked");
                    report.files.push(FileReport { path, violations });
                }
                Err(error) => {
                    warn!(path = %path.display(), %error, "skipping file");
                    report.failures.push(FileFailure {
                        path,
                        error: error.to_string(),
                    });
                }
            }
        }

        Ok(report)
    }
}
