//! Running the checker over files and directories.

use declorder_cli::{render, CliError, Config, ConfigError, Format, Runner, Severity};
use declorder_tests::prelude::*;
use pretty_assertions::assert_eq;
use std::path::PathBuf;

fn project() -> PathBuf {
    fixtures_dir().join("project")
}

fn file_names(paths: &[PathBuf]) -> Vec<String> {
    paths
        .iter()
        .filter_map(|p| p.file_name())
        .map(|n| n.to_string_lossy().into_owned())
        .collect()
}

#[test]
fn test_directory_walk_filters_and_sorts() {
    // GIVEN
    let config = Config::default();
    let runner = Runner::new(&config);

    // WHEN
    let files = runner.collect_files(&[project()]).unwrap();

    // THEN - notes.txt is filtered by extension, generated/ by .ignore
    assert_eq!(file_names(&files), vec!["Bad.java", "Good.java"]);
}

#[test]
fn test_explicit_files_are_always_checked() {
    let config = Config::default();
    let runner = Runner::new(&config);

    let files = runner
        .collect_files(&[
            project().join("generated/Skipped.java"),
            project().join("src/notes.txt"),
        ])
        .unwrap();

    assert_eq!(file_names(&files), vec!["Skipped.java", "notes.txt"]);
}

#[test]
fn test_run_over_project() {
    // GIVEN
    let config = Config::default();

    // WHEN
    let report = Runner::new(&config).run(&[project()]).unwrap();

    // THEN
    assert_eq!(report.files_checked(), 2);
    assert_eq!(report.violation_count(), 1);
    assert!(report.failures.is_empty());
    assert_eq!(report.exit_code(config.severity), 1);

    let out = render(&report, &config, Format::Plain).unwrap();
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(
        lines[0].ends_with(
            "Bad.java:7:5: error: Instance variable definition in wrong order. [declaration.order.instance]"
        ),
        "{}",
        lines[0]
    );
    assert_eq!(lines[1], "1 violation in 2 files checked");
}

#[test]
fn test_run_with_config_file() {
    // GIVEN
    let config = Config::load(&fixtures_dir().join("config.json")).unwrap();

    // WHEN
    let report = Runner::new(&config).run(&[project()]).unwrap();

    // THEN
    assert_eq!(config.severity, Severity::Warning);
    assert_eq!(report.exit_code(config.severity), 0);
    let out = render(&report, &config, Format::Plain).unwrap();
    assert!(out.contains(
        "Bad.java:7:5: warning: Instance fields belong above constructors and methods. [declaration.order.instance]"
    ));
}

#[test]
fn test_json_report() {
    // GIVEN
    let config = Config::default();
    let report = Runner::new(&config)
        .run(&[project().join("src/Bad.java")])
        .unwrap();

    // WHEN
    let out = render(&report, &config, Format::Json).unwrap();

    // THEN
    assert!(out.contains("\"key\": \"declaration.order.instance\""), "{}", out);
    assert!(out.contains("\"member\": \"count\""), "{}", out);
    assert!(out.contains("\"actual_kind\": \"instance field\""), "{}", out);
}

#[test]
fn test_invalid_config_file() {
    let err = Config::load(&fixtures_dir().join("bad-config.json")).unwrap_err();

    assert!(matches!(
        err,
        CliError::Config {
            source: ConfigError::Message(_),
            ..
        }
    ));
    assert!(err.to_string().contains("visibility"), "{}", err);
}

#[test]
fn test_missing_config_file() {
    let err = Config::load(&fixtures_dir().join("absent.json")).unwrap_err();
    assert!(matches!(err, CliError::FileRead { .. }));
}

#[test]
fn test_parse_failure_does_not_stop_the_run() {
    // GIVEN
    let config = Config::default();
    let paths = vec![fixtures_dir().join("Broken.java"), project()];

    // WHEN
    let report = Runner::new(&config).run(&paths).unwrap();

    // THEN
    assert_eq!(report.files_checked(), 2);
    assert_eq!(report.failures.len(), 1);
    assert!(report.failures[0].error.contains("unclosed '{'"));
    assert_eq!(report.exit_code(config.severity), 2);

    let out = render(&report, &config, Format::Plain).unwrap();
    assert!(out.ends_with("1 violation in 2 files checked, 1 could not be checked\n"));
}

#[test]
fn test_missing_path_stops_the_run() {
    let config = Config::default();
    let result = Runner::new(&config).run(&[fixtures_dir().join("nowhere")]);
    assert!(matches!(result, Err(CliError::MissingPath(_))));
}
