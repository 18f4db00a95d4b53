//! declorder - Check the declaration order of class members.
//!
//! Reports static fields, instance fields, constructors and methods that
//! appear after a member of a later kind in the same class body.

use std::path::PathBuf;
use std::process;

use anyhow::Context;
use clap::Parser;
use declorder_cli::{render, Config, Format, Runner, Severity};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "declorder")]
#[command(about = "Check that class members are declared in order")]
#[command(version)]
struct Cli {
    /// Files or directories to check
    #[arg(required = true)]
    paths: Vec<PathBuf>,

    /// JSON configuration file
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = Format::Plain)]
    format: Format,

    /// Severity of findings (overrides the configuration file)
    #[arg(short, long, value_enum)]
    severity: Option<Severity>,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run(cli: Cli) -> anyhow::Result<i32> {
    let mut config = match &cli.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };
    if let Some(severity) = cli.severity {
        config = config.with_severity(severity);
    }

    let report = Runner::new(&config).run(&cli.paths)?;

    for failure in &report.failures {
        eprintln!("error: {}", failure.error);
    }
    let output = render(&report, &config, cli.format).context("rendering report")?;
    print!("{}", output);

    Ok(report.exit_code(config.severity))
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let code = match run(cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("error: {:#}", e);
            2
        }
    };
    process::exit(code);
}
