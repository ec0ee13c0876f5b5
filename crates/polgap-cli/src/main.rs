//! # polgap CLI entry point
//!
//! Parses command-line arguments, configures logging, loads the optional
//! config file, and dispatches to subcommand handlers. Logs go to stderr so
//! that stdout carries only the report.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use polgap_cli::analyze::{run_analyze, AnalyzeArgs};
use polgap_cli::config::AnalyzerConfig;
use polgap_cli::inspect::{run_clauses, run_segments, ClausesArgs, SegmentsArgs};

/// Policy gap analyzer.
///
/// Compares an organization's security policy against a benchmark clause
/// corpus (NIST CSF by default), classifies each clause as covered,
/// partially covered, or missing, and produces a prioritized remediation
/// roadmap.
#[derive(Parser, Debug)]
#[command(name = "polgap", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Path to a YAML configuration file.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Emit logs as JSON lines.
    #[arg(long, global = true)]
    log_json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Analyze a policy document and report coverage gaps.
    Analyze(AnalyzeArgs),

    /// List the sentence segments of a policy document.
    Segments(SegmentsArgs),

    /// List the clause corpus with normalized requirement text and keywords.
    Clauses(ClausesArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr);
    if cli.log_json {
        builder.json().init();
    } else {
        builder.init();
    }

    tracing::debug!(version = env!("CARGO_PKG_VERSION"), "polgap starting");

    let result = AnalyzerConfig::load_or_default(cli.config.as_deref()).and_then(|config| {
        match &cli.command {
            Commands::Analyze(args) => run_analyze(args, &config),
            Commands::Segments(args) => run_segments(args, &config),
            Commands::Clauses(args) => run_clauses(args, &config),
        }
    });

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(1)
        }
    }
}
