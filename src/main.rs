//! tagdiff: tag-scoped semantic XML comparison tool
//!
//! Compares a primary XML document against a basis (ground-truth) document
//! and reports exact matches, closest matches with detailed diffs, and
//! tags present in only one of the two files.

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use tagdiff::{
    cli,
    config::{BehaviorConfig, CompareConfig, ComparePaths, OutputConfig},
    pipeline::exit_codes,
    utils::filename::comparison_filespec,
    ScoreWeights,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "tagdiff")]
#[command(version)]
#[command(about = "Tag-scoped semantic XML comparison tool", long_about = None)]
#[command(after_help = "EXIT CODES:
    0  Documents match exactly
    1  Differences detected
    2  Error occurred

EXAMPLES:
    # Compare two documents; writes comp_<primary>_<basis>.log and .rpt
    tagdiff primary.xml basis.xml

    # Also generate one HTML page per analyzed tag
    tagdiff primary.xml basis.xml --html

    # Machine-readable report for further processing
    tagdiff primary.xml basis.xml --json

    # Verbose run with parsed-tree dumps for debugging
    tagdiff primary.xml basis.xml --debug --outfile")]
struct Cli {
    /// XML file to be checked
    primary: PathBuf,

    /// Ground-truth XML file to check against
    basis: PathBuf,

    /// Generate one HTML report page per analyzed tag
    #[arg(long)]
    html: bool,

    /// Write a JSON dump of the comparison report
    #[arg(long)]
    json: bool,

    /// Dump each parsed element tree to outfiles/ (for debugging)
    #[arg(short = 'o', long)]
    outfile: bool,

    /// Directory for report and log files
    #[arg(long, default_value = ".")]
    out_dir: PathBuf,

    /// Enable debug logging and detailed console output
    #[arg(short, long, env = "TAGDIFF_DEBUG")]
    debug: bool,

    /// Suppress non-essential output
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    std::fs::create_dir_all(&cli.out_dir)
        .with_context(|| format!("failed to create output directory {:?}", cli.out_dir))?;

    // Combined log: everything also lands in comp_<primary>_<basis>.log.
    let log_path = comparison_filespec(&cli.primary, &cli.basis, None, &cli.out_dir, "log");
    let log_file = std::fs::File::create(&log_path)
        .with_context(|| format!("failed to create log file {log_path:?}"))?;

    let log_level = if cli.debug { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| log_level.to_string()),
        ))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_ansi(false)
                .with_writer(Arc::new(log_file)),
        )
        .init();

    if !cli.quiet {
        eprintln!("Logging to: {}", log_path.display());
    }

    let config = CompareConfig {
        paths: ComparePaths {
            primary: cli.primary,
            basis: cli.basis,
        },
        output: OutputConfig {
            out_dir: cli.out_dir,
            html: cli.html,
            json: cli.json,
            tree_dumps: cli.outfile,
        },
        behavior: BehaviorConfig {
            debug: cli.debug,
            quiet: cli.quiet,
        },
        weights: ScoreWeights::default(),
    };

    match cli::run_compare(config) {
        Ok(code) => {
            if code != exit_codes::SUCCESS {
                std::process::exit(code);
            }
            Ok(())
        }
        Err(err) => {
            tracing::error!("{err:#}");
            std::process::exit(exit_codes::ERROR);
        }
    }
}
