//! extract-text entry point
//!
//! Fetches every URL of a link file and stores each page as plain text.

use anyhow::{bail, Context};
use clap::Parser;
use docs_harvest::config::load_config_or_default;
use docs_harvest::extract::run_extraction;
use docs_harvest::logging::init_logging;
use std::path::PathBuf;
use std::process::ExitCode;

/// Docs-Harvest text extractor
#[derive(Parser, Debug)]
#[command(name = "extract-text")]
#[command(version = "1.0.0")]
#[command(about = "Fetch each listed URL and store its text", long_about = None)]
struct Cli {
    /// Newline-delimited URL list
    #[arg(value_name = "LINK_FILE", default_value = "links.txt")]
    link_file: PathBuf,

    /// Root directory for the text files
    #[arg(value_name = "OUTPUT_DIR", default_value = "pages")]
    output_dir: PathBuf,

    /// Seconds to wait after each stored page
    #[arg(long, value_name = "SECONDS")]
    sleep: Option<f64>,

    /// Path to TOML configuration file
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    init_logging(cli.verbose, cli.quiet);

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    if !cli.link_file.exists() {
        bail!("link file {} does not exist", cli.link_file.display());
    }

    let mut config = load_config_or_default(cli.config.as_deref())
        .context("Failed to load configuration")?;

    if let Some(seconds) = cli.sleep {
        if !seconds.is_finite() || seconds < 0.0 {
            bail!("--sleep must be a non-negative number of seconds");
        }
        config.extractor.delay_ms = (seconds * 1000.0).round() as u64;
    }

    let summary = run_extraction(&config, &cli.link_file, &cli.output_dir)
        .await
        .with_context(|| format!("Extraction from {} failed", cli.link_file.display()))?;

    tracing::info!(
        "{} failed, {} without text",
        summary.failed,
        summary.empty
    );
    println!(
        "Processed {} URLs, stored {} text files in {}",
        summary.processed,
        summary.stored,
        cli.output_dir.display()
    );

    Ok(())
}
