//! crawl-links entry point
//!
//! Collects every link reachable beneath a documentation prefix and writes
//! them, one per line, to a link file.

use clap::Parser;
use docs_harvest::config::load_config_or_default;
use docs_harvest::crawler::crawl;
use docs_harvest::logging::init_logging;
use docs_harvest::HarvestError;
use std::path::PathBuf;
use std::process::ExitCode;

/// Docs-Harvest link collector
///
/// Crawls breadth-first from START_URL, following only links that begin with
/// BASE_PREFIX, and records each unique URL the moment it is discovered.
#[derive(Parser, Debug)]
#[command(name = "crawl-links")]
#[command(version = "1.0.0")]
#[command(about = "Collect every link beneath a documentation prefix", long_about = None)]
struct Cli {
    /// First page to fetch (absolute, or relative to BASE_PREFIX)
    #[arg(value_name = "START_URL")]
    start_url: String,

    /// Only links starting with this prefix are followed
    #[arg(value_name = "BASE_PREFIX")]
    base_prefix: String,

    /// Link file to write
    #[arg(value_name = "OUTPUT", default_value = "links.txt")]
    output: PathBuf,

    /// Path segment below the prefix to skip (repeatable)
    #[arg(short = 'x', long = "exclude", value_name = "SEGMENT")]
    exclude: Vec<String>,

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

    let config = match load_config_or_default(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Failed to load configuration: {}", e);
            eprintln!("error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    tracing::info!("Starting crawl at {} (prefix {})", cli.start_url, cli.base_prefix);

    match crawl(&config, &cli.start_url, &cli.base_prefix, &cli.exclude, &cli.output).await {
        Ok(report) => {
            println!(
                "Collected {} unique links into {}",
                report.links.len(),
                cli.output.display()
            );
            ExitCode::SUCCESS
        }
        Err(e @ HarvestError::ScopeViolation { .. }) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
        Err(e) => {
            tracing::error!("Crawl failed: {}", e);
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}
