//! combine-texts entry point
//!
//! Concatenates the per-page text files into a single aggregate file.

use anyhow::Context;
use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use docs_harvest::combine::combine_texts;
use docs_harvest::logging::init_logging;
use std::path::PathBuf;
use std::process::ExitCode;

/// Docs-Harvest text combiner
#[derive(Parser, Debug)]
#[command(name = "combine-texts")]
#[command(version = "1.0.0")]
#[command(about = "Concatenate text files from a directory into a single file", long_about = None)]
struct Cli {
    /// Directory containing per-page .txt files
    #[arg(value_name = "INPUT_DIR", default_value = "pages")]
    input_dir: PathBuf,

    /// Aggregated output file path
    #[arg(value_name = "OUTPUT_FILE", default_value = "all.txt")]
    output_file: PathBuf,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    init_logging(cli.verbose, cli.quiet);

    if !cli.input_dir.exists() {
        Cli::command()
            .error(
                ErrorKind::ValueValidation,
                format!("input directory {} does not exist", cli.input_dir.display()),
            )
            .exit();
    }

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let count = combine_texts(&cli.input_dir, &cli.output_file).with_context(|| {
        format!(
            "Failed to combine {} into {}",
            cli.input_dir.display(),
            cli.output_file.display()
        )
    })?;

    println!("Combined {} files into {}", count, cli.output_file.display());
    Ok(())
}
