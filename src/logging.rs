//! Tracing subscriber setup shared by the binaries

use tracing_subscriber::EnvFilter;

/// Targets that follow the verbosity flags: the library and each binary
const LOG_TARGETS: &[&str] = &["docs_harvest", "crawl_links", "extract_text", "combine_texts"];

/// Directive string giving our targets `level` and everything else `fallback`
fn directives(level: &str, fallback: &str) -> String {
    let mut parts: Vec<String> = LOG_TARGETS
        .iter()
        .map(|target| format!("{}={}", target, level))
        .collect();
    parts.push(fallback.to_string());
    parts.join(",")
}

/// Builds the log filter for a verbosity level
///
/// `quiet` wins over `verbose` and leaves only errors.
pub fn log_filter(verbose: u8, quiet: bool) -> EnvFilter {
    if quiet {
        return EnvFilter::new("error");
    }

    match verbose {
        0 => EnvFilter::new(directives("info", "warn")),
        1 => EnvFilter::new(directives("debug", "info")),
        2 => EnvFilter::new(directives("trace", "debug")),
        _ => EnvFilter::new("trace"),
    }
}

/// Installs the global subscriber
///
/// Logs go to stderr so stdout only carries the final result line.
pub fn init_logging(verbose: u8, quiet: bool) {
    tracing_subscriber::fmt()
        .with_env_filter(log_filter(verbose, quiet))
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}
