// src/logging.rs
// =============================================================================
// Sets up console logging with `tracing` + `tracing-subscriber`.
//
// - If RUST_LOG is set, it wins as-is (e.g. RUST_LOG=site_scraper=trace)
// - Otherwise our crate logs at info, or debug with --verbose, and
//   everything else (reqwest, hyper, html5ever) only shows warnings
//
// Diagnostics go to stderr so stdout stays free for anything piped.
// =============================================================================

use anyhow::Result;
use tracing_subscriber::EnvFilter;

/// Initialize the global tracing subscriber
///
/// Must be called once, before the first log line.
pub fn init_logging(verbose: bool) -> Result<()> {
    let env_filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => default_filter(verbose)?,
    };

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    Ok(())
}

// Filter used when RUST_LOG is unset (or unparseable)
fn default_filter(verbose: bool) -> Result<EnvFilter> {
    let crate_level = if verbose { "debug" } else { "info" };

    Ok(EnvFilter::new("warn").add_directive(format!("site_scraper={}", crate_level).parse()?))
}
