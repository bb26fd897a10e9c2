// src/main.rs
// =============================================================================
// This is the entry point of our CLI application.
//
// What happens here:
// 1. Parse command-line arguments using clap
// 2. Set up logging
// 3. Validate the arguments into CrawlSettings
// 4. Crawl the site, then write the spreadsheet
// 5. Exit with proper code (0 = finished, 2 = error)
//
// A crawl that finds nothing is NOT an error: it logs a warning, writes no
// file and still exits with 0.
// =============================================================================

mod cli;
mod config;
mod crawl;
mod error;
mod logging;
mod output;
mod scrape;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{debug, info, warn};

use cli::Cli;
use config::CrawlSettings;
use crawl::CrawlReport;

// Pages are processed one after another, so a single-threaded runtime is all
// we need
#[tokio::main(flavor = "current_thread")]
async fn main() {
    let exit_code = match run().await {
        Ok(code) => code,
        Err(e) => {
            // {:#} prints the whole context chain on one line
            eprintln!("Error: {:#}", e);
            2
        }
    };

    std::process::exit(exit_code);
}

async fn run() -> Result<i32> {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose)?;

    let settings = CrawlSettings::from_cli(&cli)?;
    handle_crawl(settings).await
}

async fn handle_crawl(settings: CrawlSettings) -> Result<i32> {
    info!("🔍 Scanning website: {}", settings.root_url);

    let report = crawl::crawl_site(&settings).await?;
    print_summary(&report);

    let mode = settings.mode.name();
    let written = output::export_records(&report.records, &settings)
        .with_context(|| format!("Failed to save {} data", mode))?;

    match written {
        Some(path) => info!("✅ {} data saved to {}", capitalize(mode), path.display()),
        None => warn!("⚠️  No data found for the selected mode: {}", mode),
    }

    Ok(0)
}

// Logs the end-of-crawl counters
fn print_summary(report: &CrawlReport) {
    info!("📊 Summary:");
    info!("   📄 Pages crawled: {}", report.stats.pages_visited);
    info!("   ❌ Failed: {}", report.stats.pages_failed);
    info!("   📋 Records: {}", report.records.len());
    debug!("   Revisits skipped: {}", report.stats.revisits_skipped);

    if report.truncated {
        warn!("Crawl stopped early because of --max-pages; results are partial");
    }
}

// "text" -> "Text"
fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
