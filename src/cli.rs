// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// We use the "derive" API: the struct below IS the CLI definition, and clap
// generates the parser, --help and --version for us.
//
// Note that --mode is a plain String, not a clap ValueEnum. An unknown mode
// is not rejected here: it is carried through as ExtractMode::Unrecognized so
// the crawl still runs (and warns on every page) instead of refusing to start.
// See config.rs for the conversion into validated settings.
// =============================================================================

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "site-scraper",
    version,
    about = "Crawl one website and export matching text, images or links to an .xlsx file",
    long_about = "site-scraper starts at a root URL, follows every link that stays on the same \
                  origin, and collects one kind of content from each page: text blocks containing \
                  a keyword, image URLs, or link URLs. The results are saved as \
                  <site>_<mode>.xlsx once the crawl finishes."
)]
pub struct Cli {
    /// Root URL to start crawling from (e.g., https://example.com/)
    pub root_url: String,

    /// What to extract from each page: text, image or link
    #[arg(short, long, default_value = "text")]
    pub mode: String,

    /// Keyword to look for (case-insensitive), required in text mode
    #[arg(short, long)]
    pub keyword: Option<String>,

    /// Directory the spreadsheet is written to
    #[arg(short, long, default_value = ".")]
    pub output_dir: PathBuf,

    /// Site identifier used in the output file name (default: derived from the host)
    #[arg(long)]
    pub site_name: Option<String>,

    /// Pause after every page, in milliseconds
    #[arg(long, default_value_t = 1000)]
    pub delay_ms: u64,

    /// Per-request timeout, in seconds
    #[arg(long, default_value_t = 10)]
    pub timeout_secs: u64,

    /// Stop after visiting this many pages (default: crawl the whole site)
    #[arg(long)]
    pub max_pages: Option<usize>,

    /// Show debug-level logs
    #[arg(short, long)]
    pub verbose: bool,
}
