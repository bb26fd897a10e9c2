// src/config.rs
// =============================================================================
// Turns raw command-line values into validated crawl settings.
//
// Everything the crawl needs to know is decided here, once, before the first
// request goes out:
// - the root URL (must be absolute http/https with a host)
// - the extraction mode (see scrape::ExtractMode)
// - where the spreadsheet goes and what it is called
// - timing: delay between pages, request timeout, optional page cap
//
// After this point nothing re-reads the CLI; the crawl session owns a copy of
// CrawlSettings and passes pieces of it down.
// =============================================================================

use std::path::PathBuf;
use std::time::Duration;
use url::{Origin, Url};

use crate::cli::Cli;
use crate::error::{Result, ScrapeError};
use crate::scrape::ExtractMode;

pub const DEFAULT_DELAY: Duration = Duration::from_secs(1);
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Clone)]
pub struct CrawlSettings {
    /// Where the crawl starts; also defines the allowed origin
    pub root_url: Url,
    /// What to extract from every page
    pub mode: ExtractMode,
    /// Directory for the output spreadsheet
    pub output_dir: PathBuf,
    /// The `<site>` part of `<site>_<mode>.xlsx`
    pub site_name: String,
    /// Pause after every processed page, successful or not
    pub delay: Duration,
    /// Per-request timeout
    pub timeout: Duration,
    /// Optional cap on visited pages
    pub max_pages: Option<usize>,
}

impl CrawlSettings {
    /// Settings with default timing and output location
    pub fn new(root_url: &str, mode: ExtractMode) -> Result<Self> {
        let root_url = parse_root_url(root_url)?;
        let site_name = site_identifier(&root_url);

        Ok(Self {
            root_url,
            mode,
            output_dir: PathBuf::from("."),
            site_name,
            delay: DEFAULT_DELAY,
            timeout: DEFAULT_TIMEOUT,
            max_pages: None,
        })
    }

    /// Validates the parsed command line
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let mode = ExtractMode::from_name(&cli.mode, cli.keyword.as_deref())?;
        let mut settings = Self::new(&cli.root_url, mode)?;

        settings.output_dir = cli.output_dir.clone();
        settings.delay = Duration::from_millis(cli.delay_ms);
        settings.timeout = Duration::from_secs(cli.timeout_secs);
        settings.max_pages = cli.max_pages;

        if let Some(name) = &cli.site_name {
            let name = name.trim();
            if name.is_empty() {
                return Err(ScrapeError::InvalidConfig(
                    "--site-name must not be empty".to_string(),
                ));
            }
            settings.site_name = name.to_string();
        }

        if cli.timeout_secs == 0 {
            return Err(ScrapeError::InvalidConfig(
                "--timeout-secs must be at least 1".to_string(),
            ));
        }

        if cli.max_pages == Some(0) {
            return Err(ScrapeError::InvalidConfig(
                "--max-pages must be at least 1".to_string(),
            ));
        }

        Ok(settings)
    }

    /// Scheme + host + port every crawled page has to share
    pub fn root_origin(&self) -> Origin {
        self.root_url.origin()
    }

    /// Full path of the spreadsheet: `<output_dir>/<site>_<mode>.xlsx`
    pub fn output_path(&self) -> PathBuf {
        self.output_dir
            .join(format!("{}_{}.xlsx", self.site_name, self.mode.name()))
    }
}

/// Parses and checks the root URL
///
/// Only http/https URLs with a host are crawlable; anything else (mailto:,
/// file://, relative paths) is rejected up front.
pub fn parse_root_url(root_url: &str) -> Result<Url> {
    let url = Url::parse(root_url.trim()).map_err(|e| ScrapeError::invalid_url(root_url, e))?;

    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(ScrapeError::invalid_url(
            root_url,
            format!("unsupported scheme '{}' (only http/https)", url.scheme()),
        ));
    }

    if url.host_str().is_none() {
        return Err(ScrapeError::invalid_url(root_url, "URL has no host"));
    }

    Ok(url)
}

/// Derives a file-name friendly site identifier from the root URL's host
///
/// Examples:
///   https://www.jasperskytram.com/  -> "jasperskytram_com"
///   http://127.0.0.1:8080/          -> "127_0_0_1"
pub fn site_identifier(url: &Url) -> String {
    let host = url.host_str().unwrap_or("site");
    let host = host.strip_prefix("www.").unwrap_or(host);

    host.chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
        .collect()
}
