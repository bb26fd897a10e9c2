// src/scrape/processor.rs
// =============================================================================
// Processes one page: fetch -> parse -> extract -> discover links.
//
// Failures here are quiet: a connection error, a timeout or a
// non-2xx status is logged and the page simply yields nothing; the crawl goes
// on with the next URL. 404s and timeouts are treated the same way, and
// nothing is retried.
//
// Rust concepts:
// - async/await: only the HTTP request itself is async
// - scraper::Html is not Send, so parsing happens in a plain sync function
//   after the last .await
// =============================================================================

use reqwest::Client;
use scraper::Html;
use std::time::Duration;
use tracing::{debug, error, info, warn};
use url::{Origin, Url};

use super::extract::{discover_links, extract, Selectors};
use super::record::{ExtractMode, Record};
use crate::config::CrawlSettings;
use crate::error::{Result, ScrapeError};

/// What one processed page produced
#[derive(Debug, Default)]
pub struct PageOutcome {
    /// Records extracted from this page, in document order
    pub records: Vec<Record>,
    /// Same-origin, not-yet-visited links to crawl next
    pub discovered: Vec<String>,
    /// False when the fetch failed and the page was skipped
    pub fetched: bool,
}

impl PageOutcome {
    fn skipped() -> Self {
        Self::default()
    }
}

/// Fetches and analyzes pages for one crawl
pub struct PageProcessor {
    client: Client,
    mode: ExtractMode,
    root_origin: Origin,
    selectors: Selectors,
    timeout: Duration,
}

impl PageProcessor {
    pub fn new(settings: &CrawlSettings) -> Result<Self> {
        // One client for the whole crawl so connections get reused
        let client = Client::builder().timeout(settings.timeout).build()?;

        Ok(Self {
            client,
            mode: settings.mode.clone(),
            root_origin: settings.root_origin(),
            selectors: Selectors::new()?,
            timeout: settings.timeout,
        })
    }

    /// Processes one URL
    ///
    /// `is_visited` is consulted during link discovery so pages we already
    /// fetched are not handed back to the frontier.
    pub async fn process<F>(&self, url: &str, is_visited: F) -> PageOutcome
    where
        F: Fn(&str) -> bool,
    {
        let page_url = match Url::parse(url) {
            Ok(page_url) => page_url,
            Err(e) => {
                error!("Error scraping {}: {}", url, ScrapeError::invalid_url(url, e));
                return PageOutcome::skipped();
            }
        };

        let html = match self.fetch_page(url).await {
            Ok(html) => html,
            Err(e) => {
                error!("Error scraping {}: {}", url, e);
                return PageOutcome::skipped();
            }
        };

        info!("Scraping: {}", url);
        self.analyze(&html, &page_url, is_visited)
    }

    /// Everything after the fetch: parse, extract, discover
    pub fn analyze<F>(&self, html: &str, page_url: &Url, is_visited: F) -> PageOutcome
    where
        F: Fn(&str) -> bool,
    {
        let document = Html::parse_document(html);

        if let ExtractMode::Unrecognized(name) = &self.mode {
            warn!(
                "Invalid mode '{}'. Choose from 'text', 'image', or 'link'. Skipping extraction on {}",
                name, page_url
            );
        }

        let records = extract(&document, page_url, &self.mode, &self.selectors);
        let discovered = discover_links(
            &document,
            page_url,
            &self.root_origin,
            &self.selectors,
            is_visited,
        );

        debug!(
            "{}: {} record(s), {} new link(s)",
            page_url,
            records.len(),
            discovered.len()
        );

        PageOutcome {
            records,
            discovered,
            fetched: true,
        }
    }

    // Fetches a page and returns its HTML, treating any non-2xx as an error
    async fn fetch_page(&self, url: &str) -> Result<String> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| self.categorize_error(e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ScrapeError::HttpStatus(status.as_u16()));
        }

        response.text().await.map_err(|e| self.categorize_error(e))
    }

    fn categorize_error(&self, error: reqwest::Error) -> ScrapeError {
        if error.is_timeout() {
            ScrapeError::Timeout(self.timeout)
        } else {
            ScrapeError::Http(error)
        }
    }
}
