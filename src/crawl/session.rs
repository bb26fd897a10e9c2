// src/crawl/session.rs
// =============================================================================
// One crawl, start to finish.
//
// A CrawlSession owns ALL mutable state of a run: the frontier, the visited
// set (inside the frontier) and the collected records. Nothing is global, so
// tests can run several independent crawls side by side.
//
// The loop:
// 1. Pop the next pending URL
// 2. Skip it if it was already visited, otherwise mark it visited
// 3. Let the PageProcessor fetch + extract + discover
// 4. Append the records, enqueue the discovered links
// 5. Sleep for the configured delay (after every page, success or not)
// 6. Repeat until the frontier is empty (or the page cap is hit)
//
// Pages are processed strictly one at a time.
// =============================================================================

use std::time::Duration;
use tracing::{debug, info};

use super::frontier::Frontier;
use crate::config::CrawlSettings;
use crate::error::Result;
use crate::scrape::{PageProcessor, Record};

/// Counters reported at the end of a crawl
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CrawlStats {
    /// Pages taken from the frontier and fetched (or attempted)
    pub pages_visited: usize,
    /// Of those, pages whose fetch failed
    pub pages_failed: usize,
    /// Frontier entries dropped because they were already visited
    pub revisits_skipped: usize,
}

/// Result of a finished crawl
#[derive(Debug)]
pub struct CrawlReport {
    /// All records in discovery order
    pub records: Vec<Record>,
    pub stats: CrawlStats,
    /// True when the crawl stopped at --max-pages with work left
    pub truncated: bool,
}

pub struct CrawlSession {
    frontier: Frontier,
    processor: PageProcessor,
    records: Vec<Record>,
    stats: CrawlStats,
    delay: Duration,
    max_pages: Option<usize>,
}

impl CrawlSession {
    /// Prepares a crawl; only borrows `settings`, the session keeps what it needs
    pub fn new(settings: &CrawlSettings) -> Result<Self> {
        let processor = PageProcessor::new(settings)?;
        let frontier = Frontier::new(settings.root_url.as_str());

        info!(
            "Starting crawl at {} (mode: {})",
            settings.root_url,
            settings.mode.name()
        );

        Ok(Self {
            frontier,
            processor,
            records: Vec::new(),
            stats: CrawlStats::default(),
            delay: settings.delay,
            max_pages: settings.max_pages,
        })
    }

    /// Runs the crawl until the frontier is exhausted
    pub async fn run(mut self) -> CrawlReport {
        let mut truncated = false;

        while let Some(url) = self.frontier.pop_next() {
            if !self.frontier.mark_visited(&url) {
                self.stats.revisits_skipped += 1;
                continue;
            }
            debug_assert!(!self.frontier.is_pending(&url));

            self.stats.pages_visited += 1;

            let frontier = &self.frontier;
            let outcome = self
                .processor
                .process(&url, |link| frontier.is_visited(link))
                .await;

            if !outcome.fetched {
                self.stats.pages_failed += 1;
            }
            self.records.extend(outcome.records);

            let added = self.frontier.add_discovered(outcome.discovered);
            debug!(
                "{} queued from {}, {} pending, {} visited",
                added,
                url,
                self.frontier.pending_count(),
                self.frontier.visited_count()
            );

            if let Some(max_pages) = self.max_pages {
                if self.stats.pages_visited >= max_pages {
                    truncated = !self.frontier.is_exhausted();
                    if truncated {
                        info!(
                            "Reached --max-pages {} with {} page(s) still pending",
                            max_pages,
                            self.frontier.pending_count()
                        );
                    }
                    break;
                }
            }

            // Polite crawling: fixed pause after every page
            if !self.delay.is_zero() {
                tokio::time::sleep(self.delay).await;
            }
        }

        CrawlReport {
            records: self.records,
            stats: self.stats,
            truncated,
        }
    }
}
