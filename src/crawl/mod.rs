// src/crawl/mod.rs
// =============================================================================
// This module handles website crawling.
//
// Features:
// - Breadth-first crawling starting from the root URL
// - Same-origin restriction (never leaves the site)
// - Each URL is fetched at most once
// - Polite crawling with a fixed delay between requests
//
// Submodules:
// - frontier: pending queue + visited set
// - session: the crawl loop and the state it owns
// =============================================================================

mod frontier;
mod session;

pub use session::CrawlReport;

use session::CrawlSession;

use crate::config::CrawlSettings;
use crate::error::Result;

/// Crawls the whole site described by `settings` and returns what was found
pub async fn crawl_site(settings: &CrawlSettings) -> Result<CrawlReport> {
    let session = CrawlSession::new(settings)?;
    Ok(session.run().await)
}
