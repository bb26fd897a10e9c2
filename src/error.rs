// src/error.rs
// =============================================================================
// Error types shared by the crawler, the extractors and the spreadsheet writer.
//
// We use `thiserror` to derive std::error::Error and Display for our enum.
// main.rs still uses `anyhow` on top of this, so any ScrapeError can be
// bubbled up with `?` and given extra context there.
//
// Most of these errors never reach main: a failed page fetch is logged and
// the crawl simply moves on to the next URL.
// =============================================================================

use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScrapeError {
    /// The URL could not be parsed or is not an http(s) URL with a host
    #[error("Invalid URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    /// Transport-level failure (DNS, connection refused, TLS, body read...)
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The server answered, but not with a 2xx status
    #[error("HTTP {0}")]
    HttpStatus(u16),

    /// The request took longer than the configured timeout
    #[error("Timeout: request took longer than {0:?}")]
    Timeout(Duration),

    /// One of our built-in CSS selectors failed to parse
    #[error("Invalid CSS selector '{selector}': {reason}")]
    Selector { selector: String, reason: String },

    /// Building or saving the .xlsx file failed
    #[error("Spreadsheet error: {0}")]
    Workbook(#[from] rust_xlsxwriter::XlsxError),

    /// Filesystem error while preparing the output directory
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Settings from the command line don't make sense together
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl ScrapeError {
    /// Helper for the common "couldn't parse this URL" case
    pub fn invalid_url(url: &str, reason: impl ToString) -> Self {
        ScrapeError::InvalidUrl {
            url: url.to_string(),
            reason: reason.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, ScrapeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_url_message() {
        let err = ScrapeError::invalid_url("nope", "relative URL without a base");
        assert_eq!(
            err.to_string(),
            "Invalid URL 'nope': relative URL without a base"
        );
    }

    #[test]
    fn test_timeout_message() {
        let err = ScrapeError::Timeout(Duration::from_secs(10));
        assert_eq!(err.to_string(), "Timeout: request took longer than 10s");
    }

    #[test]
    fn test_status_message() {
        assert_eq!(ScrapeError::HttpStatus(404).to_string(), "HTTP 404");
    }
}
