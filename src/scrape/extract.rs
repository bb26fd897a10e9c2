// src/scrape/extract.rs
// =============================================================================
// Pulls records and crawlable links out of a parsed HTML page.
//
// We use the `scraper` crate which:
// - Parses HTML into a DOM (Document Object Model)
// - Supports CSS selectors for finding elements
// - Is built on html5ever (Mozilla's HTML parser)
//
// And the `url` crate to:
// - Resolve relative hrefs/srcs against the current page
// - Compare origins (scheme + host + port) for the same-site check
//
// Nothing in here touches the network, so every function can be tested with
// an HTML string literal.
// =============================================================================

use scraper::{Html, Selector};
use std::collections::HashSet;
use url::{Origin, Url};

use super::record::{ExtractMode, Record};
use crate::error::{Result, ScrapeError};

// Elements whose text is checked against the keyword in text mode
const TEXT_BLOCKS: &str = "p, h1, h2, h3, span";
const IMAGES: &str = "img[src]";
const LINKS: &str = "a[href]";

/// Pre-parsed CSS selectors, built once per crawl instead of once per page
#[derive(Debug)]
pub struct Selectors {
    text_blocks: Selector,
    images: Selector,
    links: Selector,
}

impl Selectors {
    pub fn new() -> Result<Self> {
        Ok(Self {
            text_blocks: parse_selector(TEXT_BLOCKS)?,
            images: parse_selector(IMAGES)?,
            links: parse_selector(LINKS)?,
        })
    }
}

fn parse_selector(css: &str) -> Result<Selector> {
    Selector::parse(css).map_err(|e| ScrapeError::Selector {
        selector: css.to_string(),
        reason: format!("{:?}", e),
    })
}

/// Runs the configured extraction on one page
///
/// Returns the page's records in document order. An unrecognized mode
/// extracts nothing; the caller is responsible for warning about it.
pub fn extract(document: &Html, page_url: &Url, mode: &ExtractMode, selectors: &Selectors) -> Vec<Record> {
    match mode {
        ExtractMode::Text { keyword } => {
            match extract_matching_text(document, keyword, selectors) {
                Some(matched_text) => vec![Record::Text {
                    page_url: page_url.to_string(),
                    matched_text,
                }],
                // No match on this page means no row at all, not an empty one
                None => Vec::new(),
            }
        }
        ExtractMode::Image => document
            .select(&selectors.images)
            .filter_map(|img| img.value().attr("src"))
            .filter_map(|src| resolve_url(page_url, src))
            .map(|image_url| Record::Image {
                page_url: page_url.to_string(),
                image_url: image_url.into(),
            })
            .collect(),
        ExtractMode::Link => resolved_links(document, page_url, selectors)
            .map(|link_url| Record::Link {
                page_url: page_url.to_string(),
                link_url: link_url.into(),
            })
            .collect(),
        ExtractMode::Unrecognized(_) => Vec::new(),
    }
}

/// Collects every text block that contains `keyword` (case-insensitive)
///
/// Each block's text is trimmed before matching. All matches are joined with
/// '\n' in document order; `None` when nothing matched.
fn extract_matching_text(document: &Html, keyword: &str, selectors: &Selectors) -> Option<String> {
    let needle = keyword.to_lowercase();

    let matched: Vec<String> = document
        .select(&selectors.text_blocks)
        .map(|element| element.text().collect::<String>().trim().to_string())
        .filter(|text| text.to_lowercase().contains(&needle))
        .collect();

    if matched.is_empty() {
        None
    } else {
        Some(matched.join("\n"))
    }
}

/// Finds the links on this page that the crawler should visit next
///
/// Keeps a link only when:
/// 1. its href resolves to an absolute URL
/// 2. its origin equals the crawl's root origin
/// 3. `is_visited` says we haven't already fetched it
///
/// The result has no duplicates and keeps document order, so crawls are
/// reproducible.
pub fn discover_links<F>(
    document: &Html,
    page_url: &Url,
    root_origin: &Origin,
    selectors: &Selectors,
    is_visited: F,
) -> Vec<String>
where
    F: Fn(&str) -> bool,
{
    let mut seen = HashSet::new();
    let mut links = Vec::new();

    for link in resolved_links(document, page_url, selectors) {
        // mailto:, javascript: etc. have opaque origins and never match
        if link.origin() != *root_origin {
            continue;
        }

        let link = String::from(link);
        if is_visited(&link) || !seen.insert(link.clone()) {
            continue;
        }

        links.push(link);
    }

    links
}

// Every <a href> on the page, resolved against the page URL
fn resolved_links<'a>(
    document: &'a Html,
    page_url: &'a Url,
    selectors: &'a Selectors,
) -> impl Iterator<Item = Url> + 'a {
    document
        .select(&selectors.links)
        .filter_map(|a| a.value().attr("href"))
        .filter_map(move |href| resolve_url(page_url, href))
}

/// Resolves a possibly-relative URL against the page it appeared on
///
/// Examples (base = "https://site.example/about"):
///   "/rates"                 -> "https://site.example/rates"
///   "team"                   -> "https://site.example/team"
///   "https://other.example"  -> "https://other.example/"
///   "#top"                   -> "https://site.example/about#top"
///
/// No normalisation is done beyond what URL parsing itself does, so
/// "/a" and "/a/" stay two different pages.
pub fn resolve_url(base: &Url, href: &str) -> Option<Url> {
    base.join(href).ok()
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why is Selectors a struct?
//    - Selector::parse does real work (it compiles the CSS)
//    - Parsing "p, h1, h2, h3, span" once per crawl instead of once per page
//      saves that work on every page
//
// 2. What does `impl Iterator<Item = Url> + 'a` mean?
//    - resolved_links returns "some iterator" without naming its long type
//    - The 'a says the iterator borrows the document and page URL, so it
//      can't outlive them
//
// 3. Why does discover_links take a closure?
//    - It needs to ask "was this URL visited?" without knowing about the
//      Frontier type, which keeps this file free of crawl state
//    - Tests just pass |_| false
//
// 4. What is an Origin?
//    - The (scheme, host, port) triple of a URL
//    - https://site.example/a and https://site.example/b share one
//    - mailto: and javascript: URLs get an "opaque" origin that never
//      equals anything else
// -----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn page(url: &str) -> Url {
        Url::parse(url).unwrap()
    }

    fn text_mode(keyword: &str) -> ExtractMode {
        ExtractMode::Text {
            keyword: keyword.to_string(),
        }
    }

    #[test]
    fn test_resolve_relative_link() {
        let base = page("https://site.example/about");
        assert_eq!(
            resolve_url(&base, "/rates").map(String::from),
            Some("https://site.example/rates".to_string())
        );
    }

    #[test]
    fn test_resolve_keeps_fragment() {
        let base = page("https://site.example/about");
        assert_eq!(
            resolve_url(&base, "#top").map(String::from),
            Some("https://site.example/about#top".to_string())
        );
    }

    #[test]
    fn test_text_mode_joins_matches_in_document_order() {
        let html = Html::parse_document(
            r#"<html><body>
                <h1>  Special Rates for groups </h1>
                <p>Nothing to see here</p>
                <h2>Winter special RATES</h2>
                <div>special rates in a div are ignored</div>
            </body></html>"#,
        );
        let selectors = Selectors::new().unwrap();
        let url = page("https://site.example/");

        let records = extract(&html, &url, &text_mode("special rates"), &selectors);

        assert_eq!(
            records,
            vec![Record::Text {
                page_url: "https://site.example/".to_string(),
                matched_text: "Special Rates for groups\nWinter special RATES".to_string(),
            }]
        );
    }

    #[test]
    fn test_text_mode_without_match_emits_nothing() {
        let html = Html::parse_document("<p>Hello</p><span>World</span>");
        let selectors = Selectors::new().unwrap();
        let records = extract(&html, &page("https://site.example/"), &text_mode("rates"), &selectors);
        assert!(records.is_empty());
    }

    #[test]
    fn test_text_mode_includes_nested_inline_text() {
        let html = Html::parse_document("<p>Our <b>special</b> rates</p>");
        let selectors = Selectors::new().unwrap();
        let records = extract(&html, &page("https://site.example/"), &text_mode("special rates"), &selectors);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].value(), "Our special rates");
    }

    #[test]
    fn test_image_mode_one_record_per_image() {
        let html = Html::parse_document(
            r#"<img src="/img/a.png"><img src="https://cdn.example/b.jpg"><img alt="no src">"#,
        );
        let selectors = Selectors::new().unwrap();
        let records = extract(&html, &page("https://site.example/gallery/"), &ExtractMode::Image, &selectors);

        let urls: Vec<&str> = records.iter().map(Record::value).collect();
        assert_eq!(urls, vec!["https://site.example/img/a.png", "https://cdn.example/b.jpg"]);
    }

    #[test]
    fn test_link_mode_keeps_external_links() {
        let html = Html::parse_document(
            r#"<a href="/rates">Rates</a>
               <a href="https://other.example/">Elsewhere</a>
               <a href="mailto:info@site.example">Mail</a>
               <a>No href</a>"#,
        );
        let selectors = Selectors::new().unwrap();
        let records = extract(&html, &page("https://site.example/about"), &ExtractMode::Link, &selectors);

        let urls: Vec<&str> = records.iter().map(Record::value).collect();
        assert_eq!(
            urls,
            vec![
                "https://site.example/rates",
                "https://other.example/",
                "mailto:info@site.example"
            ]
        );
    }

    #[test]
    fn test_unrecognized_mode_extracts_nothing() {
        let html = Html::parse_document(r#"<p>special rates</p><img src="a.png"><a href="/x">x</a>"#);
        let selectors = Selectors::new().unwrap();
        let mode = ExtractMode::Unrecognized("video".to_string());
        assert!(extract(&html, &page("https://site.example/"), &mode, &selectors).is_empty());
    }

    #[test]
    fn test_discovery_keeps_same_origin_only() {
        let html = Html::parse_document(
            r#"<a href="/a">A</a>
               <a href="https://site.example/b">B</a>
               <a href="http://site.example/c">other scheme</a>
               <a href="https://sub.site.example/d">other host</a>
               <a href="https://site.example:8443/e">other port</a>
               <a href="javascript:void(0)">js</a>"#,
        );
        let selectors = Selectors::new().unwrap();
        let url = page("https://site.example/");

        let links = discover_links(&html, &url, &url.origin(), &selectors, |_| false);

        assert_eq!(links, vec!["https://site.example/a", "https://site.example/b"]);
    }

    #[test]
    fn test_discovery_skips_visited_and_duplicates() {
        let html = Html::parse_document(
            r#"<a href="/a">A</a><a href="/b">B</a><a href="/a">A again</a>"#,
        );
        let selectors = Selectors::new().unwrap();
        let url = page("https://site.example/");

        let links = discover_links(&html, &url, &url.origin(), &selectors, |u| {
            u == "https://site.example/b"
        });

        assert_eq!(links, vec!["https://site.example/a"]);
    }

    #[test]
    fn test_discovery_treats_trailing_slash_as_distinct() {
        let html = Html::parse_document(r#"<a href="/a">A</a><a href="/a/">A/</a>"#);
        let selectors = Selectors::new().unwrap();
        let url = page("https://site.example/");

        let links = discover_links(&html, &url, &url.origin(), &selectors, |_| false);

        assert_eq!(links, vec!["https://site.example/a", "https://site.example/a/"]);
    }
}
