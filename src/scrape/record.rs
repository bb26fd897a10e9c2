// src/scrape/record.rs
// =============================================================================
// The two small data types everything else passes around:
//
// - ExtractMode: WHAT we pull out of each page (chosen once for the whole run)
// - Record: ONE extracted unit, which later becomes one spreadsheet row
//
// Both are closed enums, so every `match` on them is checked by the compiler:
// adding a new mode means the extractor, the file name and the spreadsheet
// headers all fail to compile until they handle it.
// =============================================================================

use crate::error::{Result, ScrapeError};

/// Which kind of content to extract from every crawled page
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExtractMode {
    /// Text blocks containing the keyword (case-insensitive)
    Text { keyword: String },
    /// Image URLs from <img src>
    Image,
    /// Link URLs from <a href>
    Link,
    /// Anything else the user typed. Nothing is extracted, but the
    /// crawl still runs so the site gets walked.
    Unrecognized(String),
}

impl ExtractMode {
    /// Builds a mode from its command-line name
    ///
    /// Only "text" needs a keyword; an empty or missing keyword there is a
    /// configuration error because it would match every block on every page.
    pub fn from_name(name: &str, keyword: Option<&str>) -> Result<Self> {
        match name {
            "text" => {
                let keyword = keyword.unwrap_or_default();
                if keyword.trim().is_empty() {
                    return Err(ScrapeError::InvalidConfig(
                        "text mode needs a non-empty --keyword".to_string(),
                    ));
                }
                Ok(ExtractMode::Text {
                    keyword: keyword.to_string(),
                })
            }
            "image" => Ok(ExtractMode::Image),
            "link" => Ok(ExtractMode::Link),
            other => Ok(ExtractMode::Unrecognized(other.to_string())),
        }
    }

    /// The mode's name, as used in the output file name
    pub fn name(&self) -> &str {
        match self {
            ExtractMode::Text { .. } => "text",
            ExtractMode::Image => "image",
            ExtractMode::Link => "link",
            ExtractMode::Unrecognized(name) => name,
        }
    }

    /// Spreadsheet header row for this mode
    pub fn column_headers(&self) -> [&'static str; 2] {
        match self {
            ExtractMode::Text { .. } => ["Page URL", "Matched Text"],
            ExtractMode::Image => ["Page URL", "Image URL"],
            ExtractMode::Link => ["Page URL", "Link"],
            ExtractMode::Unrecognized(_) => ["Page URL", "Value"],
        }
    }
}

/// One extracted unit: the page it came from plus the extracted value
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Record {
    /// All matching text blocks of one page, joined with '\n'
    Text { page_url: String, matched_text: String },
    /// One image, resolved to an absolute URL
    Image { page_url: String, image_url: String },
    /// One hyperlink, resolved to an absolute URL
    Link { page_url: String, link_url: String },
}

impl Record {
    pub fn page_url(&self) -> &str {
        match self {
            Record::Text { page_url, .. }
            | Record::Image { page_url, .. }
            | Record::Link { page_url, .. } => page_url,
        }
    }

    /// The second column of the row
    pub fn value(&self) -> &str {
        match self {
            Record::Text { matched_text, .. } => matched_text,
            Record::Image { image_url, .. } => image_url,
            Record::Link { link_url, .. } => link_url,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_modes() {
        assert_eq!(
            ExtractMode::from_name("text", Some("special rates")).unwrap(),
            ExtractMode::Text {
                keyword: "special rates".to_string()
            }
        );
        assert_eq!(ExtractMode::from_name("image", None).unwrap(), ExtractMode::Image);
        assert_eq!(ExtractMode::from_name("link", None).unwrap(), ExtractMode::Link);
    }

    #[test]
    fn test_unknown_mode_is_kept() {
        let mode = ExtractMode::from_name("video", None).unwrap();
        assert_eq!(mode, ExtractMode::Unrecognized("video".to_string()));
        assert_eq!(mode.name(), "video");
    }

    #[test]
    fn test_mode_names_are_case_sensitive() {
        let mode = ExtractMode::from_name("Text", Some("x")).unwrap();
        assert_eq!(mode, ExtractMode::Unrecognized("Text".to_string()));
    }

    #[test]
    fn test_text_mode_requires_keyword() {
        assert!(ExtractMode::from_name("text", None).is_err());
        assert!(ExtractMode::from_name("text", Some("   ")).is_err());
    }

    #[test]
    fn test_headers_per_mode() {
        assert_eq!(ExtractMode::Image.column_headers(), ["Page URL", "Image URL"]);
        assert_eq!(ExtractMode::Link.column_headers(), ["Page URL", "Link"]);
        let text = ExtractMode::Text {
            keyword: "k".to_string(),
        };
        assert_eq!(text.column_headers(), ["Page URL", "Matched Text"]);
    }

    #[test]
    fn test_record_accessors() {
        let record = Record::Link {
            page_url: "https://site.example/".to_string(),
            link_url: "https://site.example/rates".to_string(),
        };
        assert_eq!(record.page_url(), "https://site.example/");
        assert_eq!(record.value(), "https://site.example/rates");
    }
}
