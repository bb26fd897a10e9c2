// src/output.rs
// =============================================================================
// Writes the collected records to an .xlsx spreadsheet.
//
// Layout: one worksheet, a bold header row, then one row per record:
//   text  -> Page URL | Matched Text
//   image -> Page URL | Image URL
//   link  -> Page URL | Link
//
// The file is written once, after the crawl. With zero records nothing is
// written at all.
//
// Excel caps a cell at 32,767 characters. Longer values (a text-mode page
// with many matching blocks) are cut to that length with a warning, so one
// oversized page can't cost us the whole file.
// =============================================================================

use rust_xlsxwriter::{Format, Workbook};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::warn;

use crate::config::CrawlSettings;
use crate::error::Result;
use crate::scrape::{ExtractMode, Record};

/// Saves the records to `settings.output_path()`
///
/// Returns the path written, or None when there was nothing to save.
pub fn export_records(records: &[Record], settings: &CrawlSettings) -> Result<Option<PathBuf>> {
    if records.is_empty() {
        return Ok(None);
    }

    let path = settings.output_path();
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    write_workbook(records, &settings.mode, &path)?;
    Ok(Some(path))
}

/// Writes a header row plus one row per record to `path`
pub fn write_workbook(records: &[Record], mode: &ExtractMode, path: &Path) -> Result<()> {
    let mut workbook = Workbook::new();
    let header = Format::new().set_bold();

    let worksheet = workbook.add_worksheet();
    worksheet.set_name(mode.name())?;

    for (col, title) in (0u16..).zip(mode.column_headers()) {
        worksheet.write_string_with_format(0, col, title, &header)?;
    }
    worksheet.set_column_width(0, 60)?;
    worksheet.set_column_width(1, 80)?;

    for (row, record) in (1u32..).zip(records) {
        let page_url = record.page_url();
        worksheet.write_string(row, 0, fit_cell(page_url, page_url))?;
        worksheet.write_string(row, 1, fit_cell(record.value(), page_url))?;
    }

    workbook.save(path)?;
    Ok(())
}

/// Most characters a single Excel cell can hold
pub const MAX_CELL_CHARS: usize = 32_767;

// Truncates `value` to MAX_CELL_CHARS characters (never splitting a char)
fn fit_cell<'a>(value: &'a str, page_url: &str) -> &'a str {
    match value.char_indices().nth(MAX_CELL_CHARS) {
        Some((cut, _)) => {
            warn!(
                "Value from {} is {} characters long; truncated to Excel's limit of {}",
                page_url,
                value.chars().count(),
                MAX_CELL_CHARS
            );
            &value[..cut]
        }
        None => value,
    }
}
