// src/scrape/mod.rs
// =============================================================================
// Everything that happens to a single page.
//
// Submodules:
// - record: ExtractMode (what to extract) and Record (one extracted row)
// - extract: pure HTML -> records / links functions
// - processor: fetches a page over HTTP and runs extract on it
// =============================================================================

mod extract;
mod processor;
mod record;

pub use processor::PageProcessor;
pub use record::{ExtractMode, Record};
