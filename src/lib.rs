//! Book metadata scraper for Amazon.com.br product pages.
//!
//! Fetches a single product page through the corsproxy.io relay and runs
//! a fixed sequence of CSS-selector and regex extraction steps to build a
//! [`BookRecord`]. Every field is best-effort: a missing element or a
//! failed match leaves the field unset. Only the fetch itself can fail.

pub mod error;
pub mod extractors;
pub mod fetch;
pub mod record;
pub mod selectors;

pub use error::ScrapeError;
pub use extractors::extract_book;
pub use fetch::fetch_product_page;
pub use record::BookRecord;

/// Fetch the product page for an identifier (ISBN-10, ISBN-13 or ASIN)
/// and extract its book metadata.
pub fn scrape_book(identifier: &str) -> Result<BookRecord, ScrapeError> {
    let html = fetch::fetch_product_page(identifier)?;
    let record = extractors::extract_book(&html);
    tracing::info!("extracted {} fields", record.field_count());
    Ok(record)
}
