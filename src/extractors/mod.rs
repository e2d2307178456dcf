//! Field extraction over a fetched product page.
//!
//! Twelve independent best-effort steps. A missing element or failed
//! match leaves its field unset; no step can fail the extraction. Order
//! only matters for `isbn`, which is derived inside the ISBN steps.

mod date;
mod details;
mod page;

pub use date::extract_published_date;
pub use details::{
    extract_asin, extract_isbn10, extract_isbn13, extract_language, extract_page_count,
    extract_publisher,
};
pub use page::{
    extract_authors, extract_categories, extract_description, extract_image_url, extract_title,
};

use scraper::Html;

use crate::record::BookRecord;
use crate::selectors;

/// Run every extraction step over raw product-page HTML.
pub fn extract_book(html: &str) -> BookRecord {
    let document = Html::parse_document(html);
    let details = details_text(&document);

    let mut record = BookRecord {
        title: extract_title(&document),
        authors: extract_authors(&document),
        image_url: extract_image_url(&document),
        description: extract_description(&document),
        ..Default::default()
    };

    if let Some(isbn10) = extract_isbn10(&details) {
        record.isbn = Some(isbn10.clone());
        record.isbn10 = Some(isbn10);
    }
    if let Some(isbn13) = extract_isbn13(&details) {
        if record.isbn.is_none() {
            record.isbn = Some(isbn13.clone());
        }
        record.isbn13 = Some(isbn13);
    }

    record.asin = extract_asin(&details);
    record.publisher = extract_publisher(&details);
    record.published_date = extract_published_date(html);
    record.page_count = extract_page_count(&details);
    record.language = extract_language(&details);
    record.categories = extract_categories(&document);

    record
}

/// Concatenated text of whichever detail containers exist, in a fixed
/// order, each prefixed with a space. Substrate for the regex steps.
pub fn details_text(document: &Html) -> String {
    let mut text = String::new();

    for selector in selectors::DETAIL_CONTAINERS.iter() {
        if let Some(el) = document.select(selector).next() {
            text.push(' ');
            text.extend(el.text());
        }
    }

    text
}
