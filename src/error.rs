//! Crate error type

use thiserror::Error;

/// Fatal failures on the single page fetch.
///
/// Field extraction never errors: a field that cannot be extracted is
/// simply absent from the record. There is no retryable/permanent split
/// either, every fetch failure is immediately fatal.
#[derive(Debug, Error)]
pub enum ScrapeError {
    #[error("failed to fetch {url}: {source}")]
    Fetch {
        url: String,
        #[source]
        source: ureq::Error,
    },

    #[error("HTTP {status} for {url}")]
    Status { url: String, status: u16 },

    #[error("failed to read body from {url}: {source}")]
    Body {
        url: String,
        #[source]
        source: ureq::Error,
    },
}
