//! Product page fetching through the CORS proxy.

use std::time::Duration;

use crate::error::ScrapeError;

const RETAILER_BASE: &str = "https://www.amazon.com.br/dp/";
const PROXY_BASE: &str = "https://corsproxy.io/?";
const FETCH_TIMEOUT_SECS: u64 = 30;
const USER_AGENT: &str = "amazon-book-scraper/0.1";

/// Build the retailer product URL for an identifier
/// (ISBN-10, ISBN-13 or ASIN). The identifier is whitespace-trimmed.
pub fn product_url(identifier: &str) -> String {
    format!("{}{}", RETAILER_BASE, identifier.trim())
}

/// Wrap a target URL as the percent-encoded query of the proxy endpoint.
pub fn proxy_url(target: &str) -> String {
    let encoded: String = url::form_urlencoded::byte_serialize(target.as_bytes()).collect();
    format!("{}{}", PROXY_BASE, encoded)
}

/// Fetch the product page for an identifier and return the raw HTML.
///
/// One GET through the proxy, 30 second timeout, no retry. Transport
/// errors, timeouts and non-success statuses are all fatal.
pub fn fetch_product_page(identifier: &str) -> Result<String, ScrapeError> {
    let target = product_url(identifier);
    tracing::info!("fetching {}", target);

    fetch_html(&proxy_url(&target))
}

/// Fetch a URL with the crate's blocking agent.
pub fn fetch_html(url: &str) -> Result<String, ScrapeError> {
    let agent = ureq::Agent::new_with_config(
        ureq::Agent::config_builder()
            .timeout_global(Some(Duration::from_secs(FETCH_TIMEOUT_SECS)))
            .user_agent(USER_AGENT)
            .build(),
    );

    match agent.get(url).call() {
        Ok(resp) if resp.status().is_success() => {
            resp.into_body().read_to_string().map_err(|e| ScrapeError::Body {
                url: url.to_string(),
                source: e,
            })
        }
        Ok(resp) => Err(ScrapeError::Status {
            url: url.to_string(),
            status: resp.status().as_u16(),
        }),
        Err(ureq::Error::StatusCode(status)) => Err(ScrapeError::Status {
            url: url.to_string(),
            status,
        }),
        Err(e) => Err(ScrapeError::Fetch {
            url: url.to_string(),
            source: e,
        }),
    }
}
