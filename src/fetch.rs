//! Document fetching
//!
//! This module handles the HTTP side of the pipeline: building the client
//! with a descriptive user agent and bounded timeouts, and fetching a page
//! into a [`FetchedPage`] that the extractors parse. Transport failures and
//! non-success status codes surface as [`ReportError`] variants; no retry
//! logic is attempted.

use crate::{ReportError, Result};
use reqwest::Client;
use std::time::Duration;
use url::Url;

/// A fetched document: the final URL after redirects plus the body text
///
/// Parsing is deliberately left to the extractors so the fetch layer stays a
/// thin transport adapter.
#[derive(Debug, Clone)]
pub struct FetchedPage {
    /// Final URL after redirects; base address for resolving relative links
    pub url: Url,

    /// Raw HTML body
    pub body: String,
}

/// Builds the HTTP client used for every fetch in a run
///
/// # Arguments
///
/// * `user_agent` - User agent string to send with each request
/// * `timeout_secs` - Per-request timeout in seconds
///
/// # Returns
///
/// * `Ok(Client)` - Successfully built HTTP client
/// * `Err(reqwest::Error)` - Failed to build client
pub fn build_http_client(user_agent: &str, timeout_secs: u64) -> reqwest::Result<Client> {
    Client::builder()
        .user_agent(user_agent)
        .timeout(Duration::from_secs(timeout_secs))
        .connect_timeout(Duration::from_secs(10))
        .gzip(true)
        .brotli(true)
        .build()
}

/// Fetches a document by address
///
/// # Arguments
///
/// * `client` - The HTTP client to use
/// * `url` - The address to fetch
///
/// # Returns
///
/// * `Ok(FetchedPage)` - Successfully fetched the page
/// * `Err(ReportError::Fetch)` - Transport failure (timeout, connection, TLS)
/// * `Err(ReportError::HttpStatus)` - Non-success response status
pub async fn fetch_document(client: &Client, url: &str) -> Result<FetchedPage> {
    tracing::debug!("Fetching: {}", url);

    let response = client
        .get(url)
        .send()
        .await
        .map_err(|source| ReportError::Fetch {
            url: url.to_string(),
            source,
        })?;

    let status = response.status();
    if !status.is_success() {
        return Err(ReportError::HttpStatus {
            url: url.to_string(),
            status: status.as_u16(),
        });
    }

    let final_url = response.url().clone();
    let body = response
        .text()
        .await
        .map_err(|source| ReportError::Fetch {
            url: url.to_string(),
            source,
        })?;

    tracing::debug!("Fetched {} ({} bytes)", final_url, body.len());

    Ok(FetchedPage {
        url: final_url,
        body,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_http_client() {
        let client = build_http_client("TestAgent/1.0", 30);
        assert!(client.is_ok());
    }
}
