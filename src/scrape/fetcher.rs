//! HTTP fetcher implementation
//!
//! This module handles all HTTP requests for the batch run, including:
//! - Building an HTTP client with the configured user agent
//! - GET requests for search result pages
//! - GET requests for individual images
//! - Error classification into loggable descriptions

use crate::config::FetchConfig;
use reqwest::Client;
use std::time::Duration;
use url::Url;

/// Result of fetching a search result page
///
/// A failed page fetch is not an error for the batch: the orchestrator
/// treats it as "no images found" for that keyword and moves on.
#[derive(Debug)]
pub enum PageResult {
    /// Successfully fetched the page
    Success {
        /// Raw page markup
        body: String,
    },

    /// HTTP or network failure; the keyword degrades to zero images
    Failed {
        /// Error description for logging
        error: String,
    },
}

/// Builds an HTTP client with proper configuration
///
/// # Arguments
///
/// * `config` - The fetch configuration
///
/// # Returns
///
/// * `Ok(Client)` - Successfully built HTTP client
/// * `Err(reqwest::Error)` - Failed to build client
///
/// # Example
///
/// ```no_run
/// use imagehaul::config::FetchConfig;
/// use imagehaul::scrape::build_http_client;
///
/// let config = FetchConfig {
///     search_url: "https://www.google.com/search".to_string(),
///     user_agent: "TestAgent/1.0".to_string(),
///     timeout_secs: 30,
/// };
///
/// let client = build_http_client(&config).unwrap();
/// ```
pub fn build_http_client(config: &FetchConfig) -> Result<Client, reqwest::Error> {
    Client::builder()
        .user_agent(config.user_agent.clone())
        .timeout(Duration::from_secs(config.timeout_secs))
        .connect_timeout(Duration::from_secs(10))
        .gzip(true)
        .brotli(true)
        .build()
}

/// Builds the search URL for a keyword
///
/// Appends the search term as the `q` query parameter and requests the
/// image results tab via `tbm=isch`. The term is percent-encoded by the
/// url crate.
///
/// # Arguments
///
/// * `search_url` - Base search endpoint from the configuration
/// * `term` - The search term
pub fn build_search_url(search_url: &str, term: &str) -> Result<Url, url::ParseError> {
    let mut url = Url::parse(search_url)?;
    url.query_pairs_mut()
        .append_pair("q", term)
        .append_pair("tbm", "isch");
    Ok(url)
}

/// Fetches a search result page for one keyword
///
/// One GET, no retry. Non-success HTTP status and network errors both
/// produce `PageResult::Failed` with a description; the caller logs it and
/// continues with the next keyword.
///
/// # Arguments
///
/// * `client` - The HTTP client to use
/// * `url` - The search URL built by [`build_search_url`]
pub async fn fetch_search_page(client: &Client, url: &Url) -> PageResult {
    match client.get(url.clone()).send().await {
        Ok(response) => {
            let status = response.status();

            if !status.is_success() {
                return PageResult::Failed {
                    error: format!("HTTP {}", status.as_u16()),
                };
            }

            match response.text().await {
                Ok(body) => PageResult::Success { body },
                Err(e) => PageResult::Failed {
                    error: format!("Failed to read body: {}", e),
                },
            }
        }
        Err(e) => PageResult::Failed {
            error: describe_request_error(&e),
        },
    }
}

/// Fetches a single image URL, one attempt
///
/// Retry policy lives in the downloader; this function reports any
/// HTTP or network failure as an error description.
///
/// # Arguments
///
/// * `client` - The HTTP client to use
/// * `url` - The image URL
///
/// # Returns
///
/// * `Ok(Vec<u8>)` - The image bytes
/// * `Err(String)` - Error description
pub async fn fetch_image(client: &Client, url: &str) -> Result<Vec<u8>, String> {
    let response = client
        .get(url)
        .send()
        .await
        .map_err(|e| describe_request_error(&e))?;

    let status = response.status();
    if !status.is_success() {
        return Err(format!("HTTP {}", status.as_u16()));
    }

    response
        .bytes()
        .await
        .map(|bytes| bytes.to_vec())
        .map_err(|e| format!("Failed to read body: {}", e))
}

/// Classifies a reqwest error into a short loggable description
fn describe_request_error(e: &reqwest::Error) -> String {
    if e.is_timeout() {
        "Request timeout".to_string()
    } else if e.is_connect() {
        "Connection refused".to_string()
    } else {
        e.to_string()
    }
}
