//! HTTP fetcher implementation
//!
//! This module handles all HTTP requests for the crawler, including:
//! - Building the HTTP client with the configured User-Agent
//! - Single-attempt GET requests with a per-request timeout
//! - Classifying the outcome as success, HTTP error or network error
//!
//! There is no retry: a failed fetch is terminal for that URL only.

use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

/// Result of a fetch operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchResult {
    /// Successfully fetched the page
    Success {
        /// Final URL after redirects
        final_url: String,
        /// HTTP status code
        status_code: u16,
        /// Page body content
        body: String,
    },

    /// Server answered with a non-success status
    HttpError {
        /// The HTTP status code
        status_code: u16,
    },

    /// Network error (connection refused, DNS failure, timeout, body read)
    NetworkError {
        /// Error description
        error: String,
        /// Whether the request hit its timeout
        timed_out: bool,
    },
}

/// Source of page content for the crawler
///
/// Implementations must attempt each fetch exactly once and report every
/// failure through [`FetchResult`] rather than panicking.
#[async_trait]
pub trait PageFetcher: Send + Sync {
    /// Fetches `url`, giving up after `timeout`
    async fn fetch(&self, url: &str, timeout: Duration) -> FetchResult;
}

/// Builds an HTTP client with proper configuration
///
/// Redirects are followed (reqwest's default policy); timeouts are set per
/// request by [`HttpFetcher`].
///
/// # Example
///
/// ```no_run
/// use earnings_scout::crawler::build_http_client;
///
/// let client = build_http_client("Mozilla/5.0").unwrap();
/// ```
pub fn build_http_client(user_agent: &str) -> Result<Client, reqwest::Error> {
    Client::builder()
        .user_agent(user_agent)
        .connect_timeout(Duration::from_secs(10))
        .gzip(true)
        .brotli(true)
        .build()
}

/// [`PageFetcher`] backed by a `reqwest` client
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    /// Creates a fetcher sending the given User-Agent
    pub fn new(user_agent: &str) -> Result<Self, reqwest::Error> {
        Ok(Self {
            client: build_http_client(user_agent)?,
        })
    }
}

#[async_trait]
impl PageFetcher for HttpFetcher {
    async fn fetch(&self, url: &str, timeout: Duration) -> FetchResult {
        fetch_url(&self.client, url, timeout).await
    }
}

/// Fetches a URL once and classifies the outcome
///
/// | Condition | Result |
/// |-----------|--------|
/// | 2xx | `Success` with body |
/// | Any other status | `HttpError` |
/// | Timeout | `NetworkError { timed_out: true }` |
/// | Connection/DNS/TLS error | `NetworkError` |
/// | Body read failure | `NetworkError` |
pub async fn fetch_url(client: &Client, url: &str, timeout: Duration) -> FetchResult {
    match client.get(url).timeout(timeout).send().await {
        Ok(response) => {
            let status = response.status();
            let final_url = response.url().to_string();

            if !status.is_success() {
                return FetchResult::HttpError {
                    status_code: status.as_u16(),
                };
            }

            match response.text().await {
                Ok(body) => FetchResult::Success {
                    final_url,
                    status_code: status.as_u16(),
                    body,
                },
                Err(e) => FetchResult::NetworkError {
                    timed_out: e.is_timeout(),
                    error: e.to_string(),
                },
            }
        }
        Err(e) => {
            if e.is_timeout() {
                FetchResult::NetworkError {
                    error: "Request timeout".to_string(),
                    timed_out: true,
                }
            } else if e.is_connect() {
                FetchResult::NetworkError {
                    error: "Connection refused".to_string(),
                    timed_out: false,
                }
            } else {
                FetchResult::NetworkError {
                    error: e.to_string(),
                    timed_out: false,
                }
            }
        }
    }
}
