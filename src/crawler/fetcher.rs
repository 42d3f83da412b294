//! HTTP fetcher implementation
//!
//! This module handles all HTTP requests for the crawler:
//! - Building the HTTP client with a proper user agent string and timeouts
//! - GET requests returning the raw body
//! - Mapping non-200 responses and transport failures to crawl errors
//!
//! There is no retry logic: the first failed fetch ends the crawl.

use crate::config::{HttpConfig, UserAgentConfig};
use crate::ShelfError;
use reqwest::{Client, StatusCode};
use std::time::Duration;

/// Source of raw page bodies
///
/// The crawl loop only ever talks to this trait, so tests can swap the
/// network for an in-memory page map.
#[allow(async_fn_in_trait)]
pub trait Fetcher {
    /// Fetches `url` and returns its body
    ///
    /// # Returns
    ///
    /// * `Ok(Vec<u8>)` - The body of an HTTP 200 response
    /// * `Err(ShelfError)` - Any other status or a transport failure
    async fn fetch(&self, url: &str) -> Result<Vec<u8>, ShelfError>;
}

/// Builds an HTTP client with proper configuration
///
/// # Arguments
///
/// * `user_agent` - The user agent configuration
/// * `http` - Timeout settings
///
/// # Example
///
/// ```no_run
/// use shelfwalk::config::{HttpConfig, UserAgentConfig};
/// use shelfwalk::crawler::build_http_client;
///
/// let client = build_http_client(&UserAgentConfig::default(), &HttpConfig::default()).unwrap();
/// ```
pub fn build_http_client(
    user_agent: &UserAgentConfig,
    http: &HttpConfig,
) -> Result<Client, reqwest::Error> {
    Client::builder()
        .user_agent(user_agent.header_value())
        .timeout(Duration::from_secs(http.request_timeout_secs))
        .connect_timeout(Duration::from_secs(http.connect_timeout_secs))
        .gzip(true)
        .brotli(true)
        .build()
}

/// Fetcher backed by a reqwest client
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    /// Wraps an existing client
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Builds the client from configuration
    pub fn from_config(
        user_agent: &UserAgentConfig,
        http: &HttpConfig,
    ) -> Result<Self, ShelfError> {
        Ok(Self::new(build_http_client(user_agent, http)?))
    }
}

impl Fetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<Vec<u8>, ShelfError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|source| ShelfError::Http {
                url: url.to_string(),
                source,
            })?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(ShelfError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await.map_err(|source| ShelfError::Http {
            url: url.to_string(),
            source,
        })?;

        tracing::trace!("Fetched {} bytes from {}", body.len(), url);
        Ok(body.to_vec())
    }
}
