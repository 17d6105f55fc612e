//! HTTP fetching of the listing page.

use crate::{Error, Result};
use reqwest::Client;
use std::time::Duration;
use tracing::info;
use url::Url;

/// Fixed request deadline. The upstream behavior defined no timeout at all;
/// a bounded deadline keeps a stalled server from wedging a cron run.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// HTTP client for fetching the configured listing page.
pub struct Fetcher {
    client: Client,
}

impl Fetcher {
    /// Creates a new fetcher with the default request deadline.
    pub fn new() -> Result<Self> {
        Self::with_timeout(DEFAULT_TIMEOUT)
    }

    /// Creates a new fetcher with a custom request timeout (primarily for tests).
    pub fn with_timeout(timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("listwatch/", env!("CARGO_PKG_VERSION")))
            .gzip(true)
            .build()
            .map_err(Error::Network)?;
        Ok(Self { client })
    }

    /// Fetches `url` and returns the response body as text.
    ///
    /// # Errors
    ///
    /// A malformed `url` surfaces as [`Error::InvalidUrl`]; any network
    /// failure or non-success status is fatal for the run and surfaces as
    /// [`Error::Network`].
    pub async fn fetch(&self, url: &str) -> Result<String> {
        let url: Url = url
            .parse()
            .map_err(|e| Error::InvalidUrl(format!("'{url}': {e}")))?;

        let response = self.client.get(url.clone()).send().await?;
        let response = response.error_for_status()?;

        let body = response.text().await?;
        info!("fetched {} bytes from {}", body.len(), url);
        Ok(body)
    }
}

// Default is not implemented: Fetcher::new() can fail and callers should
// handle the Result.
