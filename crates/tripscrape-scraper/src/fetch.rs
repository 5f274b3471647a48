//! HTTP page fetcher for the hotels landing page.

use std::time::Duration;

use reqwest::Client;

use crate::error::ScrapeError;
use crate::retry::retry_with_backoff;

/// Fetches landing pages with a fixed header set and retry policy.
///
/// Network failures, 429 and 5xx responses are retried with exponential
/// backoff up to `max_retries` additional attempts.
#[derive(Debug, Clone)]
pub struct PageFetcher {
    client: Client,
    max_retries: u32,
    backoff_base_ms: u64,
}

impl PageFetcher {
    /// Creates a `PageFetcher` with configured timeout, `User-Agent`, and retry policy.
    ///
    /// # Errors
    ///
    /// Returns [`ScrapeError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(
        timeout_secs: u64,
        user_agent: &str,
        max_retries: u32,
        backoff_base_ms: u64,
    ) -> Result<Self, ScrapeError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;
        Ok(Self {
            client,
            max_retries,
            backoff_base_ms,
        })
    }

    /// The underlying client, shared with the image downloader.
    #[must_use]
    pub fn client(&self) -> &Client {
        &self.client
    }

    /// GET `url` and return the response body as text.
    ///
    /// # Errors
    ///
    /// - [`ScrapeError::UnexpectedStatus`] for a non-2xx response (429/5xx
    ///   only after retries are exhausted).
    /// - [`ScrapeError::Http`] for a transport failure after retries.
    pub async fn fetch_page(&self, url: &str) -> Result<String, ScrapeError> {
        let body = retry_with_backoff(self.max_retries, self.backoff_base_ms, || async move {
            let response = self
                .client
                .get(url)
                .header(reqwest::header::ACCEPT, "application/json")
                .header(reqwest::header::CONNECTION, "keep-alive")
                .send()
                .await?;

            let status = response.status();
            if !status.is_success() {
                return Err(ScrapeError::UnexpectedStatus {
                    status: status.as_u16(),
                    url: url.to_owned(),
                });
            }
            Ok(response.text().await?)
        })
        .await?;

        tracing::info!(url, bytes = body.len(), "fetched landing page");
        Ok(body)
    }
}
