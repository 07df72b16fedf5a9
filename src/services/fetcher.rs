use crate::error::{AppError, Result};
use reqwest::header::CONTENT_LENGTH;
use reqwest::Client;
use tracing::{debug, warn};
use url::Url;

/// Outbound HTTP for the pipeline: the document fetch and the per-resource
/// size probes. The client carries the browser User-Agent and the global
/// timeout, so every call here is bounded.
pub struct FetcherService {
    client: Client,
}

impl FetcherService {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Fetches the target document. A redirect loop gets its own error so the
    /// caller can tell "blocked / looping" apart from plain unreachability.
    pub async fn fetch_document(&self, url: &Url) -> Result<String> {
        let response = self.client.get(url.clone()).send().await.map_err(|e| {
            warn!("Failed to fetch {}: {}", url, e);
            if e.is_redirect() {
                AppError::TooManyRedirects(url.to_string())
            } else {
                AppError::FetchFailed(url.to_string())
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            warn!("Fetch of {} returned HTTP {}", url, status);
            return Err(AppError::FetchFailed(url.to_string()));
        }

        response.text().await.map_err(|e| {
            warn!("Failed to read body from {}: {}", url, e);
            AppError::FetchFailed(url.to_string())
        })
    }

    /// Header-only size probe. Any failure (timeout, 4xx/5xx, missing
    /// Content-Length) degrades to zero bytes; a single unmeasurable resource
    /// must never abort the pipeline.
    pub async fn probe_size(&self, url: &Url) -> u64 {
        match self.client.head(url.clone()).send().await {
            Ok(response) if response.status().is_success() => {
                let size = response
                    .headers()
                    .get(CONTENT_LENGTH)
                    .and_then(|v| v.to_str().ok())
                    .and_then(|v| v.parse::<u64>().ok())
                    .unwrap_or(0);
                debug!("Probed {} -> {} bytes", url, size);
                size
            }
            Ok(response) => {
                warn!(
                    "Could not measure resource {} (HTTP {})",
                    url,
                    response.status()
                );
                0
            }
            Err(e) => {
                warn!("Could not measure resource {}: {}", url, e);
                0
            }
        }
    }
}
