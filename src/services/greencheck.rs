use reqwest::Client;
use serde::Deserialize;
use tracing::warn;

#[derive(Debug, Deserialize)]
struct GreenCheckResponse {
    green: bool,
}

/// Green Web Foundation registry lookup. Best-effort: any failure means the
/// host is simply not confirmed green.
pub struct GreenCheckService {
    client: Client,
    base_url: String,
}

impl GreenCheckService {
    pub fn new(client: Client, base_url: String) -> Self {
        Self { client, base_url }
    }

    pub async fn is_green(&self, hostname: &str) -> bool {
        match self.try_check(hostname).await {
            Ok(green) => green,
            Err(e) => {
                warn!("Green hosting lookup failed for {}: {}", hostname, e);
                false
            }
        }
    }

    async fn try_check(&self, hostname: &str) -> reqwest::Result<bool> {
        let endpoint = format!("{}/{}", self.base_url.trim_end_matches('/'), hostname);
        let data: GreenCheckResponse = self.client.get(&endpoint).send().await?.json().await?;
        Ok(data.green)
    }
}
