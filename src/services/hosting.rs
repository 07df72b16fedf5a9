use crate::models::HostingInfo;
use reqwest::Client;
use serde::Deserialize;
use tracing::warn;

#[derive(Debug, Deserialize)]
struct IpApiResponse {
    status: String,
    #[serde(default)]
    org: Option<String>,
    #[serde(default)]
    isp: Option<String>,
    #[serde(rename = "countryCode", default)]
    country_code: Option<String>,
}

/// Best-effort hosting provider / country lookup against an ip-api.com style
/// endpoint. Never fails: any problem degrades to the "Inconnu" defaults.
pub struct HostingService {
    client: Client,
    base_url: String,
}

impl HostingService {
    pub fn new(client: Client, base_url: String) -> Self {
        Self { client, base_url }
    }

    pub async fn lookup(&self, hostname: &str) -> HostingInfo {
        match self.try_lookup(hostname).await {
            Ok(info) => info,
            Err(e) => {
                warn!("Hosting lookup failed for {}: {}", hostname, e);
                HostingInfo::default()
            }
        }
    }

    async fn try_lookup(&self, hostname: &str) -> reqwest::Result<HostingInfo> {
        let endpoint = format!("{}/{}", self.base_url.trim_end_matches('/'), hostname);
        let data: IpApiResponse = self.client.get(&endpoint).send().await?.json().await?;

        let mut info = HostingInfo::default();
        if data.status == "success" {
            if let Some(provider) = non_empty(data.org).or_else(|| non_empty(data.isp)) {
                info.provider = provider;
            }
            if let Some(country) = non_empty(data.country_code) {
                info.country = country;
            }
        } else {
            warn!("Hosting lookup for {} returned status {:?}", hostname, data.status);
        }
        Ok(info)
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
