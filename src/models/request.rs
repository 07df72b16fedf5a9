use serde::{Deserialize, Serialize};

pub const DEFAULT_MONTHLY_VISITS: u64 = 10_000;

/// Body of `POST /api/analyze`. `url` stays optional at the serde level so a
/// missing field surfaces as the contract's 400 rather than a deserialization
/// rejection.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeRequest {
    pub url: Option<String>,

    #[serde(default = "default_monthly_visits")]
    pub monthly_visits: u64,
}

fn default_monthly_visits() -> u64 {
    DEFAULT_MONTHLY_VISITS
}
