use serde::{Deserialize, Serialize};

use crate::models::ResourceCategory;

pub const BYTES_PER_MB: f64 = 1024.0 * 1024.0;

/// Per-category byte totals accumulated while measuring a page. The document
/// itself counts toward `other`, so the grand total is never below the HTML
/// byte size.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SizeBreakdown {
    pub images: u64,
    pub scripts: u64,
    pub css: u64,
    pub other: u64,
}

impl SizeBreakdown {
    pub fn record(&mut self, category: ResourceCategory, bytes: u64) {
        match category {
            ResourceCategory::Image => self.images += bytes,
            ResourceCategory::Script => self.scripts += bytes,
            ResourceCategory::Stylesheet => self.css += bytes,
            ResourceCategory::Other => self.other += bytes,
        }
    }

    pub fn total_bytes(&self) -> u64 {
        self.images + self.scripts + self.css + self.other
    }

    pub fn to_megabytes(&self) -> BreakdownMb {
        BreakdownMb {
            images: self.images as f64 / BYTES_PER_MB,
            scripts: self.scripts as f64 / BYTES_PER_MB,
            css: self.css as f64 / BYTES_PER_MB,
            other: self.other as f64 / BYTES_PER_MB,
        }
    }
}

/// Wire form of the breakdown, in megabytes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BreakdownMb {
    pub images: f64,
    pub scripts: f64,
    pub css: f64,
    pub other: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HostingInfo {
    pub provider: String,
    pub country: String,
    pub is_green: bool,
}

impl Default for HostingInfo {
    fn default() -> Self {
        Self {
            provider: "Inconnu".to_string(),
            country: "Inconnu".to_string(),
            is_green: false,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThirdPartyInfo {
    #[serde(rename = "weightMB")]
    pub weight_mb: f64,
    pub domains: Vec<String>,
}

/// Terminal output of the analysis pipeline. Produced once per request,
/// never persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisReport {
    pub co2_grams: f64,
    #[serde(rename = "totalDataMB")]
    pub total_data_mb: f64,
    pub breakdown: BreakdownMb,
    pub hosting: HostingInfo,
    pub recommendations: Vec<String>,
    pub percentile: u8,
    pub annual_co2_kg: f64,
    pub water_liters: f64,
    pub third_party: ThirdPartyInfo,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}
