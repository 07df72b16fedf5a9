use crate::config::Config;
use crate::error::{AppError, Result};
use crate::models::{
    AnalysisReport, HostingInfo, ResourceCategory, SizeBreakdown, ThirdPartyInfo,
};
use crate::services::{
    footprint, recommend, FetcherService, GreenCheckService, HostingService, ScraperService,
};
use futures::future::join_all;
use std::collections::BTreeSet;
use std::time::Duration;
use tracing::{debug, info};
use url::Url;

/// The report pipeline: fetch, discover, measure, enrich, compute, assemble.
/// Only the document fetch and the empty-body check are fatal; every
/// enrichment call degrades to a default on failure.
pub struct AnalyzerService {
    fetcher: FetcherService,
    scraper: ScraperService,
    hosting: HostingService,
    greencheck: GreenCheckService,
}

impl AnalyzerService {
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.fetch_timeout))
            .user_agent(&config.user_agent)
            .redirect(reqwest::redirect::Policy::limited(10))
            .build()?;

        Ok(Self {
            fetcher: FetcherService::new(client.clone()),
            scraper: ScraperService::new(),
            hosting: HostingService::new(client.clone(), config.ip_api_base.clone()),
            greencheck: GreenCheckService::new(client, config.greencheck_base.clone()),
        })
    }

    pub async fn analyze(&self, url: &Url, monthly_visits: u64) -> Result<AnalysisReport> {
        let html = self.fetcher.fetch_document(url).await?;

        if html.trim().is_empty() {
            return Err(AppError::EmptyPage(url.to_string()));
        }

        let target_host = url
            .host_str()
            .ok_or_else(|| AppError::Internal(format!("URL sans hôte: {}", url)))?;

        let resources = self.scraper.discover_resources(&html, url);

        let mut breakdown = SizeBreakdown::default();
        // The document itself is the baseline, counted under "other".
        breakdown.record(ResourceCategory::Other, html.len() as u64);

        let probes = resources.iter().map(|resource| async move {
            (resource, self.fetcher.probe_size(resource).await)
        });
        let measured = join_all(probes).await;

        let mut third_party_domains = BTreeSet::new();
        let mut third_party_bytes: u64 = 0;

        for (resource, size) in measured {
            breakdown.record(ResourceCategory::from_url(resource), size);

            if let Some(host) = resource.host_str() {
                if host != target_host {
                    third_party_domains.insert(host.to_string());
                    third_party_bytes += size;
                }
            }
        }

        let (mut hosting, is_green) = tokio::join!(
            self.hosting.lookup(target_host),
            self.greencheck.is_green(target_host),
        );
        hosting.is_green = is_green;
        debug!(
            "Hosting for {}: provider={}, country={}, green={}",
            target_host, hosting.provider, hosting.country, hosting.is_green
        );

        let report = assemble_report(
            breakdown,
            hosting,
            third_party_domains,
            third_party_bytes,
            monthly_visits,
        );

        info!(
            "Analyzed {}: {:.2} MB, {:.2} g CO2/visit, {} resources",
            url,
            report.total_data_mb,
            report.co2_grams,
            resources.len()
        );
        Ok(report)
    }
}

fn assemble_report(
    breakdown: SizeBreakdown,
    hosting: HostingInfo,
    third_party_domains: BTreeSet<String>,
    third_party_bytes: u64,
    monthly_visits: u64,
) -> AnalysisReport {
    use crate::models::report::BYTES_PER_MB;

    let estimate = footprint::estimate(breakdown.total_bytes(), &hosting.country, monthly_visits);
    let recommendations = recommend::evaluate(&breakdown, &hosting, third_party_bytes);

    AnalysisReport {
        co2_grams: estimate.co2_grams,
        total_data_mb: estimate.total_data_mb,
        breakdown: breakdown.to_megabytes(),
        hosting,
        recommendations,
        percentile: estimate.percentile,
        annual_co2_kg: estimate.annual_co2_kg,
        water_liters: estimate.water_liters,
        third_party: ThirdPartyInfo {
            weight_mb: third_party_bytes as f64 / BYTES_PER_MB,
            domains: third_party_domains.into_iter().collect(),
        },
    }
}
