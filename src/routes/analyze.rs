use axum::extract::rejection::JsonRejection;
use axum::{extract::State, Json};
use std::time::Instant;
use tracing::info;
use url::Url;

use crate::error::AppError;
use crate::models::{AnalysisReport, AnalyzeRequest};
use crate::AppState;

#[axum::debug_handler]
pub async fn analyze_handler(
    State(state): State<AppState>,
    payload: Result<Json<AnalyzeRequest>, JsonRejection>,
) -> Result<Json<AnalysisReport>, AppError> {
    let start = Instant::now();

    // Keep the contract's { "message": ... } body even when the JSON itself
    // is unparseable, instead of axum's plain-text rejection.
    let Json(request) = payload.map_err(|e| AppError::InvalidBody(e.body_text()))?;

    let raw = request
        .url
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .ok_or(AppError::MissingUrl)?;

    let url = validate_url(raw)?;
    info!("Processing analysis request for URL: {}", url);

    let report = state.analyzer.analyze(&url, request.monthly_visits).await?;

    info!(
        "Processed {} in {}ms",
        url,
        start.elapsed().as_millis(),
    );

    Ok(Json(report))
}

/// Route fallback for non-POST verbs, so the contract's 405 body is returned
/// instead of axum's empty default.
pub async fn method_not_allowed_handler() -> AppError {
    AppError::MethodNotAllowed
}

fn validate_url(raw: &str) -> Result<Url, AppError> {
    let url = Url::parse(raw).map_err(|e| AppError::InvalidUrl(e.to_string()))?;

    if !matches!(url.scheme(), "http" | "https") {
        return Err(AppError::InvalidUrl(format!(
            "schéma non supporté: {}",
            url.scheme()
        )));
    }
    if url.host_str().is_none() {
        return Err(AppError::InvalidUrl("hôte manquant".to_string()));
    }

    Ok(url)
}
