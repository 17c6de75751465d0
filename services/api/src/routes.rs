use crate::infra::AppState;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::{Extension, Json};
use growth_ops::config::PricingConfig;
use growth_ops::error::AppError;
use growth_ops::leads::{
    outreach_message, parse_lead_input, whatsapp_link, LeadRecord, ReferenceLists,
};
use growth_ops::markets::{
    apply_exclusions, builtin_markets, market_sizing, score_markets, visible_households,
    MarketScorecard, MarketSizing, ScoringWeights, SortDirection, SortKey,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::collections::HashSet;

pub(crate) fn router() -> axum::Router {
    axum::Router::new()
        .route("/health", axum::routing::get(healthcheck))
        .route("/ready", axum::routing::get(readiness_endpoint))
        .route("/metrics", axum::routing::get(metrics_endpoint))
        .route(
            "/api/v1/markets/rankings",
            axum::routing::post(market_rankings_endpoint),
        )
        .route(
            "/api/v1/leads/parse",
            axum::routing::post(lead_parse_endpoint),
        )
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

#[derive(Debug, Deserialize)]
pub(crate) struct MarketRankingsRequest {
    #[serde(default)]
    pub(crate) weights: ScoringWeights,
    #[serde(default = "default_sort_key")]
    pub(crate) sort_by: SortKey,
    /// Omitted means the column's own default direction.
    #[serde(default)]
    pub(crate) sort_direction: Option<SortDirection>,
    #[serde(default)]
    pub(crate) excluded_ids: Vec<String>,
}

fn default_sort_key() -> SortKey {
    SortKey::FinalScore
}

#[derive(Debug, Serialize)]
pub(crate) struct MarketRankingsResponse {
    pub(crate) markets: Vec<MarketScorecard>,
    pub(crate) visible_households: f64,
    pub(crate) sizing: MarketSizing,
}

pub(crate) async fn market_rankings_endpoint(
    Extension(pricing): Extension<PricingConfig>,
    Json(payload): Json<MarketRankingsRequest>,
) -> Result<Json<MarketRankingsResponse>, AppError> {
    let MarketRankingsRequest {
        weights,
        sort_by,
        sort_direction,
        excluded_ids,
    } = payload;

    let direction = sort_direction.unwrap_or_else(|| sort_by.default_direction());
    let scored = score_markets(&builtin_markets(), &weights, sort_by, direction);

    let excluded: HashSet<String> = excluded_ids.into_iter().collect();
    let visible = apply_exclusions(&scored, &excluded);

    let households = visible_households(&visible);
    let sizing = market_sizing(households, &pricing);

    Ok(Json(MarketRankingsResponse {
        markets: visible,
        visible_households: households,
        sizing,
    }))
}

#[derive(Debug, Deserialize)]
pub(crate) struct LeadParseRequest {
    pub(crate) text: String,
}

#[derive(Debug, Serialize)]
pub(crate) struct LeadCard {
    #[serde(flatten)]
    pub(crate) record: LeadRecord,
    pub(crate) message: String,
    pub(crate) whatsapp_link: String,
}

#[derive(Debug, Serialize)]
pub(crate) struct SkippedRow {
    pub(crate) row: usize,
    pub(crate) reason: String,
}

#[derive(Debug, Serialize)]
pub(crate) struct LeadParseResponse {
    pub(crate) leads: Vec<LeadCard>,
    pub(crate) skipped: Vec<SkippedRow>,
}

pub(crate) async fn lead_parse_endpoint(
    Json(payload): Json<LeadParseRequest>,
) -> Result<Json<LeadParseResponse>, AppError> {
    let lists = ReferenceLists::standard();
    let batch = parse_lead_input(&payload.text, &lists)?;

    let leads = batch
        .records
        .into_iter()
        .map(|record| {
            let message = outreach_message(&record);
            let whatsapp_link = whatsapp_link(&record);
            LeadCard {
                record,
                message,
                whatsapp_link,
            }
        })
        .collect();

    let skipped = batch
        .failures
        .into_iter()
        .map(|failure| SkippedRow {
            row: failure.row,
            reason: failure.reason.to_string(),
        })
        .collect();

    Ok(Json(LeadParseResponse { leads, skipped }))
}
