//! Pricing route handlers.

use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};
use uuid::Uuid;

use crate::error::Result;
use crate::AppState;

use super::demand::SeededDemand;
use super::requests::QuoteRequest;
use super::responses::{HealthResponse, QuoteResponse};
use super::services;

/// Build the pricing API router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/pricing/quote", post(quote))
        .route("/api/pricing/health", get(health))
}

/// Quote a proposed trip.
async fn quote(
    State(state): State<AppState>,
    Json(request): Json<QuoteRequest>,
) -> Result<Json<QuoteResponse>> {
    let mut signal = match request.demand_seed {
        Some(seed) => SeededDemand::from_seed(seed),
        None => SeededDemand::for_schedule(request.scheduled_at),
    };

    let params = request.into_params();
    let result = services::quote(
        &params,
        &state.config,
        &state.gazetteer,
        &state.registry,
        &mut signal,
    )?;

    tracing::info!(
        pickup = %params.pickup,
        destination = %params.destination,
        tier = params.service_tier.as_str(),
        risk = result.factors.overall_risk.as_str(),
        total = %result.breakdown.total,
        "quote issued"
    );

    Ok(Json(QuoteResponse {
        quote_id: Uuid::new_v4(),
        currency: state.config.currency.clone(),
        breakdown: result.breakdown,
        factors: result.factors,
        analysis: result.analysis,
    }))
}

/// Liveness probe.
async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        service: env!("CARGO_PKG_NAME"),
        version: env!("CARGO_PKG_VERSION"),
        status: "ok",
    })
}
