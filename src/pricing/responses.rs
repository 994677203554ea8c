//! Response DTOs for pricing API endpoints.

use serde::Serialize;
use uuid::Uuid;

use crate::risk::RouteSecurityAnalysis;

use super::services::{PriceBreakdown, PricingFactors};

/// Response for a computed quote.
#[derive(Debug, Serialize)]
pub struct QuoteResponse {
    pub quote_id: Uuid,
    pub currency: String,
    pub breakdown: PriceBreakdown,
    pub factors: PricingFactors,
    pub analysis: RouteSecurityAnalysis,
}

/// Liveness probe response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub service: &'static str,
    pub version: &'static str,
    pub status: &'static str,
}

/// Generic pricing error response
#[derive(Debug, Serialize)]
pub struct PricingErrorResponse {
    pub error_type: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}
