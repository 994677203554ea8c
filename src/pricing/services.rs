//! Quote orchestration.
//!
//! Composes the base distance fare, route-risk premium, time and demand
//! adjustments, service-level multiplier, special-location and emergency
//! surcharges, and the loyalty discount into one itemized, auditable
//! breakdown. Stateless: every quote is computed fresh from its inputs.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;

use crate::risk::{assess_route, RiskTier, RouteSecurityAnalysis, SecurityZoneGazetteer};

use super::calculators::{
    base_price, loyalty_discount, round_money, time_multiplier, UsageHistory,
};
use super::config::{PricingConfig, ServiceTier};
use super::demand::{estimate_demand, DemandSignal};
use super::locations::SpecialLocationRegistry;

/// Inputs to one pricing run, already resolved by the caller.
#[derive(Debug, Clone)]
pub struct QuoteParams {
    /// Trip distance in the configured distance unit. Must be positive.
    pub distance: Decimal,
    pub pickup: String,
    pub destination: String,
    pub scheduled_at: DateTime<Utc>,
    pub service_tier: ServiceTier,
    pub is_emergency: bool,
    pub usage_history: Option<UsageHistory>,
}

/// Itemized price breakdown. Every line is rounded to 2 decimal places at
/// the point of inclusion; subtotal and total are derived from the included
/// lines so the breakdown identity holds exactly on the wire:
/// `total = base + premiums + adjustments - discount_amount`.
#[derive(Debug, Clone, Serialize)]
pub struct PriceBreakdown {
    #[serde(with = "rust_decimal::serde::str")]
    pub base_price: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub security_premium: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub time_adjustment: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub demand_adjustment: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub service_level_adjustment: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub special_location_premium: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub emergency_premium: Decimal,
    /// Positive magnitude subtracted from the subtotal.
    #[serde(with = "rust_decimal::serde::str")]
    pub discount_amount: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub subtotal: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub total: Decimal,
}

/// The factors behind a quote, reported for auditability.
#[derive(Debug, Clone, Serialize)]
pub struct PricingFactors {
    pub overall_risk: RiskTier,
    #[serde(with = "rust_decimal::serde::str")]
    pub time_multiplier: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub demand_multiplier: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub service_multiplier: Decimal,
    pub is_special_location: bool,
    #[serde(with = "rust_decimal::serde::str")]
    pub discount_ratio: Decimal,
}

/// Result of one pricing run.
#[derive(Debug, Clone, Serialize)]
pub struct QuoteResult {
    pub breakdown: PriceBreakdown,
    pub factors: PricingFactors,
    pub analysis: RouteSecurityAnalysis,
}

/// Pricing validation error types
#[derive(Debug, Clone, thiserror::Error)]
pub enum PricingError {
    #[error("invalid {field}: {reason}")]
    InvalidInput { field: &'static str, reason: String },
}

fn validate(params: &QuoteParams) -> Result<(), PricingError> {
    if params.distance <= Decimal::ZERO {
        return Err(PricingError::InvalidInput {
            field: "distance",
            reason: format!("must be positive, got {}", params.distance),
        });
    }
    if let Some(usage) = &params.usage_history {
        if usage.monthly_spend < Decimal::ZERO {
            return Err(PricingError::InvalidInput {
                field: "usage_history.monthly_spend",
                reason: format!("must be non-negative, got {}", usage.monthly_spend),
            });
        }
    }
    Ok(())
}

/// Compute a quote for a proposed trip.
///
/// Rejects invalid input before computing anything; the caller never
/// receives a partial breakdown. Component order is fixed:
/// base fare -> security premium -> time adjustment -> demand adjustment ->
/// service-level adjustment -> special-location premium -> emergency
/// premium -> subtotal -> discount (against the subtotal) -> total,
/// clamped to >= 0.
pub fn quote(
    params: &QuoteParams,
    config: &PricingConfig,
    gazetteer: &SecurityZoneGazetteer,
    registry: &SpecialLocationRegistry,
    signal: &mut dyn DemandSignal,
) -> Result<QuoteResult, PricingError> {
    validate(params)?;

    // Full-precision base fare; each derived component rounds independently
    // at the point of inclusion.
    let base_raw = base_price(params.distance, config);

    let analysis = assess_route(&params.pickup, &params.destination, gazetteer);
    let premium_rate = config.risk_premium.rate_for(analysis.overall_risk);
    let security_premium = round_money(base_raw * premium_rate, 2);

    let time_mult = time_multiplier(params.scheduled_at, &config.time);
    let time_adjustment = round_money(base_raw * (time_mult - Decimal::ONE), 2);

    // May be negative: an off-peak demand multiplier below 1.0 folds the
    // discount into this adjustment line, not the discount line.
    let demand_mult = estimate_demand(params.scheduled_at, signal);
    let demand_adjustment = round_money(base_raw * (demand_mult - Decimal::ONE), 2);

    let service_mult = config.service.multiplier_for(params.service_tier);
    let service_level_adjustment = round_money(base_raw * (service_mult - Decimal::ONE), 2);

    let special = registry.detect(&params.pickup, &params.destination);
    let special_location_premium = round_money(special.surcharge, 2);

    let emergency_premium = if params.is_emergency {
        round_money(config.emergency_premium, 2)
    } else {
        Decimal::ZERO
    };

    let base = round_money(base_raw, 2);
    let subtotal = base
        + security_premium
        + time_adjustment
        + demand_adjustment
        + service_level_adjustment
        + special_location_premium
        + emergency_premium;

    // Discount applies to the subtotal, never to the base fare alone.
    let discount_ratio = loyalty_discount(params.usage_history.as_ref(), config);
    let discount_amount = round_money(subtotal * discount_ratio, 2);

    let total = (subtotal - discount_amount).max(Decimal::ZERO);

    tracing::debug!(
        pickup = %params.pickup,
        destination = %params.destination,
        risk = analysis.overall_risk.as_str(),
        %total,
        "quote computed"
    );

    Ok(QuoteResult {
        breakdown: PriceBreakdown {
            base_price: base,
            security_premium,
            time_adjustment,
            demand_adjustment,
            service_level_adjustment,
            special_location_premium,
            emergency_premium,
            discount_amount,
            subtotal,
            total,
        },
        factors: PricingFactors {
            overall_risk: analysis.overall_risk,
            time_multiplier: time_mult,
            demand_multiplier: demand_mult,
            service_multiplier: service_mult,
            is_special_location: special.is_match,
            discount_ratio,
        },
        analysis,
    })
}
