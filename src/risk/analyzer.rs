//! Route security analysis.
//!
//! Combines the pickup and destination zone classifications into a single
//! route-level assessment with per-endpoint risk factors and recommended
//! precautions. The analysis is advisory output for the booking flow; only
//! the overall tier feeds back into pricing.

use serde::Serialize;

use super::gazetteer::{RiskTier, SecurityZoneGazetteer};

/// Risk factor for one route endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct RiskFactor {
    /// The location text as supplied by the caller.
    pub area: String,
    /// Deterministic severity score for the classified tier.
    pub score: u8,
    pub tier: RiskTier,
    /// Qualitative incident-count indicator for the tier.
    pub incident_level: &'static str,
}

/// Full security assessment for a pickup/destination pair.
#[derive(Debug, Clone, Serialize)]
pub struct RouteSecurityAnalysis {
    pub overall_risk: RiskTier,
    /// One factor per endpoint: pickup first, destination second.
    pub risk_factors: Vec<RiskFactor>,
    pub recommended_precautions: Vec<String>,
    /// Advisory alternatives for display only; never independently priced.
    pub alternative_routes: Vec<String>,
}

fn incident_level(tier: RiskTier) -> &'static str {
    match tier {
        RiskTier::Low => "rare incident reports",
        RiskTier::Medium => "occasional incident reports",
        RiskTier::High => "elevated incident reports",
    }
}

fn risk_factor(location: &str, tier: RiskTier) -> RiskFactor {
    RiskFactor {
        area: location.to_string(),
        score: tier.severity_score(),
        tier,
        incident_level: incident_level(tier),
    }
}

/// Build the precaution list for an overall tier.
///
/// Strictly additive: the high-risk list is a superset of the medium list,
/// which is a superset of the base list.
fn precautions(overall: RiskTier) -> Vec<String> {
    let mut items = vec![
        "Share live trip status with a trusted contact".to_string(),
        "Verify driver identity and vehicle registration before boarding".to_string(),
    ];
    if overall >= RiskTier::Medium {
        items.push("Keep doors locked at stops and junctions".to_string());
        items.push("Avoid prolonged waits at the kerbside".to_string());
    }
    if overall >= RiskTier::High {
        items.push("Request an advance route check from the operations desk".to_string());
        items.push("Consider upgrading to the executive or full-protection tier".to_string());
        items.push("Schedule a mid-route check-in call".to_string());
    }
    items
}

fn alternative_routes() -> Vec<String> {
    vec![
        "Primary route via main arterial roads".to_string(),
        "Alternative route avoiding higher-risk areas (adds 10-15 minutes)".to_string(),
    ]
}

/// Assess the security risk of a pickup/destination pair.
///
/// Each endpoint is classified independently; the overall risk is the higher
/// of the two tiers under the `Low < Medium < High` ordering.
pub fn assess_route(
    pickup: &str,
    destination: &str,
    gazetteer: &SecurityZoneGazetteer,
) -> RouteSecurityAnalysis {
    let pickup_tier = gazetteer.classify(pickup);
    let destination_tier = gazetteer.classify(destination);
    let overall_risk = pickup_tier.max(destination_tier);

    RouteSecurityAnalysis {
        overall_risk,
        risk_factors: vec![
            risk_factor(pickup, pickup_tier),
            risk_factor(destination, destination_tier),
        ],
        recommended_precautions: precautions(overall_risk),
        alternative_routes: alternative_routes(),
    }
}
