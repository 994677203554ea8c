//! Security zone classification.
//!
//! Maps free-text location names to a risk tier using a configured gazetteer
//! of named areas. Classification is a pure function of the normalized input
//! text; unknown areas degrade to the medium default instead of failing.

use serde::{Deserialize, Serialize};

/// Risk tier for a location or an overall route.
///
/// Ordering is by severity: `Low < Medium < High`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskTier {
    Low,
    Medium,
    High,
}

impl RiskTier {
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskTier::Low => "low",
            RiskTier::Medium => "medium",
            RiskTier::High => "high",
        }
    }

    /// Deterministic severity score reported alongside each risk factor.
    ///
    /// Presentation aid only; pricing arithmetic never reads this value.
    pub fn severity_score(&self) -> u8 {
        match self {
            RiskTier::Low => 35,
            RiskTier::Medium => 65,
            RiskTier::High => 85,
        }
    }
}

/// Gazetteer of named areas grouped by risk tier.
///
/// Matching is case-insensitive substring containment against the stored
/// area names, which are normalized to lowercase at construction time.
#[derive(Debug, Clone)]
pub struct SecurityZoneGazetteer {
    high: Vec<String>,
    medium: Vec<String>,
    low: Vec<String>,
}

impl SecurityZoneGazetteer {
    pub fn new(
        high: Vec<String>,
        medium: Vec<String>,
        low: Vec<String>,
    ) -> Self {
        let normalize = |areas: Vec<String>| -> Vec<String> {
            areas
                .into_iter()
                .map(|a| a.trim().to_lowercase())
                .filter(|a| !a.is_empty())
                .collect()
        };
        Self {
            high: normalize(high),
            medium: normalize(medium),
            low: normalize(low),
        }
    }

    /// Classify a location string into a risk tier.
    ///
    /// The high-risk set is tested first, then medium, then low; the first
    /// match wins, so precedence is unambiguous when a name could match more
    /// than one set through substring overlap. Unmatched locations default
    /// to medium risk.
    pub fn classify(&self, location: &str) -> RiskTier {
        let normalized = location.trim().to_lowercase();

        if self.high.iter().any(|area| normalized.contains(area.as_str())) {
            return RiskTier::High;
        }
        if self.medium.iter().any(|area| normalized.contains(area.as_str())) {
            return RiskTier::Medium;
        }
        if self.low.iter().any(|area| normalized.contains(area.as_str())) {
            return RiskTier::Low;
        }

        // Soft signal for gazetteer maintenance; never blocks pricing.
        tracing::debug!(location = %location, "location not in gazetteer, defaulting to medium risk");
        RiskTier::Medium
    }
}

impl Default for SecurityZoneGazetteer {
    /// Default London-area gazetteer used when no override is supplied.
    fn default() -> Self {
        let high = [
            "tottenham",
            "hackney",
            "peckham",
            "brixton",
            "croydon",
            "edmonton",
            "harlesden",
            "walthamstow",
        ];
        let medium = [
            "camden",
            "islington",
            "shoreditch",
            "stratford",
            "lewisham",
            "greenwich",
            "wembley",
            "ealing",
        ];
        let low = [
            "mayfair",
            "kensington",
            "chelsea",
            "belgravia",
            "knightsbridge",
            "marylebone",
            "richmond",
            "hampstead",
            "canary wharf",
        ];
        Self::new(
            high.iter().map(|s| s.to_string()).collect(),
            medium.iter().map(|s| s.to_string()).collect(),
            low.iter().map(|s| s.to_string()).collect(),
        )
    }
}
