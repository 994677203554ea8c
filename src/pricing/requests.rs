//! Request DTOs for pricing API endpoints.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Deserialize;

use super::calculators::UsageHistory;
use super::config::ServiceTier;
use super::services::QuoteParams;

/// Request to quote a proposed trip.
///
/// Distance, duration and the location strings are already resolved by the
/// caller's directions provider; this service performs no geocoding.
#[derive(Debug, Deserialize)]
pub struct QuoteRequest {
    #[serde(with = "rust_decimal::serde::str")]
    pub distance: Decimal,
    pub pickup: String,
    pub destination: String,
    pub scheduled_at: DateTime<Utc>,
    pub service_tier: ServiceTier,
    #[serde(default)]
    pub is_emergency: bool,
    #[serde(default)]
    pub usage_history: Option<UsageHistory>,
    /// Resolved trip duration in minutes. Accepted for the upstream
    /// contract but not used in pricing arithmetic.
    #[serde(default, with = "rust_decimal::serde::str_option")]
    pub duration_minutes: Option<Decimal>,
    /// Explicit demand-signal seed. When absent, the seed is derived from
    /// `scheduled_at` so identical requests produce identical quotes.
    #[serde(default)]
    pub demand_seed: Option<u64>,
}

impl QuoteRequest {
    pub fn into_params(self) -> QuoteParams {
        QuoteParams {
            distance: self.distance,
            pickup: self.pickup,
            destination: self.destination,
            scheduled_at: self.scheduled_at,
            service_tier: self.service_tier,
            is_emergency: self.is_emergency,
            usage_history: self.usage_history,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_minimal_request_deserializes_with_defaults() {
        let json = r#"{
            "distance": "10",
            "pickup": "Mayfair",
            "destination": "Tottenham",
            "scheduled_at": "2025-01-06T11:00:00Z",
            "service_tier": "standard"
        }"#;
        let req: QuoteRequest = serde_json::from_str(json).unwrap();
        assert_eq!(req.distance, dec!(10));
        assert!(!req.is_emergency);
        assert!(req.usage_history.is_none());
        assert!(req.duration_minutes.is_none());
        assert!(req.demand_seed.is_none());
    }

    #[test]
    fn test_unknown_service_tier_is_rejected() {
        let json = r#"{
            "distance": "10",
            "pickup": "Mayfair",
            "destination": "Tottenham",
            "scheduled_at": "2025-01-06T11:00:00Z",
            "service_tier": "platinum"
        }"#;
        assert!(serde_json::from_str::<QuoteRequest>(json).is_err());
    }

    #[test]
    fn test_malformed_timestamp_is_rejected() {
        let json = r#"{
            "distance": "10",
            "pickup": "Mayfair",
            "destination": "Tottenham",
            "scheduled_at": "next tuesday",
            "service_tier": "standard"
        }"#;
        assert!(serde_json::from_str::<QuoteRequest>(json).is_err());
    }

    #[test]
    fn test_full_request_deserializes() {
        let json = r#"{
            "distance": "4.2",
            "pickup": "Heathrow Terminal 5",
            "destination": "Knightsbridge",
            "scheduled_at": "2025-01-04T23:30:00Z",
            "service_tier": "full-protection",
            "is_emergency": true,
            "usage_history": { "total_bookings": 30, "monthly_spend": "1200" },
            "duration_minutes": "55",
            "demand_seed": 42
        }"#;
        let req: QuoteRequest = serde_json::from_str(json).unwrap();
        assert_eq!(req.service_tier, ServiceTier::FullProtection);
        assert!(req.is_emergency);
        assert_eq!(req.usage_history.unwrap().monthly_spend, dec!(1200));
        assert_eq!(req.demand_seed, Some(42));
    }
}
