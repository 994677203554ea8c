//! Engine configuration types.
//!
//! All rate tables are immutable, explicitly-passed data with documented
//! defaults. One `PricingConfig` instance is used per pricing run and may be
//! overridden per call; nothing here is module-level mutable state.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::risk::RiskTier;

/// Requested service tier for a trip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ServiceTier {
    Standard,
    Executive,
    FullProtection,
}

impl ServiceTier {
    pub fn as_str(&self) -> &'static str {
        match self {
            ServiceTier::Standard => "standard",
            ServiceTier::Executive => "executive",
            ServiceTier::FullProtection => "full-protection",
        }
    }
}

/// Risk premium rates by overall route tier, applied against the base fare.
#[derive(Debug, Clone)]
pub struct RiskPremiumRates {
    pub low: Decimal,
    pub medium: Decimal,
    pub high: Decimal,
}

impl RiskPremiumRates {
    pub fn rate_for(&self, tier: RiskTier) -> Decimal {
        match tier {
            RiskTier::Low => self.low,
            RiskTier::Medium => self.medium,
            RiskTier::High => self.high,
        }
    }
}

/// Fare multipliers by service tier. Standard is the 1.0 baseline.
#[derive(Debug, Clone)]
pub struct ServiceMultipliers {
    pub standard: Decimal,
    pub executive: Decimal,
    pub full_protection: Decimal,
}

impl ServiceMultipliers {
    pub fn multiplier_for(&self, tier: ServiceTier) -> Decimal {
        match tier {
            ServiceTier::Standard => self.standard,
            ServiceTier::Executive => self.executive,
            ServiceTier::FullProtection => self.full_protection,
        }
    }
}

/// Time-of-day fare multipliers. All values are >= 1; at most one applies
/// per trip under the first-match rule ordering in the calculators module.
#[derive(Debug, Clone)]
pub struct TimeMultipliers {
    pub peak: Decimal,
    pub night: Decimal,
    pub weekend: Decimal,
}

/// Loyalty tier keyed on monthly spend. Checked before booking-count tiers.
#[derive(Debug, Clone)]
pub struct SpendDiscountTier {
    pub min_monthly_spend: Decimal,
    pub ratio: Decimal,
}

/// Loyalty tier keyed on lifetime booking count. Fallback only; a qualifying
/// spend tier always takes priority.
#[derive(Debug, Clone)]
pub struct BookingDiscountTier {
    pub min_bookings: u32,
    pub ratio: Decimal,
}

/// Immutable configuration for one pricing run.
#[derive(Debug, Clone)]
pub struct PricingConfig {
    /// Base fare per distance unit (miles).
    pub rate_per_distance_unit: Decimal,
    /// Floor applied to the base fare regardless of distance.
    pub minimum_fare: Decimal,
    pub risk_premium: RiskPremiumRates,
    pub service: ServiceMultipliers,
    pub time: TimeMultipliers,
    /// Fixed surcharge added when the request is flagged as an emergency.
    pub emergency_premium: Decimal,
    /// ISO 4217 currency code reported in quote responses.
    pub currency: String,
    /// Spend tiers ordered highest threshold first; first qualifying wins.
    pub spend_discount_tiers: Vec<SpendDiscountTier>,
    /// Booking-count tiers ordered highest threshold first.
    pub booking_discount_tiers: Vec<BookingDiscountTier>,
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            rate_per_distance_unit: dec!(3.20),
            minimum_fare: dec!(15.00),
            risk_premium: RiskPremiumRates {
                low: dec!(0.10),
                medium: dec!(0.25),
                high: dec!(0.50),
            },
            service: ServiceMultipliers {
                standard: dec!(1.00),
                executive: dec!(1.50),
                full_protection: dec!(2.20),
            },
            time: TimeMultipliers {
                peak: dec!(1.25),
                night: dec!(1.40),
                weekend: dec!(1.15),
            },
            emergency_premium: dec!(50.00),
            currency: "GBP".to_string(),
            spend_discount_tiers: vec![
                SpendDiscountTier {
                    min_monthly_spend: dec!(1000),
                    ratio: dec!(0.15),
                },
                SpendDiscountTier {
                    min_monthly_spend: dec!(500),
                    ratio: dec!(0.10),
                },
                SpendDiscountTier {
                    min_monthly_spend: dec!(250),
                    ratio: dec!(0.05),
                },
            ],
            booking_discount_tiers: vec![
                BookingDiscountTier {
                    min_bookings: 50,
                    ratio: dec!(0.10),
                },
                BookingDiscountTier {
                    min_bookings: 20,
                    ratio: dec!(0.05),
                },
                BookingDiscountTier {
                    min_bookings: 10,
                    ratio: dec!(0.025),
                },
            ],
        }
    }
}
