//! Core pricing calculation functions.
//!
//! Pure functions for pricing math - no I/O, no shared state. Every
//! component of a quote is derived here or in the demand module and
//! composed by the services module.

use chrono::{DateTime, Datelike, Timelike, Utc, Weekday};
use rust_decimal::Decimal;
use rust_decimal::prelude::*;
use serde::{Deserialize, Serialize};

use super::config::{PricingConfig, TimeMultipliers};

/// Round to specified decimal places using banker's rounding (ROUND_HALF_EVEN).
///
/// Banker's rounding rounds to the nearest even number when the value is exactly
/// halfway between two possibilities. This reduces cumulative rounding bias.
///
/// # Examples
/// ```
/// use rust_decimal_macros::dec;
/// use securetransit_pricing::pricing::round_money;
///
/// assert_eq!(round_money(dec!(2.5), 0), dec!(2));   // rounds to even
/// assert_eq!(round_money(dec!(3.5), 0), dec!(4));   // rounds to even
/// assert_eq!(round_money(dec!(1.234), 2), dec!(1.23));
/// ```
pub fn round_money(amount: Decimal, places: u32) -> Decimal {
    amount.round_dp_with_strategy(places, RoundingStrategy::MidpointNearestEven)
}

/// Rider usage history supplied by the booking platform.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UsageHistory {
    pub total_bookings: u32,
    #[serde(with = "rust_decimal::serde::str")]
    pub monthly_spend: Decimal,
}

/// Base distance fare with the minimum-fare floor applied.
pub fn base_price(distance: Decimal, config: &PricingConfig) -> Decimal {
    (distance * config.rate_per_distance_unit).max(config.minimum_fare)
}

/// Time-of-day fare multiplier for a scheduled trip.
///
/// Rules are evaluated in priority order and the first match wins, so peak,
/// night and weekend multipliers never combine for a single trip:
/// 1. Weekday with local hour in [7,9] or [17,19] -> peak
/// 2. Local hour >= 22 or < 6 -> night (checked before weekend, so a late
///    Saturday trip is night-rated rather than weekend-rated)
/// 3. Saturday or Sunday -> weekend
/// 4. Otherwise -> 1.0
pub fn time_multiplier(scheduled_at: DateTime<Utc>, table: &TimeMultipliers) -> Decimal {
    let hour = scheduled_at.hour();
    let is_weekend = matches!(scheduled_at.weekday(), Weekday::Sat | Weekday::Sun);

    if !is_weekend && ((7..=9).contains(&hour) || (17..=19).contains(&hour)) {
        return table.peak;
    }
    if hour >= 22 || hour < 6 {
        return table.night;
    }
    if is_weekend {
        return table.weekend;
    }
    Decimal::ONE
}

/// Loyalty discount ratio in [0, 1) from the rider's usage history.
///
/// Monthly-spend tiers are checked first; booking-count tiers apply only
/// when no spend tier qualifies. Tiers are mutually exclusive: the single
/// highest-priority match applies, discounts never compound.
pub fn loyalty_discount(usage: Option<&UsageHistory>, config: &PricingConfig) -> Decimal {
    let Some(usage) = usage else {
        return Decimal::ZERO;
    };

    for tier in &config.spend_discount_tiers {
        if usage.monthly_spend >= tier.min_monthly_spend {
            return tier.ratio;
        }
    }
    for tier in &config.booking_discount_tiers {
        if usage.total_bookings >= tier.min_bookings {
            return tier.ratio;
        }
    }
    Decimal::ZERO
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use rust_decimal_macros::dec;

    fn at(y: i32, mo: u32, d: u32, h: u32, mi: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, mo, d, h, mi, 0).unwrap()
    }

    // ==================== round_money tests ====================

    #[test]
    fn test_round_money_bankers_rounding_to_even() {
        assert_eq!(round_money(dec!(2.5), 0), dec!(2)); // rounds down to even
        assert_eq!(round_money(dec!(3.5), 0), dec!(4)); // rounds up to even
        assert_eq!(round_money(dec!(4.5), 0), dec!(4)); // rounds down to even
    }

    #[test]
    fn test_round_money_normal_rounding() {
        assert_eq!(round_money(dec!(1.234), 2), dec!(1.23));
        assert_eq!(round_money(dec!(1.236), 2), dec!(1.24));
    }

    // ==================== base_price tests ====================

    #[test]
    fn test_base_price_distance_rate() {
        let config = PricingConfig::default();
        assert_eq!(base_price(dec!(10), &config), dec!(32.00));
    }

    #[test]
    fn test_base_price_minimum_fare_floor() {
        let config = PricingConfig::default();
        // 0.5 * 3.20 = 1.60, well under the 15.00 floor.
        assert_eq!(base_price(dec!(0.5), &config), dec!(15.00));
    }

    // ==================== time_multiplier tests ====================

    #[test]
    fn test_weekday_morning_peak() {
        let table = PricingConfig::default().time;
        // 2025-01-06 is a Monday.
        assert_eq!(time_multiplier(at(2025, 1, 6, 8, 0), &table), table.peak);
        assert_eq!(time_multiplier(at(2025, 1, 6, 7, 0), &table), table.peak);
        assert_eq!(time_multiplier(at(2025, 1, 6, 9, 59), &table), table.peak);
    }

    #[test]
    fn test_weekday_evening_peak() {
        let table = PricingConfig::default().time;
        assert_eq!(time_multiplier(at(2025, 1, 6, 17, 30), &table), table.peak);
        assert_eq!(time_multiplier(at(2025, 1, 6, 19, 0), &table), table.peak);
    }

    #[test]
    fn test_night_window() {
        let table = PricingConfig::default().time;
        assert_eq!(time_multiplier(at(2025, 1, 6, 22, 0), &table), table.night);
        assert_eq!(time_multiplier(at(2025, 1, 6, 23, 30), &table), table.night);
        assert_eq!(time_multiplier(at(2025, 1, 7, 3, 0), &table), table.night);
        assert_eq!(time_multiplier(at(2025, 1, 7, 5, 59), &table), table.night);
    }

    #[test]
    fn test_night_takes_priority_over_weekend() {
        let table = PricingConfig::default().time;
        // 2025-01-04 is a Saturday; 23:30 falls in the night window.
        assert_eq!(time_multiplier(at(2025, 1, 4, 23, 30), &table), table.night);
    }

    #[test]
    fn test_weekend_daytime() {
        let table = PricingConfig::default().time;
        // Saturday midday: not peak (weekends have no peak), not night.
        assert_eq!(
            time_multiplier(at(2025, 1, 4, 12, 0), &table),
            table.weekend
        );
        // Weekend hours that would be weekday peak are still weekend-rated.
        assert_eq!(time_multiplier(at(2025, 1, 4, 8, 0), &table), table.weekend);
    }

    #[test]
    fn test_off_peak_weekday_is_unadjusted() {
        let table = PricingConfig::default().time;
        assert_eq!(time_multiplier(at(2025, 1, 6, 11, 0), &table), Decimal::ONE);
        assert_eq!(time_multiplier(at(2025, 1, 6, 14, 0), &table), Decimal::ONE);
        assert_eq!(time_multiplier(at(2025, 1, 6, 21, 0), &table), Decimal::ONE);
    }

    // ==================== loyalty_discount tests ====================

    #[test]
    fn test_no_usage_history_means_no_discount() {
        let config = PricingConfig::default();
        assert_eq!(loyalty_discount(None, &config), Decimal::ZERO);
    }

    #[test]
    fn test_spend_tier_highest_qualifying_wins() {
        let config = PricingConfig::default();
        let usage = UsageHistory {
            total_bookings: 0,
            monthly_spend: dec!(1200),
        };
        assert_eq!(loyalty_discount(Some(&usage), &config), dec!(0.15));

        let usage = UsageHistory {
            total_bookings: 0,
            monthly_spend: dec!(600),
        };
        assert_eq!(loyalty_discount(Some(&usage), &config), dec!(0.10));
    }

    #[test]
    fn test_spend_tier_takes_priority_over_booking_tier() {
        let config = PricingConfig::default();
        // Bookings alone would give 0.10; spend qualifies for 0.15 and wins.
        let usage = UsageHistory {
            total_bookings: 75,
            monthly_spend: dec!(1200),
        };
        assert_eq!(loyalty_discount(Some(&usage), &config), dec!(0.15));
    }

    #[test]
    fn test_booking_tier_fallback() {
        let config = PricingConfig::default();
        let usage = UsageHistory {
            total_bookings: 25,
            monthly_spend: dec!(50),
        };
        assert_eq!(loyalty_discount(Some(&usage), &config), dec!(0.05));
    }

    #[test]
    fn test_no_tier_qualifies() {
        let config = PricingConfig::default();
        let usage = UsageHistory {
            total_bookings: 2,
            monthly_spend: dec!(40),
        };
        assert_eq!(loyalty_discount(Some(&usage), &config), Decimal::ZERO);
    }
}
