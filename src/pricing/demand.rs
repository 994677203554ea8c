//! Demand estimation.
//!
//! Produces a continuously varying demand multiplier from the scheduled
//! timestamp, on an axis independent from the fixed time-of-day premium.
//! The hour/day of the trip selects a band; the signal source picks a point
//! inside it. All variation flows through the injectable [`DemandSignal`]
//! so that concurrent pricing runs are independent and reproducible.

use chrono::{DateTime, Datelike, Timelike, Utc, Weekday};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rust_decimal::Decimal;

/// Source of intra-band demand variation.
///
/// Samples a multiplier in whole basis points (10000 = 1.0) within the
/// inclusive band, keeping results exact decimals. Implementations may be
/// seeded generators or a live telemetry feed; ambient process-wide
/// randomness is deliberately not an option.
pub trait DemandSignal {
    fn sample(&mut self, lo_bp: i64, hi_bp: i64) -> i64;
}

/// Seeded pseudo-random demand signal.
///
/// Identical seeds produce identical multiplier sequences, so quotes are
/// byte-reproducible for testing and audit replay.
pub struct SeededDemand {
    rng: ChaCha8Rng,
}

impl SeededDemand {
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Signal seeded from the trip's scheduled timestamp, so repeated quotes
    /// for the same schedule agree without the caller managing seeds.
    pub fn for_schedule(scheduled_at: DateTime<Utc>) -> Self {
        Self::from_seed(scheduled_at.timestamp() as u64)
    }
}

impl DemandSignal for SeededDemand {
    fn sample(&mut self, lo_bp: i64, hi_bp: i64) -> i64 {
        self.rng.gen_range(lo_bp..=hi_bp)
    }
}

/// Fixed demand signal for tests: clamps its pinned value into the band.
pub struct FixedDemand(pub i64);

impl DemandSignal for FixedDemand {
    fn sample(&mut self, lo_bp: i64, hi_bp: i64) -> i64 {
        self.0.clamp(lo_bp, hi_bp)
    }
}

/// Inclusive demand band in basis points for a scheduled timestamp.
///
/// Band shape follows observed ride demand: commuter rush and Friday or
/// Saturday nightlife hours run hot, business hours run moderate, everything
/// else is off-peak and may dip below 1.0.
pub fn demand_band(scheduled_at: DateTime<Utc>) -> (i64, i64) {
    let hour = scheduled_at.hour();
    let weekday = scheduled_at.weekday();
    let is_weekend = matches!(weekday, Weekday::Sat | Weekday::Sun);

    let commuter_rush = !is_weekend && ((7..=9).contains(&hour) || (17..=19).contains(&hour));
    let nightlife = (matches!(weekday, Weekday::Fri | Weekday::Sat) && hour >= 20)
        || (matches!(weekday, Weekday::Sat | Weekday::Sun) && hour < 3);
    let business_hours = !is_weekend && (9..17).contains(&hour);

    if commuter_rush {
        (14_000, 18_000)
    } else if nightlife {
        (15_000, 20_000)
    } else if business_hours {
        (10_000, 13_000)
    } else {
        (8_000, 10_000)
    }
}

/// Demand multiplier for a scheduled trip, sampled from the signal within
/// the band for that hour/day.
pub fn estimate_demand(scheduled_at: DateTime<Utc>, signal: &mut dyn DemandSignal) -> Decimal {
    let (lo, hi) = demand_band(scheduled_at);
    let bp = signal.sample(lo, hi);
    Decimal::new(bp, 4)
}
