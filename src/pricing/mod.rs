//! Pricing engine module.
//!
//! Deterministic fare computation for point-to-point security transport:
//! base distance fare, route-risk premium, time and demand adjustments,
//! service-level multipliers, special-location surcharges and loyalty
//! discounts, itemized into an auditable breakdown. The engine is a pure
//! function library; the routes module exposes it over HTTP/JSON.

pub mod calculators;
pub mod config;
pub mod demand;
pub mod locations;
pub mod requests;
pub mod responses;
pub mod routes;
pub mod services;

// Re-export commonly used items
pub use calculators::{round_money, UsageHistory};
pub use config::{PricingConfig, ServiceTier};
pub use demand::{DemandSignal, SeededDemand};
pub use locations::{SpecialLocationMatch, SpecialLocationRegistry};
pub use routes::router;
pub use services::{quote, PriceBreakdown, PricingError, PricingFactors, QuoteParams, QuoteResult};
