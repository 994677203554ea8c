//! Route security risk assessment.
//!
//! Zone classification against a configured gazetteer plus route-level
//! analysis combining the pickup and destination tiers.

pub mod analyzer;
pub mod gazetteer;

pub use analyzer::{assess_route, RiskFactor, RouteSecurityAnalysis};
pub use gazetteer::{RiskTier, SecurityZoneGazetteer};
