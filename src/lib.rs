//! SecureTransit pricing and route-risk engine.
//!
//! Quotes a price for a proposed point-to-point trip and classifies the
//! route's security risk. The engine itself is synchronous, stateless and
//! side-effect-free; the booking platform calls it over HTTP/JSON with
//! already-resolved inputs (distance, location strings, schedule).

pub mod error;
pub mod pricing;
pub mod risk;

use std::sync::Arc;

use pricing::{PricingConfig, SpecialLocationRegistry};
use risk::SecurityZoneGazetteer;

/// Shared application state for the HTTP service.
///
/// All configuration is immutable after startup; handlers only ever read it,
/// so arbitrarily many quote requests can be served concurrently.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<PricingConfig>,
    pub gazetteer: Arc<SecurityZoneGazetteer>,
    pub registry: Arc<SpecialLocationRegistry>,
}

impl AppState {
    pub fn new(
        config: PricingConfig,
        gazetteer: SecurityZoneGazetteer,
        registry: SpecialLocationRegistry,
    ) -> Self {
        Self {
            config: Arc::new(config),
            gazetteer: Arc::new(gazetteer),
            registry: Arc::new(registry),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(
            PricingConfig::default(),
            SecurityZoneGazetteer::default(),
            SpecialLocationRegistry::default(),
        )
    }
}
