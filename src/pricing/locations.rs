//! Special-location detection.
//!
//! Premium locations (airports and major terminals) carry a fixed surcharge
//! distinct from risk-based premiums. Detection is substring matching over a
//! configured registry, with a generic fallback for unregistered locations
//! of the same class.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Serialize;

/// One registered premium location with its alias codes and surcharge.
#[derive(Debug, Clone)]
pub struct SpecialLocation {
    pub name: String,
    /// Short codes that also identify this location (e.g. IATA codes).
    pub aliases: Vec<String>,
    pub surcharge: Decimal,
}

/// Registry of premium locations plus the generic-class fallback.
#[derive(Debug, Clone)]
pub struct SpecialLocationRegistry {
    entries: Vec<SpecialLocation>,
    /// Generic token marking the location class (e.g. "airport").
    generic_token: String,
    /// Surcharge applied when only the generic token matches.
    default_surcharge: Decimal,
}

/// Outcome of special-location detection for a pickup/destination pair.
#[derive(Debug, Clone, Serialize)]
pub struct SpecialLocationMatch {
    pub is_match: bool,
    pub matched_name: Option<String>,
    #[serde(with = "rust_decimal::serde::str")]
    pub surcharge: Decimal,
}

impl SpecialLocationMatch {
    fn none() -> Self {
        Self {
            is_match: false,
            matched_name: None,
            surcharge: Decimal::ZERO,
        }
    }
}

impl SpecialLocationRegistry {
    pub fn new(
        entries: Vec<SpecialLocation>,
        generic_token: impl Into<String>,
        default_surcharge: Decimal,
    ) -> Self {
        Self {
            entries,
            generic_token: generic_token.into().to_lowercase(),
            default_surcharge,
        }
    }

    /// Check a pickup/destination pair against the registry.
    ///
    /// A named entry (name or alias, case-insensitive) in either location
    /// wins over the generic token; the generic token wins over no match.
    /// Entries are checked in registry order.
    pub fn detect(&self, pickup: &str, destination: &str) -> SpecialLocationMatch {
        let pickup = pickup.trim().to_lowercase();
        let destination = destination.trim().to_lowercase();

        for entry in &self.entries {
            if entry_matches(entry, &pickup) || entry_matches(entry, &destination) {
                return SpecialLocationMatch {
                    is_match: true,
                    matched_name: Some(entry.name.clone()),
                    surcharge: entry.surcharge,
                };
            }
        }

        if pickup.contains(&self.generic_token) || destination.contains(&self.generic_token) {
            return SpecialLocationMatch {
                is_match: true,
                matched_name: None,
                surcharge: self.default_surcharge,
            };
        }

        SpecialLocationMatch::none()
    }
}

fn entry_matches(entry: &SpecialLocation, location: &str) -> bool {
    if location.contains(&entry.name.to_lowercase()) {
        return true;
    }
    entry
        .aliases
        .iter()
        .any(|alias| location.contains(&alias.to_lowercase()))
}

impl Default for SpecialLocationRegistry {
    /// Default registry covering the London airports and Eurostar terminal.
    fn default() -> Self {
        let entry = |name: &str, aliases: &[&str], surcharge: Decimal| SpecialLocation {
            name: name.to_string(),
            aliases: aliases.iter().map(|a| a.to_string()).collect(),
            surcharge,
        };
        Self::new(
            vec![
                entry("heathrow", &["lhr"], dec!(25.00)),
                entry("gatwick", &["lgw"], dec!(20.00)),
                entry("stansted", &["stn"], dec!(18.00)),
                entry("luton", &["ltn"], dec!(18.00)),
                entry("london city airport", &["lcy"], dec!(15.00)),
                entry("st pancras", &["kings cross", "eurostar"], dec!(12.00)),
            ],
            "airport",
            dec!(15.00),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_named_location_match() {
        let registry = SpecialLocationRegistry::default();
        let result = registry.detect("Heathrow Terminal 5", "Mayfair");
        assert!(result.is_match);
        assert_eq!(result.matched_name.as_deref(), Some("heathrow"));
        assert_eq!(result.surcharge, dec!(25.00));
    }

    #[test]
    fn test_alias_code_match() {
        let registry = SpecialLocationRegistry::default();
        let result = registry.detect("Chelsea", "LGW drop-off zone");
        assert!(result.is_match);
        assert_eq!(result.matched_name.as_deref(), Some("gatwick"));
        assert_eq!(result.surcharge, dec!(20.00));
    }

    #[test]
    fn test_named_match_wins_over_generic_token() {
        let registry = SpecialLocationRegistry::default();
        // "london city airport" contains the generic token as well; the
        // named entry must win with its specific surcharge.
        let result = registry.detect("London City Airport", "Camden");
        assert!(result.is_match);
        assert_eq!(result.matched_name.as_deref(), Some("london city airport"));
        assert_eq!(result.surcharge, dec!(15.00));
    }

    #[test]
    fn test_generic_token_fallback() {
        let registry = SpecialLocationRegistry::default();
        let result = registry.detect("Biggin Hill Airport", "Westminster");
        assert!(result.is_match);
        assert_eq!(result.matched_name, None);
        assert_eq!(result.surcharge, dec!(15.00));
    }

    #[test]
    fn test_no_match() {
        let registry = SpecialLocationRegistry::default();
        let result = registry.detect("Mayfair", "Camden");
        assert!(!result.is_match);
        assert_eq!(result.matched_name, None);
        assert_eq!(result.surcharge, Decimal::ZERO);
    }

    #[test]
    fn test_destination_checked_as_well_as_pickup() {
        let registry = SpecialLocationRegistry::default();
        let from_pickup = registry.detect("heathrow", "Camden");
        let from_destination = registry.detect("Camden", "heathrow");
        assert_eq!(from_pickup.surcharge, from_destination.surcharge);
        assert!(from_pickup.is_match && from_destination.is_match);
    }
}
