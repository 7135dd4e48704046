//! Search configuration for nearby lookups.

use serde::Deserialize;

use crate::transit::DEFAULT_MAX_STATIONS;

/// Configuration parameters for a nearby lookup.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct LookupConfig {
    /// Bus stop search radius in metres (about half a mile).
    pub bus_radius_m: f64,

    /// Station entrance search radius in metres (about a mile).
    pub metro_radius_m: f64,

    /// Maximum number of station codes to look up per search.
    pub max_stations: usize,
}

impl LookupConfig {
    /// Create a new configuration with the given parameters.
    pub fn new(bus_radius_m: f64, metro_radius_m: f64, max_stations: usize) -> Self {
        Self {
            bus_radius_m,
            metro_radius_m,
            max_stations,
        }
    }
}

impl Default for LookupConfig {
    fn default() -> Self {
        Self {
            bus_radius_m: 800.0,
            metro_radius_m: 1600.0,
            max_stations: DEFAULT_MAX_STATIONS,
        }
    }
}
