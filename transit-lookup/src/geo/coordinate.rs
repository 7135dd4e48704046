//! Latitude/longitude pairs.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Error returned by [`Coordinate::try_new`] for values outside the globe.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("invalid coordinate ({lat}, {lon}): {reason}")]
pub struct InvalidCoordinate {
    lat: f64,
    lon: f64,
    reason: &'static str,
}

/// A point on the Earth's surface in decimal degrees.
///
/// `Coordinate::new` does not check ranges: distance calculations accept any
/// finite values and the upstream feed is trusted to send sensible ones. Use
/// [`Coordinate::try_new`] when the input comes from a user.
///
/// # Examples
///
/// ```
/// use transit_lookup::geo::Coordinate;
///
/// let white_house = Coordinate::new(38.8977, -77.0365);
/// assert_eq!(white_house.lat, 38.8977);
///
/// assert!(Coordinate::try_new(91.0, 0.0).is_err());
/// assert!(Coordinate::try_new(0.0, f64::NAN).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub lat: f64,
    pub lon: f64,
}

impl Coordinate {
    /// Create a coordinate without range checks.
    pub const fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Create a coordinate, rejecting non-finite or out-of-range values.
    pub fn try_new(lat: f64, lon: f64) -> Result<Self, InvalidCoordinate> {
        let err = |reason| InvalidCoordinate { lat, lon, reason };

        if !lat.is_finite() || !lon.is_finite() {
            return Err(err("must be finite"));
        }
        if !(-90.0..=90.0).contains(&lat) {
            return Err(err("latitude must be within [-90, 90]"));
        }
        if !(-180.0..=180.0).contains(&lon) {
            return Err(err("longitude must be within [-180, 180]"));
        }

        Ok(Self { lat, lon })
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}", self.lat, self.lon)
    }
}
