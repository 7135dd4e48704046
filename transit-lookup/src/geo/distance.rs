//! Great-circle walking distance.

use std::fmt;

use serde::Serialize;

use super::Coordinate;

/// Mean Earth radius used by the upstream map, in kilometres.
const EARTH_RADIUS_KM: f64 = 6371.0;

const MILES_PER_KM: f64 = 0.621371;

const FEET_PER_MILE: f64 = 5280.0;

/// Distances below this many miles are shown in feet.
const FEET_THRESHOLD_MILES: f64 = 0.1;

/// Unit a [`Distance`] is expressed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DistanceUnit {
    Feet,
    Miles,
}

impl DistanceUnit {
    pub fn as_str(&self) -> &'static str {
        match self {
            DistanceUnit::Feet => "feet",
            DistanceUnit::Miles => "miles",
        }
    }
}

impl fmt::Display for DistanceUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A display-ready distance.
///
/// `magnitude` is already formatted: whole feet, or miles to two decimal
/// places. Callers render it as-is.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Distance {
    pub magnitude: String,
    pub unit: DistanceUnit,
}

impl Distance {
    fn from_miles(miles: f64) -> Self {
        if miles < FEET_THRESHOLD_MILES {
            let feet = (miles * FEET_PER_MILE).round();
            Self {
                magnitude: format!("{feet:.0}"),
                unit: DistanceUnit::Feet,
            }
        } else {
            Self {
                magnitude: format!("{miles:.2}"),
                unit: DistanceUnit::Miles,
            }
        }
    }
}

impl fmt::Display for Distance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.magnitude, self.unit)
    }
}

/// Central angle between two points, in radians.
fn central_angle(a: Coordinate, b: Coordinate) -> f64 {
    let d_lat = (b.lat - a.lat).to_radians();
    let d_lon = (b.lon - a.lon).to_radians();

    let h = (d_lat / 2.0).sin() * (d_lat / 2.0).sin()
        + a.lat.to_radians().cos()
            * b.lat.to_radians().cos()
            * (d_lon / 2.0).sin()
            * (d_lon / 2.0).sin();
    // Rounding near the antipode, or latitudes beyond the poles, can leave h
    // outside [0, 1].
    let h = h.clamp(0.0, 1.0);

    2.0 * h.sqrt().atan2((1.0 - h).sqrt())
}

/// Haversine distance between two points, in statute miles.
///
/// Inputs are not range-checked. Any finite pair gives a finite,
/// non-negative result.
pub fn haversine_miles(a: Coordinate, b: Coordinate) -> f64 {
    EARTH_RADIUS_KM * central_angle(a, b) * MILES_PER_KM
}

/// Haversine distance between two points, in metres.
///
/// Search radii are given in metres, so this is what radius filters use.
pub fn haversine_meters(a: Coordinate, b: Coordinate) -> f64 {
    EARTH_RADIUS_KM * central_angle(a, b) * 1000.0
}

/// Walking distance between two points, formatted for display.
///
/// Under 0.1 miles the result is rounded to whole feet; otherwise it is
/// miles with two decimals.
///
/// # Examples
///
/// ```
/// use transit_lookup::geo::{Coordinate, DistanceUnit, distance_between};
///
/// let a = Coordinate::new(38.8977, -77.0365);
/// let b = Coordinate::new(38.9077, -77.0365);
///
/// let d = distance_between(a, b);
/// assert_eq!(d.unit, DistanceUnit::Miles);
/// assert_eq!(d.to_string(), "0.69 miles");
/// ```
pub fn distance_between(a: Coordinate, b: Coordinate) -> Distance {
    Distance::from_miles(haversine_miles(a, b))
}
