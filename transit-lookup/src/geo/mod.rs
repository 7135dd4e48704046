//! Geographic primitives.
//!
//! Coordinates and the walking-distance calculation shown next to every
//! nearby stop and station.

mod coordinate;
mod distance;

pub use coordinate::{Coordinate, InvalidCoordinate};
pub use distance::{Distance, DistanceUnit, distance_between, haversine_meters, haversine_miles};
