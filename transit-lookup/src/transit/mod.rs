//! Transit domain types.
//!
//! Validated, normalized forms of the bus and metro records published by the
//! transit authority. Conversion from the upstream wire format lives in
//! [`crate::wmata`]; everything here is independent of it.

mod bus;
mod line;
mod metro;
mod station;

pub use bus::{
    BusPath, BusPathDirection, BusPrediction, BusRoutePredictions, BusStop, RoutePrediction,
    ShapePoint, group_by_direction,
};
pub use line::{LineCode, LineColor, line_color};
pub use metro::{
    Address, DEFAULT_MAX_STATIONS, MetroStation, StationEntrance, StationGroup, group_stations,
    unique_station_codes,
};
pub use station::{InvalidStationCode, StationCode};
