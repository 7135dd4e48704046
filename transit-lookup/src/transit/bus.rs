//! Bus stops, predictions and route paths.

use serde::Serialize;

use crate::geo::Coordinate;

/// A bus stop near the search origin.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BusStop {
    /// Seven-digit regional stop ID.
    pub stop_id: String,
    pub name: String,
    pub coordinate: Coordinate,
    /// Route names serving the stop, including variants (e.g. `"70*1"`).
    pub routes: Vec<String>,
}

impl BusStop {
    /// Route names worth showing on a stop summary.
    ///
    /// Variant suffixes (`*`) and shared-trunk names (`/`) are dropped; the
    /// base route is listed separately by the feed.
    pub fn display_routes(&self) -> impl Iterator<Item = &str> {
        self.routes
            .iter()
            .map(String::as_str)
            .filter(|route| !route.contains('*') && !route.contains('/'))
    }
}

/// One bus due at a stop.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BusPrediction {
    /// `"0"` or `"1"`; selects the route direction in [`BusPath`].
    pub direction_num: String,
    /// Headsign-style description, e.g. `"North to Silver Spring"`.
    pub direction_text: String,
    pub minutes: i32,
    pub route_id: String,
    pub trip_id: String,
    pub vehicle_id: String,
}

/// A single arrival within a [`BusRoutePredictions`] group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoutePrediction {
    pub minutes: i32,
    pub trip_id: String,
    pub vehicle_id: String,
}

/// Arrivals at a stop that share a direction of travel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BusRoutePredictions {
    pub direction_num: String,
    pub direction_text: String,
    pub route_id: String,
    pub predictions: Vec<RoutePrediction>,
}

/// Group a stop's predictions by direction text.
///
/// Groups appear in the order their direction was first seen, and each
/// group's predictions keep feed order (the feed already sorts by minutes).
/// Route and direction number come from the first prediction in the group.
pub fn group_by_direction(predictions: &[BusPrediction]) -> Vec<BusRoutePredictions> {
    let mut groups: Vec<BusRoutePredictions> = Vec::new();

    for prediction in predictions {
        let entry = RoutePrediction {
            minutes: prediction.minutes,
            trip_id: prediction.trip_id.clone(),
            vehicle_id: prediction.vehicle_id.clone(),
        };

        match groups
            .iter_mut()
            .find(|g| g.direction_text == prediction.direction_text)
        {
            Some(group) => group.predictions.push(entry),
            None => groups.push(BusRoutePredictions {
                direction_num: prediction.direction_num.clone(),
                direction_text: prediction.direction_text.clone(),
                route_id: prediction.route_id.clone(),
                predictions: vec![entry],
            }),
        }
    }

    groups
}

/// A vertex of a route's drawn shape.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ShapePoint {
    pub coordinate: Coordinate,
    pub seq_number: u32,
}

/// One direction of a bus route: its stops in order and its map shape.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BusPathDirection {
    pub direction_num: String,
    pub direction_text: String,
    pub trip_headsign: String,
    pub stops: Vec<BusStop>,
    pub shape: Vec<ShapePoint>,
}

impl BusPathDirection {
    /// Position of a stop along this direction, if the route serves it.
    pub fn stop_index(&self, stop_id: &str) -> Option<usize> {
        self.stops.iter().position(|stop| stop.stop_id == stop_id)
    }
}

/// Both directions of a bus route.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BusPath {
    pub name: String,
    pub route_id: String,
    pub direction_0: Option<BusPathDirection>,
    pub direction_1: Option<BusPathDirection>,
}

impl BusPath {
    /// The direction matching a prediction's `direction_num`.
    ///
    /// `"1"` selects direction 1; anything else selects direction 0.
    pub fn direction(&self, direction_num: &str) -> Option<&BusPathDirection> {
        if direction_num == "1" {
            self.direction_1.as_ref()
        } else {
            self.direction_0.as_ref()
        }
    }
}
