//! Nearby stops, stations and their arrival boards.

use serde::Serialize;
use tracing::{debug, warn};

use crate::geo::{Coordinate, Distance, distance_between};
use crate::predictions::{ArrivalPrediction, rank};
use crate::transit::{
    BusPath, BusRoutePredictions, BusStop, StationGroup, group_by_direction, group_stations,
    unique_station_codes,
};
use crate::wmata::{TransitSource, WmataError};

use super::LookupConfig;

/// A bus stop with its walking distance from the origin.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NearbyStop {
    pub stop: BusStop,
    pub distance: Distance,
}

/// A station (or co-located pair) with its walking distance from the origin.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NearbyStation {
    pub group: StationGroup,
    /// Lines across both platform levels.
    pub lines: Vec<String>,
    /// Distance to the primary platform.
    pub distance: Distance,
}

/// Looks up nearby transit through a [`TransitSource`].
pub struct NearbyLookup<S> {
    source: S,
    config: LookupConfig,
}

impl<S: TransitSource> NearbyLookup<S> {
    pub fn new(source: S, config: LookupConfig) -> Self {
        Self { source, config }
    }

    /// Bus stops within the bus radius, in source order.
    pub fn nearby_bus_stops(&self, origin: Coordinate) -> Result<Vec<NearbyStop>, WmataError> {
        let stops = self.source.bus_stops(origin, self.config.bus_radius_m)?;

        Ok(stops
            .into_iter()
            .map(|stop| NearbyStop {
                distance: distance_between(origin, stop.coordinate),
                stop,
            })
            .collect())
    }

    /// Stations reachable from entrances within the metro radius.
    ///
    /// At most `max_stations` codes are looked up. Stations that fail to
    /// load are logged and left out; co-located platforms are merged.
    pub fn nearby_stations(&self, origin: Coordinate) -> Result<Vec<NearbyStation>, WmataError> {
        let entrances = self
            .source
            .station_entrances(origin, self.config.metro_radius_m)?;
        let codes = unique_station_codes(&entrances, self.config.max_stations);
        debug!(entrances = entrances.len(), codes = codes.len(), "station codes near origin");

        let mut stations = Vec::with_capacity(codes.len());
        for code in codes {
            match self.source.station(code) {
                Ok(station) => stations.push(station),
                Err(e) => warn!(station = %code, error = %e, "skipping station"),
            }
        }

        Ok(group_stations(stations)
            .into_iter()
            .map(|group| NearbyStation {
                lines: group.lines().into_iter().map(str::to_string).collect(),
                distance: distance_between(origin, group.station.coordinate),
                group,
            })
            .collect())
    }

    /// Upcoming trains at a station and its partner platform, in display
    /// order.
    ///
    /// A failure for the primary platform is returned. A failure for the
    /// partner is logged and the board shows the primary platform alone.
    pub fn station_board(
        &self,
        group: &StationGroup,
    ) -> Result<Vec<ArrivalPrediction>, WmataError> {
        let (primary_code, partner_code) = group.codes();

        let primary = self.source.rail_predictions(primary_code)?;
        let partner = match partner_code {
            Some(code) => self.source.rail_predictions(code).unwrap_or_else(|e| {
                warn!(station = %code, error = %e, "no predictions for partner platform");
                Vec::new()
            }),
            None => Vec::new(),
        };

        Ok(rank(&primary, &partner))
    }

    /// Upcoming buses at a stop, grouped by direction.
    pub fn stop_board(&self, stop_id: &str) -> Result<Vec<BusRoutePredictions>, WmataError> {
        let predictions = self.source.bus_predictions(stop_id)?;
        Ok(group_by_direction(&predictions))
    }

    /// Stops and shape of a route, for showing where a bus goes next.
    pub fn route_path(&self, route_id: &str) -> Result<BusPath, WmataError> {
        self.source.route_details(route_id)
    }
}

#[cfg(test)]
#[path = "nearby_tests.rs"]
mod tests;
