//! Transit data from recorded API responses.
//!
//! A snapshot is a directory of JSON bodies exactly as the API returned them:
//!
//! ```text
//! snapshot/
//!   stops.json              jStops
//!   entrances.json          jStationEntrances
//!   stations/{CODE}.json    jStationInfo
//!   rail/{CODE}.json        jGetPrediction
//!   bus/{STOP_ID}.json      jPredictions
//!   routes/{ROUTE_ID}.json  jRouteDetails
//! ```
//!
//! Files are read on every call, so a snapshot can be refreshed in place.

use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use tracing::debug;

use crate::geo::{Coordinate, haversine_meters};
use crate::predictions::ArrivalPrediction;
use crate::transit::{BusPath, BusPrediction, BusStop, MetroStation, StationCode, StationEntrance};

use super::convert::{
    convert_bus_predictions, convert_entrances, convert_rail_predictions, convert_route_details,
    convert_station, convert_stops,
};
use super::error::WmataError;
use super::types::{
    BusPredictionsResponse, EntrancesResponse, RailPredictionsResponse, RouteDetailsResponse,
    StationInfoDto, StopsResponse,
};

/// Source of transit data for a lookup.
///
/// This abstraction allows the lookup to be tested with in-memory data.
pub trait TransitSource {
    /// Bus stops within `radius_m` metres of `origin`.
    fn bus_stops(&self, origin: Coordinate, radius_m: f64) -> Result<Vec<BusStop>, WmataError>;

    /// Station entrances within `radius_m` metres of `origin`.
    fn station_entrances(
        &self,
        origin: Coordinate,
        radius_m: f64,
    ) -> Result<Vec<StationEntrance>, WmataError>;

    /// Details of a single station.
    fn station(&self, code: StationCode) -> Result<MetroStation, WmataError>;

    /// Trains due at a station.
    fn rail_predictions(&self, code: StationCode) -> Result<Vec<ArrivalPrediction>, WmataError>;

    /// Buses due at a stop.
    fn bus_predictions(&self, stop_id: &str) -> Result<Vec<BusPrediction>, WmataError>;

    /// Stops and shape of a bus route.
    fn route_details(&self, route_id: &str) -> Result<BusPath, WmataError>;
}

/// [`TransitSource`] backed by a snapshot directory.
#[derive(Debug, Clone)]
pub struct SnapshotSource {
    dir: PathBuf,
}

impl SnapshotSource {
    /// Open a snapshot directory.
    ///
    /// Fails if `dir` is not a directory; individual files are only checked
    /// when requested.
    pub fn new(dir: impl Into<PathBuf>) -> Result<Self, WmataError> {
        let dir = dir.into();
        if !dir.is_dir() {
            return Err(WmataError::NotFound(format!(
                "snapshot directory {}",
                dir.display()
            )));
        }
        Ok(Self { dir })
    }

    /// The snapshot directory.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn read<T: DeserializeOwned>(&self, relative: &Path, what: &str) -> Result<T, WmataError> {
        let path = self.dir.join(relative);
        debug!(path = %path.display(), "reading snapshot");

        let json = std::fs::read_to_string(&path).map_err(|source| {
            if source.kind() == std::io::ErrorKind::NotFound {
                WmataError::NotFound(what.to_string())
            } else {
                WmataError::Io {
                    path: path.clone(),
                    source,
                }
            }
        })?;

        serde_json::from_str(&json).map_err(|source| WmataError::Json { path, source })
    }

    /// Path for a per-resource file. IDs that could escape the snapshot
    /// directory are refused.
    fn resource_path(kind: &str, id: &str) -> Result<PathBuf, WmataError> {
        let safe = !id.is_empty()
            && id
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
        if !safe {
            return Err(WmataError::NotFound(format!("{kind} {id:?}")));
        }
        Ok(Path::new(kind).join(format!("{id}.json")))
    }
}

impl TransitSource for SnapshotSource {
    fn bus_stops(&self, origin: Coordinate, radius_m: f64) -> Result<Vec<BusStop>, WmataError> {
        let response: StopsResponse = self.read(Path::new("stops.json"), "bus stops")?;

        let stops: Vec<BusStop> = convert_stops(&response)
            .into_iter()
            .filter(|stop| haversine_meters(origin, stop.coordinate) <= radius_m)
            .collect();

        debug!(count = stops.len(), radius_m, "bus stops in range");
        Ok(stops)
    }

    fn station_entrances(
        &self,
        origin: Coordinate,
        radius_m: f64,
    ) -> Result<Vec<StationEntrance>, WmataError> {
        let response: EntrancesResponse =
            self.read(Path::new("entrances.json"), "station entrances")?;

        let entrances: Vec<StationEntrance> = convert_entrances(&response)
            .into_iter()
            .filter(|entrance| haversine_meters(origin, entrance.coordinate) <= radius_m)
            .collect();

        debug!(count = entrances.len(), radius_m, "station entrances in range");
        Ok(entrances)
    }

    fn station(&self, code: StationCode) -> Result<MetroStation, WmataError> {
        let path = Self::resource_path("stations", code.as_str())?;
        let dto: StationInfoDto = self.read(&path, &format!("station {code}"))?;
        Ok(convert_station(&dto)?)
    }

    fn rail_predictions(&self, code: StationCode) -> Result<Vec<ArrivalPrediction>, WmataError> {
        let path = Self::resource_path("rail", code.as_str())?;
        let response: RailPredictionsResponse =
            self.read(&path, &format!("rail predictions for {code}"))?;
        Ok(convert_rail_predictions(&response))
    }

    fn bus_predictions(&self, stop_id: &str) -> Result<Vec<BusPrediction>, WmataError> {
        let path = Self::resource_path("bus", stop_id)?;
        let response: BusPredictionsResponse =
            self.read(&path, &format!("bus predictions for stop {stop_id}"))?;
        Ok(convert_bus_predictions(&response))
    }

    fn route_details(&self, route_id: &str) -> Result<BusPath, WmataError> {
        let path = Self::resource_path("routes", route_id)?;
        let response: RouteDetailsResponse =
            self.read(&path, &format!("route {route_id}"))?;
        Ok(convert_route_details(&response))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::predictions::ArrivalMinutes;
    use tempfile::{TempDir, tempdir};

    const STOPS: &str = r#"{"Stops": [
        {"Lat": 38.8978, "Lon": -77.0365, "Name": "NEAR", "Routes": ["S2"], "StopID": "1001001"},
        {"Lat": 38.9500, "Lon": -77.0365, "Name": "FAR", "Routes": ["70"], "StopID": "1001002"}
    ]}"#;

    const ENTRANCES: &str = r#"{"Entrances": [
        {"Description": "", "Lat": 38.8980, "Lon": -77.0280, "Name": "13TH ST",
         "StationCode1": "A01", "StationCode2": "C01"},
        {"Description": "", "Lat": 38.9700, "Lon": -77.0300, "Name": "FAR",
         "StationCode1": "B08", "StationCode2": ""}
    ]}"#;

    const STATION_A01: &str = r#"{
        "Address": {"City": "Washington", "State": "DC", "Street": "607 13th St. NW", "Zip": "20005"},
        "Code": "A01", "Lat": 38.898303, "Lon": -77.028099,
        "LineCode1": "RD", "LineCode2": null, "LineCode3": null, "LineCode4": null,
        "Name": "Metro Center", "StationTogether1": "C01", "StationTogether2": ""
    }"#;

    const RAIL_A01: &str = r#"{"Trains": [
        {"Car": "8", "Destination": "Glenmont", "DestinationCode": "B11",
         "DestinationName": "Glenmont", "Group": "1", "Line": "RD",
         "LocationCode": "A01", "LocationName": "Metro Center", "Min": "3"}
    ]}"#;

    const BUS_1001001: &str = r#"{"Predictions": [
        {"DirectionNum": "0", "DirectionText": "East to Capitol Heights",
         "Minutes": 5, "RouteID": "S2", "TripID": "1", "VehicleID": "7001"}
    ], "StopName": "NEAR"}"#;

    fn write(dir: &Path, relative: &str, body: &str) {
        let path = dir.join(relative);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(path, body).unwrap();
    }

    fn snapshot() -> (TempDir, SnapshotSource) {
        let dir = tempdir().unwrap();
        write(dir.path(), "stops.json", STOPS);
        write(dir.path(), "entrances.json", ENTRANCES);
        write(dir.path(), "stations/A01.json", STATION_A01);
        write(dir.path(), "rail/A01.json", RAIL_A01);
        write(dir.path(), "bus/1001001.json", BUS_1001001);
        let source = SnapshotSource::new(dir.path()).unwrap();
        (dir, source)
    }

    fn origin() -> Coordinate {
        Coordinate::new(38.8977, -77.0365)
    }

    #[test]
    fn missing_directory_is_error() {
        let result = SnapshotSource::new("/nonexistent/snapshot");
        assert!(matches!(result, Err(WmataError::NotFound(_))));
    }

    #[test]
    fn bus_stops_filtered_by_radius() {
        let (_dir, source) = snapshot();

        let stops = source.bus_stops(origin(), 800.0).unwrap();
        assert_eq!(stops.len(), 1);
        assert_eq!(stops[0].stop_id, "1001001");

        let stops = source.bus_stops(origin(), 10_000.0).unwrap();
        assert_eq!(stops.len(), 2);
    }

    #[test]
    fn entrances_filtered_by_radius() {
        let (_dir, source) = snapshot();

        let entrances = source.station_entrances(origin(), 1600.0).unwrap();
        assert_eq!(entrances.len(), 1);
        assert_eq!(entrances[0].name, "13TH ST");
    }

    #[test]
    fn station_and_predictions() {
        let (_dir, source) = snapshot();
        let a01 = StationCode::parse("A01").unwrap();

        let station = source.station(a01).unwrap();
        assert_eq!(station.name, "Metro Center");
        assert_eq!(station.station_together, Some(StationCode::parse("C01").unwrap()));

        let predictions = source.rail_predictions(a01).unwrap();
        assert_eq!(predictions.len(), 1);
        assert_eq!(predictions[0].minutes_until_arrival, ArrivalMinutes::Minutes(3));
    }

    #[test]
    fn bus_predictions_for_stop() {
        let (_dir, source) = snapshot();

        let predictions = source.bus_predictions("1001001").unwrap();
        assert_eq!(predictions.len(), 1);
        assert_eq!(predictions[0].route_id, "S2");
    }

    #[test]
    fn missing_resource_is_not_found() {
        let (_dir, source) = snapshot();
        let c01 = StationCode::parse("C01").unwrap();

        let err = source.station(c01).unwrap_err();
        assert!(matches!(err, WmataError::NotFound(_)));
        assert_eq!(err.to_string(), "no data for station C01");

        assert!(matches!(
            source.route_details("70"),
            Err(WmataError::NotFound(_))
        ));
    }

    #[test]
    fn path_traversal_refused() {
        let (_dir, source) = snapshot();

        assert!(matches!(
            source.bus_predictions("../stops"),
            Err(WmataError::NotFound(_))
        ));
        assert!(matches!(
            source.route_details(""),
            Err(WmataError::NotFound(_))
        ));
    }

    #[test]
    fn malformed_json_is_parse_error() {
        let (dir, source) = snapshot();
        write(dir.path(), "routes/70.json", "{not json");

        let err = source.route_details("70").unwrap_err();
        assert!(matches!(err, WmataError::Json { .. }));
        assert!(err.to_string().contains("failed to parse"));
    }

    #[test]
    fn invalid_station_record_is_conversion_error() {
        let (dir, source) = snapshot();
        write(
            dir.path(),
            "stations/B01.json",
            &STATION_A01.replace(r#""Code": "A01""#, r#""Code": "bad""#),
        );

        let err = source.station(StationCode::parse("B01").unwrap()).unwrap_err();
        assert!(matches!(err, WmataError::Conversion(_)));
    }
}
