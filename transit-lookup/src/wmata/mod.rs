//! Upstream transit API data.
//!
//! The authority's JSON API uses PascalCase field names and sends empty
//! strings for absent codes. This module holds the wire DTOs, converts them
//! into [`crate::transit`] and [`crate::predictions`] types, and provides a
//! [`TransitSource`] backed by recorded responses on disk.
//!
//! Endpoints covered (paths relative to the API base):
//! - `Bus.svc/json/jStops` - stops within a radius
//! - `NextBusService.svc/json/jPredictions` - bus arrivals at a stop
//! - `Bus.svc/json/jRouteDetails` - stops and shape of a route
//! - `Rail.svc/json/jStationEntrances` - entrances within a radius
//! - `Rail.svc/json/jStationInfo` - a single station
//! - `StationPrediction.svc/json/jGetPrediction` - rail arrivals at a station

mod convert;
mod error;
mod snapshot;
mod types;

pub use convert::{
    ConversionError, convert_bus_predictions, convert_entrances, convert_rail_predictions,
    convert_route_details, convert_station, convert_stops,
};
pub use error::WmataError;
pub use snapshot::{SnapshotSource, TransitSource};
pub use types::{
    AddressDto, BusPredictionDto, BusPredictionsResponse, EntranceDto, EntrancesResponse,
    PathDirectionDto, RailPredictionsResponse, RouteDetailsResponse, ShapePointDto,
    StationInfoDto, StopDto, StopsResponse, TrainDto,
};
