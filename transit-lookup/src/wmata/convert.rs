//! Conversion from upstream DTOs to domain types.
//!
//! Field names are normalized, empty code slots are dropped, and station
//! codes are validated. A single bad record in a list response is logged and
//! skipped rather than failing the whole response.

use tracing::warn;

use crate::geo::Coordinate;
use crate::predictions::{ArrivalMinutes, ArrivalPrediction};
use crate::transit::{
    Address, BusPath, BusPathDirection, BusPrediction, BusStop, MetroStation, ShapePoint,
    StationCode, StationEntrance,
};

use super::types::{
    BusPredictionsResponse, EntranceDto, EntrancesResponse, PathDirectionDto,
    RailPredictionsResponse, RouteDetailsResponse, StationInfoDto, StopDto, StopsResponse,
    TrainDto,
};

/// Error during DTO to domain conversion.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConversionError {
    /// A station code field didn't hold a valid code
    #[error("invalid station code {code:?} in {field}")]
    InvalidStationCode { field: &'static str, code: String },
}

/// Convert a `jStops` response.
pub fn convert_stops(response: &StopsResponse) -> Vec<BusStop> {
    response.stops.iter().map(convert_stop).collect()
}

fn convert_stop(stop: &StopDto) -> BusStop {
    BusStop {
        stop_id: stop.stop_id.clone(),
        name: stop.name.clone(),
        coordinate: Coordinate::new(stop.lat, stop.lon),
        routes: stop.routes.clone(),
    }
}

/// Convert a `jPredictions` response.
pub fn convert_bus_predictions(response: &BusPredictionsResponse) -> Vec<BusPrediction> {
    response
        .predictions
        .iter()
        .map(|p| BusPrediction {
            direction_num: p.direction_num.clone(),
            direction_text: p.direction_text.clone(),
            minutes: p.minutes,
            route_id: p.route_id.clone(),
            trip_id: p.trip_id.clone(),
            vehicle_id: p.vehicle_id.clone(),
        })
        .collect()
}

/// Convert a `jRouteDetails` response.
pub fn convert_route_details(response: &RouteDetailsResponse) -> BusPath {
    BusPath {
        name: response.name.clone(),
        route_id: response.route_id.clone(),
        direction_0: response.direction0.as_ref().map(convert_path_direction),
        direction_1: response.direction1.as_ref().map(convert_path_direction),
    }
}

fn convert_path_direction(direction: &PathDirectionDto) -> BusPathDirection {
    BusPathDirection {
        direction_num: direction.direction_num.clone(),
        direction_text: direction.direction_text.clone(),
        trip_headsign: direction.trip_headsign.clone(),
        stops: direction.stops.iter().map(convert_stop).collect(),
        shape: direction
            .shape
            .iter()
            .map(|point| ShapePoint {
                coordinate: Coordinate::new(point.lat, point.lon),
                seq_number: point.seq_number,
            })
            .collect(),
    }
}

/// Convert a `jStationEntrances` response.
///
/// Entrances with an unparseable station code are skipped.
pub fn convert_entrances(response: &EntrancesResponse) -> Vec<StationEntrance> {
    let mut entrances = Vec::with_capacity(response.entrances.len());

    for dto in &response.entrances {
        match convert_entrance(dto) {
            Ok(entrance) => entrances.push(entrance),
            Err(e) => warn!(entrance = %dto.name, error = %e, "skipping station entrance"),
        }
    }

    entrances
}

fn convert_entrance(dto: &EntranceDto) -> Result<StationEntrance, ConversionError> {
    let codes = [
        ("StationCode1", dto.station_code1.as_deref()),
        ("StationCode2", dto.station_code2.as_deref()),
    ];

    let mut station_codes = Vec::with_capacity(2);
    for (field, code) in codes {
        if let Some(code) = parse_code(field, code)? {
            station_codes.push(code);
        }
    }

    Ok(StationEntrance {
        name: dto.name.clone(),
        description: dto.description.clone(),
        coordinate: Coordinate::new(dto.lat, dto.lon),
        station_codes,
    })
}

/// Convert a `jStationInfo` response.
pub fn convert_station(dto: &StationInfoDto) -> Result<MetroStation, ConversionError> {
    let code = StationCode::parse(&dto.code).map_err(|_| ConversionError::InvalidStationCode {
        field: "Code",
        code: dto.code.clone(),
    })?;

    let station_together = parse_code("StationTogether1", dto.station_together1.as_deref())?;

    let line_codes = [
        &dto.line_code1,
        &dto.line_code2,
        &dto.line_code3,
        &dto.line_code4,
    ]
    .into_iter()
    .flatten()
    .filter(|code| !code.is_empty())
    .cloned()
    .collect();

    Ok(MetroStation {
        code,
        name: dto.name.clone(),
        coordinate: Coordinate::new(dto.lat, dto.lon),
        address: Address {
            street: dto.address.street.clone(),
            city: dto.address.city.clone(),
            state: dto.address.state.clone(),
            zip: dto.address.zip.clone(),
        },
        line_codes,
        station_together,
    })
}

/// Convert a `jGetPrediction` response.
///
/// The minutes token is kept as sent; unknown tokens such as `"---"` become
/// [`ArrivalMinutes::Other`].
pub fn convert_rail_predictions(response: &RailPredictionsResponse) -> Vec<ArrivalPrediction> {
    response.trains.iter().map(convert_train).collect()
}

fn convert_train(train: &TrainDto) -> ArrivalPrediction {
    ArrivalPrediction {
        destination_name: train.destination_name.clone(),
        line: train.line.clone(),
        car: train.car.clone().unwrap_or_else(|| "-".to_string()),
        location_code: train.location_code.clone(),
        minutes_until_arrival: ArrivalMinutes::parse(&train.min),
    }
}

/// Parse an optional code slot where `null` and `""` both mean "none".
fn parse_code(
    field: &'static str,
    code: Option<&str>,
) -> Result<Option<StationCode>, ConversionError> {
    StationCode::parse_optional(code).map_err(|_| ConversionError::InvalidStationCode {
        field,
        code: code.unwrap_or_default().to_string(),
    })
}
