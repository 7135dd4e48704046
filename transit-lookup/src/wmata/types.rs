//! Upstream API response DTOs.
//!
//! These types map directly to the JSON the transit API returns. Codes and
//! line slots that don't apply are sent as empty strings or `null`, so they
//! are `Option` here and cleaned up during conversion.

use serde::Deserialize;

/// Response from `jStops`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct StopsResponse {
    pub stops: Vec<StopDto>,
}

/// A bus stop.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct StopDto {
    pub lat: f64,
    pub lon: f64,
    pub name: String,
    /// Routes serving the stop, including variants like "70*1".
    #[serde(default)]
    pub routes: Vec<String>,
    #[serde(rename = "StopID")]
    pub stop_id: String,
}

/// Response from `jPredictions`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct BusPredictionsResponse {
    pub predictions: Vec<BusPredictionDto>,
}

/// A bus due at a stop.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct BusPredictionDto {
    pub direction_num: String,
    pub direction_text: String,
    pub minutes: i32,
    #[serde(rename = "RouteID")]
    pub route_id: String,
    #[serde(rename = "TripID")]
    pub trip_id: String,
    #[serde(rename = "VehicleID")]
    pub vehicle_id: String,
}

/// Response from `jRouteDetails`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RouteDetailsResponse {
    pub direction0: Option<PathDirectionDto>,
    pub direction1: Option<PathDirectionDto>,
    pub name: String,
    #[serde(rename = "RouteID")]
    pub route_id: String,
}

/// One direction of a route.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PathDirectionDto {
    pub direction_num: String,
    pub direction_text: String,
    #[serde(default)]
    pub shape: Vec<ShapePointDto>,
    #[serde(default)]
    pub stops: Vec<StopDto>,
    #[serde(default)]
    pub trip_headsign: String,
}

/// A vertex of a route shape.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ShapePointDto {
    pub lat: f64,
    pub lon: f64,
    #[serde(alias = "SeqNum")]
    pub seq_number: u32,
}

/// Response from `jStationEntrances`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct EntrancesResponse {
    pub entrances: Vec<EntranceDto>,
}

/// A station entrance.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct EntranceDto {
    #[serde(default)]
    pub description: String,
    pub lat: f64,
    pub lon: f64,
    pub name: String,
    pub station_code1: Option<String>,
    pub station_code2: Option<String>,
}

/// Response from `jStationInfo`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct StationInfoDto {
    pub address: AddressDto,
    pub code: String,
    pub lat: f64,
    pub lon: f64,
    pub line_code1: Option<String>,
    pub line_code2: Option<String>,
    pub line_code3: Option<String>,
    pub line_code4: Option<String>,
    pub name: String,
    pub station_together1: Option<String>,
    pub station_together2: Option<String>,
}

/// Station street address.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AddressDto {
    pub city: String,
    pub state: String,
    pub street: String,
    pub zip: String,
}

/// Response from `jGetPrediction`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RailPredictionsResponse {
    pub trains: Vec<TrainDto>,
}

/// A train due at a platform.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TrainDto {
    /// Number of cars; `null` or "-" when unknown.
    pub car: Option<String>,
    /// Abbreviated destination for signage.
    pub destination: String,
    pub destination_code: Option<String>,
    pub destination_name: String,
    /// Track group, "1" or "2".
    pub group: String,
    pub line: String,
    pub location_code: String,
    pub location_name: String,
    /// Minutes, "BRD", "ARR", or blank/"---" when unknown.
    pub min: String,
}
