//! Normalized rail prediction.

use serde::{Deserialize, Serialize};

use super::ArrivalMinutes;

/// One train due at a platform.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ArrivalPrediction {
    /// Destination shown on the train, e.g. "Shady Grove".
    pub destination_name: String,
    /// Line code, e.g. "RD".
    pub line: String,
    /// Number of cars, as reported ("6", "8", or "-" when unknown).
    pub car: String,
    /// Station code of the platform the prediction is for.
    pub location_code: String,
    pub minutes_until_arrival: ArrivalMinutes,
}
