//! Board formatting for predictions.

use chrono::{Duration, NaiveDateTime};

use super::ArrivalMinutes;

/// Label for the countdown column: `"BRD"`, `"ARR"`, `"5 minutes"`.
///
/// Unknown tokens are shown as received.
pub fn arrival_label(minutes: &ArrivalMinutes) -> String {
    match minutes {
        ArrivalMinutes::Minutes(n) => format!("{n} minutes"),
        other => other.to_string(),
    }
}

/// Wall-clock time the train is expected, relative to `now`.
///
/// `BRD` and `ARR` are due now. Unknown tokens, and countdowns too far out to
/// represent, have no expected time.
pub fn expected_at(minutes: &ArrivalMinutes, now: NaiveDateTime) -> Option<NaiveDateTime> {
    match minutes {
        ArrivalMinutes::Boarding | ArrivalMinutes::Arrived => Some(now),
        ArrivalMinutes::Minutes(n) => i64::try_from(*n)
            .ok()
            .and_then(Duration::try_minutes)
            .and_then(|d| now.checked_add_signed(d)),
        ArrivalMinutes::Other(_) => None,
    }
}

/// 12-hour clock, e.g. `"4:05 PM"`.
pub fn format_clock(time: NaiveDateTime) -> String {
    time.format("%-I:%M %p").to_string()
}
