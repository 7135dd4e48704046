//! Merge and order predictions for a station board.

use super::ArrivalPrediction;

/// Merge predictions from a station and its co-located partner into
/// display order.
///
/// Predictions are ordered by:
/// 1. `BRD` first, then `ARR`
/// 2. Unrecognized tokens next (treated like status tokens)
/// 3. Numeric countdowns, smallest first
///
/// The sort is stable: predictions that rank equal keep the order they had
/// in `primary` followed by `secondary`. Neither input is modified.
///
/// # Examples
///
/// ```
/// use transit_lookup::predictions::{ArrivalMinutes, ArrivalPrediction, rank};
///
/// let due = |min: &str| ArrivalPrediction {
///     destination_name: "Glenmont".into(),
///     line: "RD".into(),
///     car: "8".into(),
///     location_code: "A01".into(),
///     minutes_until_arrival: ArrivalMinutes::parse(min),
/// };
///
/// let ranked = rank(&[due("5"), due("BRD")], &[due("ARR"), due("2")]);
/// let order: Vec<String> = ranked
///     .iter()
///     .map(|p| p.minutes_until_arrival.to_string())
///     .collect();
/// assert_eq!(order, ["BRD", "ARR", "2", "5"]);
/// ```
pub fn rank(
    primary: &[ArrivalPrediction],
    secondary: &[ArrivalPrediction],
) -> Vec<ArrivalPrediction> {
    let mut merged: Vec<ArrivalPrediction> = primary.iter().chain(secondary).cloned().collect();

    // `sort_by` is stable, which the board relies on for equal entries.
    merged.sort_by(|a, b| {
        a.minutes_until_arrival
            .display_order(&b.minutes_until_arrival)
    });

    merged
}
