//! Live arrival predictions.
//!
//! Rail predictions arrive as a countdown in minutes or as one of two status
//! tokens: `BRD` (boarding) and `ARR` (arrived). This module parses those
//! tokens, merges predictions from co-located platforms into display order,
//! and formats them for the board.

pub mod display;
mod minutes;
mod prediction;
mod rank;

pub use minutes::ArrivalMinutes;
pub use prediction::ArrivalPrediction;
pub use rank::rank;
