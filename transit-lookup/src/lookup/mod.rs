//! Nearby transit lookup.
//!
//! Answers "what can I catch from here?": bus stops and metro stations near
//! an origin, each with a walking distance, and their boards of upcoming
//! arrivals in display order.

mod config;
mod nearby;

pub use config::LookupConfig;
pub use nearby::{NearbyLookup, NearbyStation, NearbyStop};
