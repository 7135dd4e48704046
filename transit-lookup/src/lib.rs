//! Nearby transit lookup.
//!
//! Given a location, finds the closest bus stops and metro stations, how far
//! away they are, and what is arriving next. Train arrivals at co-located
//! platforms are merged into one board with boarding trains first.

pub mod config;
pub mod geo;
pub mod lookup;
pub mod predictions;
pub mod transit;
pub mod wmata;
