use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

pub mod filter;
pub mod geo;
pub mod sequence;

pub use filter::{filter_competitions, DistanceFilter};
pub use geo::haversine_km;
pub use sequence::RequestSequence;

/// One announced competition as fetched from the governing body's API.
/// Immutable once fetched; a refetch replaces the whole list.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Competition {
    pub id: String,
    pub name: String,
    pub city: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub latitude_degrees: f64,
    pub longitude_degrees: f64,
}

/// A geocoded reference point: where the visitor is searching from.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ResolvedLocation {
    pub name: String,
    pub lat: f64,
    pub lon: f64,
}

/// User-facing failures of the location step. None of these are fatal to
/// the page; the visitor simply re-triggers the action.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, thiserror::Error)]
pub enum LocationError {
    #[error("We couldn't find \"{query}\" in Canada. Try a city name or postal code.")]
    NotFound { query: String },
    #[error("Unable to get your current location.")]
    SensorUnavailable,
    #[error("Location lookup failed: {0}")]
    Fetch(String),
}
