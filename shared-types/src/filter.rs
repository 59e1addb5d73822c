use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use serde::{Deserialize, Serialize};

use crate::geo::haversine_km;
use crate::{Competition, ResolvedLocation};

/// Radius constraint for the competition list. The UI's `0 km` choice is
/// the "any distance" sentinel, not a zero-kilometre radius.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
pub enum DistanceFilter {
    Any,
    WithinKm(f64),
}

impl DistanceFilter {
    pub fn from_km(km: f64) -> Self {
        if km <= 0.0 {
            DistanceFilter::Any
        } else {
            DistanceFilter::WithinKm(km)
        }
    }
}

/// End-of-day UTC instant for a calendar date. The upstream list carries
/// plain dates and can be cached past a competition's last day, so an
/// event stays eligible until 23:59:59.999 UTC on its end date.
fn end_of_day_utc(date: NaiveDate) -> DateTime<Utc> {
    Utc.from_utc_datetime(&date.and_hms_milli_opt(23, 59, 59, 999).unwrap())
}

pub fn is_upcoming(competition: &Competition, now: DateTime<Utc>) -> bool {
    end_of_day_utc(competition.end_date) > now
}

/// Selects the competitions that have not yet concluded and, when an
/// origin and a bounded radius are given, that lie strictly within that
/// radius of the origin. Input order is preserved and the source list is
/// left untouched.
pub fn filter_competitions(
    competitions: &[Competition],
    origin: Option<&ResolvedLocation>,
    distance: DistanceFilter,
    now: DateTime<Utc>,
) -> Vec<Competition> {
    competitions
        .iter()
        .filter(|competition| is_upcoming(competition, now))
        .filter(|competition| match (distance, origin) {
            (DistanceFilter::WithinKm(radius_km), Some(from)) => {
                haversine_km(
                    competition.latitude_degrees,
                    competition.longitude_degrees,
                    from.lat,
                    from.lon,
                ) < radius_km
            }
            // No origin or unrestricted radius: only the date check applies.
            _ => true,
        })
        .cloned()
        .collect()
}
