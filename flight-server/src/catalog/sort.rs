//! Ordering of search results.
//!
//! Results are ordered by a single key with no tie-breaker. Sorting is
//! stable in both directions: flights with equal keys keep their input
//! order.

use std::cmp::Reverse;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::domain::{FlightDuration, FlightRecord, parse_clock_minutes};

/// Error returned when parsing an unknown sort key or direction.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid sort option: {0:?}")]
pub struct InvalidSortOption(String);

/// Field to order flights by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortKey {
    #[default]
    DepartureTime,
    Price,
    Duration,
}

impl FromStr for SortKey {
    type Err = InvalidSortOption;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "departureTime" => Ok(SortKey::DepartureTime),
            "price" => Ok(SortKey::Price),
            "duration" => Ok(SortKey::Duration),
            other => Err(InvalidSortOption(other.to_string())),
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            SortKey::DepartureTime => "departureTime",
            SortKey::Price => "price",
            SortKey::Duration => "duration",
        })
    }
}

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl FromStr for SortDirection {
    type Err = InvalidSortOption;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "asc" => Ok(SortDirection::Asc),
            "desc" => Ok(SortDirection::Desc),
            other => Err(InvalidSortOption(other.to_string())),
        }
    }
}

/// Minutes of flight time read from a duration string.
///
/// Strings without a `"{h}h {m}m"` duration count as zero, so they sort
/// as the shortest flights.
pub fn duration_minutes(duration: &str) -> u32 {
    FlightDuration::find_in(duration)
        .map(|d| d.total_minutes())
        .unwrap_or(0)
}

/// Minutes since midnight read from a departure time string.
///
/// Returns `None` for malformed times.
pub fn departure_minutes(time: &str) -> Option<u32> {
    parse_clock_minutes(time).ok()
}

/// Sort value for one flight. Only departure times can be missing.
fn sort_value(flight: &FlightRecord, key: SortKey) -> Option<u32> {
    match key {
        SortKey::Price => Some(flight.price),
        SortKey::Duration => Some(duration_minutes(&flight.duration)),
        SortKey::DepartureTime => departure_minutes(&flight.departure_time),
    }
}

/// Return the flights ordered by `key` in `direction`.
///
/// The input is left untouched. Flights whose departure time cannot be
/// read have no sort value; they come before every readable time when
/// ascending and after them when descending. This is a known weakness of
/// string-typed times, and differs from comparing parsed times as floating
/// point, where an unreadable time is NaN and its place depends on the
/// input order.
pub fn sort_flights(
    flights: &[FlightRecord],
    key: SortKey,
    direction: SortDirection,
) -> Vec<FlightRecord> {
    if key == SortKey::DepartureTime {
        let malformed = flights
            .iter()
            .filter(|f| departure_minutes(&f.departure_time).is_none())
            .count();
        if malformed > 0 {
            warn!(malformed, "sorting flights with unreadable departure times");
        }
    }

    let mut sorted = flights.to_vec();
    match direction {
        SortDirection::Asc => sorted.sort_by_cached_key(|f| sort_value(f, key)),
        SortDirection::Desc => sorted.sort_by_cached_key(|f| Reverse(sort_value(f, key))),
    }
    sorted
}
