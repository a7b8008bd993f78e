//! Flight records and the city table entries they are built from.

use serde::{Deserialize, Serialize};

/// A city served by the catalog, with its main airport.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct City {
    pub city: &'static str,
    pub airport: &'static str,
    pub code: &'static str,
}

impl City {
    /// Create a city table entry.
    pub const fn new(city: &'static str, airport: &'static str, code: &'static str) -> Self {
        Self {
            city,
            airport,
            code,
        }
    }
}

/// A city name paired with its airport code, as offered to search forms.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CityRef {
    pub city: String,
    pub code: String,
}

/// A single scheduled flight in the catalog.
///
/// Records are immutable once generated. Times and duration are display
/// strings; use [`crate::domain::parse_clock_minutes`] and
/// [`crate::domain::FlightDuration::find_in`] to read them back.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlightRecord {
    pub id: String,
    pub airline: String,
    pub flight_number: String,
    pub departure_city: String,
    pub departure_airport: String,
    pub departure_code: String,
    pub arrival_city: String,
    pub arrival_airport: String,
    pub arrival_code: String,
    /// Departure time of day, `HH:MM`.
    pub departure_time: String,
    /// Arrival time of day, `HH:MM`.
    pub arrival_time: String,
    /// Scheduled duration, `"{h}h {m}m"`.
    pub duration: String,
    pub price: u32,
    pub available_seats: u32,
    /// Operating date, `YYYY-MM-DD`.
    pub date: String,
}
