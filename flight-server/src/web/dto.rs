//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};

use crate::domain::{BookingRecord, CityRef, FlightRecord, UserRecord};
use crate::session::Theme;

/// Query for a flight search.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct SearchFlightsRequest {
    /// Departure city or airport code
    pub from: String,

    /// Arrival city or airport code
    pub to: String,

    /// Travel date, `YYYY-MM-DD`
    pub date: String,

    /// `departureTime`, `price` or `duration` (defaults to departure time)
    pub sort: Option<String>,

    /// `asc` or `desc` (defaults to ascending)
    pub direction: Option<String>,
}

/// Search results.
#[derive(Debug, Serialize)]
pub struct SearchFlightsResponse {
    pub count: usize,
    pub flights: Vec<FlightRecord>,
}

/// Query for a random sample of flights.
#[derive(Debug, Deserialize)]
pub struct ExploreRequest {
    pub count: Option<usize>,
}

/// A plain list of flights.
#[derive(Debug, Serialize)]
pub struct FlightsResponse {
    pub flights: Vec<FlightRecord>,
}

/// Query for the dates a route operates.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct AvailableDatesRequest {
    pub from: String,
    pub to: String,
}

/// Dates a route operates, ascending.
#[derive(Debug, Serialize)]
pub struct AvailableDatesResponse {
    pub dates: Vec<String>,
}

/// Query for city suggestions.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct SuggestCitiesRequest {
    pub q: String,
}

/// Cities served by the catalog.
#[derive(Debug, Serialize)]
pub struct CitiesResponse {
    pub cities: Vec<CityRef>,
}

/// Registration form.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    #[serde(default)]
    pub confirm_password: Option<String>,
}

/// Login form.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// A user as shown to clients. Never carries the password.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserView {
    pub id: String,
    pub name: String,
    pub email: String,
}

impl From<&UserRecord> for UserView {
    fn from(user: &UserRecord) -> Self {
        Self {
            id: user.id.clone(),
            name: user.name.clone(),
            email: user.email.clone(),
        }
    }
}

/// Request to book a flight for the signed-in user.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateBookingRequest {
    pub flight_id: String,
    #[serde(default = "default_passengers")]
    pub passengers: u32,
}

fn default_passengers() -> u32 {
    1
}

/// Query for the signed-in user's bookings.
#[derive(Debug, Default, Deserialize)]
pub struct ListBookingsRequest {
    /// Optional status filter
    pub status: Option<String>,
}

/// A booking together with the flight it refers to, if still known.
#[derive(Debug, Serialize)]
pub struct BookingView {
    #[serde(flatten)]
    pub booking: BookingRecord,
    pub flight: Option<FlightRecord>,
}

/// The signed-in user's bookings.
#[derive(Debug, Serialize)]
pub struct BookingsResponse {
    pub bookings: Vec<BookingView>,
}

/// Current theme.
#[derive(Debug, Serialize)]
pub struct ThemeResponse {
    pub theme: Theme,
}

/// Error response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}
