//! Booking records.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Error returned when parsing an unknown booking status.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid booking status: {0:?}")]
pub struct InvalidBookingStatus(String);

/// Lifecycle state of a booking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    Upcoming,
    Completed,
    Cancelled,
}

impl BookingStatus {
    /// Returns the wire name of the status.
    pub fn as_str(&self) -> &'static str {
        match self {
            BookingStatus::Upcoming => "upcoming",
            BookingStatus::Completed => "completed",
            BookingStatus::Cancelled => "cancelled",
        }
    }
}

impl fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BookingStatus {
    type Err = InvalidBookingStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "upcoming" => Ok(BookingStatus::Upcoming),
            "completed" => Ok(BookingStatus::Completed),
            "cancelled" => Ok(BookingStatus::Cancelled),
            other => Err(InvalidBookingStatus(other.to_string())),
        }
    }
}

/// A user's reservation on a flight.
///
/// `total_price` is fixed at booking time and `flight_id` is not checked
/// again after creation, so lookups of the referenced flight may fail.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingRecord {
    pub id: String,
    pub flight_id: String,
    pub user_id: String,
    pub status: BookingStatus,
    /// Creation timestamp, RFC 3339 UTC.
    pub booking_date: String,
    pub passengers: u32,
    pub total_price: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_parse_and_display() {
        for status in [
            BookingStatus::Upcoming,
            BookingStatus::Completed,
            BookingStatus::Cancelled,
        ] {
            assert_eq!(status.as_str().parse::<BookingStatus>(), Ok(status));
            assert_eq!(status.to_string(), status.as_str());
        }
        assert!("canceled".parse::<BookingStatus>().is_err());
        assert!("Upcoming".parse::<BookingStatus>().is_err());
    }

    #[test]
    fn status_serializes_lowercase() {
        let json = serde_json::to_string(&BookingStatus::Cancelled).unwrap();
        assert_eq!(json, "\"cancelled\"");
    }

    #[test]
    fn booking_serializes_camel_case() {
        let booking = BookingRecord {
            id: "abc".to_string(),
            flight_id: "42".to_string(),
            user_id: "1".to_string(),
            status: BookingStatus::Upcoming,
            booking_date: "2025-05-01T10:00:00.000Z".to_string(),
            passengers: 2,
            total_price: 12000,
        };
        let json = serde_json::to_value(&booking).unwrap();
        assert_eq!(json["flightId"], "42");
        assert_eq!(json["status"], "upcoming");
        assert_eq!(json["totalPrice"], 12000);
    }
}
