//! Booking and cancelling flights.

use chrono::{SecondsFormat, Utc};
use tracing::info;
use uuid::Uuid;

use crate::catalog::Catalog;
use crate::domain::{BookingRecord, BookingStatus};
use crate::store::BookingRepository;

/// Errors from the booking flow.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BookingError {
    /// The flight id is not in the catalog
    #[error("flight {0} not found")]
    FlightNotFound(String),

    /// Passenger count outside 1..=available seats
    #[error("cannot book {requested} passengers: {available} seats available")]
    InvalidPassengers { requested: u32, available: u32 },

    /// No booking with this id belongs to the user
    #[error("booking {0} not found")]
    BookingNotFound(String),

    /// Only upcoming bookings can be cancelled
    #[error("booking {id} is {status} and cannot be cancelled")]
    NotCancellable { id: String, status: BookingStatus },
}

/// A request to book seats on a flight.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingRequest {
    pub flight_id: String,
    pub user_id: String,
    pub passengers: u32,
}

/// Book seats on a catalog flight.
///
/// The total price is fixed now and is not recomputed later. Seat counts in
/// the catalog are not decremented.
pub fn book_flight(
    catalog: &Catalog,
    bookings: &dyn BookingRepository,
    request: BookingRequest,
) -> Result<BookingRecord, BookingError> {
    let flight = catalog
        .get_by_id(&request.flight_id)
        .ok_or_else(|| BookingError::FlightNotFound(request.flight_id.clone()))?;

    if request.passengers == 0 || request.passengers > flight.available_seats {
        return Err(BookingError::InvalidPassengers {
            requested: request.passengers,
            available: flight.available_seats,
        });
    }

    let booking = BookingRecord {
        id: new_booking_id(),
        flight_id: flight.id.clone(),
        user_id: request.user_id,
        status: BookingStatus::Upcoming,
        booking_date: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        passengers: request.passengers,
        total_price: u64::from(flight.price) * u64::from(request.passengers),
    };

    info!(
        booking = %booking.id,
        flight = %booking.flight_id,
        passengers = booking.passengers,
        "flight booked"
    );

    Ok(bookings.add(booking))
}

/// Cancel one of the user's upcoming bookings.
pub fn cancel_booking(
    bookings: &dyn BookingRepository,
    booking_id: &str,
    user_id: &str,
) -> Result<BookingRecord, BookingError> {
    let booking = bookings
        .get(booking_id)
        .filter(|b| b.user_id == user_id)
        .ok_or_else(|| BookingError::BookingNotFound(booking_id.to_string()))?;

    if booking.status != BookingStatus::Upcoming {
        return Err(BookingError::NotCancellable {
            id: booking.id,
            status: booking.status,
        });
    }

    let updated = bookings
        .update_status(booking_id, BookingStatus::Cancelled)
        .ok_or_else(|| BookingError::BookingNotFound(booking_id.to_string()))?;

    info!(booking = %updated.id, "booking cancelled");
    Ok(updated)
}

/// Short random booking reference.
fn new_booking_id() -> String {
    let mut id = Uuid::new_v4().simple().to_string();
    id.truncate(9);
    id
}
