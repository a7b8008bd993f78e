//! Domain types for the flight booking demo.
//!
//! Flight, booking and user records plus the small value types used to
//! build and read them. Records serialize with camelCase field names.

mod booking;
mod flight;
mod time;
mod user;

pub use booking::{BookingRecord, BookingStatus, InvalidBookingStatus};
pub use flight::{City, CityRef, FlightRecord};
pub use time::{ClockTime, FlightDuration, MINUTES_PER_DAY, TimeError, parse_clock_minutes};
pub use user::{NewUser, UserRecord};
