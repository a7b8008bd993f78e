//! Booking and user record stores.
//!
//! Both stores sit behind small repository traits so a persistent backend
//! can replace the in-memory lists without touching callers. The in-memory
//! implementations guard their list with a lock; writes are last-write-wins.

mod bookings;
mod users;

pub use bookings::InMemoryBookings;
pub use users::InMemoryUsers;

use crate::domain::{BookingRecord, BookingStatus, NewUser, UserRecord};

/// Storage for booking records.
pub trait BookingRepository: Send + Sync {
    /// Store a new booking and return it.
    fn add(&self, booking: BookingRecord) -> BookingRecord;

    /// Look up a booking by id.
    fn get(&self, id: &str) -> Option<BookingRecord>;

    /// All bookings owned by a user, in creation order.
    fn list_for_user(&self, user_id: &str) -> Vec<BookingRecord>;

    /// A user's bookings in the given status, in creation order.
    fn list_for_user_with_status(&self, user_id: &str, status: BookingStatus)
    -> Vec<BookingRecord>;

    /// Change a booking's status, returning the updated record.
    ///
    /// Returns `None` if no booking has the id.
    fn update_status(&self, id: &str, status: BookingStatus) -> Option<BookingRecord>;
}

/// Storage for user records.
pub trait UserRepository: Send + Sync {
    /// Store a new user, assigning the next id.
    fn add(&self, user: NewUser) -> UserRecord;

    /// Look up a user by id.
    fn get(&self, id: &str) -> Option<UserRecord>;

    /// Find the first user with this email and password.
    fn find_by_credentials(&self, email: &str, password: &str) -> Option<UserRecord>;

    /// Returns true if any user has this email.
    fn is_email_registered(&self, email: &str) -> bool;
}
