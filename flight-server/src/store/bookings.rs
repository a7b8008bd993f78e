//! In-memory booking store.

use std::sync::{PoisonError, RwLock};

use super::BookingRepository;
use crate::domain::{BookingRecord, BookingStatus};

/// Bookings held in a locked list.
#[derive(Debug, Default)]
pub struct InMemoryBookings {
    inner: RwLock<Vec<BookingRecord>>,
}

impl InMemoryBookings {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    fn filter_cloned<F>(&self, keep: F) -> Vec<BookingRecord>
    where
        F: Fn(&BookingRecord) -> bool,
    {
        let guard = self.inner.read().unwrap_or_else(PoisonError::into_inner);
        guard.iter().filter(|b| keep(b)).cloned().collect()
    }
}

impl BookingRepository for InMemoryBookings {
    fn add(&self, booking: BookingRecord) -> BookingRecord {
        let mut guard = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        guard.push(booking.clone());
        booking
    }

    fn get(&self, id: &str) -> Option<BookingRecord> {
        let guard = self.inner.read().unwrap_or_else(PoisonError::into_inner);
        guard.iter().find(|b| b.id == id).cloned()
    }

    fn list_for_user(&self, user_id: &str) -> Vec<BookingRecord> {
        self.filter_cloned(|b| b.user_id == user_id)
    }

    fn list_for_user_with_status(
        &self,
        user_id: &str,
        status: BookingStatus,
    ) -> Vec<BookingRecord> {
        self.filter_cloned(|b| b.user_id == user_id && b.status == status)
    }

    fn update_status(&self, id: &str, status: BookingStatus) -> Option<BookingRecord> {
        let mut guard = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        let booking = guard.iter_mut().find(|b| b.id == id)?;
        booking.status = status;
        Some(booking.clone())
    }
}
