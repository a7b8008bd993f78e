//! Application state for the web layer.

use std::sync::Arc;

use crate::cache::CachedSearch;
use crate::catalog::Catalog;
use crate::session::KeyValueStore;
use crate::store::{BookingRepository, UserRepository};

/// Shared application state.
///
/// Contains all the services needed to handle requests.
#[derive(Clone)]
pub struct AppState {
    /// Cached, delayed catalog search
    pub search: Arc<CachedSearch>,

    /// Booking records
    pub bookings: Arc<dyn BookingRepository>,

    /// Registered users
    pub users: Arc<dyn UserRepository>,

    /// Signed-in user and theme slots
    pub session: Arc<dyn KeyValueStore>,

    /// System dark-mode preference, used when no theme is saved
    pub prefers_dark: bool,
}

impl AppState {
    /// Create a new app state.
    pub fn new(
        search: CachedSearch,
        bookings: impl BookingRepository + 'static,
        users: impl UserRepository + 'static,
        session: Arc<dyn KeyValueStore>,
        prefers_dark: bool,
    ) -> Self {
        Self {
            search: Arc::new(search),
            bookings: Arc::new(bookings),
            users: Arc::new(users),
            session,
            prefers_dark,
        }
    }

    /// The flight catalog behind the search cache.
    pub fn catalog(&self) -> &Catalog {
        self.search.catalog()
    }
}
