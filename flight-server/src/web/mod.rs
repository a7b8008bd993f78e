//! Web layer for the flight booking service.
//!
//! Provides JSON endpoints for searching flights, managing the signed-in
//! user, bookings and the theme preference.

mod dto;
mod routes;
mod state;

pub use dto::*;
pub use routes::{AppError, create_router};
pub use state::AppState;
