//! HTTP route handlers.

use std::fmt::Display;
use std::str::FromStr;

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use tower_http::trace::TraceLayer;
use tracing::{debug, error};

use crate::accounts::{self, LoginError, Registration, RegistrationError};
use crate::catalog::{SearchQuery, SortDirection, SortKey, sort_flights};
use crate::domain::{BookingRecord, BookingStatus, UserRecord};
use crate::reservations::{self, BookingError, BookingRequest};
use crate::session::{self, SessionError};

use super::dto::*;
use super::state::AppState;

/// Default number of flights returned by the explore endpoint.
const DEFAULT_EXPLORE_COUNT: usize = 3;

/// Upper bound on the explore sample size.
const MAX_EXPLORE_COUNT: usize = 20;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/flights/search", get(search_flights))
        .route("/api/flights/explore", get(explore_flights))
        .route("/api/flights/dates", get(available_dates))
        .route("/api/flights/:id", get(get_flight))
        .route("/api/cities", get(list_cities))
        .route("/api/cities/suggest", get(suggest_cities))
        .route("/api/auth/register", post(register))
        .route("/api/auth/login", post(login))
        .route("/api/auth/logout", post(logout))
        .route("/api/auth/me", get(current_user))
        .route("/api/bookings", get(list_bookings).post(create_booking))
        .route("/api/bookings/:id", get(get_booking))
        .route("/api/bookings/:id/cancel", post(cancel_booking))
        .route("/api/theme", get(get_theme))
        .route("/api/theme/toggle", post(toggle_theme))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Search flights for a route and date, then sort.
async fn search_flights(
    State(state): State<AppState>,
    Query(req): Query<SearchFlightsRequest>,
) -> Result<Json<SearchFlightsResponse>, AppError> {
    require_field("from", &req.from)?;
    require_field("to", &req.to)?;
    require_field("date", &req.date)?;

    let key: SortKey = parse_optional(req.sort.as_deref())?;
    let direction: SortDirection = parse_optional(req.direction.as_deref())?;

    let query = SearchQuery::new(req.from.trim(), req.to.trim(), req.date.trim());
    let results = state.search.search(&query).await;
    let flights = sort_flights(&results, key, direction);

    Ok(Json(SearchFlightsResponse {
        count: flights.len(),
        flights,
    }))
}

/// A random sample of flights for the landing page.
async fn explore_flights(
    State(state): State<AppState>,
    Query(req): Query<ExploreRequest>,
) -> Json<FlightsResponse> {
    let count = req
        .count
        .unwrap_or(DEFAULT_EXPLORE_COUNT)
        .min(MAX_EXPLORE_COUNT);
    let flights = state.catalog().random(count, &mut rand::rng());

    Json(FlightsResponse { flights })
}

/// Dates on which a route has flights.
async fn available_dates(
    State(state): State<AppState>,
    Query(req): Query<AvailableDatesRequest>,
) -> Result<Json<AvailableDatesResponse>, AppError> {
    require_field("from", &req.from)?;
    require_field("to", &req.to)?;

    let dates = state
        .catalog()
        .available_dates(req.from.trim(), req.to.trim());

    Ok(Json(AvailableDatesResponse { dates }))
}

/// Look up a single flight.
async fn get_flight(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<crate::domain::FlightRecord>, AppError> {
    state
        .catalog()
        .get_by_id(&id)
        .cloned()
        .map(Json)
        .ok_or_else(|| AppError::NotFound {
            message: format!("flight {id} not found"),
        })
}

/// All cities with flights.
async fn list_cities(State(state): State<AppState>) -> Json<CitiesResponse> {
    Json(CitiesResponse {
        cities: state.catalog().available_cities(),
    })
}

/// Cities matching a partial name or code.
async fn suggest_cities(
    State(state): State<AppState>,
    Query(req): Query<SuggestCitiesRequest>,
) -> Json<CitiesResponse> {
    Json(CitiesResponse {
        cities: state.catalog().suggest_cities(req.q.trim()),
    })
}

/// Register a new user and sign them in.
async fn register(
    State(state): State<AppState>,
    Json(req): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<UserView>), AppError> {
    let form = Registration {
        name: req.name,
        email: req.email,
        password: req.password,
        confirm_password: req.confirm_password,
    };
    let user = accounts::register(state.users.as_ref(), form)?;
    session::sign_in(state.session.as_ref(), &user)?;

    Ok((StatusCode::CREATED, Json(UserView::from(&user))))
}

/// Check credentials and sign in.
async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<UserView>, AppError> {
    let user = accounts::login(state.users.as_ref(), &req.email, &req.password)?;
    session::sign_in(state.session.as_ref(), &user)?;

    Ok(Json(UserView::from(&user)))
}

/// Clear the signed-in user.
async fn logout(State(state): State<AppState>) -> Result<StatusCode, AppError> {
    session::sign_out(state.session.as_ref())?;
    Ok(StatusCode::NO_CONTENT)
}

/// The signed-in user.
async fn current_user(State(state): State<AppState>) -> Result<Json<UserView>, AppError> {
    let user = require_user(&state)?;
    Ok(Json(UserView::from(&user)))
}

/// The signed-in user's bookings, optionally filtered by status.
async fn list_bookings(
    State(state): State<AppState>,
    Query(req): Query<ListBookingsRequest>,
) -> Result<Json<BookingsResponse>, AppError> {
    let user = require_user(&state)?;

    let status = req
        .status
        .as_deref()
        .map(str::parse::<BookingStatus>)
        .transpose()
        .map_err(bad_request)?;

    let records = match status {
        Some(status) => state.bookings.list_for_user_with_status(&user.id, status),
        None => state.bookings.list_for_user(&user.id),
    };

    let bookings = records
        .into_iter()
        .map(|b| booking_view(&state, b))
        .collect();

    Ok(Json(BookingsResponse { bookings }))
}

/// Book a flight for the signed-in user.
async fn create_booking(
    State(state): State<AppState>,
    Json(req): Json<CreateBookingRequest>,
) -> Result<(StatusCode, Json<BookingView>), AppError> {
    let user = require_user(&state)?;

    let request = BookingRequest {
        flight_id: req.flight_id,
        user_id: user.id,
        passengers: req.passengers,
    };
    let booking = reservations::book_flight(state.catalog(), state.bookings.as_ref(), request)?;

    Ok((StatusCode::CREATED, Json(booking_view(&state, booking))))
}

/// One of the signed-in user's bookings.
async fn get_booking(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<BookingView>, AppError> {
    let user = require_user(&state)?;

    let booking = state
        .bookings
        .get(&id)
        .filter(|b| b.user_id == user.id)
        .ok_or_else(|| AppError::NotFound {
            message: format!("booking {id} not found"),
        })?;

    Ok(Json(booking_view(&state, booking)))
}

/// Cancel one of the signed-in user's upcoming bookings.
async fn cancel_booking(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<BookingView>, AppError> {
    let user = require_user(&state)?;
    let booking = reservations::cancel_booking(state.bookings.as_ref(), &id, &user.id)?;

    Ok(Json(booking_view(&state, booking)))
}

/// The saved theme, or the system preference.
async fn get_theme(State(state): State<AppState>) -> Result<Json<ThemeResponse>, AppError> {
    let theme = session::load_theme(state.session.as_ref(), state.prefers_dark)?;
    Ok(Json(ThemeResponse { theme }))
}

/// Flip and save the theme.
async fn toggle_theme(State(state): State<AppState>) -> Result<Json<ThemeResponse>, AppError> {
    let theme = session::toggle_theme(state.session.as_ref(), state.prefers_dark)?;
    Ok(Json(ThemeResponse { theme }))
}

/// The signed-in user, or 401.
fn require_user(state: &AppState) -> Result<UserRecord, AppError> {
    session::current_user(state.session.as_ref())?.ok_or_else(|| AppError::Unauthorized {
        message: "not signed in".to_string(),
    })
}

/// Attach the referenced flight to a booking.
fn booking_view(state: &AppState, booking: BookingRecord) -> BookingView {
    let flight = state.catalog().get_by_id(&booking.flight_id).cloned();
    BookingView { booking, flight }
}

fn require_field(name: &str, value: &str) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::BadRequest {
            message: format!("{name} is required"),
        });
    }
    Ok(())
}

/// Parse an optional query parameter, using the type's default when absent.
fn parse_optional<T>(value: Option<&str>) -> Result<T, AppError>
where
    T: FromStr + Default,
    T::Err: Display,
{
    value
        .map(str::parse::<T>)
        .transpose()
        .map(Option::unwrap_or_default)
        .map_err(bad_request)
}

fn bad_request(e: impl Display) -> AppError {
    AppError::BadRequest {
        message: e.to_string(),
    }
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    Unauthorized { message: String },
    NotFound { message: String },
    Conflict { message: String },
    Internal { message: String },
}

impl From<BookingError> for AppError {
    fn from(e: BookingError) -> Self {
        let message = e.to_string();
        match e {
            BookingError::FlightNotFound(_) | BookingError::BookingNotFound(_) => {
                AppError::NotFound { message }
            }
            BookingError::InvalidPassengers { .. } => AppError::BadRequest { message },
            BookingError::NotCancellable { .. } => AppError::Conflict { message },
        }
    }
}

impl From<RegistrationError> for AppError {
    fn from(e: RegistrationError) -> Self {
        bad_request(e)
    }
}

impl From<LoginError> for AppError {
    fn from(e: LoginError) -> Self {
        AppError::Unauthorized {
            message: e.to_string(),
        }
    }
}

impl From<SessionError> for AppError {
    fn from(e: SessionError) -> Self {
        AppError::Internal {
            message: e.to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
            AppError::Unauthorized { message } => (StatusCode::UNAUTHORIZED, message),
            AppError::NotFound { message } => (StatusCode::NOT_FOUND, message),
            AppError::Conflict { message } => (StatusCode::CONFLICT, message),
            AppError::Internal { message } => (StatusCode::INTERNAL_SERVER_ERROR, message),
        };

        if status.is_server_error() {
            error!(%status, %message, "request failed");
        } else {
            debug!(%status, %message, "request rejected");
        }

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}
