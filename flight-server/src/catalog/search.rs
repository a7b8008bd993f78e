//! Flight search over the catalog.

use tracing::debug;

use super::Catalog;
use crate::domain::FlightRecord;

/// Matches flights by departure and arrival endpoints.
///
/// An endpoint matches when the city name contains the query or the airport
/// code equals it, both case-insensitively. An empty query therefore
/// matches every city; callers that need at least one character must check
/// for themselves.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RouteFilter {
    from: String,
    to: String,
}

impl RouteFilter {
    /// Create a filter; queries are normalized to lowercase.
    pub fn new(from: &str, to: &str) -> Self {
        Self {
            from: from.to_lowercase(),
            to: to.to_lowercase(),
        }
    }

    /// Returns true if the flight's departure and arrival both match.
    pub fn matches(&self, flight: &FlightRecord) -> bool {
        endpoint_matches(&flight.departure_city, &flight.departure_code, &self.from)
            && endpoint_matches(&flight.arrival_city, &flight.arrival_code, &self.to)
    }
}

/// Case-insensitive match of one endpoint against an already-lowercased query.
fn endpoint_matches(city: &str, code: &str, query: &str) -> bool {
    city.to_lowercase().contains(query) || code.to_lowercase() == query
}

/// A search for flights between two places on one date.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SearchQuery {
    route: RouteFilter,
    date: String,
}

impl SearchQuery {
    /// Create a query. `date` must equal a record's `YYYY-MM-DD` date
    /// exactly to match; it is not parsed or validated.
    pub fn new(from: &str, to: &str, date: &str) -> Self {
        Self {
            route: RouteFilter::new(from, to),
            date: date.to_string(),
        }
    }

    /// The requested date.
    pub fn date(&self) -> &str {
        &self.date
    }

    /// Returns true if the flight satisfies the route and date.
    pub fn matches(&self, flight: &FlightRecord) -> bool {
        flight.date == self.date && self.route.matches(flight)
    }
}

impl Catalog {
    /// Find flights matching the query, in catalog order.
    ///
    /// No matches is an empty list, not an error.
    pub fn search(&self, query: &SearchQuery) -> Vec<FlightRecord> {
        let results: Vec<FlightRecord> = self
            .flights()
            .iter()
            .filter(|f| query.matches(f))
            .cloned()
            .collect();

        debug!(
            from = %query.route.from,
            to = %query.route.to,
            date = %query.date,
            results = results.len(),
            "catalog search"
        );

        results
    }
}
