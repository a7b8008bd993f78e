//! The flight catalog.
//!
//! The catalog is generated once at startup and never changes afterwards.
//! Search, sorting and lookups all read from the same owned [`Catalog`],
//! which callers pass around explicitly.

mod cities;
mod config;
mod generate;
mod lookup;
mod search;
mod sort;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::info;

use crate::domain::{City, FlightRecord};

pub use cities::{AIRLINES, CITIES};
pub use config::CatalogConfig;
pub use generate::{RouteTier, is_popular_route};
pub use search::{RouteFilter, SearchQuery};
pub use sort::{
    InvalidSortOption, SortDirection, SortKey, departure_minutes, duration_minutes, sort_flights,
};

/// The in-memory set of generated flights.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    flights: Vec<FlightRecord>,
}

impl Catalog {
    /// Generate a catalog from the built-in city and airline tables.
    pub fn generate<R: Rng + ?Sized>(config: &CatalogConfig, rng: &mut R) -> Self {
        Self::generate_with(&CITIES, &AIRLINES, config, rng)
    }

    /// Generate a catalog from custom city and airline tables.
    pub fn generate_with<R: Rng + ?Sized>(
        cities: &[City],
        airlines: &[&str],
        config: &CatalogConfig,
        rng: &mut R,
    ) -> Self {
        Self {
            flights: generate::generate_flights(cities, airlines, config, rng),
        }
    }

    /// Generate from the configured seed, drawing a fresh one if unset.
    ///
    /// The seed is logged so a run can be reproduced.
    pub fn seeded(config: &CatalogConfig) -> Self {
        let seed = config.seed.unwrap_or_else(rand::random);
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let catalog = Self::generate(config, &mut rng);

        info!(
            seed,
            flights = catalog.len(),
            start = %config.start_date,
            end = %config.end_date,
            "generated flight catalog"
        );

        catalog
    }

    /// Wrap an existing list of flights.
    #[cfg(test)]
    pub(crate) fn from_flights(flights: Vec<FlightRecord>) -> Self {
        Self { flights }
    }

    /// All flights, in generation order.
    pub fn flights(&self) -> &[FlightRecord] {
        &self.flights
    }

    /// Number of flights.
    pub fn len(&self) -> usize {
        self.flights.len()
    }

    /// Returns true if the catalog has no flights.
    pub fn is_empty(&self) -> bool {
        self.flights.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn seeded_is_reproducible() {
        let day = chrono::NaiveDate::from_ymd_opt(2025, 8, 1).unwrap();
        let config = CatalogConfig::new(day, day).with_seed(2024);
        let a = Catalog::seeded(&config);
        let b = Catalog::seeded(&config);
        assert_eq!(a.flights(), b.flights());
    }

    /// Full default window: every invariant over the whole catalog.
    #[test]
    fn default_catalog_invariants() {
        let config = CatalogConfig::default().with_seed(1);
        let catalog = Catalog::seeded(&config);

        // 153 days x 380 routes x at least 2 flights
        assert!(catalog.len() >= 153 * 380 * 2);
        assert!(catalog.len() <= 153 * 380 * 5);

        let mut ids = HashSet::with_capacity(catalog.len());
        for f in catalog.flights() {
            assert!(ids.insert(f.id.as_str()), "duplicate id {}", f.id);
            assert_ne!(f.departure_code, f.arrival_code);
            assert!(f.price > 0);
            assert!((10..=109).contains(&f.available_seats));
            let date = chrono::NaiveDate::parse_from_str(&f.date, "%Y-%m-%d").unwrap();
            assert!((config.start_date..=config.end_date).contains(&date));
        }
    }

    #[test]
    fn end_to_end_pune_to_delhi() {
        let config = CatalogConfig::default().with_seed(99);
        let catalog = Catalog::seeded(&config);

        let dates = catalog.available_dates("Pune", "Delhi");
        assert_eq!(dates.len(), 153);

        let results = catalog.search(&SearchQuery::new("Pune", "Delhi", &dates[40]));
        assert_eq!(results.len(), 5);
        for f in &results {
            assert!(f.departure_city.to_lowercase().contains("pune"));
            assert!(f.arrival_city.to_lowercase().contains("delhi"));
        }

        let by_price = sort_flights(&results, SortKey::Price, SortDirection::Asc);
        for pair in by_price.windows(2) {
            assert!(pair[0].price <= pair[1].price);
        }
    }
}
