//! Point and set queries against the catalog.

use std::collections::{BTreeSet, HashSet};

use rand::Rng;
use rand::seq::SliceRandom;

use super::Catalog;
use super::search::RouteFilter;
use crate::domain::{CityRef, FlightRecord};

/// Minimum query length before city suggestions are offered.
const SUGGEST_MIN_CHARS: usize = 2;

impl Catalog {
    /// Find a flight by id.
    pub fn get_by_id(&self, id: &str) -> Option<&FlightRecord> {
        self.flights().iter().find(|f| f.id == id)
    }

    /// Pick up to `count` flights at random, without repeats.
    pub fn random<R: Rng + ?Sized>(&self, count: usize, rng: &mut R) -> Vec<FlightRecord> {
        let mut refs: Vec<&FlightRecord> = self.flights().iter().collect();
        let (picked, _) = refs.partial_shuffle(rng, count);
        picked.iter().map(|&f| f.clone()).collect()
    }

    /// Distinct dates with at least one flight on the route, in order.
    ///
    /// Uses the same endpoint matching as search. `YYYY-MM-DD` strings sort
    /// chronologically.
    pub fn available_dates(&self, from: &str, to: &str) -> Vec<String> {
        let route = RouteFilter::new(from, to);
        let dates: BTreeSet<&str> = self
            .flights()
            .iter()
            .filter(|f| route.matches(f))
            .map(|f| f.date.as_str())
            .collect();
        dates.into_iter().map(str::to_string).collect()
    }

    /// Every city appearing in the catalog, sorted by name.
    ///
    /// Each city appears once, with the code it was first seen with.
    pub fn available_cities(&self) -> Vec<CityRef> {
        let mut seen: HashSet<&str> = HashSet::new();
        let mut cities = Vec::new();

        for flight in self.flights() {
            for (city, code) in [
                (&flight.departure_city, &flight.departure_code),
                (&flight.arrival_city, &flight.arrival_code),
            ] {
                if seen.insert(city.as_str()) {
                    cities.push(CityRef {
                        city: city.clone(),
                        code: code.clone(),
                    });
                }
            }
        }

        cities.sort_by(|a, b| a.city.cmp(&b.city));
        cities
    }

    /// Cities whose name or code contains `query`, case-insensitively.
    ///
    /// Queries shorter than two characters suggest nothing.
    pub fn suggest_cities(&self, query: &str) -> Vec<CityRef> {
        if query.chars().count() < SUGGEST_MIN_CHARS {
            return Vec::new();
        }
        let query = query.to_lowercase();
        self.available_cities()
            .into_iter()
            .filter(|c| {
                c.city.to_lowercase().contains(&query) || c.code.to_lowercase().contains(&query)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::search::SearchQuery;
    use crate::catalog::{CITIES, CatalogConfig};
    use chrono::NaiveDate;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn catalog() -> Catalog {
        let start = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
        let end = NaiveDate::from_ymd_opt(2025, 6, 4).unwrap();
        let mut rng = ChaCha8Rng::seed_from_u64(9);
        Catalog::generate(&CatalogConfig::new(start, end), &mut rng)
    }

    #[test]
    fn get_by_id_found_and_missing() {
        let catalog = catalog();
        let flight = catalog.get_by_id("17").unwrap();
        assert_eq!(flight.id, "17");
        assert!(catalog.get_by_id("0").is_none());
        assert!(catalog.get_by_id("not-an-id").is_none());
    }

    #[test]
    fn random_returns_distinct_flights() {
        let catalog = catalog();
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let picked = catalog.random(3, &mut rng);
        assert_eq!(picked.len(), 3);
        let ids: HashSet<_> = picked.iter().map(|f| f.id.as_str()).collect();
        assert_eq!(ids.len(), 3);
        for f in &picked {
            assert_eq!(catalog.get_by_id(&f.id), Some(f));
        }
    }

    #[test]
    fn random_is_reproducible_with_seed() {
        let catalog = catalog();
        let a = catalog.random(5, &mut ChaCha8Rng::seed_from_u64(77));
        let b = catalog.random(5, &mut ChaCha8Rng::seed_from_u64(77));
        assert_eq!(a, b);
    }

    #[test]
    fn random_caps_at_catalog_size() {
        let catalog = Catalog::from_flights(catalog().flights()[..4].to_vec());
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        assert_eq!(catalog.random(10, &mut rng).len(), 4);
        assert!(catalog.random(0, &mut rng).is_empty());
    }

    #[test]
    fn available_dates_cover_window() {
        let catalog = catalog();
        let dates = catalog.available_dates("Pune", "Delhi");
        assert_eq!(
            dates,
            vec!["2025-06-01", "2025-06-02", "2025-06-03", "2025-06-04"]
        );
    }

    #[test]
    fn available_dates_are_sorted_and_searchable() {
        let catalog = catalog();
        let dates = catalog.available_dates("tok", "SIN");
        assert!(!dates.is_empty());
        for pair in dates.windows(2) {
            assert!(pair[0] < pair[1]);
        }
        for date in &dates {
            assert!(!catalog.search(&SearchQuery::new("tok", "SIN", date)).is_empty());
        }
    }

    #[test]
    fn available_dates_for_unknown_route() {
        let catalog = catalog();
        assert!(catalog.available_dates("Atlantis", "Delhi").is_empty());
    }

    #[test]
    fn available_cities_lists_every_city_once() {
        let catalog = catalog();
        let cities = catalog.available_cities();
        assert_eq!(cities.len(), CITIES.len());
        for pair in cities.windows(2) {
            assert!(pair[0].city < pair[1].city);
        }
        let pune = cities.iter().find(|c| c.city == "Pune").unwrap();
        assert_eq!(pune.code, "PNQ");
        assert_eq!(cities[0].city, "Ahmedabad");
    }

    #[test]
    fn available_cities_of_empty_catalog() {
        assert!(Catalog::from_flights(Vec::new()).available_cities().is_empty());
    }

    #[test]
    fn suggest_cities_by_name_or_code() {
        let catalog = catalog();
        let names: Vec<_> = catalog
            .suggest_cities("ban")
            .into_iter()
            .map(|c| c.city)
            .collect();
        assert_eq!(names, vec!["Bangalore", "Bangkok"]);

        let by_code = catalog.suggest_cities("pn");
        assert_eq!(by_code.len(), 1);
        assert_eq!(by_code[0].city, "Pune");
    }

    #[test]
    fn suggest_cities_needs_two_characters() {
        let catalog = catalog();
        assert!(catalog.suggest_cities("").is_empty());
        assert!(catalog.suggest_cities("d").is_empty());
        assert!(!catalog.suggest_cities("de").is_empty());
    }
}
