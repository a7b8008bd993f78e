//! Procedural flight generation.
//!
//! Every ordered pair of distinct cities on every date in the window is a
//! route-day. Each route-day gets a handful of flights spread across the
//! day, priced and timed by the route's tier.

use std::sync::LazyLock;

use rand::Rng;
use rand::seq::IndexedRandom;
use regex::Regex;
use tracing::warn;

use super::cities::{
    LONG_HAUL_AIRPORTS, NATIONAL_HUB, NATIONAL_HUB_PARTNERS, NEAR_AIRPORTS, REGIONAL_HUB,
    REGIONAL_HUB_PARTNERS, SHORT_HOP_AIRPORTS,
};
use super::config::CatalogConfig;
use crate::domain::{City, ClockTime, FlightDuration, FlightRecord};

/// Flights on a popular route-day.
const POPULAR_FLIGHTS_PER_DAY: u32 = 5;

/// Minimum flights on any other route-day; one more is added half the time.
const BASE_FLIGHTS_PER_DAY: u32 = 2;

/// Seats on a flight are drawn from `MIN_SEATS..MIN_SEATS + SEAT_SPAN`.
const MIN_SEATS: u32 = 10;
const SEAT_SPAN: u32 = 100;

/// Flight numbers are drawn from `100..=999`.
const FLIGHT_NUMBER_MIN: u32 = 100;
const FLIGHT_NUMBER_MAX: u32 = 999;

/// Three uppercase ASCII letters, the shape of an airport code.
static CODE_SHAPE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Z]{3}$").expect("code pattern is valid"));

/// Returns true if `code` looks like an airport code.
pub(super) fn is_code_shaped(code: &str) -> bool {
    CODE_SHAPE_RE.is_match(code)
}

/// Pricing and timing class of a route.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteTier {
    /// Regional hub to a nearby major city.
    RegionalNear,
    /// Regional hub to one of its closest neighbours.
    RegionalShortHop,
    /// Regional hub to anywhere further afield.
    RegionalFar,
    /// Any other pair of code-shaped airports.
    Domestic,
    /// National hub to a long-haul destination.
    LongHaul,
    /// Everything else.
    MediumHaul,
}

impl RouteTier {
    /// Classify a route by its endpoint codes.
    ///
    /// Rules are tried in order and the first match wins:
    /// 1. either endpoint is the regional hub
    /// 2. both codes are 3 uppercase letters
    /// 3. the national hub to a long-haul destination
    /// 4. anything else
    ///
    /// Rule 3 can only match codes that also satisfy rule 2, so with the
    /// built-in city table it never fires.
    pub fn classify(departure: &str, arrival: &str) -> Self {
        if departure == REGIONAL_HUB || arrival == REGIONAL_HUB {
            if either_in(&NEAR_AIRPORTS, departure, arrival) {
                RouteTier::RegionalNear
            } else if either_in(&SHORT_HOP_AIRPORTS, departure, arrival) {
                RouteTier::RegionalShortHop
            } else {
                RouteTier::RegionalFar
            }
        } else if is_code_shaped(departure) && is_code_shaped(arrival) {
            RouteTier::Domestic
        } else if departure == NATIONAL_HUB && LONG_HAUL_AIRPORTS.contains(&arrival) {
            RouteTier::LongHaul
        } else {
            RouteTier::MediumHaul
        }
    }

    /// Whole hours of flight time: `(base, span)`, drawn as `base + 0..span`.
    fn hours(self) -> (u32, u32) {
        match self {
            RouteTier::RegionalNear => (2, 1),
            RouteTier::RegionalShortHop => (1, 1),
            RouteTier::RegionalFar => (6, 8),
            RouteTier::Domestic => (1, 3),
            RouteTier::LongHaul => (14, 4),
            RouteTier::MediumHaul => (6, 6),
        }
    }

    /// Fare: `(base, span)`, drawn as `base + 0..span`.
    fn price(self) -> (u32, u32) {
        match self {
            RouteTier::RegionalNear => (5000, 3000),
            RouteTier::RegionalShortHop => (3000, 2000),
            RouteTier::RegionalFar => (35000, 25000),
            RouteTier::Domestic => (3000, 4000),
            RouteTier::LongHaul => (75000, 25000),
            RouteTier::MediumHaul => (35000, 25000),
        }
    }
}

fn either_in(set: &[&str], departure: &str, arrival: &str) -> bool {
    set.contains(&departure) || set.contains(&arrival)
}

/// Returns true if the route gets the popular-route schedule.
pub fn is_popular_route(departure: &str, arrival: &str) -> bool {
    (departure == REGIONAL_HUB && REGIONAL_HUB_PARTNERS.contains(&arrival))
        || (REGIONAL_HUB_PARTNERS.contains(&departure) && arrival == REGIONAL_HUB)
        || (departure == NATIONAL_HUB && NATIONAL_HUB_PARTNERS.contains(&arrival))
        || (NATIONAL_HUB_PARTNERS.contains(&departure) && arrival == NATIONAL_HUB)
}

/// Generate flights for every route-day in the configured window.
///
/// Ids are assigned sequentially from 1 across the whole run.
pub fn generate_flights<R: Rng + ?Sized>(
    cities: &[City],
    airlines: &[&str],
    config: &CatalogConfig,
    rng: &mut R,
) -> Vec<FlightRecord> {
    if airlines.is_empty() {
        warn!("no airlines configured, catalog will be empty");
        return Vec::new();
    }

    let mut flights = Vec::new();
    let mut next_id: u64 = 1;

    for date in config.dates() {
        let date = date.format("%Y-%m-%d").to_string();

        for (i, departure) in cities.iter().enumerate() {
            for (j, arrival) in cities.iter().enumerate() {
                if i == j || departure.code == arrival.code {
                    continue;
                }

                let route = RouteDay {
                    departure,
                    arrival,
                    date: &date,
                    tier: RouteTier::classify(departure.code, arrival.code),
                };
                let count = flights_per_route_day(departure.code, arrival.code, rng);

                for slot in 0..count {
                    let flight = route.flight(next_id, slot, count, airlines, rng);
                    flights.push(flight);
                    next_id += 1;
                }
            }
        }
    }

    flights
}

/// Number of flights to schedule on one route-day.
fn flights_per_route_day<R: Rng + ?Sized>(departure: &str, arrival: &str, rng: &mut R) -> u32 {
    if is_popular_route(departure, arrival) {
        POPULAR_FLIGHTS_PER_DAY
    } else {
        BASE_FLIGHTS_PER_DAY + rng.random_range(0..2)
    }
}

/// Departure hour for `slot` of `count`.
///
/// The day is split into `count` equal bands and the hour is drawn
/// uniformly from the slot's band.
fn departure_hour<R: Rng + ?Sized>(slot: u32, count: u32, rng: &mut R) -> u32 {
    let band = 24.0 / f64::from(count);
    let hour = (band * f64::from(slot) + rng.random::<f64>() * band).floor();
    (hour as u32).min(23)
}

/// Draw `base + 0..span`.
fn draw<R: Rng + ?Sized>((base, span): (u32, u32), rng: &mut R) -> u32 {
    base + rng.random_range(0..span.max(1))
}

/// One (departure, arrival, date) combination being filled with flights.
struct RouteDay<'a> {
    departure: &'a City,
    arrival: &'a City,
    date: &'a str,
    tier: RouteTier,
}

impl RouteDay<'_> {
    fn flight<R: Rng + ?Sized>(
        &self,
        id: u64,
        slot: u32,
        count: u32,
        airlines: &[&str],
        rng: &mut R,
    ) -> FlightRecord {
        let hour = departure_hour(slot, count, rng);

        let duration = FlightDuration::new(draw(self.tier.hours(), rng), rng.random_range(0..60));
        let price = draw(self.tier.price(), rng);

        // Arrival is computed from the top of the departure hour. The
        // displayed departure minute is drawn separately below, so the
        // two times do not always differ by exactly the duration.
        let arrival = ClockTime::from_minutes(hour * 60 + duration.total_minutes());
        let departure = ClockTime::from_minutes(hour * 60 + rng.random_range(0..60));

        let airline = airlines.choose(rng).copied().unwrap_or_default();
        let prefix: String = airline.chars().take(2).collect::<String>().to_uppercase();
        let number = rng.random_range(FLIGHT_NUMBER_MIN..=FLIGHT_NUMBER_MAX);

        FlightRecord {
            id: id.to_string(),
            airline: airline.to_string(),
            flight_number: format!("{prefix}{number}"),
            departure_city: self.departure.city.to_string(),
            departure_airport: self.departure.airport.to_string(),
            departure_code: self.departure.code.to_string(),
            arrival_city: self.arrival.city.to_string(),
            arrival_airport: self.arrival.airport.to_string(),
            arrival_code: self.arrival.code.to_string(),
            departure_time: departure.to_string(),
            arrival_time: arrival.to_string(),
            duration: duration.to_string(),
            price,
            available_seats: MIN_SEATS + rng.random_range(0..SEAT_SPAN),
            date: self.date.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::cities::{AIRLINES, CITIES};
    use crate::domain::parse_clock_minutes;
    use chrono::NaiveDate;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use std::collections::{HashMap, HashSet};

    fn one_day() -> CatalogConfig {
        let day = NaiveDate::from_ymd_opt(2025, 5, 1).unwrap();
        CatalogConfig::new(day, day)
    }

    fn generate(seed: u64) -> Vec<FlightRecord> {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        generate_flights(&CITIES, &AIRLINES, &one_day(), &mut rng)
    }

    #[test]
    fn code_shape() {
        assert!(is_code_shaped("DEL"));
        assert!(is_code_shaped("ZZZ"));
        assert!(!is_code_shaped("del"));
        assert!(!is_code_shaped("DEl"));
        assert!(!is_code_shaped("DE"));
        assert!(!is_code_shaped("DELH"));
        assert!(!is_code_shaped("D1L"));
        assert!(!is_code_shaped(""));
    }

    #[test]
    fn classify_regional_hub_routes() {
        assert_eq!(RouteTier::classify("PNQ", "DEL"), RouteTier::RegionalNear);
        assert_eq!(RouteTier::classify("CCU", "PNQ"), RouteTier::RegionalNear);
        assert_eq!(RouteTier::classify("PNQ", "BOM"), RouteTier::RegionalShortHop);
        assert_eq!(RouteTier::classify("HYD", "PNQ"), RouteTier::RegionalShortHop);
        assert_eq!(RouteTier::classify("PNQ", "LHR"), RouteTier::RegionalFar);
        assert_eq!(RouteTier::classify("MAA", "PNQ"), RouteTier::RegionalFar);
    }

    #[test]
    fn classify_code_shaped_routes_as_domestic() {
        assert_eq!(RouteTier::classify("DEL", "BOM"), RouteTier::Domestic);
        assert_eq!(RouteTier::classify("LHR", "CDG"), RouteTier::Domestic);
        // Long-haul rule is shadowed by the domestic rule for real codes
        assert_eq!(RouteTier::classify("DEL", "JFK"), RouteTier::Domestic);
    }

    #[test]
    fn classify_non_code_shaped_routes() {
        assert_eq!(RouteTier::classify("DEL", "jfk"), RouteTier::MediumHaul);
        assert_eq!(RouteTier::classify("X1", "LHR"), RouteTier::MediumHaul);
    }

    #[test]
    fn popular_routes() {
        assert!(is_popular_route("PNQ", "DEL"));
        assert!(is_popular_route("DXB", "PNQ"));
        assert!(is_popular_route("DEL", "HYD"));
        assert!(is_popular_route("BLR", "DEL"));
        assert!(!is_popular_route("DEL", "DXB"));
        assert!(!is_popular_route("BOM", "BLR"));
        assert!(!is_popular_route("PNQ", "CCU"));
    }

    #[test]
    fn departure_hours_stay_in_their_band() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        for count in [2, 3, 5] {
            let band = 24 / count;
            for slot in 0..count {
                for _ in 0..50 {
                    let hour = departure_hour(slot, count, &mut rng);
                    assert!(hour < 24);
                    assert!(hour >= (band * slot).saturating_sub(1));
                }
            }
        }
    }

    #[test]
    fn every_ordered_pair_is_covered() {
        let flights = generate(1);
        let routes: HashSet<_> = flights
            .iter()
            .map(|f| (f.departure_code.clone(), f.arrival_code.clone()))
            .collect();
        assert_eq!(routes.len(), CITIES.len() * (CITIES.len() - 1));
    }

    #[test]
    fn popular_routes_get_five_flights_others_two_or_three() {
        let flights = generate(2);
        let mut per_route: HashMap<(&str, &str), u32> = HashMap::new();
        for f in &flights {
            *per_route
                .entry((f.departure_code.as_str(), f.arrival_code.as_str()))
                .or_default() += 1;
        }
        for ((dep, arr), count) in per_route {
            if is_popular_route(dep, arr) {
                assert_eq!(count, 5, "{dep}->{arr}");
            } else {
                assert!((2..=3).contains(&count), "{dep}->{arr}: {count}");
            }
        }
    }

    #[test]
    fn ids_are_sequential_from_one() {
        let flights = generate(4);
        for (idx, f) in flights.iter().enumerate() {
            assert_eq!(f.id, (idx + 1).to_string());
        }
    }

    #[test]
    fn tier_bounds_hold() {
        let flights = generate(5);
        for f in &flights {
            let tier = RouteTier::classify(&f.departure_code, &f.arrival_code);
            // Extra minutes are always below 60, so the total splits exactly.
            let total = FlightDuration::find_in(&f.duration).unwrap().total_minutes();
            let (h_base, h_span) = tier.hours();
            let (p_base, p_span) = tier.price();
            assert!((h_base..h_base + h_span).contains(&(total / 60)));
            assert_eq!(f.duration, FlightDuration::new(total / 60, total % 60).to_string());
            assert!((p_base..p_base + p_span).contains(&f.price));
        }
    }

    #[test]
    fn flight_numbers_use_airline_prefix() {
        let flights = generate(6);
        for f in &flights {
            let prefix: String = f.airline.chars().take(2).collect::<String>().to_uppercase();
            assert!(f.flight_number.starts_with(&prefix));
            let number: u32 = f.flight_number[prefix.len()..].parse().unwrap();
            assert!((100..=999).contains(&number));
        }
    }

    #[test]
    fn arrival_is_departure_hour_plus_duration() {
        let flights = generate(7);
        for f in &flights {
            let departure = parse_clock_minutes(&f.departure_time).unwrap();
            let hour_start = departure / 60 * 60;
            let duration = FlightDuration::find_in(&f.duration).unwrap();
            let expected = ClockTime::from_minutes(hour_start + duration.total_minutes());
            assert_eq!(f.arrival_time, expected.to_string());
        }
    }

    #[test]
    fn same_seed_same_catalog() {
        assert_eq!(generate(11), generate(11));
        assert_ne!(generate(11), generate(12));
    }

    #[test]
    fn empty_airlines_yields_no_flights() {
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        assert!(generate_flights(&CITIES, &[], &one_day(), &mut rng).is_empty());
    }

    #[test]
    fn non_code_shaped_table_reaches_medium_haul() {
        const TABLE: [City; 2] = [
            City::new("Alpha", "Alpha Field", "A1"),
            City::new("Beta", "Beta Field", "BTA"),
        ];
        let mut rng = ChaCha8Rng::seed_from_u64(8);
        let flights = generate_flights(&TABLE, &AIRLINES, &one_day(), &mut rng);
        assert!(!flights.is_empty());
        for f in &flights {
            assert!(f.price >= 35000 && f.price < 60000);
        }
    }
}
