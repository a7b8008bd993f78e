//! Built-in city and airline tables.

use crate::domain::City;

/// Carriers flights are drawn from.
pub const AIRLINES: [&str; 10] = [
    "Air India",
    "IndiGo",
    "Vistara",
    "SpiceJet",
    "Go First",
    "Emirates",
    "British Airways",
    "United Airlines",
    "Singapore Airlines",
    "Lufthansa",
];

/// Cities served by the catalog: ten Indian cities, then ten international.
pub const CITIES: [City; 20] = [
    City::new("Delhi", "Indira Gandhi International Airport", "DEL"),
    City::new("Mumbai", "Chhatrapati Shivaji International Airport", "BOM"),
    City::new("Bangalore", "Kempegowda International Airport", "BLR"),
    City::new("Pune", "Pune International Airport", "PNQ"),
    City::new("Hyderabad", "Rajiv Gandhi International Airport", "HYD"),
    City::new("Chennai", "Chennai International Airport", "MAA"),
    City::new(
        "Kolkata",
        "Netaji Subhas Chandra Bose International Airport",
        "CCU",
    ),
    City::new("Kochi", "Cochin International Airport", "COK"),
    City::new("Jaipur", "Jaipur International Airport", "JAI"),
    City::new(
        "Ahmedabad",
        "Sardar Vallabhbhai Patel International Airport",
        "AMD",
    ),
    City::new("Dubai", "Dubai International Airport", "DXB"),
    City::new("London", "Heathrow Airport", "LHR"),
    City::new("New York", "John F. Kennedy International Airport", "JFK"),
    City::new("Paris", "Charles de Gaulle Airport", "CDG"),
    City::new("Singapore", "Changi Airport", "SIN"),
    City::new("Tokyo", "Narita International Airport", "NRT"),
    City::new("Sydney", "Sydney Airport", "SYD"),
    City::new("Bangkok", "Suvarnabhumi Airport", "BKK"),
    City::new("Toronto", "Toronto Pearson International Airport", "YYZ"),
    City::new("Frankfurt", "Frankfurt Airport", "FRA"),
];

/// Regional hub whose routes get their own pricing tier.
pub const REGIONAL_HUB: &str = "PNQ";

/// National hub for long-haul service.
pub const NATIONAL_HUB: &str = "DEL";

/// Destinations with frequent service to and from the regional hub.
pub const REGIONAL_HUB_PARTNERS: [&str; 5] = ["DEL", "BOM", "BLR", "HYD", "DXB"];

/// Destinations with frequent service to and from the national hub.
pub const NATIONAL_HUB_PARTNERS: [&str; 3] = ["BOM", "BLR", "HYD"];

/// Airports close to the regional hub with a ~2 hour hop.
pub const NEAR_AIRPORTS: [&str; 2] = ["DEL", "CCU"];

/// Airports closest to the regional hub with a ~1 hour hop.
pub const SHORT_HOP_AIRPORTS: [&str; 3] = ["BOM", "BLR", "HYD"];

/// Long-haul destinations from the national hub.
pub const LONG_HAUL_AIRPORTS: [&str; 3] = ["JFK", "YYZ", "SYD"];
