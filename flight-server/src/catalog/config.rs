//! Catalog generation configuration.

use std::time::Duration;

use chrono::NaiveDate;

/// Configuration parameters for building and searching the catalog.
#[derive(Debug, Clone)]
pub struct CatalogConfig {
    /// First operating date (inclusive).
    pub start_date: NaiveDate,

    /// Last operating date (inclusive).
    pub end_date: NaiveDate,

    /// Seed for the generator's RNG.
    /// `None` draws a fresh seed at startup.
    pub seed: Option<u64>,

    /// Artificial latency added to every search (milliseconds).
    pub search_delay_ms: u64,
}

impl CatalogConfig {
    /// Create a new configuration for the given date window.
    pub fn new(start_date: NaiveDate, end_date: NaiveDate) -> Self {
        Self {
            start_date,
            end_date,
            ..Self::default()
        }
    }

    /// Use a fixed RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the artificial search latency.
    pub fn with_search_delay_ms(mut self, delay_ms: u64) -> Self {
        self.search_delay_ms = delay_ms;
        self
    }

    /// Returns the search latency as a Duration.
    pub fn search_delay(&self) -> Duration {
        Duration::from_millis(self.search_delay_ms)
    }

    /// Every operating date in the window, in order.
    ///
    /// Empty when the end date precedes the start date.
    pub fn dates(&self) -> impl Iterator<Item = NaiveDate> + use<> {
        let end = self.end_date;
        self.start_date.iter_days().take_while(move |d| *d <= end)
    }
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            start_date: NaiveDate::from_ymd_opt(2025, 5, 1).unwrap_or_default(),
            end_date: NaiveDate::from_ymd_opt(2025, 9, 30).unwrap_or_default(),
            seed: None,
            search_delay_ms: 500,
        }
    }
}
