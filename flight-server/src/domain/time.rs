//! Clock times and flight durations.
//!
//! Flight records carry their times as display strings (`"HH:MM"` and
//! `"{h}h {m}m"`). This module formats those strings at generation time and
//! parses them back when results are sorted. Parsing is deliberately
//! lenient: it accepts what a display string may plausibly contain, not
//! just what the generator writes.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

/// Minutes in one day.
pub const MINUTES_PER_DAY: u32 = 24 * 60;

/// Error returned when parsing an invalid time or duration string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid time: {reason}")]
pub struct TimeError {
    reason: &'static str,
}

impl TimeError {
    fn new(reason: &'static str) -> Self {
        Self { reason }
    }
}

/// `{h}h {m}m` with any run of whitespace between the groups. Digits are
/// ASCII only.
static DURATION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"([0-9]+)h\s+([0-9]+)m").expect("duration pattern is valid")
});

/// A time of day with minute precision.
///
/// # Examples
///
/// ```
/// use flight_server::domain::ClockTime;
///
/// let t = ClockTime::from_minutes(9 * 60 + 5);
/// assert_eq!(t.to_string(), "09:05");
///
/// // Values past midnight wrap around
/// let late = ClockTime::from_minutes(25 * 60 + 30);
/// assert_eq!(late.to_string(), "01:30");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ClockTime {
    hour: u32,
    minute: u32,
}

impl ClockTime {
    /// Create a time from minutes since midnight, wrapping modulo 24 hours.
    pub fn from_minutes(total: u32) -> Self {
        let wrapped = total % MINUTES_PER_DAY;
        Self {
            hour: wrapped / 60,
            minute: wrapped % 60,
        }
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

/// Parse a displayed `"HH:MM"` string into minutes since midnight.
///
/// The hour and minute fields are read as plain numbers; values are not
/// range-checked and anything after a second colon is ignored. Fields that
/// are missing or not numeric are an error.
///
/// # Examples
///
/// ```
/// use flight_server::domain::parse_clock_minutes;
///
/// assert_eq!(parse_clock_minutes("08:30"), Ok(510));
/// assert_eq!(parse_clock_minutes("8:5"), Ok(485));
/// assert!(parse_clock_minutes("soon").is_err());
/// ```
pub fn parse_clock_minutes(s: &str) -> Result<u32, TimeError> {
    let mut parts = s.split(':');
    let hours = parts
        .next()
        .and_then(parse_field)
        .ok_or_else(|| TimeError::new("invalid hour field"))?;
    let minutes = parts
        .next()
        .and_then(parse_field)
        .ok_or_else(|| TimeError::new("invalid minute field"))?;
    hours
        .checked_mul(60)
        .and_then(|h| h.checked_add(minutes))
        .ok_or_else(|| TimeError::new("time out of range"))
}

fn parse_field(field: &str) -> Option<u32> {
    let field = field.trim();
    if field.is_empty() {
        // Blank reads as zero.
        return Some(0);
    }
    field.parse().ok()
}

/// Scheduled flight duration.
///
/// Displayed as `"{hours}h {minutes}m"`, e.g. `"2h 30m"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FlightDuration {
    hours: u32,
    minutes: u32,
}

impl FlightDuration {
    /// Create a duration from whole hours and extra minutes.
    pub fn new(hours: u32, minutes: u32) -> Self {
        Self { hours, minutes }
    }

    /// Total length in minutes.
    pub fn total_minutes(&self) -> u32 {
        self.hours.saturating_mul(60).saturating_add(self.minutes)
    }

    /// Find a `"{h}h {m}m"` duration anywhere in `s`.
    ///
    /// The hour and minute groups must be separated by at least one
    /// whitespace character, Unicode whitespace included. Only the first
    /// match is considered.
    ///
    /// # Examples
    ///
    /// ```
    /// use flight_server::domain::FlightDuration;
    ///
    /// assert_eq!(FlightDuration::find_in("2h 30m").unwrap().total_minutes(), 150);
    /// assert_eq!(FlightDuration::find_in("approx 1h  5m").unwrap().total_minutes(), 65);
    /// assert!(FlightDuration::find_in("N/A").is_err());
    /// assert!(FlightDuration::find_in("2h30m").is_err());
    /// ```
    pub fn find_in(s: &str) -> Result<Self, TimeError> {
        let caps = DURATION_RE
            .captures(s)
            .ok_or_else(|| TimeError::new("expected \"{h}h {m}m\" duration"))?;
        let hours = caps[1]
            .parse()
            .map_err(|_| TimeError::new("hours out of range"))?;
        let minutes = caps[2]
            .parse()
            .map_err(|_| TimeError::new("minutes out of range"))?;
        Ok(Self::new(hours, minutes))
    }
}

impl fmt::Display for FlightDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}h {}m", self.hours, self.minutes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clock_display_pads() {
        assert_eq!(ClockTime::from_minutes(7 * 60 + 3).to_string(), "07:03");
        assert_eq!(ClockTime::from_minutes(23 * 60 + 45).to_string(), "23:45");
    }

    #[test]
    fn clock_from_minutes_wraps() {
        assert_eq!(ClockTime::from_minutes(0).to_string(), "00:00");
        assert_eq!(ClockTime::from_minutes(1439).to_string(), "23:59");
        assert_eq!(ClockTime::from_minutes(1440).to_string(), "00:00");
        assert_eq!(ClockTime::from_minutes(22 * 60 + 14 * 60 + 7).to_string(), "12:07");
    }

    #[test]
    fn parse_clock_minutes_valid() {
        assert_eq!(parse_clock_minutes("00:00"), Ok(0));
        assert_eq!(parse_clock_minutes("23:59"), Ok(1439));
        assert_eq!(parse_clock_minutes("12:30"), Ok(750));
    }

    #[test]
    fn parse_clock_minutes_is_lenient() {
        assert_eq!(parse_clock_minutes("8:5"), Ok(485));
        assert_eq!(parse_clock_minutes(" 08 : 30 "), Ok(510));
        assert_eq!(parse_clock_minutes("08:30:45"), Ok(510));
        // Not range-checked
        assert_eq!(parse_clock_minutes("25:00"), Ok(1500));
    }

    #[test]
    fn parse_clock_minutes_rejects_malformed() {
        assert!(parse_clock_minutes("0830").is_err());
        assert!(parse_clock_minutes("ab:cd").is_err());
        assert!(parse_clock_minutes("N/A").is_err());
    }

    #[test]
    fn duration_display() {
        assert_eq!(FlightDuration::new(2, 30).to_string(), "2h 30m");
        assert_eq!(FlightDuration::new(14, 0).to_string(), "14h 0m");
    }

    #[test]
    fn duration_find_in() {
        assert_eq!(FlightDuration::find_in("2h 30m").unwrap().total_minutes(), 150);
        assert_eq!(FlightDuration::find_in("0h 0m").unwrap().total_minutes(), 0);
        assert_eq!(FlightDuration::find_in("14h\t59m").unwrap().total_minutes(), 899);
        assert_eq!(FlightDuration::find_in("about 3h 1m total").unwrap().total_minutes(), 181);
    }

    #[test]
    fn duration_find_in_accepts_unicode_whitespace() {
        assert_eq!(FlightDuration::find_in("2h\u{a0}30m").unwrap().total_minutes(), 150);
        assert_eq!(FlightDuration::find_in("1h\u{2003}5m").unwrap().total_minutes(), 65);
    }

    #[test]
    fn duration_find_in_uses_first_match() {
        assert_eq!(FlightDuration::find_in("1h 2m or 3h 4m").unwrap(), FlightDuration::new(1, 2));
        assert_eq!(FlightDuration::find_in("12h 05m").unwrap(), FlightDuration::new(12, 5));
    }

    #[test]
    fn duration_find_in_rejects() {
        assert!(FlightDuration::find_in("").is_err());
        assert!(FlightDuration::find_in("N/A").is_err());
        assert!(FlightDuration::find_in("2h30m").is_err());
        assert!(FlightDuration::find_in("2h 30").is_err());
        assert!(FlightDuration::find_in("h 30m").is_err());
    }
}
