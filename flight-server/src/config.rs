//! Server configuration from the environment.

use std::net::SocketAddr;
use std::path::PathBuf;

use crate::cache::CacheConfig;
use crate::catalog::CatalogConfig;

/// Listen address when `FLIGHTS_ADDR` is unset.
const DEFAULT_ADDR: ([u8; 4], u16) = ([127, 0, 0, 1], 3000);

/// Error returned when an environment variable holds an invalid value.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid {name}={value:?}: {reason}")]
pub struct ConfigError {
    name: &'static str,
    value: String,
    reason: String,
}

/// Everything the server needs to start.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address to listen on.
    pub addr: SocketAddr,

    /// Catalog window, seed and search latency.
    pub catalog: CatalogConfig,

    /// Search-result cache bounds.
    pub cache: CacheConfig,

    /// File for the session/theme store; in-memory when unset.
    pub state_file: Option<PathBuf>,

    /// Theme used when none has been saved.
    pub prefers_dark: bool,
}

impl ServerConfig {
    /// Read configuration from the process environment.
    ///
    /// | Variable | Default |
    /// |---|---|
    /// | `FLIGHTS_ADDR` | `127.0.0.1:3000` |
    /// | `FLIGHTS_SEED` | random |
    /// | `FLIGHTS_SEARCH_DELAY_MS` | `500` |
    /// | `FLIGHTS_STATE_FILE` | in-memory |
    /// | `FLIGHTS_PREFERS_DARK` | `false` |
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Read configuration through `lookup`, which maps a variable name to
    /// its value.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let addr: SocketAddr =
            parse_var(&lookup, "FLIGHTS_ADDR")?.unwrap_or_else(|| DEFAULT_ADDR.into());

        let mut catalog = CatalogConfig::default();
        if let Some(seed) = parse_var(&lookup, "FLIGHTS_SEED")? {
            catalog = catalog.with_seed(seed);
        }
        if let Some(delay) = parse_var(&lookup, "FLIGHTS_SEARCH_DELAY_MS")? {
            catalog = catalog.with_search_delay_ms(delay);
        }

        let state_file = lookup("FLIGHTS_STATE_FILE")
            .filter(|s| !s.trim().is_empty())
            .map(PathBuf::from);

        let prefers_dark = parse_var(&lookup, "FLIGHTS_PREFERS_DARK")?.unwrap_or(false);

        Ok(Self {
            addr,
            catalog,
            cache: CacheConfig::default(),
            state_file,
            prefers_dark,
        })
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            addr: DEFAULT_ADDR.into(),
            catalog: CatalogConfig::default(),
            cache: CacheConfig::default(),
            state_file: None,
            prefers_dark: false,
        }
    }
}

/// Parse an optional variable; unset or blank is `None`.
fn parse_var<T, F>(lookup: &F, name: &'static str) -> Result<Option<T>, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
    F: Fn(&str) -> Option<String>,
{
    let Some(value) = lookup(name).filter(|s| !s.trim().is_empty()) else {
        return Ok(None);
    };
    match value.trim().parse::<T>() {
        Ok(parsed) => Ok(Some(parsed)),
        Err(e) => Err(ConfigError {
            name,
            reason: e.to_string(),
            value,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(vars: &[(&str, &str)]) -> Result<ServerConfig, ConfigError> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        ServerConfig::from_lookup(|name| map.get(name).cloned())
    }

    #[test]
    fn defaults_when_unset() {
        let config = config(&[]).unwrap();
        assert_eq!(config.addr, SocketAddr::from(([127, 0, 0, 1], 3000)));
        assert_eq!(config.catalog.seed, None);
        assert_eq!(config.catalog.search_delay_ms, 500);
        assert_eq!(config.state_file, None);
        assert!(!config.prefers_dark);
    }

    #[test]
    fn reads_all_variables() {
        let config = config(&[
            ("FLIGHTS_ADDR", "0.0.0.0:8080"),
            ("FLIGHTS_SEED", "42"),
            ("FLIGHTS_SEARCH_DELAY_MS", "0"),
            ("FLIGHTS_STATE_FILE", "/tmp/state.json"),
            ("FLIGHTS_PREFERS_DARK", "true"),
        ])
        .unwrap();

        assert_eq!(config.addr.port(), 8080);
        assert_eq!(config.catalog.seed, Some(42));
        assert_eq!(config.catalog.search_delay_ms, 0);
        assert_eq!(config.state_file, Some(PathBuf::from("/tmp/state.json")));
        assert!(config.prefers_dark);
    }

    #[test]
    fn blank_values_are_unset() {
        let config = config(&[("FLIGHTS_SEED", " "), ("FLIGHTS_STATE_FILE", "")]).unwrap();
        assert_eq!(config.catalog.seed, None);
        assert_eq!(config.state_file, None);
    }

    #[test]
    fn invalid_values_are_errors() {
        let err = config(&[("FLIGHTS_SEED", "lots")]).unwrap_err();
        assert!(err.to_string().starts_with("invalid FLIGHTS_SEED=\"lots\""));

        assert!(config(&[("FLIGHTS_ADDR", "nowhere")]).is_err());
        assert!(config(&[("FLIGHTS_PREFERS_DARK", "yes")]).is_err());
    }
}
