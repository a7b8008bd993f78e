//! Light/dark theme preference.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::SessionError;
use super::store::KeyValueStore;

/// Storage key for the theme preference.
pub const THEME_KEY: &str = "theme";

/// Error returned when parsing an unknown theme name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid theme: {0:?}")]
pub struct InvalidTheme(String);

/// Colour theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    /// The other theme.
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Returns the stored name of the theme.
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// The theme implied by a system dark-mode preference.
    pub fn from_system(prefers_dark: bool) -> Self {
        if prefers_dark { Theme::Dark } else { Theme::Light }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = InvalidTheme;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            other => Err(InvalidTheme(other.to_string())),
        }
    }
}

/// Read the saved theme, falling back to the system preference when the
/// slot is empty or holds anything other than `light` or `dark`.
pub fn load_theme(store: &dyn KeyValueStore, prefers_dark: bool) -> Result<Theme, SessionError> {
    let saved = store.get(THEME_KEY)?.and_then(|s| s.parse().ok());
    Ok(saved.unwrap_or_else(|| Theme::from_system(prefers_dark)))
}

/// Save a theme.
pub fn save_theme(store: &dyn KeyValueStore, theme: Theme) -> Result<(), SessionError> {
    store.set(THEME_KEY, theme.as_str())
}

/// Flip the current theme and save the result.
pub fn toggle_theme(store: &dyn KeyValueStore, prefers_dark: bool) -> Result<Theme, SessionError> {
    let next = load_theme(store, prefers_dark)?.toggled();
    save_theme(store, next)?;
    Ok(next)
}
