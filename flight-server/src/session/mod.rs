//! Persisted client state: the signed-in user and the theme preference.
//!
//! Both live in a [`KeyValueStore`] as opaque strings. The store is a
//! single process-wide slot set, mirroring browser local storage.

mod error;
mod store;
mod theme;
mod user;

pub use error::SessionError;
pub use store::{FileStore, KeyValueStore, MemoryStore};
pub use theme::{InvalidTheme, THEME_KEY, Theme, load_theme, save_theme, toggle_theme};
pub use user::{USER_KEY, current_user, sign_in, sign_out};
