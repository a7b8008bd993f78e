//! The signed-in user slot.

use tracing::warn;

use super::error::SessionError;
use super::store::KeyValueStore;
use crate::domain::UserRecord;

/// Storage key for the serialized current user.
pub const USER_KEY: &str = "user";

/// Read the signed-in user, if any.
///
/// Data that does not parse as a user record is removed and treated as
/// signed out.
pub fn current_user(store: &dyn KeyValueStore) -> Result<Option<UserRecord>, SessionError> {
    let Some(raw) = store.get(USER_KEY)? else {
        return Ok(None);
    };

    match serde_json::from_str(&raw) {
        Ok(user) => Ok(Some(user)),
        Err(e) => {
            warn!(error = %e, "discarding unreadable session user");
            store.delete(USER_KEY)?;
            Ok(None)
        }
    }
}

/// Record `user` as signed in.
pub fn sign_in(store: &dyn KeyValueStore, user: &UserRecord) -> Result<(), SessionError> {
    let json = serde_json::to_string(user).map_err(|e| SessionError::Json {
        message: format!("failed to serialize user: {}", e),
    })?;
    store.set(USER_KEY, &json)
}

/// Clear the signed-in user.
pub fn sign_out(store: &dyn KeyValueStore) -> Result<(), SessionError> {
    store.delete(USER_KEY)
}
