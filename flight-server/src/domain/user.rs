//! User records.

use serde::{Deserialize, Serialize};

/// A registered user.
///
/// The password is stored and compared as plain text; this is demo data
/// only. Never expose a `UserRecord` directly over the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    pub id: String,
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Fields supplied when registering a new user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub password: String,
}

impl NewUser {
    /// Create a registration payload.
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            password: password.into(),
        }
    }

    /// Attach an id, producing the stored record.
    pub fn with_id(self, id: String) -> UserRecord {
        UserRecord {
            id,
            name: self.name,
            email: self.email,
            password: self.password,
        }
    }
}
