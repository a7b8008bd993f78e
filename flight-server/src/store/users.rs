//! In-memory user store.

use std::sync::{PoisonError, RwLock};

use super::UserRepository;
use crate::domain::{NewUser, UserRecord};

/// Users held in a locked list.
#[derive(Debug, Default)]
pub struct InMemoryUsers {
    inner: RwLock<Vec<UserRecord>>,
}

impl InMemoryUsers {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store holding the demo account
    /// (`test@example.com` / `password123`).
    pub fn with_demo_user() -> Self {
        let store = Self::new();
        store.add(NewUser::new("Test User", "test@example.com", "password123"));
        store
    }
}

impl UserRepository for InMemoryUsers {
    fn add(&self, user: NewUser) -> UserRecord {
        let mut guard = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        let record = user.with_id((guard.len() + 1).to_string());
        guard.push(record.clone());
        record
    }

    fn get(&self, id: &str) -> Option<UserRecord> {
        let guard = self.inner.read().unwrap_or_else(PoisonError::into_inner);
        guard.iter().find(|u| u.id == id).cloned()
    }

    fn find_by_credentials(&self, email: &str, password: &str) -> Option<UserRecord> {
        let guard = self.inner.read().unwrap_or_else(PoisonError::into_inner);
        guard
            .iter()
            .find(|u| u.email == email && u.password == password)
            .cloned()
    }

    fn is_email_registered(&self, email: &str) -> bool {
        let guard = self.inner.read().unwrap_or_else(PoisonError::into_inner);
        guard.iter().any(|u| u.email == email)
    }
}
