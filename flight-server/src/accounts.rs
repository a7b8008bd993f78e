//! Registration and login.

use tracing::{info, warn};

use crate::domain::{NewUser, UserRecord};
use crate::store::UserRepository;

/// Minimum password length accepted at registration.
pub const MIN_PASSWORD_LEN: usize = 6;

/// Errors from registration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistrationError {
    /// A required field was blank
    #[error("{0} is required")]
    MissingField(&'static str),

    /// Password shorter than the minimum
    #[error("password must be at least {min} characters", min = MIN_PASSWORD_LEN)]
    PasswordTooShort,

    /// Password confirmation differs
    #[error("passwords do not match")]
    PasswordMismatch,
}

/// Errors from login.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LoginError {
    #[error("invalid email or password")]
    InvalidCredentials,
}

/// A registration form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Registration {
    pub name: String,
    pub email: String,
    pub password: String,
    /// Repeated password, checked when present.
    pub confirm_password: Option<String>,
}

impl Registration {
    /// Check the form.
    pub fn validate(&self) -> Result<(), RegistrationError> {
        if self.name.trim().is_empty() {
            return Err(RegistrationError::MissingField("name"));
        }
        if self.email.trim().is_empty() {
            return Err(RegistrationError::MissingField("email"));
        }
        if let Some(confirm) = &self.confirm_password
            && confirm != &self.password
        {
            return Err(RegistrationError::PasswordMismatch);
        }
        if self.password.chars().count() < MIN_PASSWORD_LEN {
            return Err(RegistrationError::PasswordTooShort);
        }
        Ok(())
    }
}

/// Validate and store a new user.
///
/// Email uniqueness is not enforced; a second account with the same email
/// is stored, and login matches the first.
pub fn register(
    users: &dyn UserRepository,
    form: Registration,
) -> Result<UserRecord, RegistrationError> {
    form.validate()?;
    if users.is_email_registered(&form.email) {
        warn!(email = %form.email, "registering a second account for this email");
    }
    let user = users.add(NewUser::new(form.name, form.email, form.password));
    info!(user = %user.id, "user registered");
    Ok(user)
}

/// Check credentials, returning the matching user.
pub fn login(
    users: &dyn UserRepository,
    email: &str,
    password: &str,
) -> Result<UserRecord, LoginError> {
    users
        .find_by_credentials(email, password)
        .ok_or(LoginError::InvalidCredentials)
}
