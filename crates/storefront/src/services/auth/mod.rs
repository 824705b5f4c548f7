//! Mock authentication service.
//!
//! Simulates credential-based session state without real security:
//! after a fixed artificial delay, any syntactically valid
//! email/password pair succeeds. That is the contract - success is
//! guaranteed once shape validation passes, because there is no backend
//! to check against. No token is issued, no password is stored or
//! hashed, and nothing survives the end of the session.

mod error;

pub use error::AuthError;

use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::info;

use fay_core::Email;

/// Simulated network latency for sign-in and sign-up.
pub const AUTH_DELAY: Duration = Duration::from_millis(800);

/// Minimum password length accepted by sign-in.
const MIN_SIGN_IN_PASSWORD: usize = 6;
/// Minimum password length accepted by sign-up.
const MIN_SIGN_UP_PASSWORD: usize = 8;

/// The signed-in shopper.
///
/// In-memory only; dropped on sign-out or at the end of the session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub first_name: String,
    pub last_name: String,
    pub email: Email,
}

/// Mock credential session store.
#[derive(Debug, Default, Clone)]
pub struct AuthService {
    user: Option<User>,
}

impl AuthService {
    /// Create a signed-out service.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The current session user, if signed in.
    #[must_use]
    pub const fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    /// Whether a session user is present.
    #[must_use]
    pub const fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    /// Sign in with email and password.
    ///
    /// Validation is shape-only: both fields present, a parseable email,
    /// and a password of at least six characters. On success the display
    /// name is fabricated from the email's local part and the session
    /// user is set.
    ///
    /// # Errors
    ///
    /// [`AuthError::MissingFields`], [`AuthError::InvalidEmail`], or
    /// [`AuthError::WeakPassword`]. A well-formed pair never fails.
    pub async fn sign_in(&mut self, email: &str, password: &str) -> Result<&User, AuthError> {
        tokio::time::sleep(AUTH_DELAY).await;

        if email.is_empty() || password.is_empty() {
            return Err(AuthError::MissingFields);
        }
        let email = Email::parse(email)?;
        if password.len() < MIN_SIGN_IN_PASSWORD {
            return Err(AuthError::WeakPassword {
                min: MIN_SIGN_IN_PASSWORD,
            });
        }

        let user = User {
            first_name: display_name(&email),
            last_name: String::new(),
            email,
        };
        info!(user = %user.email, "signed in");
        Ok(self.user.insert(user))
    }

    /// Register a new account and sign it in.
    ///
    /// Same mock contract as [`Self::sign_in`], with an eight-character
    /// password minimum; the supplied names are stored verbatim.
    ///
    /// # Errors
    ///
    /// [`AuthError::MissingFields`], [`AuthError::InvalidEmail`], or
    /// [`AuthError::WeakPassword`].
    pub async fn sign_up(
        &mut self,
        first_name: &str,
        last_name: &str,
        email: &str,
        password: &str,
    ) -> Result<&User, AuthError> {
        tokio::time::sleep(AUTH_DELAY).await;

        if first_name.is_empty() || last_name.is_empty() || email.is_empty() || password.is_empty()
        {
            return Err(AuthError::MissingFields);
        }
        let email = Email::parse(email)?;
        if password.len() < MIN_SIGN_UP_PASSWORD {
            return Err(AuthError::WeakPassword {
                min: MIN_SIGN_UP_PASSWORD,
            });
        }

        let user = User {
            first_name: first_name.to_owned(),
            last_name: last_name.to_owned(),
            email,
        };
        info!(user = %user.email, "registered");
        Ok(self.user.insert(user))
    }

    /// Clear the session user.
    pub fn sign_out(&mut self) {
        if let Some(user) = self.user.take() {
            info!(user = %user.email, "signed out");
        }
    }
}

/// Fabricate a display name from the email local part: the segment
/// before any `.`, `_`, or `-`, capitalized.
fn display_name(email: &Email) -> String {
    let base = email
        .local_part()
        .split(['.', '_', '-'])
        .next()
        .unwrap_or_default();
    let mut chars = base.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().collect::<String>() + chars.as_str()
    })
}
