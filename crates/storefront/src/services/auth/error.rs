//! Authentication error types.

use thiserror::Error;

use fay_core::EmailError;

/// Errors that can occur during mock authentication.
///
/// Only shape validation can fail; there is no backend to reject a
/// well-formed credential pair. Each variant's message is the inline
/// copy shown on the sign-in and sign-up forms.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    /// A required field was left empty.
    #[error("Please fill in all fields.")]
    MissingFields,
    /// Email failed structural validation.
    #[error("Please enter a valid email address.")]
    InvalidEmail(#[from] EmailError),
    /// Password shorter than the required minimum.
    #[error("Password must be at least {min} characters.")]
    WeakPassword {
        /// Minimum accepted length for the failing operation.
        min: usize,
    },
}
