//! Unified error handling for the storefront core.
//!
//! Services keep their own error enums; surfaces that drive several of
//! them through one call path can use [`StorefrontError`], which every
//! service error converts into.

use thiserror::Error;

use crate::checkout::CheckoutError;
use crate::config::ConfigError;
use crate::services::auth::AuthError;

/// Application-level error type for the storefront core.
#[derive(Debug, Error)]
pub enum StorefrontError {
    /// Authentication shape-validation failed.
    #[error("Auth error: {0}")]
    Auth(#[from] AuthError),

    /// A checkout transition was rejected.
    #[error("Checkout error: {0}")]
    Checkout(#[from] CheckoutError),

    /// Configuration could not be loaded.
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    /// Resource not found.
    #[error("Not found: {0}")]
    NotFound(String),
}

/// Result type alias for `StorefrontError`.
pub type Result<T> = std::result::Result<T, StorefrontError>;
