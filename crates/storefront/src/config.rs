//! Site configuration loaded from environment variables.
//!
//! The configuration surface is static site metadata only - there is no
//! backend, so there are no connection strings or secrets to manage.
//!
//! # Environment Variables
//!
//! All optional, with brand defaults:
//! - `FAY_SITE_NAME` - Brand name used in titles and transactional copy
//! - `FAY_BASE_URL` - Public base URL for canonical links
//! - `FAY_TITLE` - Default page title
//! - `FAY_DESCRIPTION` - Default meta description
//! - `FAY_ANNOUNCEMENT` - Announcement bar line (unset hides the bar)

use thiserror::Error;
use url::Url;

const DEFAULT_BASE_URL: &str = "https://fay-collectibles.com";
const DEFAULT_SITE_NAME: &str = "FAY Collectibles";
const DEFAULT_TITLE: &str = "FAY | Wear Confidence";
const DEFAULT_DESCRIPTION: &str = "FAY Collectibles is a luxury fashion house crafting \
    refined, modern essentials for those who dress with intention. Discover curated \
    collections of elevated wardrobe staples built on quality, precision, and quiet \
    confidence.";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Static site metadata.
#[derive(Debug, Clone)]
pub struct SiteConfig {
    /// Brand name used in titles and transactional copy.
    pub site_name: String,
    /// Public base URL for canonical links.
    pub base_url: Url,
    /// Default page title.
    pub title: String,
    /// Default meta description.
    pub description: String,
    /// Optional announcement bar line.
    pub announcement: Option<String>,
}

impl SiteConfig {
    /// Load configuration from environment variables, falling back to
    /// the brand defaults for anything unset.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidEnvVar`] if `FAY_BASE_URL` is set
    /// but is not a valid URL.
    pub fn from_env() -> Result<Self, ConfigError> {
        let base_url_raw = env_or("FAY_BASE_URL", DEFAULT_BASE_URL);
        let base_url = Url::parse(&base_url_raw)
            .map_err(|e| ConfigError::InvalidEnvVar("FAY_BASE_URL".to_owned(), e.to_string()))?;

        Ok(Self {
            site_name: env_or("FAY_SITE_NAME", DEFAULT_SITE_NAME),
            base_url,
            title: env_or("FAY_TITLE", DEFAULT_TITLE),
            description: env_or("FAY_DESCRIPTION", DEFAULT_DESCRIPTION),
            announcement: std::env::var("FAY_ANNOUNCEMENT").ok(),
        })
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            site_name: DEFAULT_SITE_NAME.to_owned(),
            // Parsing a known-good literal cannot fail.
            base_url: Url::parse(DEFAULT_BASE_URL).expect("default base URL is valid"),
            title: DEFAULT_TITLE.to_owned(),
            description: DEFAULT_DESCRIPTION.to_owned(),
            announcement: None,
        }
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_owned())
}
