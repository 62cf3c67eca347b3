//! Storefront configuration loaded from environment variables.
//!
//! Missing required configuration is fatal: the application must refuse to
//! start rather than come up half-wired to its collaborators.
//!
//! # Environment Variables
//!
//! ## Required
//! - `LEAFLINE_BUSINESS_NAME` - Display name used in the notification message
//! - `LEAFLINE_WHATSAPP_NUMBER` - Destination number for the messaging link
//! - `LEAFLINE_ADMIN_UID` - The single identity granted the admin capability
//!
//! ## Optional
//! - `LEAFLINE_CURRENCY_SYMBOL` - Currency symbol for display (default: ₦)
//! - `LEAFLINE_NAMESPACE` - Tenant namespace for store collections
//!   (default: default-app-id)

use secrecy::{ExposeSecret, SecretString};
use thiserror::Error;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Storefront application configuration.
///
/// Implements `Debug` manually to redact the admin identity.
#[derive(Clone)]
pub struct StoreConfig {
    /// Business display name for messages and headers.
    pub business_name: String,
    /// Destination number for the outbound messaging link.
    pub whatsapp_number: String,
    /// Currency symbol used in all displayed amounts.
    pub currency_symbol: String,
    /// The one identity resolved to the admin capability.
    pub admin_identity: SecretString,
    /// Tenant namespace scoping the store's collections.
    pub namespace: String,
}

impl std::fmt::Debug for StoreConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StoreConfig")
            .field("business_name", &self.business_name)
            .field("whatsapp_number", &self.whatsapp_number)
            .field("currency_symbol", &self.currency_symbol)
            .field("admin_identity", &"[REDACTED]")
            .field("namespace", &self.namespace)
            .finish()
    }
}

impl StoreConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if required variables are missing or empty.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Ok(Self {
            business_name: get_required_env("LEAFLINE_BUSINESS_NAME")?,
            whatsapp_number: get_required_env("LEAFLINE_WHATSAPP_NUMBER")?,
            currency_symbol: get_env_or_default("LEAFLINE_CURRENCY_SYMBOL", "₦"),
            admin_identity: SecretString::from(get_required_env("LEAFLINE_ADMIN_UID")?),
            namespace: get_env_or_default("LEAFLINE_NAMESPACE", "default-app-id"),
        })
    }

    /// The configured admin identity, for exact-match comparison.
    #[must_use]
    pub fn admin_identity(&self) -> &str {
        self.admin_identity.expose_secret()
    }

    /// Path of the products collection under this tenant namespace.
    #[must_use]
    pub fn products_path(&self) -> String {
        format!("artifacts/{}/public/data/products", self.namespace)
    }

    /// Path of the orders collection under this tenant namespace.
    #[must_use]
    pub fn orders_path(&self) -> String {
        format!("artifacts/{}/public/data/orders", self.namespace)
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Get a required environment variable, rejecting empty values.
fn get_required_env(key: &str) -> Result<String, ConfigError> {
    match std::env::var(key) {
        Ok(value) if !value.trim().is_empty() => Ok(value),
        Ok(_) => Err(ConfigError::InvalidEnvVar(
            key.to_owned(),
            "must not be empty".to_owned(),
        )),
        Err(_) => Err(ConfigError::MissingEnvVar(key.to_owned())),
    }
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_owned())
}
