//! Client configuration.
//!
//! Everything the client needs to talk to the API is collected into an
//! [`ApiConfig`] once at startup and handed to the
//! [`ApiClient`](crate::api::ApiClient). Nothing reads the environment after
//! that point.
//!
//! # Example
//!
//! ```
//! use strigo::config::{ApiConfig, Credentials, DEFAULT_BASE_URL};
//!
//! let config = ApiConfig::new(DEFAULT_BASE_URL, Credentials::new("org", "key")).unwrap();
//! assert_eq!(config.base_url().as_str(), "https://app.strigo.io/api/v1/");
//! ```

pub mod credentials;

pub use credentials::{Credentials, API_KEY_VAR, ORG_ID_VAR};

use reqwest::Url;

use crate::error::{Result, StrigoError};

/// Production API root.
pub const DEFAULT_BASE_URL: &str = "https://app.strigo.io/api/v1/";

/// Environment variable overriding the API root.
pub const API_URL_VAR: &str = "STRIGO_API_URL";

/// Resolved API settings.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    base_url: Url,
    credentials: Credentials,
}

impl ApiConfig {
    /// Create a configuration for the given API root.
    ///
    /// A missing trailing slash is added so relative endpoint paths join
    /// beneath the root instead of replacing its last segment.
    pub fn new(base_url: &str, credentials: Credentials) -> Result<Self> {
        let normalized = if base_url.ends_with('/') {
            base_url.to_string()
        } else {
            format!("{}/", base_url)
        };

        let base_url = Url::parse(&normalized).map_err(|e| StrigoError::InvalidBaseUrl {
            url: base_url.to_string(),
            message: e.to_string(),
        })?;

        Ok(Self {
            base_url,
            credentials,
        })
    }

    /// Build the configuration from the process environment.
    pub fn from_env(base_url: &str) -> Result<Self> {
        Self::new(base_url, Credentials::from_env()?)
    }

    /// Get the API root.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Get the credentials.
    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }
}
