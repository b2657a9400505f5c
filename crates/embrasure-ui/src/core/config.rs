//! REST endpoint configuration for views issuing directory calls.
//!
//! # Design
//! - Defaults come from the shared API constants.
//! - Operator overrides are validated once at boot; invalid values fall back
//!   to defaults at the call site.

use embrasure_api_models::{CONTEXT_ID, FT_BASE_URL, RequestConfig};
use thiserror::Error;

/// Errors raised while applying configuration overrides.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// Base URL override was neither a path nor an http(s) URL.
    #[error("invalid api base url")]
    InvalidBaseUrl {
        /// Rejected value.
        value: String,
    },
    /// Context id override was blank.
    #[error("empty context id")]
    EmptyContextId,
}

/// Where and how views talk to the directory REST service.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiConfig {
    /// Service base path or absolute URL.
    pub base_url: String,
    /// Tenant applied to directory calls.
    pub context_id: String,
    /// Headers sent with each request.
    pub request: RequestConfig,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: FT_BASE_URL.to_string(),
            context_id: CONTEXT_ID.to_string(),
            request: RequestConfig::default(),
        }
    }
}

impl ApiConfig {
    /// Defaults with optional operator overrides applied.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when an override is present but unusable.
    pub fn with_overrides(
        base_url: Option<String>,
        context_id: Option<String>,
    ) -> Result<Self, ConfigError> {
        let mut config = Self::default();
        if let Some(base_url) = base_url {
            let trimmed = base_url.trim();
            let valid = trimmed.starts_with('/')
                || trimmed.starts_with("http://")
                || trimmed.starts_with("https://");
            if !valid {
                return Err(ConfigError::InvalidBaseUrl { value: base_url });
            }
            config.base_url = trimmed.trim_end_matches('/').to_string();
        }
        if let Some(context_id) = context_id {
            let trimmed = context_id.trim();
            if trimmed.is_empty() {
                return Err(ConfigError::EmptyContextId);
            }
            config.context_id = trimmed.to_string();
        }
        Ok(config)
    }

    /// Absolute endpoint for a service-relative resource path.
    #[must_use]
    pub fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}
