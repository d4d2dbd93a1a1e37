//! Client configuration.

use crate::error::ConfigError;

/// Base URL used when nothing else is configured: the API mounted on the page's own origin.
pub const DEFAULT_BASE_URL: &str = "/api";

/// Validated configuration for [`crate::RecipeClient`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    base_url: String,
}

impl ClientConfig {
    /// Build a configuration from a base URL such as `/api` or `http://host:8080/api`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyBaseUrl`] when the URL is blank.
    pub fn new(base_url: &str) -> Result<Self, ConfigError> {
        let trimmed = base_url.trim().trim_end_matches('/');
        if trimmed.is_empty() {
            return Err(ConfigError::EmptyBaseUrl);
        }
        Ok(Self {
            base_url: trimmed.to_string(),
        })
    }

    /// Configured base URL without a trailing slash.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Join `path` (which must start with `/`) onto the base URL.
    #[must_use]
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}
