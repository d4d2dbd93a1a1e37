//! Resolution of the API base URL used by the browser client.

use recipebox_client::ClientConfig;

/// Local-storage key holding an optional API base URL override.
pub const API_BASE_URL_KEY: &str = "recipebox.api_base_url";

/// Build the client configuration from a stored override.
///
/// Missing or unusable overrides fall back to the same-origin `/api` prefix.
#[must_use]
pub fn client_config_from_override(stored: Option<&str>) -> ClientConfig {
    stored
        .and_then(|value| ClientConfig::new(value).ok())
        .unwrap_or_default()
}
