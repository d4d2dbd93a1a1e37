//! Shared client context and error types for the CLI.

use std::fmt::{self, Display, Formatter};
use std::time::Duration;

use anyhow::anyhow;
use recipebox_api_models::{DraftError, RecipeId};
use recipebox_client::{ApiError, CancelToken, ClientConfig, RecipeClient, ReqwestTransport};
use url::Url;

/// CLI-level error type to distinguish validation from operational failures.
#[derive(Debug)]
pub(crate) enum CliError {
    Validation(String),
    Failure(anyhow::Error),
}

/// Convenience alias for functions returning a `CliError`.
pub(crate) type CliResult<T> = Result<T, CliError>;

impl CliError {
    pub(crate) fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    pub(crate) fn failure(error: impl Into<anyhow::Error>) -> Self {
        Self::Failure(error.into())
    }

    pub(crate) const fn exit_code(&self) -> i32 {
        match self {
            Self::Validation(_) => 2,
            Self::Failure(_) => 3,
        }
    }

    pub(crate) fn display_message(&self) -> String {
        match self {
            Self::Validation(message) => message.clone(),
            Self::Failure(error) => format!("{error:#}"),
        }
    }
}

impl Display for CliError {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        formatter.write_str("cli error")
    }
}

impl std::error::Error for CliError {}

impl From<ApiError> for CliError {
    fn from(error: ApiError) -> Self {
        Self::failure(error)
    }
}

impl From<DraftError> for CliError {
    fn from(error: DraftError) -> Self {
        Self::validation(error.to_string())
    }
}

/// Application context passed to command handlers.
pub(crate) struct AppContext {
    pub(crate) client: RecipeClient<ReqwestTransport>,
    pub(crate) cancel: CancelToken,
}

impl AppContext {
    /// Build a client for `api_url` whose requests give up after `timeout`.
    pub(crate) fn new(api_url: &Url, timeout: Duration) -> CliResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|err| CliError::failure(anyhow!("failed to build HTTP client: {err}")))?;
        let config = ClientConfig::new(api_url.as_str())
            .map_err(|err| CliError::validation(err.to_string()))?;
        Ok(Self {
            client: RecipeClient::new(config, ReqwestTransport::new(http)),
            cancel: CancelToken::new(),
        })
    }
}

/// Parse a positional recipe identifier.
pub(crate) fn parse_recipe_id(raw: &str) -> CliResult<RecipeId> {
    RecipeId::parse(raw).map_err(|err| CliError::validation(err.to_string()))
}
