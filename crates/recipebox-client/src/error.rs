//! Error types for recipe client operations.

use thiserror::Error;

/// Failure surfaced by a [`crate::Transport`] before any HTTP status is known.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransportError {
    /// The request never produced a response (DNS, connection reset, CORS, ...).
    #[error("network request failed: {0}")]
    Network(String),
    /// The caller cancelled the request.
    #[error("request cancelled")]
    Cancelled,
}

/// Errors returned by [`crate::RecipeClient`] operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// Non-success HTTP status; carries the raw response body text.
    #[error("API error: {status} - {body}")]
    Status {
        /// Numeric HTTP status.
        status: u16,
        /// Raw body text returned with the status.
        body: String,
    },
    /// The transport failed before a response arrived.
    #[error("{0}")]
    Transport(String),
    /// The request body could not be encoded.
    #[error("failed to encode request body: {0}")]
    Encode(String),
    /// A success response carried a body that could not be decoded.
    #[error("invalid response body: {0}")]
    Decode(String),
    /// The request was cancelled; callers must not apply any result.
    #[error("request cancelled")]
    Cancelled,
}

impl ApiError {
    /// HTTP status carried by the error, if any.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Whether the server reported that the entity does not exist.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::Status { status: 404, .. })
    }

    /// Whether the operation was cancelled by its caller.
    #[must_use]
    pub const fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled)
    }
}

impl From<TransportError> for ApiError {
    fn from(error: TransportError) -> Self {
        match error {
            TransportError::Cancelled => Self::Cancelled,
            TransportError::Network(_) => Self::Transport(error.to_string()),
        }
    }
}

/// Invalid client configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// The base URL was blank.
    #[error("API base URL must not be empty")]
    EmptyBaseUrl,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_error_message_combines_status_and_body() {
        let err = ApiError::Status {
            status: 500,
            body: "Internal Server Error".to_string(),
        };
        assert_eq!(err.to_string(), "API error: 500 - Internal Server Error");
        assert_eq!(err.status(), Some(500));
        assert!(!err.is_not_found());
    }

    #[test]
    fn not_found_is_detected_from_status() {
        let err = ApiError::Status {
            status: 404,
            body: "Not Found".to_string(),
        };
        assert!(err.is_not_found());
    }

    #[test]
    fn transport_cancellation_maps_to_cancelled() {
        assert!(ApiError::from(TransportError::Cancelled).is_cancelled());
        assert_eq!(
            ApiError::from(TransportError::Network("offline".to_string())).to_string(),
            "network request failed: offline"
        );
    }
}
