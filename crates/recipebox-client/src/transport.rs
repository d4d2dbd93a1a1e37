//! HTTP seam between the recipe client and the host's networking stack.

use std::rc::Rc;

use async_trait::async_trait;
use serde_json::Value;

use crate::cancel::CancelToken;
use crate::error::TransportError;

/// Content type sent with every request that carries a body.
pub const CONTENT_TYPE_JSON: &str = "application/json";

/// HTTP verbs used by the recipe API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    /// `GET`
    Get,
    /// `POST`
    Post,
    /// `PATCH`
    Patch,
    /// `DELETE`
    Delete,
}

impl Method {
    /// Upper-case verb as sent on the wire.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Patch => "PATCH",
            Self::Delete => "DELETE",
        }
    }
}

/// A single outbound request.
#[derive(Debug, Clone, PartialEq)]
pub struct HttpRequest {
    /// Verb.
    pub method: Method,
    /// Target URL; relative (`/api/recipes`) in the browser, absolute for native hosts.
    pub url: String,
    /// JSON body, sent with [`CONTENT_TYPE_JSON`].
    pub body: Option<Value>,
}

impl HttpRequest {
    /// Body-less request.
    #[must_use]
    pub fn new(method: Method, url: impl Into<String>) -> Self {
        Self {
            method,
            url: url.into(),
            body: None,
        }
    }

    /// Attach a JSON body.
    #[must_use]
    pub fn with_json(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }
}

/// Status and raw body text of a completed exchange.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    /// Numeric HTTP status.
    pub status: u16,
    /// Raw body text; empty when the server sent none.
    pub body: String,
}

impl HttpResponse {
    /// Build a response from parts.
    #[must_use]
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// Whether the status is in the 2xx range.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.status >= 200 && self.status < 300
    }
}

/// Sends requests on behalf of [`crate::RecipeClient`].
///
/// Implementations must honour `cancel`: once it fires the underlying request
/// should be aborted and [`TransportError::Cancelled`] returned.
#[async_trait(?Send)]
pub trait Transport {
    /// Perform one HTTP exchange.
    async fn send(
        &self,
        request: HttpRequest,
        cancel: &CancelToken,
    ) -> Result<HttpResponse, TransportError>;
}

#[async_trait(?Send)]
impl<T: Transport + ?Sized> Transport for Rc<T> {
    async fn send(
        &self,
        request: HttpRequest,
        cancel: &CancelToken,
    ) -> Result<HttpResponse, TransportError> {
        (**self).send(request, cancel).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_range_is_2xx() {
        assert!(HttpResponse::new(200, "").is_success());
        assert!(HttpResponse::new(204, "").is_success());
        assert!(!HttpResponse::new(199, "").is_success());
        assert!(!HttpResponse::new(301, "").is_success());
        assert!(!HttpResponse::new(404, "").is_success());
    }

    #[test]
    fn method_renders_wire_verb() {
        assert_eq!(Method::Patch.as_str(), "PATCH");
        assert_eq!(Method::Delete.as_str(), "DELETE");
    }
}
