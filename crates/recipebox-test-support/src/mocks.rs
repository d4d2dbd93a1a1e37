//! Fake transports for exercising the recipe client without a network.

use std::cell::RefCell;
use std::collections::VecDeque;

use async_trait::async_trait;
use recipebox_client::{CancelToken, HttpRequest, HttpResponse, Transport, TransportError};
use serde::Serialize;

/// Scripted transport that records every request it sees.
///
/// Responses are served in the order they were pushed; an exhausted script
/// answers with [`TransportError::Network`].
#[derive(Debug, Default)]
pub struct RecordingTransport {
    responses: RefCell<VecDeque<Result<HttpResponse, TransportError>>>,
    requests: RefCell<Vec<HttpRequest>>,
    cancel_on_send: RefCell<Option<CancelToken>>,
}

impl RecordingTransport {
    /// Empty script.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a raw response.
    pub fn push_response(&self, status: u16, body: impl Into<String>) {
        self.responses
            .borrow_mut()
            .push_back(Ok(HttpResponse::new(status, body)));
    }

    /// Queue a JSON response.
    ///
    /// # Panics
    ///
    /// Panics if `body` cannot be serialized.
    pub fn push_json<T: Serialize>(&self, status: u16, body: &T) {
        let text = serde_json::to_string(body)
            .unwrap_or_else(|err| panic!("fixture body must serialize: {err}"));
        self.push_response(status, text);
    }

    /// Queue a transport failure.
    pub fn push_error(&self, error: TransportError) {
        self.responses.borrow_mut().push_back(Err(error));
    }

    /// Cancel `token` while the next request is in flight, simulating an
    /// unmount between request and response.
    pub fn cancel_on_send(&self, token: CancelToken) {
        *self.cancel_on_send.borrow_mut() = Some(token);
    }

    /// Every request seen so far.
    #[must_use]
    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests.borrow().clone()
    }

    /// Most recent request.
    #[must_use]
    pub fn last_request(&self) -> Option<HttpRequest> {
        self.requests.borrow().last().cloned()
    }

    /// Number of requests seen so far.
    #[must_use]
    pub fn request_count(&self) -> usize {
        self.requests.borrow().len()
    }
}

#[async_trait(?Send)]
impl Transport for RecordingTransport {
    async fn send(
        &self,
        request: HttpRequest,
        cancel: &CancelToken,
    ) -> Result<HttpResponse, TransportError> {
        self.requests.borrow_mut().push(request);
        if let Some(token) = self.cancel_on_send.borrow_mut().take() {
            token.cancel();
        }
        if cancel.is_cancelled() {
            return Err(TransportError::Cancelled);
        }
        self.responses.borrow_mut().pop_front().unwrap_or_else(|| {
            Err(TransportError::Network(
                "no scripted response left".to_string(),
            ))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use recipebox_client::Method;

    #[tokio::test]
    async fn serves_responses_in_order_and_records_requests() {
        let transport = RecordingTransport::new();
        transport.push_response(200, "first");
        transport.push_response(204, "");

        let token = CancelToken::new();
        let first = transport
            .send(HttpRequest::new(Method::Get, "/a"), &token)
            .await;
        let second = transport
            .send(HttpRequest::new(Method::Delete, "/b"), &token)
            .await;
        let third = transport
            .send(HttpRequest::new(Method::Get, "/c"), &token)
            .await;

        assert_eq!(first, Ok(HttpResponse::new(200, "first")));
        assert_eq!(second, Ok(HttpResponse::new(204, "")));
        assert!(matches!(third, Err(TransportError::Network(_))));
        assert_eq!(transport.request_count(), 3);
        assert_eq!(
            transport.last_request().map(|request| request.url),
            Some("/c".to_string())
        );
    }
}
