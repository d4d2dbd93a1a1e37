//! Fetch-backed [`Transport`] for the browser.
//!
//! # Design
//! - Each request gets its own `AbortController`; cancelling the token aborts
//!   the fetch instead of merely ignoring its result.
//! - Bodies are read as text; decoding happens in the shared client.

use async_trait::async_trait;
use gloo_net::http::Request;
use recipebox_client::{
    CONTENT_TYPE_JSON, CancelToken, HttpRequest, HttpResponse, Method, Transport, TransportError,
};
use web_sys::AbortController;

/// Transport built on `fetch`.
#[derive(Clone, Copy, Debug, Default)]
pub(crate) struct FetchTransport;

#[async_trait(?Send)]
impl Transport for FetchTransport {
    async fn send(
        &self,
        request: HttpRequest,
        cancel: &CancelToken,
    ) -> Result<HttpResponse, TransportError> {
        let controller = AbortController::new()
            .map_err(|_| TransportError::Network("AbortController unavailable".to_string()))?;
        let signal = controller.signal();
        cancel.on_cancel(move || controller.abort());

        let builder = match request.method {
            Method::Get => Request::get(&request.url),
            Method::Post => Request::post(&request.url),
            Method::Patch => Request::patch(&request.url),
            Method::Delete => Request::delete(&request.url),
        }
        .abort_signal(Some(&signal));
        let outgoing = match request.body {
            Some(body) => builder
                .header("Content-Type", CONTENT_TYPE_JSON)
                .body(body.to_string()),
            None => builder,
        };

        let exchange = async move {
            let response = outgoing
                .send()
                .await
                .map_err(|err| TransportError::Network(err.to_string()))?;
            let status = response.status();
            let body = response
                .text()
                .await
                .map_err(|err| TransportError::Network(err.to_string()))?;
            Ok::<_, TransportError>(HttpResponse::new(status, body))
        };

        cancel
            .guard(exchange)
            .await
            .map_err(|_| TransportError::Cancelled)?
    }
}
