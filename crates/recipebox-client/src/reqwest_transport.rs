//! Native transport backed by `reqwest`.

use async_trait::async_trait;
use reqwest::Client;
use reqwest::header::CONTENT_TYPE;

use crate::cancel::CancelToken;
use crate::error::TransportError;
use crate::transport::{CONTENT_TYPE_JSON, HttpRequest, HttpResponse, Method, Transport};

/// [`Transport`] over a shared [`reqwest::Client`]. Request URLs must be absolute.
#[derive(Debug, Clone, Default)]
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    /// Wrap a configured client (timeouts, default headers, ...).
    #[must_use]
    pub const fn new(client: Client) -> Self {
        Self { client }
    }
}

const fn to_reqwest_method(method: Method) -> reqwest::Method {
    match method {
        Method::Get => reqwest::Method::GET,
        Method::Post => reqwest::Method::POST,
        Method::Patch => reqwest::Method::PATCH,
        Method::Delete => reqwest::Method::DELETE,
    }
}

#[async_trait(?Send)]
impl Transport for ReqwestTransport {
    async fn send(
        &self,
        request: HttpRequest,
        cancel: &CancelToken,
    ) -> Result<HttpResponse, TransportError> {
        let mut builder = self
            .client
            .request(to_reqwest_method(request.method), &request.url);
        if let Some(body) = request.body {
            builder = builder
                .header(CONTENT_TYPE, CONTENT_TYPE_JSON)
                .body(body.to_string());
        }

        // Dropping the in-flight future closes the connection.
        let exchange = async move {
            let response = builder
                .send()
                .await
                .map_err(|err| TransportError::Network(err.to_string()))?;
            let status = response.status().as_u16();
            let body = response
                .text()
                .await
                .map_err(|err| TransportError::Network(err.to_string()))?;
            Ok::<_, TransportError>(HttpResponse { status, body })
        };

        cancel
            .guard(exchange)
            .await
            .map_err(|_| TransportError::Cancelled)?
    }
}
