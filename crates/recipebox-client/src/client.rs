//! Recipe API client.
//!
//! # Design
//! - One method per REST operation; no caching, no retries.
//! - All responses go through [`decode_response`] so error text is uniform.
//! - Results that arrive after cancellation are dropped, never applied.

use recipebox_api_models::{
    CreateRecipeInput, DeleteRecipeInput, Recipe, RecipeId, RecipeListItem, RecipesResponse,
    UpdateRecipeInput,
};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, warn};

use crate::cancel::CancelToken;
use crate::config::ClientConfig;
use crate::error::ApiError;
use crate::transport::{HttpRequest, HttpResponse, Method, Transport};

/// Turn a raw response into a typed body.
///
/// Non-2xx statuses become [`ApiError::Status`] carrying the raw body text.
/// `204 No Content` yields `Ok(None)` without touching the body.
///
/// # Errors
///
/// Returns [`ApiError::Status`] for non-success statuses and
/// [`ApiError::Decode`] when a success body is not valid JSON for `T`.
pub fn decode_response<T: DeserializeOwned>(response: HttpResponse) -> Result<Option<T>, ApiError> {
    if !response.is_success() {
        return Err(ApiError::Status {
            status: response.status,
            body: response.body,
        });
    }
    if response.status == 204 {
        return Ok(None);
    }
    serde_json::from_str(&response.body)
        .map(Some)
        .map_err(|err| ApiError::Decode(err.to_string()))
}

/// Typed client over any [`Transport`].
#[derive(Debug, Clone)]
pub struct RecipeClient<T> {
    config: ClientConfig,
    transport: T,
}

impl<T: Transport> RecipeClient<T> {
    /// Create a client.
    #[must_use]
    pub const fn new(config: ClientConfig, transport: T) -> Self {
        Self { config, transport }
    }

    /// Underlying transport.
    #[must_use]
    pub const fn transport(&self) -> &T {
        &self.transport
    }

    /// `GET /recipes`
    ///
    /// # Errors
    ///
    /// Fails on transport errors, non-success statuses, or undecodable bodies.
    pub async fn list_recipes(&self, cancel: &CancelToken) -> Result<Vec<RecipeListItem>, ApiError> {
        let request = HttpRequest::new(Method::Get, self.config.endpoint("/recipes"));
        let response: RecipesResponse = self.expect_body(request, cancel).await?;
        Ok(response.recipes)
    }

    /// `GET /recipes/{id}`
    ///
    /// # Errors
    ///
    /// Fails on transport errors, non-success statuses (404 included), or undecodable bodies.
    pub async fn get_recipe(&self, id: &RecipeId, cancel: &CancelToken) -> Result<Recipe, ApiError> {
        let request = HttpRequest::new(Method::Get, self.recipe_url(id));
        self.expect_body(request, cancel).await
    }

    /// `POST /recipes`
    ///
    /// # Errors
    ///
    /// Fails on transport errors, non-success statuses, or undecodable bodies.
    pub async fn create_recipe(
        &self,
        input: &CreateRecipeInput,
        cancel: &CancelToken,
    ) -> Result<Recipe, ApiError> {
        let request = HttpRequest::new(Method::Post, self.config.endpoint("/recipes"))
            .with_json(encode(input)?);
        self.expect_body(request, cancel).await
    }

    /// `PATCH /recipes/{id}`; appends ingredients.
    ///
    /// # Errors
    ///
    /// Fails on transport errors, non-success statuses (403 when the requester
    /// is not the author), or undecodable bodies.
    pub async fn update_recipe(
        &self,
        id: &RecipeId,
        input: &UpdateRecipeInput,
        cancel: &CancelToken,
    ) -> Result<Recipe, ApiError> {
        let request = HttpRequest::new(Method::Patch, self.recipe_url(id)).with_json(encode(input)?);
        self.expect_body(request, cancel).await
    }

    /// `DELETE /recipes/{id}`
    ///
    /// # Errors
    ///
    /// Fails on transport errors or non-success statuses.
    pub async fn delete_recipe(
        &self,
        id: &RecipeId,
        requester_name: &str,
        cancel: &CancelToken,
    ) -> Result<(), ApiError> {
        let body = DeleteRecipeInput {
            requester_name: requester_name.to_string(),
        };
        let request = HttpRequest::new(Method::Delete, self.recipe_url(id)).with_json(encode(&body)?);
        self.execute::<Value>(request, cancel).await.map(|_| ())
    }

    fn recipe_url(&self, id: &RecipeId) -> String {
        self.config
            .endpoint(&format!("/recipes/{}", urlencoding::encode(id.as_str())))
    }

    async fn expect_body<R: DeserializeOwned>(
        &self,
        request: HttpRequest,
        cancel: &CancelToken,
    ) -> Result<R, ApiError> {
        self.execute(request, cancel)
            .await?
            .ok_or_else(|| ApiError::Decode("response body was empty".to_string()))
    }

    async fn execute<R: DeserializeOwned>(
        &self,
        request: HttpRequest,
        cancel: &CancelToken,
    ) -> Result<Option<R>, ApiError> {
        if cancel.is_cancelled() {
            return Err(ApiError::Cancelled);
        }
        let method = request.method;
        let url = request.url.clone();
        debug!(method = method.as_str(), url = %url, "recipe api request");

        let response = self.transport.send(request, cancel).await?;
        if cancel.is_cancelled() {
            debug!(method = method.as_str(), url = %url, "dropping response after cancellation");
            return Err(ApiError::Cancelled);
        }

        decode_response(response).inspect_err(|err| {
            warn!(
                method = method.as_str(),
                url = %url,
                status = err.status(),
                error = %err,
                "recipe api request failed"
            );
        })
    }
}

fn encode<B: Serialize>(body: &B) -> Result<Value, ApiError> {
    serde_json::to_value(body).map_err(|err| ApiError::Encode(err.to_string()))
}
