//! Wire-level behaviour of `RecipeClient` against a recording transport.

use recipebox_api_models::{CreateRecipeInput, IngredientInput, UpdateRecipeInput};
use recipebox_client::{
    ApiError, CancelToken, ClientConfig, HttpRequest, Method, RecipeClient, TransportError,
};
use recipebox_test_support::fixtures::{recipe, recipe_id, recipe_list};
use recipebox_test_support::mocks::RecordingTransport;
use serde_json::json;

fn client() -> RecipeClient<RecordingTransport> {
    RecipeClient::new(ClientConfig::default(), RecordingTransport::new())
}

#[tokio::test]
async fn list_recipes_unwraps_envelope() -> Result<(), ApiError> {
    let client = client();
    client
        .transport()
        .push_json(200, &json!({ "recipes": recipe_list() }));

    let recipes = client.list_recipes(&CancelToken::new()).await?;

    assert_eq!(recipes, recipe_list());
    assert_eq!(
        client.transport().last_request(),
        Some(HttpRequest::new(Method::Get, "/api/recipes"))
    );
    Ok(())
}

#[tokio::test]
async fn blank_identifier_in_list_fails_whole_response() {
    let client = client();
    client.transport().push_json(
        200,
        &json!({ "recipes": [
            { "id": "1", "name": "Kept", "author_id": "author-1" },
            { "id": "  ", "name": "Broken", "author_id": "author-1" },
        ] }),
    );

    let err = client
        .list_recipes(&CancelToken::new())
        .await
        .expect_err("blank id must not decode");

    assert!(matches!(err, ApiError::Decode(_)), "unexpected error: {err:?}");
}

#[tokio::test]
async fn every_failure_status_reports_status_and_body() {
    for (status, body) in [
        (400, "Bad Request"),
        (403, "Forbidden"),
        (404, "Not Found"),
        (500, "Internal Server Error"),
    ] {
        let client = client();
        client.transport().push_response(status, body);

        let err = client
            .get_recipe(&recipe_id("999"), &CancelToken::new())
            .await
            .expect_err("non-2xx must fail");

        assert_eq!(err.to_string(), format!("API error: {status} - {body}"));
    }
}

#[tokio::test]
async fn get_recipe_targets_recipe_path() -> Result<(), ApiError> {
    let client = client();
    let expected = recipe("1", "Recipe 1", None, &["Ingredient 1"]);
    client.transport().push_json(200, &expected);

    let fetched = client
        .get_recipe(&recipe_id("1"), &CancelToken::new())
        .await?;

    assert_eq!(fetched, expected);
    assert_eq!(
        client.transport().last_request(),
        Some(HttpRequest::new(Method::Get, "/api/recipes/1"))
    );
    Ok(())
}

#[tokio::test]
async fn create_recipe_posts_exact_fields() -> Result<(), ApiError> {
    let client = client();
    let created = recipe("new-id", "Cake", Some("Amy"), &["Flour"]);
    client.transport().push_json(201, &created);

    let input = CreateRecipeInput {
        name: "Cake".to_string(),
        author_name: "Amy".to_string(),
        ingredients: vec![IngredientInput::new("Flour")],
    };
    let result = client.create_recipe(&input, &CancelToken::new()).await?;

    assert_eq!(result, created);
    assert_eq!(
        client.transport().last_request(),
        Some(
            HttpRequest::new(Method::Post, "/api/recipes").with_json(json!({
                "name": "Cake",
                "author_name": "Amy",
                "ingredients": [{ "name": "Flour" }]
            }))
        )
    );
    Ok(())
}

#[tokio::test]
async fn update_recipe_patches_exact_fields() -> Result<(), ApiError> {
    let client = client();
    client
        .transport()
        .push_json(200, &recipe("1", "Cake", Some("Amy"), &["Flour", "Sugar"]));

    let input = UpdateRecipeInput {
        requester_name: "Amy".to_string(),
        ingredients_to_add: vec![IngredientInput::new("Sugar")],
    };
    let updated = client
        .update_recipe(&recipe_id("1"), &input, &CancelToken::new())
        .await?;

    assert_eq!(updated.ingredients.len(), 2);
    assert_eq!(
        client.transport().last_request(),
        Some(
            HttpRequest::new(Method::Patch, "/api/recipes/1").with_json(json!({
                "requester_name": "Amy",
                "ingredients_to_add": [{ "name": "Sugar" }]
            }))
        )
    );
    Ok(())
}

#[tokio::test]
async fn delete_recipe_sends_requester_and_accepts_no_content() -> Result<(), ApiError> {
    let client = client();
    client.transport().push_response(204, "");

    client
        .delete_recipe(&recipe_id("1"), "Amy", &CancelToken::new())
        .await?;

    assert_eq!(
        client.transport().last_request(),
        Some(
            HttpRequest::new(Method::Delete, "/api/recipes/1")
                .with_json(json!({ "requester_name": "Amy" }))
        )
    );
    Ok(())
}

#[tokio::test]
async fn delete_failure_surfaces_status() {
    let client = client();
    client.transport().push_response(404, "Not Found");

    let err = client
        .delete_recipe(&recipe_id("999"), "Amy", &CancelToken::new())
        .await
        .expect_err("404 must fail");

    assert!(err.is_not_found());
    assert_eq!(err.to_string(), "API error: 404 - Not Found");
}

#[tokio::test]
async fn ids_are_percent_encoded_in_paths() -> Result<(), ApiError> {
    let client = client();
    client.transport().push_json(200, &recipe("a b", "Soup", None, &[]));

    client
        .get_recipe(&recipe_id("a b"), &CancelToken::new())
        .await?;

    assert_eq!(
        client.transport().last_request().map(|request| request.url),
        Some("/api/recipes/a%20b".to_string())
    );
    Ok(())
}

#[tokio::test]
async fn cancelled_token_sends_nothing() {
    let client = client();
    let token = CancelToken::new();
    token.cancel();

    let result = client.list_recipes(&token).await;

    assert_eq!(result, Err(ApiError::Cancelled));
    assert_eq!(client.transport().request_count(), 0);
}

#[tokio::test]
async fn response_after_cancellation_is_dropped() {
    let client = client();
    let token = CancelToken::new();
    client.transport().cancel_on_send(token.clone());
    client
        .transport()
        .push_json(200, &recipe("1", "Soup", None, &[]));

    let result = client.get_recipe(&recipe_id("1"), &token).await;

    assert_eq!(result, Err(ApiError::Cancelled));
}

#[tokio::test]
async fn transport_failures_are_reported() {
    let client = client();
    client
        .transport()
        .push_error(TransportError::Network("connection refused".to_string()));

    let result = client.list_recipes(&CancelToken::new()).await;

    assert_eq!(
        result,
        Err(ApiError::Transport(
            "network request failed: connection refused".to_string()
        ))
    );
}
