//! Form page loading and submission.

use recipebox_api_models::RecipeId;
use recipebox_client::{ApiError, CancelToken, RecipeClient, Transport};

use crate::core::nav::Navigator;
use crate::core::report::report_failure;
use crate::core::routes::AppRoute;
use crate::features::form::state::{FormAction, FormMode, RecipeFormState};

/// Prefix for edit-mode load failures.
pub const LOAD_FAILED_PREFIX: &str = "Failed to load recipe: ";
/// Prefix for create failures.
pub const CREATE_FAILED_PREFIX: &str = "Failed to create recipe: ";
/// Prefix for update failures.
pub const UPDATE_FAILED_PREFIX: &str = "Failed to update recipe: ";

/// How a submit attempt ended.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// A submit was already in flight; nothing was sent.
    Ignored,
    /// Local validation failed; nothing was sent.
    Invalid,
    /// The server saved the recipe and its detail page was opened.
    Saved(RecipeId),
    /// The server rejected the request or it failed.
    Failed,
    /// The token fired before the server answered.
    Cancelled,
}

/// Load recipe `id` and seed the edit form with it.
///
/// Nothing is emitted once `cancel` has fired.
pub async fn load_for_edit<T: Transport>(
    client: &RecipeClient<T>,
    id: &RecipeId,
    cancel: &CancelToken,
    emit: impl Fn(FormAction),
) {
    if cancel.is_cancelled() {
        return;
    }
    emit(FormAction::LoadStarted);
    match client.get_recipe(id, cancel).await {
        Ok(recipe) => emit(FormAction::Seed(recipe)),
        Err(err) if err.is_cancelled() => {
            tracing::debug!(recipe_id = %id, "edit form load cancelled");
        }
        Err(err) => {
            report_failure(&format!("edit form load for recipe {id}"), &err);
            emit(FormAction::LoadFailed(format!("{LOAD_FAILED_PREFIX}{err}")));
        }
    }
}

/// Validate `form` and send the create or update it describes.
///
/// On success the detail page of the saved recipe is opened.
pub async fn submit_form<T: Transport>(
    client: &RecipeClient<T>,
    form: &RecipeFormState,
    navigator: &impl Navigator,
    cancel: &CancelToken,
    emit: impl Fn(FormAction),
) -> SubmitOutcome {
    if form.submitting {
        return SubmitOutcome::Ignored;
    }
    let draft = match form.validate() {
        Ok(draft) => draft,
        Err(err) => {
            emit(FormAction::ValidationFailed(err.to_string()));
            return SubmitOutcome::Invalid;
        }
    };

    emit(FormAction::SubmitStarted);
    let (saved, failure_prefix) = match &form.mode {
        FormMode::Create => (
            client
                .create_recipe(&draft.into_create_input(), cancel)
                .await
                .map(|recipe| recipe.id),
            CREATE_FAILED_PREFIX,
        ),
        FormMode::Edit(id) => (
            client
                .update_recipe(id, &draft.into_update_input(), cancel)
                .await
                .map(|_| id.clone()),
            UPDATE_FAILED_PREFIX,
        ),
    };

    match saved {
        Ok(id) => {
            tracing::info!(recipe_id = %id, "recipe saved");
            navigator.push(AppRoute::Detail(id.clone()));
            SubmitOutcome::Saved(id)
        }
        Err(ApiError::Cancelled) => SubmitOutcome::Cancelled,
        Err(err) => {
            report_failure("recipe save", &err);
            emit(FormAction::SubmitFailed(format!("{failure_prefix}{err}")));
            SubmitOutcome::Failed
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;
    use crate::core::nav::testing::{NavEvent, RecordingNavigator};
    use recipebox_client::{ClientConfig, HttpRequest, Method};
    use recipebox_test_support::fixtures::{existing_recipe, recipe, recipe_id};
    use recipebox_test_support::mocks::RecordingTransport;
    use serde_json::json;

    fn client() -> RecipeClient<RecordingTransport> {
        RecipeClient::new(ClientConfig::default(), RecordingTransport::new())
    }

    fn filled_create_form(ingredients: &[&str]) -> RecipeFormState {
        let mut form = RecipeFormState::new(FormMode::Create);
        form.apply(FormAction::SetName("Cake".to_string()));
        form.apply(FormAction::SetAuthorName("Amy".to_string()));
        for (index, name) in ingredients.iter().enumerate() {
            form.apply(FormAction::AddIngredient);
            form.apply(FormAction::ChangeIngredient(index, (*name).to_string()));
        }
        form
    }

    async fn submit(
        client: &RecipeClient<RecordingTransport>,
        form: RecipeFormState,
        navigator: &RecordingNavigator,
    ) -> (SubmitOutcome, RecipeFormState) {
        let state = RefCell::new(form.clone());
        let outcome = submit_form(client, &form, navigator, &CancelToken::new(), |action| {
            state.borrow_mut().apply(action);
        })
        .await;
        (outcome, state.into_inner())
    }

    #[tokio::test]
    async fn edit_load_seeds_fields() {
        let client = client();
        client.transport().push_json(200, &existing_recipe());
        let state = RefCell::new(RecipeFormState::new(FormMode::Edit(recipe_id("1"))));

        load_for_edit(&client, &recipe_id("1"), &CancelToken::new(), |action| {
            state.borrow_mut().apply(action);
        })
        .await;

        let state = state.into_inner();
        assert_eq!(state.name, "Existing");
        assert_eq!(state.author_name, "Amy");
        assert_eq!(state.ingredients.len(), 1);
        assert!(!state.loading);
    }

    #[tokio::test]
    async fn edit_load_failure_is_reported() {
        let client = client();
        client.transport().push_response(404, "Not Found");
        let state = RefCell::new(RecipeFormState::new(FormMode::Edit(recipe_id("9"))));

        load_for_edit(&client, &recipe_id("9"), &CancelToken::new(), |action| {
            state.borrow_mut().apply(action);
        })
        .await;

        let state = state.into_inner();
        assert!(!state.loading);
        assert_eq!(
            state.error.as_deref(),
            Some("Failed to load recipe: API error: 404 - Not Found")
        );
    }

    #[tokio::test]
    async fn cancelled_edit_load_emits_only_load_started() {
        let client = client();
        let cancel = CancelToken::new();
        client.transport().cancel_on_send(cancel.clone());
        client.transport().push_json(200, &existing_recipe());
        let actions = RefCell::new(Vec::new());

        load_for_edit(&client, &recipe_id("1"), &cancel, |action| {
            actions.borrow_mut().push(action);
        })
        .await;

        assert_eq!(actions.into_inner(), vec![FormAction::LoadStarted]);
    }

    #[tokio::test]
    async fn blank_fields_never_reach_the_server() {
        let client = client();
        let navigator = RecordingNavigator::default();
        let mut form = filled_create_form(&["Flour"]);
        form.apply(FormAction::SetAuthorName("  ".to_string()));

        let (outcome, state) = submit(&client, form, &navigator).await;

        assert_eq!(outcome, SubmitOutcome::Invalid);
        assert_eq!(
            state.error.as_deref(),
            Some("Recipe name and author name are required")
        );
        assert_eq!(client.transport().request_count(), 0);
    }

    #[tokio::test]
    async fn blank_ingredients_never_reach_the_server() {
        let client = client();
        let navigator = RecordingNavigator::default();

        let (outcome, state) = submit(&client, filled_create_form(&["", " "]), &navigator).await;

        assert_eq!(outcome, SubmitOutcome::Invalid);
        assert_eq!(
            state.error.as_deref(),
            Some("At least one ingredient is required")
        );
        assert_eq!(client.transport().request_count(), 0);
    }

    #[tokio::test]
    async fn create_posts_trimmed_ingredients_and_opens_detail() {
        let client = client();
        client
            .transport()
            .push_json(201, &recipe("new-id", "Cake", Some("Amy"), &["Flour"]));
        let navigator = RecordingNavigator::default();

        let (outcome, _) = submit(&client, filled_create_form(&[" Flour ", ""]), &navigator).await;

        assert_eq!(outcome, SubmitOutcome::Saved(recipe_id("new-id")));
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
        assert_eq!(
            navigator.events(),
            vec![NavEvent::Push(AppRoute::Detail(recipe_id("new-id")))]
        );
    }

    #[tokio::test]
    async fn update_appends_with_requester_and_opens_detail() {
        let client = client();
        client
            .transport()
            .push_json(200, &recipe("1", "Existing", Some("Amy"), &["New"]));
        let navigator = RecordingNavigator::default();
        let mut form = RecipeFormState::new(FormMode::Edit(recipe_id("1")));
        form.apply(FormAction::Seed(recipe("1", "Existing", Some("Amy"), &[])));
        form.apply(FormAction::AddIngredient);
        form.apply(FormAction::ChangeIngredient(0, "New".to_string()));

        let (outcome, _) = submit(&client, form, &navigator).await;

        assert_eq!(outcome, SubmitOutcome::Saved(recipe_id("1")));
        assert_eq!(
            client.transport().last_request(),
            Some(
                HttpRequest::new(Method::Patch, "/api/recipes/1").with_json(json!({
                    "requester_name": "Amy",
                    "ingredients_to_add": [{ "name": "New" }]
                }))
            )
        );
        assert_eq!(
            navigator.events(),
            vec![NavEvent::Push(AppRoute::Detail(recipe_id("1")))]
        );
    }

    #[tokio::test]
    async fn server_rejection_keeps_inputs() {
        let client = client();
        client.transport().push_response(400, "Bad Request");
        let navigator = RecordingNavigator::default();

        let (outcome, state) = submit(&client, filled_create_form(&["Flour"]), &navigator).await;

        assert_eq!(outcome, SubmitOutcome::Failed);
        assert!(!state.submitting);
        assert_eq!(state.name, "Cake");
        assert_eq!(
            state.error.as_deref(),
            Some("Failed to create recipe: API error: 400 - Bad Request")
        );
        assert!(navigator.events().is_empty());
    }

    #[tokio::test]
    async fn update_failure_uses_update_prefix() {
        let client = client();
        client.transport().push_response(403, "Forbidden");
        let navigator = RecordingNavigator::default();
        let mut form = RecipeFormState::new(FormMode::Edit(recipe_id("1")));
        form.apply(FormAction::Seed(existing_recipe()));

        let (outcome, state) = submit(&client, form, &navigator).await;

        assert_eq!(outcome, SubmitOutcome::Failed);
        assert_eq!(
            state.error.as_deref(),
            Some("Failed to update recipe: API error: 403 - Forbidden")
        );
    }

    #[tokio::test]
    async fn second_submit_while_in_flight_is_ignored() {
        let client = client();
        let navigator = RecordingNavigator::default();
        let mut form = filled_create_form(&["Flour"]);
        form.apply(FormAction::SubmitStarted);

        let (outcome, _) = submit(&client, form, &navigator).await;

        assert_eq!(outcome, SubmitOutcome::Ignored);
        assert_eq!(client.transport().request_count(), 0);
    }
}
