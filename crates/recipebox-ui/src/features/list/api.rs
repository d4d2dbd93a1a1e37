//! List page data loading.

use recipebox_client::{CancelToken, RecipeClient, Transport};

use crate::core::report::report_failure;
use crate::features::list::state::ListAction;

/// Prefix for list load failures shown to the user.
pub const LOAD_FAILED_PREFIX: &str = "Failed to load recipes: ";

/// Fetch the recipe list and report progress through `emit`.
///
/// Nothing is emitted once `cancel` has fired.
pub async fn load_recipes<T: Transport>(
    client: &RecipeClient<T>,
    cancel: &CancelToken,
    emit: impl Fn(ListAction),
) {
    if cancel.is_cancelled() {
        return;
    }
    emit(ListAction::LoadStarted);
    match client.list_recipes(cancel).await {
        Ok(recipes) => emit(ListAction::Loaded(recipes)),
        Err(err) if err.is_cancelled() => {
            tracing::debug!("recipe list load cancelled");
        }
        Err(err) => {
            report_failure("recipe list load", &err);
            emit(ListAction::LoadFailed(format!("{LOAD_FAILED_PREFIX}{err}")));
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;
    use crate::features::list::state::ListState;
    use recipebox_client::ClientConfig;
    use recipebox_test_support::fixtures::recipe_list;
    use recipebox_test_support::mocks::RecordingTransport;
    use serde_json::json;

    fn client() -> RecipeClient<RecordingTransport> {
        RecipeClient::new(ClientConfig::default(), RecordingTransport::new())
    }

    #[tokio::test]
    async fn successful_load_shows_recipes_in_server_order() {
        let client = client();
        client
            .transport()
            .push_json(200, &json!({ "recipes": recipe_list() }));
        let state = RefCell::new(ListState::default());

        load_recipes(&client, &CancelToken::new(), |action| {
            state.borrow_mut().apply(action);
        })
        .await;

        assert_eq!(state.into_inner(), ListState::Ready(recipe_list()));
    }

    #[tokio::test]
    async fn failed_load_reports_prefixed_message() {
        let client = client();
        client.transport().push_response(500, "Internal Server Error");
        let state = RefCell::new(ListState::default());

        load_recipes(&client, &CancelToken::new(), |action| {
            state.borrow_mut().apply(action);
        })
        .await;

        assert_eq!(
            state.into_inner(),
            ListState::Failed(
                "Failed to load recipes: API error: 500 - Internal Server Error".to_string()
            )
        );
    }

    #[tokio::test]
    async fn cancelled_load_emits_nothing() {
        let client = client();
        let token = CancelToken::new();
        client.transport().cancel_on_send(token.clone());
        client
            .transport()
            .push_json(200, &json!({ "recipes": recipe_list() }));
        let actions = RefCell::new(Vec::new());

        load_recipes(&client, &token, |action| actions.borrow_mut().push(action)).await;

        assert_eq!(actions.into_inner(), vec![ListAction::LoadStarted]);
    }
}
