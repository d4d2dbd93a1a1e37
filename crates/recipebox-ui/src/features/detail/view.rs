//! Recipe detail page.

use std::rc::Rc;

use recipebox_api_models::RecipeId;
use recipebox_client::CancelToken;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::app::api::ApiCtx;
use crate::app::platform::{BrowserConfirm, BrowserNavigator};
use crate::components::loading::LoadingState;
use crate::features::detail::actions::{DetailIntent, handle_detail_intent};
use crate::features::detail::api::{delete_recipe, load_recipe};
use crate::features::detail::state::{DetailAction, DetailPhase, DetailState};

impl Reducible for DetailState {
    type Action = DetailAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        next.apply(action);
        Rc::new(next)
    }
}

#[derive(Properties, PartialEq)]
pub(crate) struct RecipeDetailPageProps {
    pub id: RecipeId,
}

#[function_component(RecipeDetailPage)]
pub(crate) fn recipe_detail_page(props: &RecipeDetailPageProps) -> Html {
    let api_ctx = use_context::<ApiCtx>();
    let state = use_reducer(DetailState::default);
    let navigator = BrowserNavigator::new(use_navigator());

    {
        let dispatcher = state.dispatcher();
        let api_ctx = api_ctx.clone();
        use_effect_with_deps(
            move |id: &RecipeId| {
                let cancel = CancelToken::new();
                if let Some(api_ctx) = api_ctx {
                    let cancel = cancel.clone();
                    let id = id.clone();
                    yew::platform::spawn_local(async move {
                        load_recipe(&api_ctx.client, &id, &cancel, |action| {
                            dispatcher.dispatch(action);
                        })
                        .await;
                    });
                }
                move || cancel.cancel()
            },
            props.id.clone(),
        );
    }

    let Some(api_ctx) = api_ctx else {
        return html! { <p class="error">{"Missing API context."}</p> };
    };

    let recipe = match &state.phase {
        DetailPhase::Loading => return html! { <LoadingState /> },
        DetailPhase::NotFound => {
            return html! { <p class="muted">{"Recipe not found"}</p> };
        }
        DetailPhase::Failed(message) => {
            return html! { <p class="error">{message.clone()}</p> };
        }
        DetailPhase::Ready(recipe) => recipe.clone(),
    };

    let on_intent = {
        let navigator = navigator.clone();
        Callback::from(move |intent: DetailIntent| handle_detail_intent(intent, &navigator))
    };
    let on_back = on_intent.reform(|_: MouseEvent| DetailIntent::BackToList);
    let on_edit = {
        let id = recipe.id.clone();
        on_intent.reform(move |_: MouseEvent| DetailIntent::Edit(id.clone()))
    };
    let on_delete = {
        let dispatcher = state.dispatcher();
        let recipe = recipe.clone();
        Callback::from(move |_: MouseEvent| {
            let client = api_ctx.client.clone();
            let dispatcher = dispatcher.clone();
            let navigator = navigator.clone();
            let recipe = recipe.clone();
            yew::platform::spawn_local(async move {
                delete_recipe(
                    &client,
                    &recipe,
                    &BrowserConfirm,
                    &navigator,
                    &CancelToken::new(),
                    |action| dispatcher.dispatch(action),
                )
                .await;
            });
        })
    };

    let deleting = state.deleting;
    html! {
        <section class="recipe-detail">
            <header class="page-header">
                <h1>{recipe.name.clone()}</h1>
                <div class="actions">
                    <button type="button" onclick={on_back} disabled={deleting}>
                        {"Back to Recipes"}
                    </button>
                    <button type="button" onclick={on_edit} disabled={deleting}>
                        {"Edit"}
                    </button>
                    <button type="button" onclick={on_delete} disabled={deleting}>
                        { if deleting { "Deleting..." } else { "Delete" } }
                    </button>
                </div>
            </header>
            {state.action_error.clone().map(|message| html! {
                <p class="error">{message}</p>
            }).unwrap_or_default()}
            <article class="card">
                <p><strong>{"Author ID:"}</strong>{" "}{recipe.author_id.clone()}</p>
                {recipe.author_display_name().map(|author| html! {
                    <p><strong>{"Author:"}</strong>{" "}{author.to_string()}</p>
                }).unwrap_or_default()}
                <p><strong>{"Ingredients:"}</strong></p>
                if recipe.ingredients.is_empty() {
                    <p class="muted">{"No ingredients added yet."}</p>
                } else {
                    <ul class="ingredients">
                        { for recipe.ingredients.iter().map(|ingredient| html! {
                            <li key={ingredient.id.clone()}>{ingredient.name.clone()}</li>
                        }) }
                    </ul>
                }
            </article>
        </section>
    }
}
