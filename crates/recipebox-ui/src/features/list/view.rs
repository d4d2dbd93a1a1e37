//! Recipe list page.

use std::rc::Rc;

use recipebox_client::CancelToken;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::app::api::ApiCtx;
use crate::app::platform::BrowserNavigator;
use crate::components::loading::LoadingState;
use crate::core::routes::AppRoute;
use crate::features::list::actions::{ListIntent, handle_list_intent};
use crate::features::list::api::load_recipes;
use crate::features::list::state::{ListAction, ListState};

impl Reducible for ListState {
    type Action = ListAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        next.apply(action);
        Rc::new(next)
    }
}

#[function_component(RecipeListPage)]
pub(crate) fn recipe_list_page() -> Html {
    let api_ctx = use_context::<ApiCtx>();
    let state = use_reducer(ListState::default);
    let navigator = BrowserNavigator::new(use_navigator());

    {
        let dispatcher = state.dispatcher();
        let api_ctx = api_ctx.clone();
        use_effect_with_deps(
            move |_| {
                let cancel = CancelToken::new();
                if let Some(api_ctx) = api_ctx {
                    let cancel = cancel.clone();
                    yew::platform::spawn_local(async move {
                        load_recipes(&api_ctx.client, &cancel, |action| {
                            dispatcher.dispatch(action);
                        })
                        .await;
                    });
                }
                move || cancel.cancel()
            },
            (),
        );
    }

    if api_ctx.is_none() {
        return html! { <p class="error">{"Missing API context."}</p> };
    }

    let on_intent = Callback::from(move |intent: ListIntent| {
        handle_list_intent(intent, &navigator);
    });

    match &*state {
        ListState::Loading => return html! { <LoadingState /> },
        ListState::Failed(message) => {
            let on_retry = on_intent.reform(|_: MouseEvent| ListIntent::Retry);
            return html! {
                <section class="recipe-list">
                    <h1>{"Error"}</h1>
                    <p class="error">{message.clone()}</p>
                    <button type="button" onclick={on_retry}>{"Retry"}</button>
                </section>
            };
        }
        ListState::Ready(_) => {}
    }

    let on_create = on_intent.reform(|_: MouseEvent| ListIntent::CreateNew);
    let rows = state.recipes().iter().map(|recipe| {
        let on_open = {
            let id = recipe.id.clone();
            on_intent.reform(move |event: MouseEvent| {
                event.prevent_default();
                ListIntent::Open(id.clone())
            })
        };
        html! {
            <li key={recipe.id.as_str()}>
                <a
                    class="card link-unstyled"
                    href={AppRoute::Detail(recipe.id.clone()).path()}
                    onclick={on_open}
                >
                    <h2>{recipe.name.clone()}</h2>
                </a>
            </li>
        }
    });

    html! {
        <section class="recipe-list">
            <header class="page-header">
                <h1>{"Recipes"}</h1>
                <button type="button" class="primary" onclick={on_create}>
                    {"Create New Recipe"}
                </button>
            </header>
            if state.is_empty_result() {
                <p class="muted">{"No recipes yet."}</p>
            }
            <ul class="recipe-cards">{ for rows }</ul>
        </section>
    }
}
