//! Create/edit recipe form page.

use std::rc::Rc;

use recipebox_client::CancelToken;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::app::api::ApiCtx;
use crate::app::platform::BrowserNavigator;
use crate::components::field::TextField;
use crate::components::loading::LoadingState;
use crate::features::form::actions::{FormIntent, handle_form_intent};
use crate::features::form::api::{load_for_edit, submit_form};
use crate::features::form::state::{FormAction, FormMode, RecipeFormState};

impl Reducible for RecipeFormState {
    type Action = FormAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        next.apply(action);
        Rc::new(next)
    }
}

#[derive(Properties, PartialEq)]
pub(crate) struct RecipeFormPageProps {
    pub mode: FormMode,
}

#[function_component(RecipeFormPage)]
pub(crate) fn recipe_form_page(props: &RecipeFormPageProps) -> Html {
    let api_ctx = use_context::<ApiCtx>();
    let state = {
        let mode = props.mode.clone();
        use_reducer(move || RecipeFormState::new(mode))
    };
    let navigator = BrowserNavigator::new(use_navigator());

    {
        let dispatcher = state.dispatcher();
        let api_ctx = api_ctx.clone();
        use_effect_with_deps(
            move |mode: &FormMode| {
                let cancel = CancelToken::new();
                dispatcher.dispatch(FormAction::SwitchMode(mode.clone()));
                if let (FormMode::Edit(id), Some(api_ctx)) = (mode, api_ctx) {
                    let cancel = cancel.clone();
                    let id = id.clone();
                    yew::platform::spawn_local(async move {
                        load_for_edit(&api_ctx.client, &id, &cancel, |action| {
                            dispatcher.dispatch(action);
                        })
                        .await;
                    });
                }
                move || cancel.cancel()
            },
            props.mode.clone(),
        );
    }

    let Some(api_ctx) = api_ctx else {
        return html! { <p class="error">{"Missing API context."}</p> };
    };
    if state.loading {
        return html! { <LoadingState /> };
    }

    let mode = state.mode.clone();
    let busy = state.is_busy();
    let dispatch = {
        let dispatcher = state.dispatcher();
        move |action: FormAction| dispatcher.dispatch(action)
    };

    let on_intent = {
        let navigator = navigator.clone();
        Callback::from(move |intent: FormIntent| handle_form_intent(intent, &navigator))
    };
    let on_submit = {
        let snapshot = (*state).clone();
        let dispatcher = state.dispatcher();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            let client = api_ctx.client.clone();
            let snapshot = snapshot.clone();
            let dispatcher = dispatcher.clone();
            let navigator = navigator.clone();
            yew::platform::spawn_local(async move {
                submit_form(
                    &client,
                    &snapshot,
                    &navigator,
                    &CancelToken::new(),
                    |action| dispatcher.dispatch(action),
                )
                .await;
            });
        })
    };
    let on_name = {
        let dispatch = dispatch.clone();
        Callback::from(move |value: String| dispatch(FormAction::SetName(value)))
    };
    let on_author = {
        let dispatch = dispatch.clone();
        Callback::from(move |value: String| dispatch(FormAction::SetAuthorName(value)))
    };
    let on_add = {
        let dispatch = dispatch.clone();
        Callback::from(move |_: MouseEvent| dispatch(FormAction::AddIngredient))
    };

    let ingredient_rows = state.ingredients.iter().enumerate().map(|(index, ingredient)| {
        let on_change = {
            let dispatch = dispatch.clone();
            Callback::from(move |event: InputEvent| {
                let input: HtmlInputElement = event.target_unchecked_into();
                dispatch(FormAction::ChangeIngredient(index, input.value()));
            })
        };
        let on_remove = {
            let dispatch = dispatch.clone();
            Callback::from(move |_: MouseEvent| dispatch(FormAction::RemoveIngredient(index)))
        };
        html! {
            <li key={index}>
                <input
                    type="text"
                    aria-label={format!("Ingredient {}", index + 1)}
                    placeholder="Ingredient name"
                    value={ingredient.name.clone()}
                    disabled={busy}
                    oninput={on_change}
                />
                <button type="button" onclick={on_remove} disabled={busy}>{"Remove"}</button>
            </li>
        }
    });

    html! {
        <section class="recipe-form">
            <header class="page-header">
                <h1>{mode.title()}</h1>
                <button
                    type="button"
                    onclick={on_intent.reform(|_: MouseEvent| FormIntent::BackToList)}
                    disabled={busy}
                >
                    {"Back to Recipes"}
                </button>
            </header>
            {state.error.clone().map(|message| html! {
                <p class="error">{message}</p>
            }).unwrap_or_default()}
            <form onsubmit={on_submit}>
                <TextField
                    label="Recipe Name"
                    value={state.name.clone()}
                    on_input={on_name}
                    disabled={busy || mode.is_edit()}
                    required=true
                />
                <TextField
                    label={mode.author_label()}
                    value={state.author_name.clone()}
                    on_input={on_author}
                    placeholder={mode.author_placeholder()}
                    helper={mode.is_edit().then_some(
                        "You must enter your name to add ingredients to this recipe."
                    )}
                    disabled={busy}
                    required=true
                />
                <fieldset class="ingredients">
                    <legend>{"Ingredients"}</legend>
                    <button type="button" onclick={on_add} disabled={busy}>
                        {"Add Ingredient"}
                    </button>
                    if state.ingredients.is_empty() {
                        <p class="muted">
                            {"No ingredients added. Click \"Add Ingredient\" to add one."}
                        </p>
                    } else {
                        <ul>{ for ingredient_rows }</ul>
                    }
                </fieldset>
                <div class="actions">
                    <button type="submit" class="primary" disabled={busy}>
                        {mode.submit_label(state.submitting)}
                    </button>
                    <button
                        type="button"
                        onclick={on_intent.reform(|_: MouseEvent| FormIntent::Cancel)}
                        disabled={busy}
                    >
                        {"Cancel"}
                    </button>
                </div>
            </form>
        </section>
    }
}
