//! Loading indicator shown while a page fetches data.

use yew::prelude::*;

#[function_component(LoadingState)]
pub(crate) fn loading_state() -> Html {
    html! {
        <div class="loading-state" role="status" aria-live="polite">
            <span class="spinner" aria-hidden="true"></span>
            <span class="sr-only">{"Loading..."}</span>
        </div>
    }
}
