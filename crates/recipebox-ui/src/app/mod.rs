//! App shell: router, shared contexts and the wasm entry point.

use yew::prelude::*;
use yew_router::prelude::*;

use crate::app::api::ApiCtx;
use crate::app::preferences::client_config;
use crate::core::ids::IdScope;
use crate::core::routes::AppRoute;
use crate::features::detail::view::RecipeDetailPage;
use crate::features::form::state::FormMode;
use crate::features::form::view::RecipeFormPage;
use crate::features::list::view::RecipeListPage;

pub(crate) mod api;
pub(crate) mod platform;
mod preferences;
pub(crate) mod routes;

pub(crate) use routes::Route;

#[function_component(RecipeboxApp)]
fn recipebox_app() -> Html {
    let api_ctx = use_memo(|_| ApiCtx::new(client_config()), ());
    let ids = use_memo(|_| IdScope::default(), ());

    html! {
        <ContextProvider<ApiCtx> context={(*api_ctx).clone()}>
            <ContextProvider<IdScope> context={(*ids).clone()}>
                <BrowserRouter>
                    <main class="recipebox">
                        <Switch<Route> render={switch} />
                    </main>
                </BrowserRouter>
            </ContextProvider<IdScope>>
        </ContextProvider<ApiCtx>>
    }
}

fn switch(route: Route) -> Html {
    match route.to_app_route() {
        Some(AppRoute::List) => html! { <RecipeListPage /> },
        Some(AppRoute::NewRecipe) => html! { <RecipeFormPage mode={FormMode::Create} /> },
        Some(AppRoute::Detail(id)) => html! { <RecipeDetailPage id={id} /> },
        Some(AppRoute::Edit(id)) => html! { <RecipeFormPage mode={FormMode::Edit(id)} /> },
        None => html! {
            <section class="not-found">
                <h1>{"Page not found"}</h1>
                <Link<Route> to={Route::List}>{"Back to Recipes"}</Link<Route>>
            </section>
        },
    }
}

/// Mount the app on `#root`, or on `<body>` when no such element exists.
pub fn run_app() {
    console_error_panic_hook::set_once();
    if let Some(root) = gloo::utils::document().get_element_by_id("root") {
        yew::Renderer::<RecipeboxApp>::with_root(root).render();
    } else {
        yew::Renderer::<RecipeboxApp>::new().render();
    }
}
