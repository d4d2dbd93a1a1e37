//! Router table for the Recipebox UI.
use recipebox_api_models::RecipeId;
use yew_router::prelude::*;

use crate::core::routes::AppRoute;

#[derive(Clone, Routable, PartialEq, Eq, Debug)]
pub(crate) enum Route {
    #[at("/")]
    List,
    #[at("/recipes/new")]
    NewRecipe,
    #[at("/recipes/:id")]
    Detail { id: String },
    #[at("/recipes/:id/edit")]
    Edit { id: String },
    #[not_found]
    #[at("/404")]
    NotFound,
}

impl Route {
    /// Typed counterpart; `None` for the not-found page or a blank id.
    pub(crate) fn to_app_route(&self) -> Option<AppRoute> {
        match self {
            Self::List => Some(AppRoute::List),
            Self::NewRecipe => Some(AppRoute::NewRecipe),
            Self::Detail { id } => RecipeId::parse(id).ok().map(AppRoute::Detail),
            Self::Edit { id } => RecipeId::parse(id).ok().map(AppRoute::Edit),
            Self::NotFound => None,
        }
    }
}

impl From<AppRoute> for Route {
    fn from(route: AppRoute) -> Self {
        match route {
            AppRoute::List => Self::List,
            AppRoute::NewRecipe => Self::NewRecipe,
            AppRoute::Detail(id) => Self::Detail { id: id.into() },
            AppRoute::Edit(id) => Self::Edit { id: id.into() },
        }
    }
}
