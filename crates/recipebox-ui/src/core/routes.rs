//! Application routes independent of the router implementation.

use recipebox_api_models::RecipeId;

/// Pages the app can show.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AppRoute {
    /// `/`
    List,
    /// `/recipes/new`
    NewRecipe,
    /// `/recipes/{id}`
    Detail(RecipeId),
    /// `/recipes/{id}/edit`
    Edit(RecipeId),
}

impl AppRoute {
    /// Browser path for the route; identifiers are percent-encoded as one segment.
    #[must_use]
    pub fn path(&self) -> String {
        match self {
            Self::List => "/".to_string(),
            Self::NewRecipe => "/recipes/new".to_string(),
            Self::Detail(id) => format!("/recipes/{}", urlencoding::encode(id.as_str())),
            Self::Edit(id) => format!("/recipes/{}/edit", urlencoding::encode(id.as_str())),
        }
    }
}
