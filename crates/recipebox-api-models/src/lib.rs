#![forbid(unsafe_code)]
#![deny(
    warnings,
    dead_code,
    unused,
    unused_imports,
    unused_must_use,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]
//! Shared HTTP DTOs for the Recipebox REST API.
//!
//! These types are used by the browser UI and the CLI for request/response
//! encoding so both surfaces speak exactly the same wire format. Field names
//! are the JSON keys the server expects; do not rename them.

use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

mod draft;

pub use draft::{DraftError, ValidatedDraft, validate_draft};

/// Error returned when a recipe identifier is blank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("recipe identifier must not be empty")]
pub struct RecipeIdError;

/// Server-assigned recipe identifier. Never empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct RecipeId(String);

impl RecipeId {
    /// Parse an identifier, trimming surrounding whitespace.
    ///
    /// # Errors
    ///
    /// Returns [`RecipeIdError`] when the trimmed input is empty.
    pub fn parse(raw: &str) -> Result<Self, RecipeIdError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(RecipeIdError);
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Borrow the identifier text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for RecipeId {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        formatter.write_str(&self.0)
    }
}

impl FromStr for RecipeId {
    type Err = RecipeIdError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::parse(value)
    }
}

impl TryFrom<String> for RecipeId {
    type Error = RecipeIdError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<RecipeId> for String {
    fn from(value: RecipeId) -> Self {
        value.0
    }
}

impl AsRef<str> for RecipeId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Ingredient attached to a persisted recipe.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ingredient {
    /// Server-assigned ingredient identifier.
    pub id: String,
    /// Display name.
    pub name: String,
}

/// Full recipe representation returned by read and write endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recipe {
    /// Recipe identifier.
    pub id: RecipeId,
    /// Recipe name; fixed after creation.
    pub name: String,
    /// Identifier of the authoring user.
    pub author_id: String,
    /// Ingredients in insertion order.
    #[serde(default)]
    pub ingredients: Vec<Ingredient>,
    /// Author display name, when the server includes it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author_name: Option<String>,
}

impl Recipe {
    /// Author display name if present and not blank.
    #[must_use]
    pub fn author_display_name(&self) -> Option<&str> {
        self.author_name
            .as_deref()
            .filter(|name| !name.trim().is_empty())
    }
}

/// Projection of [`Recipe`] used by the list endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecipeListItem {
    /// Recipe identifier.
    pub id: RecipeId,
    /// Recipe name.
    pub name: String,
    /// Identifier of the authoring user.
    pub author_id: String,
}

/// Envelope returned by `GET /recipes`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct RecipesResponse {
    /// Recipes visible to the caller.
    pub recipes: Vec<RecipeListItem>,
}

/// Ingredient name submitted on create or update; identifiers come from the server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IngredientInput {
    /// Ingredient name.
    pub name: String,
}

impl IngredientInput {
    /// Build an input entry from any string-like value.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// Body of `POST /recipes`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateRecipeInput {
    /// Recipe name.
    pub name: String,
    /// Author display name; becomes the owner of the recipe.
    pub author_name: String,
    /// Initial ingredients.
    pub ingredients: Vec<IngredientInput>,
}

/// Body of `PATCH /recipes/{id}`. The API only supports appending ingredients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateRecipeInput {
    /// Name of the person requesting the change, checked against the author.
    pub requester_name: String,
    /// Ingredients appended to the recipe.
    pub ingredients_to_add: Vec<IngredientInput>,
}

/// Body of `DELETE /recipes/{id}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteRecipeInput {
    /// Name of the person requesting the deletion, checked against the author.
    pub requester_name: String,
}

/// Shown when a recipe carries no author name to act as the delete requester.
pub const MISSING_AUTHOR_MESSAGE: &str = "Cannot delete recipe: author name is not available";
