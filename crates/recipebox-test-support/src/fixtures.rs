//! Recipe fixtures.

use recipebox_api_models::{Ingredient, Recipe, RecipeId, RecipeListItem};

/// Build a recipe id from a literal known to be non-blank.
///
/// # Panics
///
/// Panics if `raw` is blank; fixtures only pass literals.
#[must_use]
pub fn recipe_id(raw: &str) -> RecipeId {
    RecipeId::parse(raw).unwrap_or_else(|_| panic!("fixture id '{raw}' must not be blank"))
}

/// Recipe with the given name, author display name, and ingredient names.
/// Ingredient ids are `ing-1`, `ing-2`, ... in order.
#[must_use]
pub fn recipe(id: &str, name: &str, author_name: Option<&str>, ingredients: &[&str]) -> Recipe {
    Recipe {
        id: recipe_id(id),
        name: name.to_string(),
        author_id: "author-1".to_string(),
        ingredients: ingredients
            .iter()
            .enumerate()
            .map(|(index, name)| Ingredient {
                id: format!("ing-{}", index + 1),
                name: (*name).to_string(),
            })
            .collect(),
        author_name: author_name.map(str::to_string),
    }
}

/// The recipe used by most edit-mode and detail tests.
#[must_use]
pub fn existing_recipe() -> Recipe {
    recipe("1", "Existing", Some("Amy"), &["Flour"])
}

/// Two list entries.
#[must_use]
pub fn recipe_list() -> Vec<RecipeListItem> {
    vec![
        RecipeListItem {
            id: recipe_id("1"),
            name: "Recipe 1".to_string(),
            author_id: "author-1".to_string(),
        },
        RecipeListItem {
            id: recipe_id("2"),
            name: "Recipe 2".to_string(),
            author_id: "author-2".to_string(),
        },
    ]
}
