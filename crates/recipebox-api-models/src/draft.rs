//! Client-side validation of recipe drafts before they become request bodies.
//!
//! # Design
//! - Blank means empty after trimming.
//! - Blank ingredient rows are dropped, not rejected; at least one must remain.
//! - Validation never touches the network; callers decide how to surface errors.

use crate::{CreateRecipeInput, IngredientInput, UpdateRecipeInput};

/// Reasons a draft cannot be submitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum DraftError {
    /// Recipe name or author name is blank.
    #[error("Recipe name and author name are required")]
    MissingRequiredFields,
    /// Every ingredient row is blank.
    #[error("At least one ingredient is required")]
    NoIngredients,
}

/// Trimmed draft that passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedDraft {
    /// Trimmed recipe name.
    pub name: String,
    /// Trimmed author (or requester) name.
    pub author_name: String,
    /// Trimmed, non-blank ingredients in their original order.
    pub ingredients: Vec<IngredientInput>,
}

impl ValidatedDraft {
    /// Body for creating a recipe.
    #[must_use]
    pub fn into_create_input(self) -> CreateRecipeInput {
        CreateRecipeInput {
            name: self.name,
            author_name: self.author_name,
            ingredients: self.ingredients,
        }
    }

    /// Body for appending ingredients; the author name acts as the requester.
    #[must_use]
    pub fn into_update_input(self) -> UpdateRecipeInput {
        UpdateRecipeInput {
            requester_name: self.author_name,
            ingredients_to_add: self.ingredients,
        }
    }
}

/// Validate raw form values.
///
/// # Errors
///
/// Returns [`DraftError::MissingRequiredFields`] when the name or author is
/// blank, and [`DraftError::NoIngredients`] when no non-blank ingredient remains.
pub fn validate_draft(
    name: &str,
    author_name: &str,
    ingredients: &[IngredientInput],
) -> Result<ValidatedDraft, DraftError> {
    let name = name.trim();
    let author_name = author_name.trim();
    if name.is_empty() || author_name.is_empty() {
        return Err(DraftError::MissingRequiredFields);
    }

    let ingredients: Vec<IngredientInput> = ingredients
        .iter()
        .map(|ingredient| ingredient.name.trim())
        .filter(|trimmed| !trimmed.is_empty())
        .map(IngredientInput::new)
        .collect();
    if ingredients.is_empty() {
        return Err(DraftError::NoIngredients);
    }

    Ok(ValidatedDraft {
        name: name.to_string(),
        author_name: author_name.to_string(),
        ingredients,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows(names: &[&str]) -> Vec<IngredientInput> {
        names.iter().copied().map(IngredientInput::new).collect()
    }

    #[test]
    fn blank_name_or_author_is_rejected() {
        assert_eq!(
            validate_draft("  ", "Amy", &rows(&["Flour"])),
            Err(DraftError::MissingRequiredFields)
        );
        assert_eq!(
            validate_draft("Cake", "", &rows(&["Flour"])),
            Err(DraftError::MissingRequiredFields)
        );
    }

    #[test]
    fn all_blank_ingredients_are_rejected() {
        let err = validate_draft("Cake", "Amy", &rows(&["", "   "])).expect_err("no ingredients");
        assert_eq!(err, DraftError::NoIngredients);
        assert_eq!(err.to_string(), "At least one ingredient is required");
    }

    #[test]
    fn mixed_rows_keep_only_trimmed_non_blank_entries() {
        let draft = validate_draft(" Cake ", " Amy ", &rows(&[" Flour ", "", "  ", "Sugar"]))
            .expect("draft should validate");
        assert_eq!(draft.name, "Cake");
        assert_eq!(draft.author_name, "Amy");
        assert_eq!(draft.ingredients, rows(&["Flour", "Sugar"]));
    }

    #[test]
    fn update_input_uses_author_as_requester() {
        let update = validate_draft("Cake", "Amy", &rows(&["Sugar"]))
            .expect("valid")
            .into_update_input();
        assert_eq!(update.requester_name, "Amy");
        assert_eq!(update.ingredients_to_add, rows(&["Sugar"]));
    }
}
