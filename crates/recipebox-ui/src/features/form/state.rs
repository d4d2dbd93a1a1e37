//! Form state and its reducer.
//!
//! # Design
//! - Inputs are kept as raw strings; trimming happens at validation time.
//! - Ingredient rows are addressed by index; out-of-range indices are ignored.
//! - Switching mode discards everything typed so far.

use recipebox_api_models::{
    DraftError, IngredientInput, Recipe, RecipeId, ValidatedDraft, validate_draft,
};

/// Whether the form creates a recipe or appends to an existing one.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FormMode {
    /// New recipe.
    Create,
    /// Append ingredients to recipe `id`.
    Edit(RecipeId),
}

impl FormMode {
    /// Whether an existing recipe is being edited.
    #[must_use]
    pub const fn is_edit(&self) -> bool {
        matches!(self, Self::Edit(_))
    }

    /// Page heading.
    #[must_use]
    pub const fn title(&self) -> &'static str {
        match self {
            Self::Create => "Create New Recipe",
            Self::Edit(_) => "Edit Recipe",
        }
    }

    /// Label of the name-of-person field.
    #[must_use]
    pub const fn author_label(&self) -> &'static str {
        match self {
            Self::Create => "Author Name",
            Self::Edit(_) => "Your Name (Requester)",
        }
    }

    /// Placeholder of the name-of-person field.
    #[must_use]
    pub const fn author_placeholder(&self) -> &'static str {
        match self {
            Self::Create => "Enter your name",
            Self::Edit(_) => "Enter your name to add ingredients",
        }
    }

    /// Submit button text.
    #[must_use]
    pub const fn submit_label(&self, submitting: bool) -> &'static str {
        match (submitting, self) {
            (true, _) => "Saving...",
            (false, Self::Create) => "Create Recipe",
            (false, Self::Edit(_)) => "Update Recipe",
        }
    }
}

/// Everything the form renders.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RecipeFormState {
    /// Current mode.
    pub mode: FormMode,
    /// Recipe name as typed (or seeded in edit mode).
    pub name: String,
    /// Author name, or requester name in edit mode.
    pub author_name: String,
    /// Ingredient rows in display order.
    pub ingredients: Vec<IngredientInput>,
    /// The recipe being edited is loading.
    pub loading: bool,
    /// A create/update request is in flight.
    pub submitting: bool,
    /// Validation or request error shown above the form.
    pub error: Option<String>,
}

/// Transitions applied to [`RecipeFormState`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FormAction {
    /// Replace the recipe name. Ignored in edit mode.
    SetName(String),
    /// Replace the author/requester name.
    SetAuthorName(String),
    /// Append an empty ingredient row.
    AddIngredient,
    /// Remove the row at an index.
    RemoveIngredient(usize),
    /// Replace the name of the row at an index.
    ChangeIngredient(usize, String),
    /// Start over in another mode.
    SwitchMode(FormMode),
    /// Edit-mode load started.
    LoadStarted,
    /// Edit-mode load finished; copy the recipe into the form.
    Seed(Recipe),
    /// Edit-mode load failed.
    LoadFailed(String),
    /// A submit request started.
    SubmitStarted,
    /// A submit request failed.
    SubmitFailed(String),
    /// Local validation rejected the submit.
    ValidationFailed(String),
}

impl RecipeFormState {
    /// Empty form for `mode`; edit mode starts out loading.
    #[must_use]
    pub const fn new(mode: FormMode) -> Self {
        let loading = mode.is_edit();
        Self {
            mode,
            name: String::new(),
            author_name: String::new(),
            ingredients: Vec::new(),
            loading,
            submitting: false,
            error: None,
        }
    }

    /// Apply one transition.
    pub fn apply(&mut self, action: FormAction) {
        match action {
            FormAction::SetName(name) => {
                if !self.mode.is_edit() {
                    self.name = name;
                }
            }
            FormAction::SetAuthorName(author_name) => self.author_name = author_name,
            FormAction::AddIngredient => self.add_ingredient(),
            FormAction::RemoveIngredient(index) => self.remove_ingredient(index),
            FormAction::ChangeIngredient(index, name) => self.change_ingredient(index, name),
            FormAction::SwitchMode(mode) => *self = Self::new(mode),
            FormAction::LoadStarted => {
                self.loading = true;
                self.error = None;
            }
            FormAction::Seed(recipe) => {
                self.name = recipe.name;
                self.author_name = recipe.author_name.unwrap_or_default();
                self.ingredients = recipe
                    .ingredients
                    .into_iter()
                    .map(|ingredient| IngredientInput::new(ingredient.name))
                    .collect();
                self.loading = false;
            }
            FormAction::LoadFailed(message) => {
                self.loading = false;
                self.error = Some(message);
            }
            FormAction::SubmitStarted => {
                self.submitting = true;
                self.error = None;
            }
            FormAction::SubmitFailed(message) => {
                self.submitting = false;
                self.error = Some(message);
            }
            FormAction::ValidationFailed(message) => self.error = Some(message),
        }
    }

    /// Append an empty ingredient row.
    pub fn add_ingredient(&mut self) {
        self.ingredients.push(IngredientInput::new(""));
    }

    /// Remove the row at `index`; out of range is a no-op.
    pub fn remove_ingredient(&mut self, index: usize) {
        if index < self.ingredients.len() {
            self.ingredients.remove(index);
        }
    }

    /// Rename the row at `index`; out of range is a no-op.
    pub fn change_ingredient(&mut self, index: usize, name: String) {
        if let Some(ingredient) = self.ingredients.get_mut(index) {
            ingredient.name = name;
        }
    }

    /// Check the current inputs.
    ///
    /// # Errors
    ///
    /// Returns a [`DraftError`] when required fields are blank or no
    /// ingredient has a name.
    pub fn validate(&self) -> Result<ValidatedDraft, DraftError> {
        validate_draft(&self.name, &self.author_name, &self.ingredients)
    }

    /// Inputs are locked while loading or submitting.
    #[must_use]
    pub const fn is_busy(&self) -> bool {
        self.loading || self.submitting
    }
}
