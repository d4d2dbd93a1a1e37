//! Output renderers for CLI commands.

use std::fmt::Write as _;

use anyhow::anyhow;
use recipebox_api_models::{Recipe, RecipeListItem};
use serde::Serialize;

use crate::cli::OutputFormat;
use crate::client::{CliError, CliResult};

pub(crate) fn render_recipe_list(recipes: &[RecipeListItem], format: OutputFormat) -> CliResult<()> {
    println!("{}", format_recipe_list(recipes, format)?);
    Ok(())
}

pub(crate) fn render_recipe(recipe: &Recipe, format: OutputFormat) -> CliResult<()> {
    println!("{}", format_recipe(recipe, format)?);
    Ok(())
}

pub(crate) fn format_recipe_list(
    recipes: &[RecipeListItem],
    format: OutputFormat,
) -> CliResult<String> {
    match format {
        OutputFormat::Json => to_json(recipes),
        OutputFormat::Table => {
            if recipes.is_empty() {
                return Ok("no recipes".to_string());
            }
            let id_width = recipes
                .iter()
                .map(|recipe| recipe.id.as_str().len())
                .max()
                .unwrap_or_default()
                .max("ID".len());
            let mut out = format!("{:<id_width$} NAME", "ID");
            for recipe in recipes {
                let _ = write!(out, "\n{:<id_width$} {}", recipe.id.as_str(), recipe.name);
            }
            Ok(out)
        }
    }
}

pub(crate) fn format_recipe(recipe: &Recipe, format: OutputFormat) -> CliResult<String> {
    match format {
        OutputFormat::Json => to_json(recipe),
        OutputFormat::Table => {
            let mut out = format!("id: {}\nname: {}", recipe.id, recipe.name);
            if let Some(author) = recipe.author_display_name() {
                let _ = write!(out, "\nauthor: {author}");
            }
            let _ = write!(out, "\nauthor id: {}", recipe.author_id);
            if recipe.ingredients.is_empty() {
                out.push_str("\ningredients: none");
            } else {
                out.push_str("\ningredients:");
                for ingredient in &recipe.ingredients {
                    let _ = write!(out, "\n  - {}", ingredient.name);
                }
            }
            Ok(out)
        }
    }
}

fn to_json<T: Serialize + ?Sized>(value: &T) -> CliResult<String> {
    serde_json::to_string_pretty(value)
        .map_err(|err| CliError::failure(anyhow!("failed to format JSON: {err}")))
}
