//! Recipe command handlers.

use std::io::{self, BufRead, IsTerminal, Write};

use anyhow::anyhow;
use recipebox_api_models::{IngredientInput, MISSING_AUTHOR_MESSAGE, validate_draft};

use crate::cli::{AddIngredientsArgs, CreateArgs, OutputFormat, RemoveArgs, ShowArgs};
use crate::client::{AppContext, CliError, CliResult, parse_recipe_id};
use crate::output::{render_recipe, render_recipe_list};

pub(crate) async fn handle_list(ctx: &AppContext, output: OutputFormat) -> CliResult<()> {
    let recipes = ctx.client.list_recipes(&ctx.cancel).await?;
    render_recipe_list(&recipes, output)
}

pub(crate) async fn handle_show(
    ctx: &AppContext,
    args: ShowArgs,
    output: OutputFormat,
) -> CliResult<()> {
    let id = parse_recipe_id(&args.id)?;
    let recipe = ctx.client.get_recipe(&id, &ctx.cancel).await?;
    render_recipe(&recipe, output)
}

pub(crate) async fn handle_create(
    ctx: &AppContext,
    args: CreateArgs,
    output: OutputFormat,
) -> CliResult<()> {
    let draft = validate_draft(&args.name, &args.author, &ingredient_inputs(args.ingredients))?;
    let recipe = ctx
        .client
        .create_recipe(&draft.into_create_input(), &ctx.cancel)
        .await?;
    tracing::info!(recipe_id = %recipe.id, "recipe created");
    render_recipe(&recipe, output)
}

/// Loads the recipe first so the same draft rules as the edit form apply.
pub(crate) async fn handle_add_ingredients(
    ctx: &AppContext,
    args: AddIngredientsArgs,
    output: OutputFormat,
) -> CliResult<()> {
    let id = parse_recipe_id(&args.id)?;
    let existing = ctx.client.get_recipe(&id, &ctx.cancel).await?;
    let draft = validate_draft(
        &existing.name,
        &args.requester,
        &ingredient_inputs(args.ingredients),
    )?;
    let updated = ctx
        .client
        .update_recipe(&id, &draft.into_update_input(), &ctx.cancel)
        .await?;
    tracing::info!(recipe_id = %id, "ingredients added");
    render_recipe(&updated, output)
}

pub(crate) async fn handle_remove(ctx: &AppContext, args: RemoveArgs) -> CliResult<()> {
    let id = parse_recipe_id(&args.id)?;
    let explicit_requester = args
        .requester
        .map(|name| name.trim().to_string())
        .filter(|name| !name.is_empty());

    let requester = match (explicit_requester, args.yes) {
        (Some(name), true) => name,
        (explicit, skip_prompt) => {
            let recipe = ctx.client.get_recipe(&id, &ctx.cancel).await?;
            let prompt = format!("Are you sure you want to delete \"{}\"?", recipe.name);
            if !skip_prompt && !confirm_on_terminal(&prompt)? {
                println!("Deletion cancelled");
                return Ok(());
            }
            match explicit {
                Some(name) => name,
                None => recipe
                    .author_display_name()
                    .map(str::to_string)
                    .ok_or_else(|| CliError::validation(MISSING_AUTHOR_MESSAGE))?,
            }
        }
    };

    ctx.client
        .delete_recipe(&id, &requester, &ctx.cancel)
        .await?;
    tracing::info!(recipe_id = %id, "recipe deleted");
    println!("Recipe {id} deleted");
    Ok(())
}

fn ingredient_inputs(names: Vec<String>) -> Vec<IngredientInput> {
    names.into_iter().map(IngredientInput::new).collect()
}

fn confirm_on_terminal(message: &str) -> CliResult<bool> {
    let stdin = io::stdin();
    if !stdin.is_terminal() {
        return Err(CliError::validation(
            "refusing to delete without --yes when stdin is not a terminal",
        ));
    }
    let mut stdout = io::stdout().lock();
    write!(stdout, "{message} [y/N] ")
        .and_then(|()| stdout.flush())
        .map_err(|err| CliError::failure(anyhow!("failed to write prompt: {err}")))?;
    let mut answer = String::new();
    stdin
        .lock()
        .read_line(&mut answer)
        .map_err(|err| CliError::failure(anyhow!("failed to read answer: {err}")))?;
    Ok(matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes"))
}
