//! Argument parsing and command dispatch.

use std::time::Duration;

use anyhow::anyhow;
use clap::{Args, Parser, Subcommand, ValueEnum};
use recipebox_telemetry::{LogFormat, LoggingConfig, command_span, init_logging};
use tracing::Instrument;
use url::Url;

use crate::client::{AppContext, CliError, CliResult};
use crate::commands::recipes::{
    handle_add_ingredients, handle_create, handle_list, handle_remove, handle_show,
};

pub(crate) const DEFAULT_API_URL: &str = "http://127.0.0.1:8080/api";
pub(crate) const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Parse arguments, run the requested command and return the process exit code.
pub async fn run() -> i32 {
    run_with(Cli::parse()).await
}

pub(crate) async fn run_with(cli: Cli) -> i32 {
    let logging = LoggingConfig {
        level: &cli.log_level,
        format: cli
            .log_format
            .as_deref()
            .map_or_else(LogFormat::infer, LogFormat::from_name),
    };
    if let Err(err) = init_logging(&logging) {
        eprintln!("warning: {err}");
    }

    let span = command_span(cli.command.label());
    let result = tokio::select! {
        result = dispatch(cli).instrument(span) => result,
        _ = tokio::signal::ctrl_c() => Err(CliError::failure(anyhow!("interrupted"))),
    };

    match result {
        Ok(()) => 0,
        Err(err) => {
            eprintln!("error: {}", err.display_message());
            err.exit_code()
        }
    }
}

async fn dispatch(cli: Cli) -> CliResult<()> {
    let ctx = AppContext::new(&cli.api_url, Duration::from_secs(cli.timeout))?;
    match cli.command {
        Command::Ls => handle_list(&ctx, cli.output).await,
        Command::Show(args) => handle_show(&ctx, args, cli.output).await,
        Command::Create(args) => handle_create(&ctx, args, cli.output).await,
        Command::AddIngredients(args) => handle_add_ingredients(&ctx, args, cli.output).await,
        Command::Rm(args) => handle_remove(&ctx, args).await,
    }
}

#[derive(Parser)]
#[command(name = "recipebox", about = "Command-line client for a Recipebox server")]
pub(crate) struct Cli {
    #[arg(
        long,
        global = true,
        env = "RECIPEBOX_API_URL",
        value_parser = parse_url,
        default_value = DEFAULT_API_URL
    )]
    pub(crate) api_url: Url,
    #[arg(
        long,
        global = true,
        env = "RECIPEBOX_HTTP_TIMEOUT_SECS",
        default_value_t = DEFAULT_TIMEOUT_SECS
    )]
    pub(crate) timeout: u64,
    #[arg(
        long = "output",
        alias = "format",
        global = true,
        value_enum,
        default_value_t = OutputFormat::Table,
        help = "Select output format for commands that render recipes"
    )]
    pub(crate) output: OutputFormat,
    #[arg(
        long,
        global = true,
        env = "RECIPEBOX_LOG",
        default_value = recipebox_telemetry::DEFAULT_LOG_LEVEL
    )]
    pub(crate) log_level: String,
    #[arg(long, global = true, env = "RECIPEBOX_LOG_FORMAT", help = "json or pretty")]
    pub(crate) log_format: Option<String>,
    #[command(subcommand)]
    pub(crate) command: Command,
}

#[derive(Subcommand)]
pub(crate) enum Command {
    /// List recipes.
    Ls,
    /// Show one recipe.
    Show(ShowArgs),
    /// Create a recipe.
    Create(CreateArgs),
    /// Append ingredients to a recipe.
    AddIngredients(AddIngredientsArgs),
    /// Delete a recipe.
    Rm(RemoveArgs),
}

impl Command {
    pub(crate) const fn label(&self) -> &'static str {
        match self {
            Self::Ls => "ls",
            Self::Show(_) => "show",
            Self::Create(_) => "create",
            Self::AddIngredients(_) => "add-ingredients",
            Self::Rm(_) => "rm",
        }
    }
}

#[derive(Args)]
pub(crate) struct ShowArgs {
    #[arg(help = "Recipe identifier")]
    pub(crate) id: String,
}

#[derive(Args)]
pub(crate) struct CreateArgs {
    #[arg(long)]
    pub(crate) name: String,
    #[arg(long)]
    pub(crate) author: String,
    #[arg(long = "ingredient", help = "Ingredient name; repeat for several")]
    pub(crate) ingredients: Vec<String>,
}

#[derive(Args)]
pub(crate) struct AddIngredientsArgs {
    #[arg(help = "Recipe identifier")]
    pub(crate) id: String,
    #[arg(long, help = "Name checked against the recipe author")]
    pub(crate) requester: String,
    #[arg(long = "ingredient", help = "Ingredient name; repeat for several")]
    pub(crate) ingredients: Vec<String>,
}

#[derive(Args)]
pub(crate) struct RemoveArgs {
    #[arg(help = "Recipe identifier")]
    pub(crate) id: String,
    #[arg(long, help = "Name checked against the recipe author (defaults to the author)")]
    pub(crate) requester: Option<String>,
    #[arg(long, help = "Skip the confirmation prompt")]
    pub(crate) yes: bool,
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
    #[default]
    Table,
    Json,
}

fn parse_url(value: &str) -> Result<Url, String> {
    Url::parse(value).map_err(|err| format!("invalid URL '{value}': {err}"))
}
