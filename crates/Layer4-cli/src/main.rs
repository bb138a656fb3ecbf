//! Clio CLI - Main entry point

mod output;

use clap::Parser;
use clio_agent::CommandOrchestrator;
use clio_core::{catalog, CommandBatch};
use clio_foundation::{ClioConfig, Error};
use clio_provider::OpenRouterProvider;
use clio_task::{Confirmation, ExecutionEngine, StdinConfirmation};
use std::io::Write;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Clio - translate natural language into shell commands
#[derive(Parser, Debug)]
#[command(name = "clio")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// The request, in natural language (prompts interactively if omitted)
    query: Vec<String>,

    /// Emit only the raw JSON result, for embedding in another tool
    #[arg(long)]
    json_only: bool,

    /// Skip the execution confirmation prompt
    #[arg(short, long)]
    yes: bool,

    /// Model to use
    #[arg(long)]
    model: Option<String>,

    /// API key (overrides env and config)
    #[arg(long)]
    api_key: Option<String>,

    /// Chat completions endpoint (for OpenAI-compatible APIs)
    #[arg(long)]
    base_url: Option<String>,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Initialize logging
    let log_level = if args.debug { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    // Load configuration, CLI flags override env and file
    let mut config = ClioConfig::load().unwrap_or_else(|e| {
        eprintln!("Warning: Failed to load config: {e}");
        ClioConfig::default()
    });
    if let Some(model) = args.model {
        config.model = model;
    }
    if let Some(api_key) = args.api_key {
        config.api_key = Some(api_key);
    }
    if let Some(base_url) = args.base_url {
        config.base_url = base_url;
    }

    let query = if args.query.is_empty() {
        prompt_for_query()?
    } else {
        args.query.join(" ")
    };

    let batch = generate_batch(&config, &query).await;

    if args.json_only {
        // Raw structured result for programmatic usage
        println!("{}", serde_json::to_string(&batch)?);
        return Ok(());
    }

    let has_commands = output::display_friendly(&batch);
    if !has_commands {
        return Ok(());
    }

    // --yes answers the execute gate only; the per-failure continue/stop
    // prompt stays interactive (an unreadable stdin answers "stop")
    if args.yes || StdinConfirmation.confirm("Execute these commands?") {
        let engine = ExecutionEngine::new(Box::new(StdinConfirmation));
        engine.execute(&batch)?;
    }

    Ok(())
}

/// Generate the batch, reporting a missing credential once, upfront.
///
/// The cheap query checks still run without a key so "Empty query" and
/// "No Command Found" are reported before the credential error.
async fn generate_batch(config: &ClioConfig, query: &str) -> CommandBatch {
    if query.trim().is_empty() {
        return CommandBatch::from_error(Error::EmptyQuery);
    }
    if catalog().is_general_query(query) {
        return CommandBatch::from_error(Error::NoCommandFound);
    }

    let api_key = match config.require_api_key() {
        Ok(key) => key.to_string(),
        Err(e) => return CommandBatch::from_error(e),
    };

    let provider = OpenRouterProvider::new(api_key, config.model.clone())
        .with_base_url(config.base_url.clone())
        .with_timeout(std::time::Duration::from_secs(config.timeout_secs));

    let orchestrator = CommandOrchestrator::new(provider).with_max_tokens(config.max_tokens);
    orchestrator.generate(query).await
}

/// Interactive fallback when no query arguments were given
fn prompt_for_query() -> anyhow::Result<String> {
    print!("Enter your command in natural language: ");
    std::io::stdout().flush()?;

    let mut query = String::new();
    std::io::stdin().read_line(&mut query)?;
    Ok(query.trim().to_string())
}
