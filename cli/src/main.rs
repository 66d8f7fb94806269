//! CLI entrypoint for wikibot
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, bail};
use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;
use wikibot_application::{AnswerConfig, AnswerQuestionUseCase, CompletionError};
use wikibot_domain::OutputFormat;
use wikibot_infrastructure::{
    ConfigLoader, FileConfig, OpenAiCompletionGateway, WikipediaGateway,
};
use wikibot_presentation::{Cli, ReplOptions, WikiRepl};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    if cli.show_config {
        ConfigLoader::print_config_sources(cli.config.as_ref());
        return Ok(());
    }

    let config = load_config(cli.no_config, cli.config.as_ref())?;
    config.validate().context("Invalid configuration")?;

    info!("Starting wikibot");

    let color = config.output.color && !cli.no_color;
    if !color {
        colored::control::set_override(false);
    }

    // === Dependency Injection ===
    let completion = match OpenAiCompletionGateway::from_config(
        &config.openai,
        config.completion.to_params(),
    ) {
        Ok(gateway) => Arc::new(gateway),
        Err(CompletionError::Authentication(message)) => {
            eprintln!("{}", message);
            std::process::exit(1);
        }
        Err(e) => return Err(e.into()),
    };
    let encyclopedia = Arc::new(WikipediaGateway::new(&config.wikipedia)?);

    let answer_config = AnswerConfig::new(
        config.context.to_settings(),
        config.highlight.to_settings(color),
    );
    let use_case = AnswerQuestionUseCase::with_config(completion, encyclopedia, answer_config);

    let format: OutputFormat = cli
        .output
        .map(Into::into)
        .or(config.output.format)
        .unwrap_or_default();

    let options = ReplOptions {
        prompt: config.repl.prompt.clone(),
        show_progress: !cli.quiet && config.repl.show_progress,
        format,
        color,
        history_path: config.repl.history_path(),
    };
    let repl = WikiRepl::new(use_case, options);

    // Single question mode
    if let Some(question) = cli.question {
        if question.trim().is_empty() {
            bail!("Question cannot be empty");
        }
        let output = repl.answer(&question).await?;
        println!("{}", output);
        return Ok(());
    }

    repl.run().await?;
    Ok(())
}

fn load_config(no_config: bool, path: Option<&PathBuf>) -> Result<FileConfig> {
    if no_config {
        return Ok(ConfigLoader::load_defaults());
    }
    ConfigLoader::load(path).map_err(|e| anyhow::anyhow!("Failed to load configuration: {}", e))
}
