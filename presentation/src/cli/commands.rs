//! CLI command definitions

use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use wikibot_domain::OutputFormat as DomainOutputFormat;

/// Output format for answers
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Answer, highlighted context and page URL
    Full,
    /// Only the answer
    Answer,
    /// The full result as JSON
    Json,
}

impl From<OutputFormat> for DomainOutputFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Full => DomainOutputFormat::Full,
            OutputFormat::Answer => DomainOutputFormat::Answer,
            OutputFormat::Json => DomainOutputFormat::Json,
        }
    }
}

/// CLI arguments for wikibot
#[derive(Parser, Debug)]
#[command(name = "wikibot")]
#[command(author, version, about = "Answer questions from Wikipedia with a completion model")]
#[command(long_about = r#"
wikibot answers a question by asking a completion model which Wikipedia page
to read, pulling the relevant passages from that page, and asking the model to
answer from them. The supporting excerpt is highlighted in the context shown.

Without a question, an interactive prompt is started.

Configuration files are loaded from (in priority order):
1. WIKIBOT_<SECTION>__<KEY>             Environment variables
2. --config <path>                      Explicit config file
3. ./wikibot.toml                       Project-level config
4. ~/.config/wikibot/config.toml        Global config

The OpenAI API key is read from OPENAI_API_KEY.

Example:
  wikibot "When did Apollo 11 land on the moon?"
  wikibot -o json "Who wrote Middlemarch?"
  wikibot
"#)]
pub struct Cli {
    /// The question to answer (starts the interactive prompt when omitted)
    pub question: Option<String>,

    /// Output format [default: full, or the configured format]
    #[arg(short, long, value_enum)]
    pub output: Option<OutputFormat>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(short, long)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}
