//! REPL (Read-Eval-Print Loop) for interactive questions

use crate::output::formatter::OutputFormatter;
use crate::{ConsoleFormatter, ProgressReporter, SimpleProgress};
use colored::Colorize;
use rustyline::error::ReadlineError;
use rustyline::{DefaultEditor, Result as RlResult};
use std::io::IsTerminal;
use std::path::PathBuf;
use tracing::debug;
use wikibot_application::{
    AnswerQuestionError, AnswerQuestionUseCase, CompletionGateway, EncyclopediaGateway,
    NoProgress,
};
use wikibot_domain::{OutputFormat, Question};

pub const INTRO_MESSAGE: &str = "Welcome to Wikipedia GPT-3 Bot. Ask any question.";

/// How the REPL prompts, reports progress and prints answers
#[derive(Debug, Clone)]
pub struct ReplOptions {
    pub prompt: String,
    pub show_progress: bool,
    pub format: OutputFormat,
    pub color: bool,
    pub history_path: Option<PathBuf>,
}

impl Default for ReplOptions {
    fn default() -> Self {
        Self {
            prompt: "(wikibot) ".to_string(),
            show_progress: true,
            format: OutputFormat::Full,
            color: true,
            history_path: dirs::data_dir().map(|p| p.join("wikibot").join("history.txt")),
        }
    }
}

/// Interactive question REPL
pub struct WikiRepl<C, E>
where
    C: CompletionGateway + 'static,
    E: EncyclopediaGateway + 'static,
{
    use_case: AnswerQuestionUseCase<C, E>,
    options: ReplOptions,
    formatter: ConsoleFormatter,
}

impl<C, E> WikiRepl<C, E>
where
    C: CompletionGateway + 'static,
    E: EncyclopediaGateway + 'static,
{
    pub fn new(use_case: AnswerQuestionUseCase<C, E>, options: ReplOptions) -> Self {
        let formatter = ConsoleFormatter::new(options.color);
        Self {
            use_case,
            options,
            formatter,
        }
    }

    /// Run the interactive REPL
    pub async fn run(&self) -> RlResult<()> {
        let mut rl = DefaultEditor::new()?;

        if let Some(ref path) = self.options.history_path {
            if let Some(parent) = path.parent() {
                let _ = std::fs::create_dir_all(parent);
            }
            if rl.load_history(path).is_err() {
                debug!("No history loaded from {}", path.display());
            }
        }

        println!("{}", INTRO_MESSAGE);

        loop {
            match rl.readline(&self.options.prompt) {
                Ok(line) => {
                    let line = line.trim();

                    if line.is_empty() {
                        continue;
                    }

                    if line.starts_with('/') {
                        if self.handle_command(line) {
                            break;
                        }
                        continue;
                    }

                    let _ = rl.add_history_entry(line);

                    match self.answer(line).await {
                        Ok(output) => println!("{}", output),
                        Err(e) => eprintln!("{} {}", "Error:".red().bold(), e),
                    }
                }
                Err(ReadlineError::Interrupted) => {
                    println!("^C");
                    continue;
                }
                Err(ReadlineError::Eof) => {
                    println!("Bye!");
                    break;
                }
                Err(err) => {
                    eprintln!("Error: {:?}", err);
                    break;
                }
            }
        }

        if let Some(ref path) = self.options.history_path {
            let _ = rl.save_history(path);
        }

        Ok(())
    }

    /// Handle slash commands. Returns true if should exit.
    fn handle_command(&self, cmd: &str) -> bool {
        match cmd {
            "/quit" | "/exit" | "/q" => {
                println!("Bye!");
                true
            }
            "/help" | "/h" | "/?" => {
                println!();
                println!("Type a question and press Enter to answer it from Wikipedia.");
                println!();
                println!("Commands:");
                println!("  /help, /h, /?    - Show this help");
                println!("  /quit, /exit, /q - Exit");
                println!();
                false
            }
            _ => {
                println!("Unknown command: {}", cmd);
                println!("Type /help for available commands");
                false
            }
        }
    }

    /// Answer one line of input and render it in the configured format.
    pub async fn answer(&self, line: &str) -> Result<String, AnswerQuestionError> {
        let Some(question) = Question::try_new(line) else {
            return Ok(String::new());
        };

        // JSON output owns stdout
        let announce_page = self.announces_page();

        // Spinners draw nothing off a terminal
        let result = if !self.options.show_progress {
            self.use_case
                .execute_with_progress(&question, &NoProgress)
                .await?
        } else if std::io::stderr().is_terminal() {
            self.use_case
                .execute_with_progress(
                    &question,
                    &ProgressReporter::new().with_page_announcement(announce_page),
                )
                .await?
        } else {
            self.use_case
                .execute_with_progress(
                    &question,
                    &SimpleProgress::new().with_page_announcement(announce_page),
                )
                .await?
        };

        Ok(self.formatter.render(&result, self.options.format))
    }

    fn announces_page(&self) -> bool {
        self.options.format != OutputFormat::Json
    }
}
