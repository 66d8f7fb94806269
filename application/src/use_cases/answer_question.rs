//! Answer Question use case
//!
//! Orchestrates the full question-answer flow:
//!
//! 1. Ask the model which page to search for
//! 2. Resolve that query to a page
//! 3. Ask the model which word to search for on the page
//! 4. Extract the context around that word
//! 5. Generate the answer and the supporting excerpt concurrently
//! 6. Highlight the excerpt within the context

use crate::config::AnswerConfig;
use crate::ports::completion_gateway::{CompletionError, CompletionGateway};
use crate::ports::encyclopedia_gateway::EncyclopediaGateway;
use crate::ports::progress::{NoProgress, ProgressNotifier};
use crate::use_cases::resolve_page::{ResolvePageError, ResolvePageUseCase};
use std::future::Future;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info, warn};
use wikibot_domain::{
    AnswerResult, ContextBuilder, Excerpt, Highlighter, PromptTemplate, Question, Stage,
};

/// Errors that can occur while answering a question
#[derive(Error, Debug)]
pub enum AnswerQuestionError {
    #[error("Completion error: {0}")]
    Completion(#[from] CompletionError),

    #[error(transparent)]
    ResolvePage(#[from] ResolvePageError),
}

impl AnswerQuestionError {
    /// Whether no page could be found for the question
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            AnswerQuestionError::ResolvePage(ResolvePageError::NoResults(_))
        )
    }
}

/// Use case for answering a question from Wikipedia
pub struct AnswerQuestionUseCase<C, E>
where
    C: CompletionGateway + 'static,
    E: EncyclopediaGateway + 'static,
{
    completion: Arc<C>,
    resolver: ResolvePageUseCase<E>,
    context_builder: ContextBuilder,
    highlighter: Highlighter,
    config: AnswerConfig,
}

impl<C, E> AnswerQuestionUseCase<C, E>
where
    C: CompletionGateway + 'static,
    E: EncyclopediaGateway + 'static,
{
    pub fn new(completion: Arc<C>, encyclopedia: Arc<E>) -> Self {
        Self::with_config(completion, encyclopedia, AnswerConfig::default())
    }

    pub fn with_config(completion: Arc<C>, encyclopedia: Arc<E>, config: AnswerConfig) -> Self {
        Self {
            completion,
            resolver: ResolvePageUseCase::new(encyclopedia),
            context_builder: ContextBuilder::new(config.context.clone()),
            highlighter: Highlighter::new(config.highlight),
            config,
        }
    }

    /// Execute the use case with default (no-op) progress
    pub async fn execute(&self, question: &Question) -> Result<AnswerResult, AnswerQuestionError> {
        self.execute_with_progress(question, &NoProgress).await
    }

    /// Execute the use case with progress callbacks
    pub async fn execute_with_progress(
        &self,
        question: &Question,
        progress: &dyn ProgressNotifier,
    ) -> Result<AnswerResult, AnswerQuestionError> {
        info!("Answering question: {}", question);

        let page_query = run_stage(
            Stage::PageQuery,
            progress,
            self.completion
                .complete(&PromptTemplate::page_query(question.content())),
        )
        .await?;
        debug!("Model suggested page query '{}'", page_query);

        let page = run_stage(
            Stage::PageLookup,
            progress,
            self.resolver.execute(&page_query),
        )
        .await?;
        info!("Using page '{}' ({})", page.title, page.url);
        progress.on_page_resolved(&page);

        let search_term = run_stage(
            Stage::SearchTerm,
            progress,
            self.completion
                .complete(&PromptTemplate::search_term(&page.title, question.content())),
        )
        .await?;
        debug!("Model suggested search term '{}'", search_term);

        progress.on_stage_start(Stage::Context);
        let context = self.context_builder.build(&page, &search_term);
        progress.on_stage_complete(Stage::Context, true);
        debug!(
            "Context has {} characters and {} excerpts",
            context.char_len(),
            context.excerpt_count()
        );

        let answer_prompt =
            PromptTemplate::answer(context.as_str(), question.content(), &self.config.today_label());
        let excerpt_prompt = PromptTemplate::excerpt(context.as_str(), question.content());

        let (answer, excerpt_candidate) = run_stage(Stage::Answer, progress, async {
            tokio::try_join!(
                self.completion.complete(&answer_prompt),
                self.completion.complete(&excerpt_prompt),
            )
        })
        .await?;

        let excerpt = Excerpt::verify(excerpt_candidate, &context);
        if excerpt.is_none() {
            warn!("Suggested excerpt does not occur verbatim in the context; not highlighting");
        }

        let highlighted_context = self
            .highlighter
            .highlight(context.as_str(), excerpt.as_ref().map(Excerpt::as_str));

        Ok(AnswerResult {
            question: question.content().to_string(),
            page_query,
            page_title: page.title,
            page_url: page.url,
            search_term,
            context: context.into_string(),
            answer,
            excerpt: excerpt.map(|e| e.as_str().to_string()),
            highlighted_context,
        })
    }
}

/// Run one stage, reporting its start and outcome to `progress`.
async fn run_stage<T, E>(
    stage: Stage,
    progress: &dyn ProgressNotifier,
    work: impl Future<Output = Result<T, E>>,
) -> Result<T, E> {
    progress.on_stage_start(stage);
    let result = work.await;
    progress.on_stage_complete(stage, result.is_ok());
    result
}
