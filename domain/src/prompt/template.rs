//! Prompt templates for the question-answering flow

/// Templates for generating prompts at each stage
///
/// Every value interpolated here has already been sanitized (no newlines,
/// no double quotes) when it comes from a completion, so it can sit inside
/// the quoted slots below.
pub struct PromptTemplate;

impl PromptTemplate {
    /// Ask which page would answer the question
    pub fn page_query(question: &str) -> String {
        format!(
            r#"
Which Wikipedia page would you search for to answer the following question: "{}"

Page name:"#,
            question
        )
    }

    /// Ask which word to search for on the resolved page
    pub fn search_term(page_title: &str, question: &str) -> String {
        format!(
            r#"
Given the Wikipedia page for "{}", what word would you search for on the page to answer the question "{}"

Search term:"#,
            page_title, question
        )
    }

    /// Ask for an answer grounded in the context
    pub fn answer(context: &str, question: &str, today: &str) -> String {
        format!(
            "\nBackground text: \n\n\"{}\"\n\n\
             Answer the following question using only the background text above. \
             Today's date is {}.\n\n\
             Question: \"{}\"\nAnswer:",
            context, today, question
        )
    }

    /// Ask for the substring of the context that supports the answer
    pub fn excerpt(context: &str, question: &str) -> String {
        format!(
            "\nBackground text: \n\n\"{}\"\n\n\
             Given the background text above, which substring would you highlight \
             to answer the question \"{}\"\n\nExcerpt:",
            context, question
        )
    }
}
