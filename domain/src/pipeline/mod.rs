//! Question-answer pipeline concepts.
//!
//! - [`Stage`]: the steps of one cycle, used for progress and logging
//! - [`CompletionParams`]: model, temperature and token limit per request
//! - [`AnswerResult`]: everything one cycle produced

pub mod completion;
pub mod stage;
pub mod value_objects;

pub use completion::{CompletionParams, sanitize_completion};
pub use stage::Stage;
pub use value_objects::AnswerResult;
