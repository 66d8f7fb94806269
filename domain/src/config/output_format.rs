//! Output format value object

use serde::{Deserialize, Serialize};

/// Output format for answers
///
/// This is a domain concept representing how the output should be formatted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Answer, highlighted context and source URL (default)
    #[default]
    Full,
    /// Only the answer line
    Answer,
    /// JSON output
    Json,
}
