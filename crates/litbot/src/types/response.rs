//! Response types returned by the session controller and the HTTP API

use serde::{Deserialize, Serialize};

use super::document::DocumentFormat;

/// Result of a review or reflection upload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadOutcome {
    /// Filename as uploaded
    pub original_name: String,
    /// Sanitized, disambiguated name shown to the user
    pub stored_as: String,
    /// Format derived from the filename
    pub format: DocumentFormat,
    /// Human-readable label for `format`
    pub format_name: String,
    /// Extracted text (preview)
    pub text: String,
    /// Length of the extracted text in characters
    pub chars: usize,
}

impl UploadOutcome {
    pub fn new(original_name: String, stored_as: String, format: DocumentFormat, text: String) -> Self {
        let chars = text.chars().count();
        Self {
            original_name,
            stored_as,
            format,
            format_name: format.display_name().to_string(),
            text,
            chars,
        }
    }
}

/// A rendered question/answer pair
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Exchange {
    pub question: String,
    pub response: String,
    /// Name of the generator that produced the response
    pub generator: String,
    /// Set when the answer was produced but could not be written to the log
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_warning: Option<String>,
}

impl Exchange {
    /// Whether the exchange reached the interaction log
    pub fn is_logged(&self) -> bool {
        self.log_warning.is_none()
    }
}

/// Window into the reference corpus
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorpusExcerpt {
    /// Character offset of the first character in `text`
    pub offset: usize,
    pub text: String,
    /// Total corpus length in characters
    pub total_chars: usize,
    /// Offset of the following excerpt, if any text remains
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_offset: Option<usize>,
}
