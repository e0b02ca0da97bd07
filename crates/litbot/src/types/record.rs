//! Interaction log records

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

/// Timestamp layout used in the log header line
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// One question/response exchange as written to the interaction log
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InteractionRecord {
    pub timestamp: DateTime<Local>,
    pub question: String,
    pub response: String,
}

impl InteractionRecord {
    /// Create a record stamped with the current local time
    pub fn now(question: impl Into<String>, response: impl Into<String>) -> Self {
        Self {
            timestamp: Local::now(),
            question: question.into(),
            response: response.into(),
        }
    }

    /// Render the record in the log file layout, including the trailing blank line
    pub fn render(&self) -> String {
        format!(
            "[{}]\nYou: {}\nClaude: {}\n\n",
            self.timestamp.format(TIMESTAMP_FORMAT),
            self.question,
            self.response
        )
    }
}
