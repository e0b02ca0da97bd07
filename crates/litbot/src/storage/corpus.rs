//! Reference corpus loaded once at start-up

use std::path::Path;

use crate::error::{Error, Result};
use crate::types::CorpusExcerpt;

/// Immutable reference text
#[derive(Debug, Clone)]
pub struct ReferenceCorpus {
    text: String,
    total_chars: usize,
}

impl ReferenceCorpus {
    /// Load a UTF-8 text file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let bytes = std::fs::read(path).map_err(|e| {
            Error::Config(format!(
                "Cannot read reference corpus '{}': {}",
                path.display(),
                e
            ))
        })?;
        let text = String::from_utf8(bytes)
            .map_err(|e| Error::decode(path.display().to_string(), e.to_string()))?;

        let corpus = Self::from_text(text);
        tracing::info!(
            "Loaded reference corpus from {} ({} chars)",
            path.display(),
            corpus.total_chars
        );
        Ok(corpus)
    }

    pub fn from_text(text: impl Into<String>) -> Self {
        let text = text.into();
        let total_chars = text.chars().count();
        Self { text, total_chars }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Length in characters
    pub fn total_chars(&self) -> usize {
        self.total_chars
    }

    /// Character window starting at `offset`, at most `limit` characters.
    /// Offsets past the end yield an empty excerpt.
    pub fn excerpt(&self, offset: usize, limit: usize) -> CorpusExcerpt {
        let offset = offset.min(self.total_chars);
        let text: String = self.text.chars().skip(offset).take(limit).collect();
        let end = offset + text.chars().count();

        CorpusExcerpt {
            offset,
            text,
            total_chars: self.total_chars,
            next_offset: (end < self.total_chars).then_some(end),
        }
    }
}
