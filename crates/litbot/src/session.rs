//! Session controller
//!
//! Orchestrates decoding, sanitization, response generation and persistence for
//! the UI events: review upload, question submission and reflection upload.
//! There is a single process-wide session.

use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::config::LitbotConfig;
use crate::error::{Error, Result};
use crate::generation::{PlaceholderResponder, PromptBuilder, ResponseGenerator};
use crate::ingestion::{extract_text, sanitize};
use crate::storage::{LogStore, ReferenceCorpus, ReflectionStore};
use crate::types::{CorpusExcerpt, Exchange, UploadOutcome, UploadedDocument};

/// The currently loaded review
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReviewState {
    pub original_name: String,
    pub stored_as: String,
    pub text: String,
}

/// Handles UI events against the shared stores
pub struct SessionController {
    corpus: Arc<ReferenceCorpus>,
    generator: Arc<dyn ResponseGenerator>,
    log: Arc<LogStore>,
    reflections: ReflectionStore,
    review: RwLock<Option<ReviewState>>,
}

impl SessionController {
    pub fn new(
        corpus: Arc<ReferenceCorpus>,
        generator: Arc<dyn ResponseGenerator>,
        log: Arc<LogStore>,
        reflections: ReflectionStore,
    ) -> Self {
        Self {
            corpus,
            generator,
            log,
            reflections,
            review: RwLock::new(None),
        }
    }

    /// Build a controller from configuration with the placeholder responder.
    /// Fails if the reference corpus cannot be loaded.
    pub fn from_config(config: &LitbotConfig) -> Result<Self> {
        let corpus = Arc::new(ReferenceCorpus::load(&config.storage.corpus_path)?);
        let generator: Arc<dyn ResponseGenerator> =
            Arc::new(PlaceholderResponder::new(&config.responder));
        let log = Arc::new(LogStore::new(config.storage.log_path.clone()));
        let reflections = ReflectionStore::new(config.storage.reflection_path.clone());

        tracing::info!(
            "Session ready (generator: {}, log: {}, reflection: {})",
            generator.name(),
            log.path().display(),
            reflections.target().display()
        );

        Ok(Self::new(corpus, generator, log, reflections))
    }

    /// Current review, if one was uploaded
    pub fn review(&self) -> Option<ReviewState> {
        self.review.read().clone()
    }

    /// Decode a review upload and make it the discussion context.
    ///
    /// The sanitized name is reported only; the review is never written to disk.
    /// A failed decode clears the previous review.
    pub fn upload_review(&self, doc: UploadedDocument) -> Result<UploadOutcome> {
        let stored_as = sanitize(&doc.filename);
        let text = match extract_text(&doc.content, &doc.filename) {
            Ok(text) => text,
            Err(e) => {
                *self.review.write() = None;
                return Err(e);
            }
        };

        tracing::info!(
            "Review uploaded: {} as {} ({}, {} bytes)",
            doc.filename,
            stored_as,
            doc.format.display_name(),
            doc.size_bytes()
        );

        *self.review.write() = Some(ReviewState {
            original_name: doc.filename.clone(),
            stored_as: stored_as.clone(),
            text: text.clone(),
        });

        Ok(UploadOutcome::new(doc.filename, stored_as, doc.format, text))
    }

    /// Answer a question about the novel and the uploaded review.
    ///
    /// A failed log write does not fail the exchange; it is reported through
    /// `Exchange::log_warning`.
    pub async fn ask(&self, question: &str) -> Result<Exchange> {
        if question.trim().is_empty() {
            return Err(Error::EmptyQuestion);
        }

        let review_text = match self.review.read().as_ref() {
            Some(review) if !review.text.is_empty() => review.text.clone(),
            _ => return Err(Error::ReviewMissing),
        };

        let prompt = PromptBuilder::build_prompt(self.corpus.text(), &review_text, question);
        let response = self.generator.generate(&prompt).await?;

        let log_warning = match self.log.append(question, &response) {
            Ok(_) => None,
            Err(e) => {
                tracing::warn!(
                    "Failed to append interaction to {}: {}",
                    self.log.path().display(),
                    e
                );
                Some(format!("The conversation could not be saved to the log: {}", e))
            }
        };

        Ok(Exchange {
            question: question.to_string(),
            response,
            generator: self.generator.name().to_string(),
            log_warning,
        })
    }

    /// Decode a reflection upload and overwrite the reflection journal with it
    pub fn upload_reflection(&self, doc: UploadedDocument) -> Result<UploadOutcome> {
        let text = extract_text(&doc.content, &doc.filename)?;
        let stored_as = sanitize(&doc.filename);

        self.reflections.save(&text)?;
        tracing::info!("Reflection uploaded: {} as {}", doc.filename, stored_as);

        Ok(UploadOutcome::new(doc.filename, stored_as, doc.format, text))
    }

    /// Window into the reference corpus
    pub fn excerpt(&self, offset: usize, limit: usize) -> CorpusExcerpt {
        self.corpus.excerpt(offset, limit)
    }
}
