//! Response generator abstraction

use async_trait::async_trait;

use crate::config::ResponderConfig;
use crate::error::Result;

/// Trait for producing a response to a discussion prompt
///
/// Implementations:
/// - `PlaceholderResponder`: fixed text, no backend
#[async_trait]
pub trait ResponseGenerator: Send + Sync {
    /// Generate a response for the full prompt
    async fn generate(&self, prompt: &str) -> Result<String>;

    /// Get generator name for logging
    fn name(&self) -> &str;
}

/// Returns the same configured text for every prompt
pub struct PlaceholderResponder {
    text: String,
}

impl PlaceholderResponder {
    pub fn new(config: &ResponderConfig) -> Self {
        Self {
            text: config.placeholder_text.clone(),
        }
    }
}

impl Default for PlaceholderResponder {
    fn default() -> Self {
        Self::new(&ResponderConfig::default())
    }
}

#[async_trait]
impl ResponseGenerator for PlaceholderResponder {
    async fn generate(&self, prompt: &str) -> Result<String> {
        tracing::debug!("Placeholder response for prompt of {} chars", prompt.chars().count());
        Ok(self.text.clone())
    }

    fn name(&self) -> &str {
        "placeholder"
    }
}
