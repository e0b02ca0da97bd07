//! Application state for the litbot server

use std::sync::Arc;

use crate::config::LitbotConfig;
use crate::error::Result;
use crate::session::SessionController;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    /// Configuration
    config: LitbotConfig,
    /// The single process-wide session
    session: SessionController,
}

impl AppState {
    /// Create state from configuration, loading the reference corpus
    pub fn new(config: LitbotConfig) -> Result<Self> {
        tracing::info!("Initializing litbot application state...");
        let session = SessionController::from_config(&config)?;
        Ok(Self::with_session(config, session))
    }

    /// Create state around an existing session controller
    pub fn with_session(config: LitbotConfig, session: SessionController) -> Self {
        Self {
            inner: Arc::new(AppStateInner { config, session }),
        }
    }

    pub fn config(&self) -> &LitbotConfig {
        &self.inner.config
    }

    pub fn session(&self) -> &SessionController {
        &self.inner.session
    }
}
