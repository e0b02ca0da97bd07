//! Configuration for litbot

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Main litbot configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LitbotConfig {
    /// Server configuration
    pub server: ServerConfig,
    /// File locations for the corpus, log and reflection journal
    pub storage: StorageConfig,
    /// Response generator configuration
    pub responder: ResponderConfig,
    /// Page presentation
    pub ui: UiConfig,
}

impl LitbotConfig {
    /// Load configuration from a TOML file; missing sections fall back to defaults
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            Error::Config(format!("Cannot read config '{}': {}", path.display(), e))
        })?;
        Self::from_toml_str(&content)
    }

    /// Parse configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| Error::Config(format!("Invalid config: {}", e)))
    }
}

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Host address
    pub host: String,
    /// Port number
    pub port: u16,
    /// Enable CORS
    pub enable_cors: bool,
    /// Maximum upload size in bytes (default: 20MB)
    pub max_upload_size: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8501,
            enable_cors: true,
            max_upload_size: 20 * 1024 * 1024, // 20MB
        }
    }
}

/// Storage locations
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Reference text, UTF-8, read once at start-up
    pub corpus_path: PathBuf,
    /// Append-only interaction log
    pub log_path: PathBuf,
    /// Reflection journal, overwritten on every reflection upload
    pub reflection_path: PathBuf,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            corpus_path: PathBuf::from("나, 나, 마들렌_박서련.txt"),
            log_path: PathBuf::from("chat_log.txt"),
            reflection_path: PathBuf::from("reflection.txt"),
        }
    }
}

/// Placeholder responder configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ResponderConfig {
    /// Fixed text returned for every prompt
    pub placeholder_text: String,
}

impl Default for ResponderConfig {
    fn default() -> Self {
        Self {
            placeholder_text: "(예시 답변) 그 장면에 집중한 게 흥미롭네! 왜 그렇게 생각했는지 궁금해."
                .to_string(),
        }
    }
}

/// Page presentation
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Page title
    pub title: String,
    /// Subtitle shown under the title
    pub subtitle: String,
    /// Characters shown per corpus excerpt page
    pub excerpt_chars: usize,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            title: "📚 문학 챗봇".to_string(),
            subtitle: "박서련 『나, 나, 마들렌』을 읽고 챗 봇과 대화해보아요!".to_string(),
            excerpt_chars: 1000,
        }
    }
}
