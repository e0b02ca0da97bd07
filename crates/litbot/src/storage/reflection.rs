//! Reflection journal persistence

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::Result;

/// Writes the latest reflection text to a fixed target, replacing prior content
#[derive(Debug, Clone)]
pub struct ReflectionStore {
    target: PathBuf,
}

impl ReflectionStore {
    pub fn new(target: impl Into<PathBuf>) -> Self {
        Self {
            target: target.into(),
        }
    }

    pub fn target(&self) -> &Path {
        &self.target
    }

    /// Overwrite the target with `text`, verbatim (UTF-8)
    pub fn save(&self, text: &str) -> Result<()> {
        if let Some(parent) = self.target.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        fs::write(&self.target, text)?;
        tracing::info!(
            "Saved reflection ({} bytes) to {}",
            text.len(),
            self.target.display()
        );
        Ok(())
    }
}
