//! Uploaded document types

use serde::{Deserialize, Serialize};

/// Declared format of an upload, derived from its filename extension
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum DocumentFormat {
    /// Plain text file (.txt)
    PlainText,
    /// Word processor document (.docx)
    WordDocument,
    /// Anything else; decodes to an empty string
    Unsupported,
}

impl DocumentFormat {
    /// Detect format from a filename (case-insensitive extension match)
    pub fn from_filename(filename: &str) -> Self {
        let lower = filename.to_lowercase();
        if lower.ends_with(".txt") {
            Self::PlainText
        } else if lower.ends_with(".docx") {
            Self::WordDocument
        } else {
            Self::Unsupported
        }
    }

    /// Label shown next to an upload
    pub fn display_name(&self) -> &str {
        match self {
            Self::PlainText => "텍스트 파일 (.txt)",
            Self::WordDocument => "워드 문서 (.docx)",
            Self::Unsupported => "지원하지 않는 형식",
        }
    }
}

/// A file received from an upload control. Never persisted itself.
#[derive(Debug, Clone)]
pub struct UploadedDocument {
    /// Original filename as sent by the client
    pub filename: String,
    /// Raw bytes
    pub content: Vec<u8>,
    /// Format derived from the filename
    pub format: DocumentFormat,
}

impl UploadedDocument {
    pub fn new(filename: impl Into<String>, content: impl Into<Vec<u8>>) -> Self {
        let filename = filename.into();
        let format = DocumentFormat::from_filename(&filename);
        Self {
            filename,
            content: content.into(),
            format,
        }
    }

    /// Size in bytes
    pub fn size_bytes(&self) -> usize {
        self.content.len()
    }
}
