//! Upload ingestion: text extraction and filename sanitization

pub mod decoder;
pub mod sanitizer;

pub use decoder::{extract_text, TextDecoder};
pub use sanitizer::{sanitize, sanitize_with_token};
