//! Text extraction from uploaded files
//!
//! Plain text is decoded as UTF-8, falling back to CP949 (the Korean EUC-KR
//! superset) when the bytes are not valid UTF-8. Word documents are unpacked and
//! their body paragraphs joined with newlines. Files of any other type yield an
//! empty string rather than an error, so "no decoder for this type" stays
//! distinguishable from "decoder failed".

use docx_rs::{DocumentChild, ParagraphChild, RunChild};
use encoding_rs::EUC_KR;

use crate::error::{Error, Result};
use crate::types::DocumentFormat;

/// Stateless text decoder
pub struct TextDecoder;

impl TextDecoder {
    /// Extract text from raw bytes, choosing the decoder from the filename
    pub fn extract_text(content: &[u8], filename: &str) -> Result<String> {
        match DocumentFormat::from_filename(filename) {
            DocumentFormat::PlainText => Self::decode_plain_text(content, filename),
            DocumentFormat::WordDocument => Self::parse_docx(content, filename),
            DocumentFormat::Unsupported => {
                tracing::debug!("No decoder for '{}', returning empty text", filename);
                Ok(String::new())
            }
        }
    }

    /// Decode plain text: UTF-8 first, then CP949
    fn decode_plain_text(content: &[u8], filename: &str) -> Result<String> {
        let utf8_err = match std::str::from_utf8(content) {
            Ok(text) => return Ok(text.to_string()),
            Err(e) => e,
        };

        tracing::debug!(
            "'{}' is not valid UTF-8 ({}), trying CP949",
            filename,
            utf8_err
        );

        EUC_KR
            .decode_without_bom_handling_and_without_replacement(content)
            .map(|text| text.into_owned())
            .ok_or_else(|| {
                Error::decode(
                    filename,
                    format!("not valid UTF-8 ({}) and not valid CP949", utf8_err),
                )
            })
    }

    /// Parse DOCX document, one line per body paragraph
    fn parse_docx(data: &[u8], filename: &str) -> Result<String> {
        let doc = docx_rs::read_docx(data)
            .map_err(|e| Error::file_parse(filename, e.to_string()))?;

        let paragraphs: Vec<String> = doc
            .document
            .children
            .iter()
            .filter_map(|child| match child {
                DocumentChild::Paragraph(p) => Some(paragraph_text(&p.children)),
                // Tables and other block content are not body paragraphs
                _ => None,
            })
            .collect();

        Ok(paragraphs.join("\n"))
    }
}

/// Concatenate run text within a paragraph, descending into hyperlinks
fn paragraph_text(children: &[ParagraphChild]) -> String {
    let mut text = String::new();
    for child in children {
        match child {
            ParagraphChild::Run(run) => {
                for run_child in &run.children {
                    match run_child {
                        RunChild::Text(t) => text.push_str(&t.text),
                        RunChild::Tab(_) => text.push('\t'),
                        RunChild::Break(_) => text.push('\n'),
                        _ => {}
                    }
                }
            }
            ParagraphChild::Hyperlink(link) => text.push_str(&paragraph_text(&link.children)),
            _ => {}
        }
    }
    text
}

/// Extract text from an upload; see [`TextDecoder::extract_text`]
pub fn extract_text(content: &[u8], filename: &str) -> Result<String> {
    TextDecoder::extract_text(content, filename)
}
