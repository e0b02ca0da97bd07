//! Core types for uploads, log records and API responses

pub mod document;
pub mod query;
pub mod record;
pub mod response;

pub use document::{DocumentFormat, UploadedDocument};
pub use query::{AskRequest, ExcerptQuery};
pub use record::InteractionRecord;
pub use response::{CorpusExcerpt, Exchange, UploadOutcome};
