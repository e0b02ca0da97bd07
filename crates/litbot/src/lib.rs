//! litbot: Literature discussion service over a fixed reference text
//!
//! Users upload a review document (.txt or .docx), browse excerpts of the reference
//! novel, ask questions and receive generated responses. Every exchange is appended
//! to a flat interaction log, and a separate reflection journal upload is persisted
//! verbatim to a configured file.

pub mod config;
pub mod error;
pub mod generation;
pub mod ingestion;
pub mod server;
pub mod session;
pub mod storage;
pub mod types;

pub use config::LitbotConfig;
pub use error::{Error, Result};
pub use session::SessionController;
pub use types::{
    document::{DocumentFormat, UploadedDocument},
    record::InteractionRecord,
    response::{CorpusExcerpt, Exchange, UploadOutcome},
};
