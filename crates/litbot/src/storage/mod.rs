//! File-backed stores: reference corpus, interaction log and reflection journal

pub mod corpus;
pub mod interaction_log;
pub mod reflection;

pub use corpus::ReferenceCorpus;
pub use interaction_log::LogStore;
pub use reflection::ReflectionStore;
