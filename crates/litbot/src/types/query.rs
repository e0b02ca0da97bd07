//! Request types

use serde::{Deserialize, Serialize};

/// Question submission
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AskRequest {
    pub question: String,
}

/// Corpus excerpt query parameters
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExcerptQuery {
    /// Character offset to start from (default: 0)
    #[serde(default)]
    pub offset: usize,
    /// Maximum characters to return (default: configured excerpt size)
    pub limit: Option<usize>,
}
