use serde::{Deserialize, Serialize};

/// One corpus document: a unique filename and its raw text.
///
/// Documents are kept in loader order; that order is the canonical index
/// aligning the reduced-vector matrix with the filename list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    pub filename: String,
    pub content: String,
}

impl Document {
    pub fn new(filename: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            filename: filename.into(),
            content: content.into(),
        }
    }
}
