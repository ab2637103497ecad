/// Ingestion-pipeline errors: loading, normalizing, fitting.
#[derive(Debug, thiserror::Error)]
pub enum IngestError {
    #[error("directory not found: {path}")]
    DirectoryNotFound { path: String },

    #[error("failed to read {path}: {reason}")]
    ReadFailed { path: String, reason: String },

    #[error("corpus is empty: {context}")]
    EmptyCorpus { context: String },

    #[error("empty input given to {stage}")]
    EmptyInput { stage: &'static str },

    #[error("requested {requested} components but the vocabulary has only {features} features")]
    VocabularyTooSmall { requested: usize, features: usize },
}
