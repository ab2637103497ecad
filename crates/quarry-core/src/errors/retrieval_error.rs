/// Retrieval-engine errors.
#[derive(Debug, thiserror::Error)]
pub enum RetrievalError {
    #[error("query is empty or whitespace-only")]
    EmptyQuery,

    #[error("vector dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },
}
