//! Error types for every Quarry subsystem, plus the umbrella error.

mod ingest_error;
mod retrieval_error;
mod store_error;

pub use ingest_error::IngestError;
pub use retrieval_error::RetrievalError;
pub use store_error::StoreError;

/// Umbrella error covering every subsystem.
#[derive(Debug, thiserror::Error)]
pub enum QuarryError {
    #[error(transparent)]
    Ingest(#[from] IngestError),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Retrieval(#[from] RetrievalError),
}

/// Result alias used across the workspace.
pub type QuarryResult<T> = Result<T, QuarryError>;
