/// Knowledge-base store errors.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("knowledge base corrupt: artifact {artifact}: {reason}")]
    Corrupt { artifact: String, reason: String },

    #[error("failed to write {path}: {reason}")]
    WriteFailed { path: String, reason: String },
}
