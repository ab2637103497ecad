use crate::errors::QuarryResult;
use crate::models::Document;

/// Text-generation collaborator.
///
/// Consumes the ranked retrieval output, already truncated to whatever the
/// caller wants to spend context on, and produces one generated answer.
/// Implementations bound their own input/output lengths and beam width via
/// `GeneratorConfig`; failures are theirs to report and are never retried
/// by the core.
pub trait IGenerator: Send + Sync {
    /// Generate a response grounded in the given (filename, content) pairs.
    fn generate(&self, context: &[Document]) -> QuarryResult<String>;

    /// Human-readable generator name (e.g. the model identifier).
    fn name(&self) -> &str;
}
