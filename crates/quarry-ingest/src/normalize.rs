//! Text normalization: deterministic cleanup before fitting or encoding.

use quarry_core::errors::{IngestError, QuarryResult};

/// Normalize raw texts: lowercase, newlines collapsed to single spaces,
/// carriage returns dropped, surrounding whitespace trimmed.
///
/// Pure and deterministic; the only failure is an empty input slice.
pub fn normalize_documents(texts: &[String]) -> QuarryResult<Vec<String>> {
    if texts.is_empty() {
        return Err(IngestError::EmptyInput {
            stage: "normalization",
        }
        .into());
    }

    Ok(texts
        .iter()
        .map(|text| {
            text.to_lowercase()
                .replace('\n', " ")
                .replace('\r', "")
                .trim()
                .to_string()
        })
        .collect())
}
