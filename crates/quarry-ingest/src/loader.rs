//! Corpus loader: reads (filename, text) pairs from a directory.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{error, info, warn};

use quarry_core::errors::{IngestError, QuarryResult};
use quarry_core::models::Document;

/// Load every `.{extension}` file under `dir` as one document.
///
/// Entries are sorted by filename so the canonical document order is
/// reproducible across runs. Files that are empty after trimming are
/// skipped with a warning.
pub fn load_documents(dir: &Path, extension: &str) -> QuarryResult<Vec<Document>> {
    info!(directory = %dir.display(), "loading documents");

    if !dir.is_dir() {
        error!(directory = %dir.display(), "corpus directory not found");
        return Err(IngestError::DirectoryNotFound {
            path: dir.display().to_string(),
        }
        .into());
    }

    let entries = fs::read_dir(dir).map_err(|e| IngestError::ReadFailed {
        path: dir.display().to_string(),
        reason: e.to_string(),
    })?;

    let mut paths: Vec<PathBuf> = entries
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| {
            path.is_file() && path.extension().and_then(|e| e.to_str()) == Some(extension)
        })
        .collect();
    paths.sort();

    let mut documents = Vec::with_capacity(paths.len());
    for path in paths {
        let filename = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        let content = fs::read_to_string(&path).map_err(|e| IngestError::ReadFailed {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;

        let trimmed = content.trim();
        if trimmed.is_empty() {
            warn!(file = %filename, "empty document skipped");
            continue;
        }
        documents.push(Document::new(filename, trimmed));
    }

    if documents.is_empty() {
        error!(directory = %dir.display(), "no non-empty documents found");
        return Err(IngestError::EmptyCorpus {
            context: dir.display().to_string(),
        }
        .into());
    }

    info!(count = documents.len(), "documents loaded");
    Ok(documents)
}
