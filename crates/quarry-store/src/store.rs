//! KnowledgeStore: owns the on-disk layout of a knowledge base.

use std::fs;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{error, info};

use quarry_core::errors::{QuarryResult, StoreError};
use quarry_core::models::{KnowledgeBase, SvdProjection, TfidfModel};

/// Artifact filenames making up one knowledge base, in write order.
pub const ARTIFACTS: [&str; 4] = [
    VECTORIZER_FILE,
    PROJECTION_FILE,
    VECTORS_FILE,
    FILENAMES_FILE,
];

const VECTORIZER_FILE: &str = "vectorizer.json";
const PROJECTION_FILE: &str = "projection.json";
const VECTORS_FILE: &str = "reduced_vectors.json";
const FILENAMES_FILE: &str = "filenames.json";

/// On-disk knowledge-base store rooted at one directory.
///
/// `save` writes all four artifacts; there is no partial-write recovery,
/// so a failure mid-save means the store is inconsistent and the caller
/// must rebuild. `load` reconstructs and validates the whole bundle before
/// returning it.
pub struct KnowledgeStore {
    root: PathBuf,
}

impl KnowledgeStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Persist the bundle, creating the root directory if needed.
    pub fn save(&self, kb: &KnowledgeBase) -> QuarryResult<()> {
        info!(root = %self.root.display(), documents = kb.len(), "saving knowledge base");

        fs::create_dir_all(&self.root).map_err(|e| StoreError::WriteFailed {
            path: self.root.display().to_string(),
            reason: e.to_string(),
        })?;

        self.write_artifact(VECTORIZER_FILE, &kb.model)?;
        self.write_artifact(PROJECTION_FILE, &kb.projection)?;
        self.write_artifact(VECTORS_FILE, &kb.vectors)?;
        self.write_artifact(FILENAMES_FILE, &kb.filenames)?;

        info!("knowledge base saved");
        Ok(())
    }

    /// Reload the bundle. Any missing or unreadable artifact fails with
    /// `Corrupt` naming that artifact; shape violations fail the same way.
    pub fn load(&self) -> QuarryResult<KnowledgeBase> {
        info!(root = %self.root.display(), "loading knowledge base");

        let model: TfidfModel = self.read_artifact(VECTORIZER_FILE)?;
        let projection: SvdProjection = self.read_artifact(PROJECTION_FILE)?;
        let vectors: Vec<Vec<f32>> = self.read_artifact(VECTORS_FILE)?;
        let filenames: Vec<String> = self.read_artifact(FILENAMES_FILE)?;

        let kb = KnowledgeBase {
            model,
            projection,
            vectors,
            filenames,
        };
        if let Err(reason) = kb.validate() {
            error!(%reason, "knowledge base failed validation");
            return Err(StoreError::Corrupt {
                artifact: VECTORS_FILE.to_string(),
                reason,
            }
            .into());
        }

        info!(documents = kb.len(), k = kb.n_components(), "knowledge base loaded");
        Ok(kb)
    }

    fn write_artifact<T: Serialize>(&self, name: &str, value: &T) -> QuarryResult<()> {
        let path = self.root.join(name);
        let json = serde_json::to_vec_pretty(value).map_err(|e| StoreError::WriteFailed {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        fs::write(&path, json).map_err(|e| StoreError::WriteFailed {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        Ok(())
    }

    fn read_artifact<T: DeserializeOwned>(&self, name: &str) -> QuarryResult<T> {
        let path = self.root.join(name);
        let bytes = fs::read(&path).map_err(|e| {
            error!(artifact = name, reason = %e, "artifact unreadable");
            StoreError::Corrupt {
                artifact: name.to_string(),
                reason: e.to_string(),
            }
        })?;
        serde_json::from_slice(&bytes).map_err(|e| {
            error!(artifact = name, reason = %e, "artifact unparseable");
            StoreError::Corrupt {
                artifact: name.to_string(),
                reason: e.to_string(),
            }
            .into()
        })
    }
}
