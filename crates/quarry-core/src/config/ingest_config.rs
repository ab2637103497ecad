use serde::{Deserialize, Serialize};

use super::defaults;

/// Ingestion-pipeline configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct IngestConfig {
    /// File extension accepted by the corpus loader (without the dot).
    pub extension: String,
    /// Terms appearing in more than this fraction of documents are dropped.
    pub max_df: f32,
    /// Terms appearing in fewer than this many documents are dropped.
    pub min_df: usize,
    /// Latent dimension k of the reduced vector space.
    pub n_components: usize,
}

impl Default for IngestConfig {
    fn default() -> Self {
        Self {
            extension: defaults::DEFAULT_EXTENSION.to_string(),
            max_df: defaults::DEFAULT_MAX_DF,
            min_df: defaults::DEFAULT_MIN_DF,
            n_components: defaults::DEFAULT_N_COMPONENTS,
        }
    }
}
