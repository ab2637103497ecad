use serde::{Deserialize, Serialize};

use super::defaults;

/// Configuration surface of the text-generation collaborator.
///
/// The core pipeline only carries this value; the generator itself
/// interprets it. Built once at the process boundary, either directly
/// or via [`GeneratorConfig::from_env`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Pretrained encoder-decoder model identifier.
    pub model_name: String,
    /// Maximum input sequence length; longer context is truncated.
    pub max_input_length: usize,
    /// Maximum generated output length.
    pub max_output_length: usize,
    /// Beam-search width.
    pub num_beams: usize,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            model_name: defaults::DEFAULT_MODEL_NAME.to_string(),
            max_input_length: defaults::DEFAULT_MAX_INPUT_LENGTH,
            max_output_length: defaults::DEFAULT_MAX_OUTPUT_LENGTH,
            num_beams: defaults::DEFAULT_NUM_BEAMS,
        }
    }
}

impl GeneratorConfig {
    /// Build from `MODEL_NAME`, `MAX_INPUT_LENGTH`, and `MAX_OUTPUT_LENGTH`
    /// environment variables, falling back to defaults for anything absent
    /// or unparseable. Intended to be called exactly once, at process start.
    pub fn from_env() -> Self {
        let base = Self::default();
        Self {
            model_name: std::env::var("MODEL_NAME").unwrap_or(base.model_name),
            max_input_length: env_usize("MAX_INPUT_LENGTH", base.max_input_length),
            max_output_length: env_usize("MAX_OUTPUT_LENGTH", base.max_output_length),
            num_beams: base.num_beams,
        }
    }
}

fn env_usize(key: &str, fallback: usize) -> usize {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(fallback)
}
