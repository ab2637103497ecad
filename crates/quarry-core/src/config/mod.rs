//! Configuration for ingestion and the generator collaborator.
//!
//! Configs are plain serde values constructed once at the process boundary
//! and passed in. Library code never reads environment state itself;
//! `GeneratorConfig::from_env` exists for the boundary to call.

mod generator_config;
mod ingest_config;

pub use generator_config::GeneratorConfig;
pub use ingest_config::IngestConfig;

/// Default values shared by the config structs.
pub mod defaults {
    /// File extension the corpus loader accepts.
    pub const DEFAULT_EXTENSION: &str = "txt";

    /// Terms appearing in more than this fraction of documents are dropped.
    pub const DEFAULT_MAX_DF: f32 = 0.95;

    /// Terms appearing in fewer than this many documents are dropped.
    pub const DEFAULT_MIN_DF: usize = 2;

    /// Latent dimension of the reduced vector space.
    pub const DEFAULT_N_COMPONENTS: usize = 100;

    /// Pretrained model identifier consumed by the generator collaborator.
    pub const DEFAULT_MODEL_NAME: &str = "t5-base";

    /// Maximum input sequence length for generation.
    pub const DEFAULT_MAX_INPUT_LENGTH: usize = 512;

    /// Maximum generated output length.
    pub const DEFAULT_MAX_OUTPUT_LENGTH: usize = 150;

    /// Beam-search width for generation.
    pub const DEFAULT_NUM_BEAMS: usize = 5;
}
