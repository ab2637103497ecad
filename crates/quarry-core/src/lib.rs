//! # quarry-core
//!
//! Foundation crate for the Quarry knowledge-base system.
//! Defines all types, traits, errors, config, and constants.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::{GeneratorConfig, IngestConfig};
pub use errors::{QuarryError, QuarryResult};
pub use models::{Document, KnowledgeBase, SparseVector, SvdProjection, TfidfModel};
