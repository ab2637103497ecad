//! # quarry-store
//!
//! Persists and reloads the knowledge-base bundle as one logical unit:
//! four JSON artifacts in one directory. A load either yields a fully
//! validated [`KnowledgeBase`](quarry_core::KnowledgeBase) or fails; no
//! partially loaded state is ever exposed.

mod store;

pub use store::{KnowledgeStore, ARTIFACTS};
