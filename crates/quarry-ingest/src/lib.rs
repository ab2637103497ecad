//! # quarry-ingest
//!
//! Offline ingestion pipeline: load a corpus from disk, normalize it, fit
//! the frozen tf-idf model and SVD projection, and assemble the
//! [`KnowledgeBase`](quarry_core::KnowledgeBase). One full run per corpus;
//! any failure aborts the run with no partial state.

pub mod loader;
pub mod normalize;
pub mod pipeline;
pub mod svd;
pub mod vectorizer;

pub use loader::load_documents;
pub use normalize::normalize_documents;
pub use pipeline::build_knowledge_base;
pub use svd::TruncatedSvd;
pub use vectorizer::{encode_corpus, TfidfVectorizer};
