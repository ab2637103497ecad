//! Data model: documents, sparse weight vectors, and the frozen models
//! that make up a knowledge base.

mod document;
mod knowledge_base;
mod projection;
mod tfidf;
mod vector;

pub use document::Document;
pub use knowledge_base::KnowledgeBase;
pub use projection::SvdProjection;
pub use tfidf::{tokenize, TfidfModel};
pub use vector::SparseVector;
