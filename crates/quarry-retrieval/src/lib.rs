//! # quarry-retrieval
//!
//! Online retrieval against an immutable, already-loaded knowledge base:
//! encode the query through the frozen model and projection, score every
//! stored document by cosine similarity, center the scores on their mean,
//! and return a deterministically ranked list. The engine never mutates
//! the base, so any number of concurrent retrievals may share one.

pub mod engine;
pub mod similarity;

pub use engine::{RankedDocument, RetrievalEngine};
