//! Full offline ingestion run: loader -> normalizer -> tf-idf fit ->
//! SVD fit -> assembled knowledge base.
//!
//! Single batch job with no checkpoints: the first failure aborts the run
//! and the caller restarts from scratch.

use std::path::Path;

use tracing::info;

use quarry_core::config::IngestConfig;
use quarry_core::errors::QuarryResult;
use quarry_core::models::KnowledgeBase;

use crate::loader::load_documents;
use crate::normalize::normalize_documents;
use crate::svd::TruncatedSvd;
use crate::vectorizer::{encode_corpus, TfidfVectorizer};

/// Build a knowledge base from every matching document under `source`.
pub fn build_knowledge_base(source: &Path, config: &IngestConfig) -> QuarryResult<KnowledgeBase> {
    info!(source = %source.display(), "starting ingestion pipeline");

    let documents = load_documents(source, &config.extension)?;
    let raw: Vec<String> = documents.iter().map(|d| d.content.clone()).collect();
    let normalized = normalize_documents(&raw)?;

    let model = TfidfVectorizer::from_config(config).fit(&normalized)?;
    let weight_rows = encode_corpus(&model, &normalized);

    let (projection, vectors) = TruncatedSvd::new(config.n_components).fit_transform(&weight_rows)?;

    let filenames: Vec<String> = documents.into_iter().map(|d| d.filename).collect();
    let kb = KnowledgeBase {
        model,
        projection,
        vectors,
        filenames,
    };
    info!(
        documents = kb.len(),
        k = kb.n_components(),
        "knowledge base built"
    );
    Ok(kb)
}
