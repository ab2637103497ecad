//! Term-weighting fit: builds the frozen [`TfidfModel`] from a training
//! corpus. The builder/frozen split means nothing can re-fit a model once
//! it exists.

use std::collections::{HashMap, HashSet};

use rayon::prelude::*;
use tracing::{info, warn};

use quarry_core::config::IngestConfig;
use quarry_core::errors::{IngestError, QuarryResult};
use quarry_core::models::{tokenize, SparseVector, TfidfModel};

/// Fixed stop-word list excluded from every vocabulary.
const STOP_WORDS: &[&str] = &[
    "a", "an", "the", "is", "it", "in", "on", "of", "to", "and", "or", "for", "with", "this",
    "that", "be", "are", "was", "were", "been", "being", "have", "has", "had", "do", "does",
    "did", "will", "would", "could", "should", "may", "might", "can", "shall", "not", "no",
    "but", "if", "at", "by", "from", "as", "into", "about", "up", "out", "so", "its", "you",
    "your", "i", "my", "we", "our", "they", "them", "their", "he", "she", "his", "her", "what",
    "which", "who", "whom", "these", "those", "there", "here", "when", "where", "why", "how",
    "all", "each", "both", "more", "most", "other", "some", "such", "only", "own", "same",
    "than", "too", "very", "just", "also", "then", "once", "over", "under", "again", "any",
];

/// Builder for the frozen tf-idf model.
///
/// `fit` scans the training corpus once, prunes the vocabulary by document
/// frequency and stop words, and computes smoothed idf statistics.
#[derive(Debug, Clone)]
pub struct TfidfVectorizer {
    /// Terms appearing in more than this fraction of documents are dropped.
    pub max_df: f32,
    /// Terms appearing in fewer than this many documents are dropped.
    pub min_df: usize,
}

impl Default for TfidfVectorizer {
    fn default() -> Self {
        Self::from_config(&IngestConfig::default())
    }
}

impl TfidfVectorizer {
    pub fn from_config(config: &IngestConfig) -> Self {
        Self {
            max_df: config.max_df,
            min_df: config.min_df,
        }
    }

    /// Fit a frozen model on the training corpus.
    ///
    /// Vocabulary indices are assigned in sorted term order, so the fitted
    /// coordinate space is deterministic for a given corpus.
    pub fn fit(&self, corpus: &[String]) -> QuarryResult<TfidfModel> {
        if corpus.is_empty() {
            return Err(IngestError::EmptyCorpus {
                context: "training corpus".to_string(),
            }
            .into());
        }

        let n_docs = corpus.len();
        let mut doc_freq: HashMap<String, usize> = HashMap::new();
        for doc in corpus {
            let unique: HashSet<String> = tokenize(doc).into_iter().collect();
            for term in unique {
                *doc_freq.entry(term).or_insert(0) += 1;
            }
        }

        let max_count = self.max_df * n_docs as f32;
        let mut terms: Vec<(String, usize)> = doc_freq
            .into_iter()
            .filter(|(term, df)| {
                *df >= self.min_df
                    && (*df as f32) <= max_count
                    && !STOP_WORDS.contains(&term.as_str())
            })
            .collect();
        terms.sort_unstable_by(|a, b| a.0.cmp(&b.0));

        if terms.is_empty() {
            warn!(documents = n_docs, "vocabulary is empty after pruning");
        }

        let mut vocabulary = HashMap::with_capacity(terms.len());
        let mut idf = Vec::with_capacity(terms.len());
        for (index, (term, df)) in terms.into_iter().enumerate() {
            vocabulary.insert(term, index);
            // Smoothed idf, as if every term had been seen in one extra document.
            idf.push(((1 + n_docs) as f32 / (1 + df) as f32).ln() + 1.0);
        }

        info!(
            documents = n_docs,
            vocabulary = vocabulary.len(),
            "tf-idf model fitted"
        );
        Ok(TfidfModel::from_fitted(vocabulary, idf))
    }
}

/// Encode a batch of texts through a frozen model, in parallel.
/// Output order matches input order.
pub fn encode_corpus(model: &TfidfModel, texts: &[String]) -> Vec<SparseVector> {
    texts.par_iter().map(|text| model.encode(text)).collect()
}
