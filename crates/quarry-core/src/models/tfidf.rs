//! Frozen term-weighting model: vocabulary + idf statistics.
//!
//! Fitting lives in quarry-ingest (`TfidfVectorizer`); this type is the
//! immutable result. The split guarantees at the type level that a fitted
//! model can never be re-fit, so document vectors in the store and any
//! later query vector share one coordinate space.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::constants::MIN_TOKEN_LEN;
use crate::models::SparseVector;

/// Tokenize text into lowercase alphanumeric terms of length >= 2.
pub fn tokenize(text: &str) -> Vec<String> {
    text.split(|c: char| !c.is_alphanumeric() && c != '_')
        .filter(|s| s.chars().count() >= MIN_TOKEN_LEN)
        .map(|s| s.to_lowercase())
        .collect()
}

/// Frozen tf-idf model. Encodes any text into a sparse weight vector
/// over the frozen vocabulary; terms outside the vocabulary are ignored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TfidfModel {
    /// term -> feature index
    vocabulary: HashMap<String, usize>,
    /// idf weight per feature index
    idf: Vec<f32>,
}

impl TfidfModel {
    /// Assemble a frozen model from fitted state. `vocabulary` values must
    /// be a permutation of `0..idf.len()`; the fitter upholds this.
    pub fn from_fitted(vocabulary: HashMap<String, usize>, idf: Vec<f32>) -> Self {
        debug_assert_eq!(vocabulary.len(), idf.len());
        Self { vocabulary, idf }
    }

    /// Vocabulary size, i.e. the dimension of encoded vectors.
    pub fn dimensions(&self) -> usize {
        self.idf.len()
    }

    /// Feature index of a term, if it is in the frozen vocabulary.
    pub fn feature_index(&self, term: &str) -> Option<usize> {
        self.vocabulary.get(term).copied()
    }

    /// Encode one text into an L2-normalized tf-idf weight vector.
    ///
    /// Terms absent from the frozen vocabulary contribute nothing. A text
    /// with no known terms encodes to the zero vector.
    pub fn encode(&self, text: &str) -> SparseVector {
        let mut tf: HashMap<usize, f32> = HashMap::new();
        for token in tokenize(text) {
            if let Some(&idx) = self.vocabulary.get(&token) {
                *tf.entry(idx).or_default() += 1.0;
            }
        }

        let mut entries: Vec<(usize, f32)> = tf
            .into_iter()
            .map(|(idx, count)| (idx, count * self.idf[idx]))
            .collect();
        entries.sort_unstable_by_key(|&(idx, _)| idx);

        let mut sv = SparseVector {
            dim: self.idf.len(),
            entries,
        };
        sv.l2_normalize();
        sv
    }
}
