//! RetrievalEngine: encode a query into the knowledge base's latent space
//! and rank the stored documents against it.

use tracing::debug;

use quarry_core::errors::{QuarryResult, RetrievalError};
use quarry_core::models::KnowledgeBase;

use crate::similarity::{center, cosine};

/// One ranked retrieval result.
#[derive(Debug, Clone, PartialEq)]
pub struct RankedDocument {
    pub filename: String,
    /// Mean-centered cosine similarity; 0.0 across the board means the
    /// candidate set carried no distinguishing relevance.
    pub score: f32,
}

/// Ranks stored document vectors against encoded queries.
///
/// Borrows the knowledge base immutably: queries never mutate the model,
/// projection, vectors, or filenames.
pub struct RetrievalEngine<'a> {
    kb: &'a KnowledgeBase,
}

impl<'a> RetrievalEngine<'a> {
    pub fn new(kb: &'a KnowledgeBase) -> Self {
        Self { kb }
    }

    /// Retrieve documents ranked by mean-centered cosine similarity to the
    /// query, highest first, ties kept in document order. `limit` truncates
    /// the ranked list after sorting.
    ///
    /// Fails with `EmptyQuery` on a whitespace-only query (checked before
    /// any encoding work) and `DimensionMismatch` if the query vector and
    /// stored vectors disagree on k.
    pub fn retrieve(
        &self,
        query: &str,
        limit: Option<usize>,
    ) -> QuarryResult<Vec<RankedDocument>> {
        if query.trim().is_empty() {
            return Err(RetrievalError::EmptyQuery.into());
        }

        let weights = self.kb.model.encode(query);
        let query_vector = self.kb.projection.transform(&weights)?;
        debug!(query_terms = weights.entries.len(), "query encoded");

        let k = query_vector.len();
        let mut scores = Vec::with_capacity(self.kb.vectors.len());
        for row in &self.kb.vectors {
            if row.len() != k {
                return Err(RetrievalError::DimensionMismatch {
                    expected: k,
                    actual: row.len(),
                }
                .into());
            }
            scores.push(cosine(&query_vector, row));
        }

        center(&mut scores);

        let mut ranked: Vec<RankedDocument> = self
            .kb
            .filenames
            .iter()
            .zip(&scores)
            .map(|(filename, &score)| RankedDocument {
                filename: filename.clone(),
                score,
            })
            .collect();

        // Stable sort: equal scores keep their original document order.
        ranked.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(std::cmp::Ordering::Equal));

        if let Some(limit) = limit {
            ranked.truncate(limit);
        }
        debug!(results = ranked.len(), "query ranked");
        Ok(ranked)
    }
}
