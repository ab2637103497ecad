//! Property tests: ranking laws that must hold for arbitrary candidate sets.

use std::collections::HashMap;

use proptest::prelude::*;

use quarry_core::models::{KnowledgeBase, SvdProjection, TfidfModel};
use quarry_retrieval::RetrievalEngine;

/// Two-feature knowledge base around arbitrary document vectors.
fn kb_with_vectors(vectors: Vec<Vec<f32>>) -> KnowledgeBase {
    let vocabulary: HashMap<String, usize> = [("test".to_string(), 0), ("query".to_string(), 1)]
        .into_iter()
        .collect();
    let filenames = (0..vectors.len()).map(|i| format!("doc{i}.txt")).collect();
    KnowledgeBase {
        model: TfidfModel::from_fitted(vocabulary, vec![1.0, 1.0]),
        projection: SvdProjection::from_fitted(
            vec![vec![1.0, 0.0], vec![0.0, 1.0]],
            vec![1.0, 1.0],
            2,
        ),
        vectors,
        filenames,
    }
}

fn arb_vectors() -> impl Strategy<Value = Vec<Vec<f32>>> {
    prop::collection::vec(
        prop::collection::vec(-10.0f32..10.0, 2),
        1..20,
    )
}

proptest! {
    #[test]
    fn prop_every_document_is_returned(vectors in arb_vectors()) {
        let n = vectors.len();
        let kb = kb_with_vectors(vectors);
        let results = RetrievalEngine::new(&kb).retrieve("test query", None).unwrap();
        prop_assert_eq!(results.len(), n);
    }

    #[test]
    fn prop_limit_caps_the_result_count(
        vectors in arb_vectors(),
        limit in 0usize..25,
    ) {
        let n = vectors.len();
        let kb = kb_with_vectors(vectors);
        let results = RetrievalEngine::new(&kb).retrieve("test query", Some(limit)).unwrap();
        prop_assert_eq!(results.len(), limit.min(n));
    }

    #[test]
    fn prop_scores_never_increase_down_the_ranking(vectors in arb_vectors()) {
        let kb = kb_with_vectors(vectors);
        let results = RetrievalEngine::new(&kb).retrieve("test query", None).unwrap();
        for pair in results.windows(2) {
            prop_assert!(pair[0].score >= pair[1].score);
        }
    }

    #[test]
    fn prop_identical_candidates_always_score_zero(
        x in -10.0f32..10.0,
        y in -10.0f32..10.0,
        count in 1usize..20,
        query in "[a-z ]{1,40}",
    ) {
        prop_assume!(!query.trim().is_empty());
        let kb = kb_with_vectors(vec![vec![x, y]; count]);
        let results = RetrievalEngine::new(&kb).retrieve(&query, None).unwrap();
        for doc in &results {
            prop_assert_eq!(doc.score, 0.0);
        }
    }

    #[test]
    fn prop_whitespace_queries_always_fail(
        vectors in arb_vectors(),
        spaces in prop::collection::vec(prop::sample::select(vec![' ', '\t', '\n']), 0..8),
    ) {
        let kb = kb_with_vectors(vectors);
        let query: String = spaces.into_iter().collect();
        prop_assert!(RetrievalEngine::new(&kb).retrieve(&query, None).is_err());
    }
}
