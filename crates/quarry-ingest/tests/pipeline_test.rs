//! End-to-end ingestion tests: corpus directory in, knowledge base out.

use std::fs;
use std::path::Path;

use quarry_core::config::IngestConfig;
use quarry_core::errors::{IngestError, QuarryError};
use quarry_ingest::build_knowledge_base;

const CORPUS: &[(&str, &str)] = &[
    (
        "01_quantum.txt",
        "Quantum physics explores entanglement and superposition.",
    ),
    (
        "02_computing.txt",
        "Quantum computing uses superposition for parallel computation.",
    ),
    (
        "03_history.txt",
        "Ancient history records mythology and legends.",
    ),
    (
        "04_mythology.txt",
        "Mythology blends legends with ancient history.",
    ),
    (
        "05_scifi.txt",
        "Time travel appears in science fiction stories.",
    ),
    (
        "06_paradox.txt",
        "Science fiction explores time travel paradoxes.",
    ),
];

fn write_corpus(dir: &Path) {
    for (name, content) in CORPUS {
        fs::write(dir.join(name), content).unwrap();
    }
}

fn small_config() -> IngestConfig {
    IngestConfig {
        n_components: 3,
        ..IngestConfig::default()
    }
}

#[test]
fn pipeline_builds_a_consistent_knowledge_base() {
    let tmp = tempfile::tempdir().unwrap();
    write_corpus(tmp.path());

    let kb = build_knowledge_base(tmp.path(), &small_config()).unwrap();

    assert_eq!(kb.len(), CORPUS.len());
    assert_eq!(kb.n_components(), 3);
    assert!(kb.validate().is_ok());

    // Filenames come back in sorted (canonical) order.
    let expected: Vec<&str> = CORPUS.iter().map(|(name, _)| *name).collect();
    assert_eq!(kb.filenames, expected);

    // Every document vector lives in the same latent space.
    for row in &kb.vectors {
        assert_eq!(row.len(), 3);
    }
}

#[test]
fn pipeline_reduced_vectors_match_reencoding_the_documents() {
    let tmp = tempfile::tempdir().unwrap();
    write_corpus(tmp.path());

    let kb = build_knowledge_base(tmp.path(), &small_config()).unwrap();

    for ((_, content), stored) in CORPUS.iter().zip(&kb.vectors) {
        let normalized = content.to_lowercase().replace('\n', " ");
        let encoded = kb.model.encode(normalized.trim());
        let projected = kb.projection.transform(&encoded).unwrap();
        for (a, b) in projected.iter().zip(stored) {
            assert!((a - b).abs() < 1e-5);
        }
    }
}

#[test]
fn default_k_exceeds_tiny_vocabulary() {
    let tmp = tempfile::tempdir().unwrap();
    write_corpus(tmp.path());

    // Default n_components is 100; this corpus has a far smaller vocabulary.
    let result = build_knowledge_base(tmp.path(), &IngestConfig::default());
    assert!(matches!(
        result,
        Err(QuarryError::Ingest(IngestError::VocabularyTooSmall { .. }))
    ));
}

#[test]
fn missing_source_directory_aborts_the_run() {
    let result = build_knowledge_base(Path::new("/no/such/corpus"), &small_config());
    assert!(matches!(
        result,
        Err(QuarryError::Ingest(IngestError::DirectoryNotFound { .. }))
    ));
}
