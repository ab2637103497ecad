use crate::models::{SvdProjection, TfidfModel};

/// The persisted bundle: frozen term-weighting model, frozen projection,
/// reduced document vectors, and the index-aligned filename list.
///
/// Built once by a full offline ingestion run, then loaded read-only.
/// Replacing it means a full rebuild; there is no incremental update.
#[derive(Debug, Clone)]
pub struct KnowledgeBase {
    pub model: TfidfModel,
    pub projection: SvdProjection,
    /// Reduced document vectors; row i belongs to `filenames[i]`.
    pub vectors: Vec<Vec<f32>>,
    /// Document identifiers in canonical (loader) order.
    pub filenames: Vec<String>,
}

impl KnowledgeBase {
    /// Latent dimension of the stored vectors.
    pub fn n_components(&self) -> usize {
        self.projection.n_components()
    }

    pub fn len(&self) -> usize {
        self.filenames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.filenames.is_empty()
    }

    /// Check the shape invariants: one vector per filename, every row of
    /// width k. Returns the violation as a message for the caller to wrap.
    pub fn validate(&self) -> Result<(), String> {
        if self.vectors.len() != self.filenames.len() {
            return Err(format!(
                "vector rows ({}) do not match filenames ({})",
                self.vectors.len(),
                self.filenames.len()
            ));
        }
        let k = self.projection.n_components();
        if let Some((i, row)) = self
            .vectors
            .iter()
            .enumerate()
            .find(|(_, row)| row.len() != k)
        {
            return Err(format!(
                "vector row {i} has {} columns, expected {k}",
                row.len()
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn tiny_kb(vectors: Vec<Vec<f32>>, filenames: Vec<String>) -> KnowledgeBase {
        let model = TfidfModel::from_fitted(HashMap::new(), vec![]);
        let projection = SvdProjection::from_fitted(vec![vec![], vec![]], vec![0.0, 0.0], 0);
        KnowledgeBase {
            model,
            projection,
            vectors,
            filenames,
        }
    }

    #[test]
    fn validate_accepts_aligned_shapes() {
        let kb = tiny_kb(
            vec![vec![0.1, 0.2], vec![0.3, 0.4]],
            vec!["doc1.txt".into(), "doc2.txt".into()],
        );
        assert!(kb.validate().is_ok());
    }

    #[test]
    fn validate_rejects_row_count_mismatch() {
        let kb = tiny_kb(vec![vec![0.1, 0.2]], vec!["a.txt".into(), "b.txt".into()]);
        assert!(kb.validate().is_err());
    }

    #[test]
    fn validate_rejects_ragged_rows() {
        let kb = tiny_kb(
            vec![vec![0.1, 0.2], vec![0.3]],
            vec!["a.txt".into(), "b.txt".into()],
        );
        assert!(kb.validate().is_err());
    }
}
