//! Frozen dimensionality-reduction projection.
//!
//! Learned by quarry-ingest (`TruncatedSvd`); this type only applies the
//! projection. There is deliberately no way to mutate or re-fit it.

use serde::{Deserialize, Serialize};

use crate::errors::{QuarryResult, RetrievalError};
use crate::models::SparseVector;

/// Frozen linear projection from weight-vector space (vocabulary dimension)
/// into the k-dimensional latent space.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SvdProjection {
    /// Right-singular vectors, one row per component, each of length
    /// `n_features`. Rank-deficient trailing components are zero rows.
    components: Vec<Vec<f32>>,
    /// Singular value per component.
    singular_values: Vec<f32>,
    /// Input dimension (vocabulary size at fit time).
    n_features: usize,
}

impl SvdProjection {
    /// Assemble a frozen projection from fitted state.
    pub fn from_fitted(
        components: Vec<Vec<f32>>,
        singular_values: Vec<f32>,
        n_features: usize,
    ) -> Self {
        debug_assert_eq!(components.len(), singular_values.len());
        debug_assert!(components.iter().all(|c| c.len() == n_features));
        Self {
            components,
            singular_values,
            n_features,
        }
    }

    /// Latent dimension k.
    pub fn n_components(&self) -> usize {
        self.components.len()
    }

    /// Input dimension the projection was fitted on.
    pub fn n_features(&self) -> usize {
        self.n_features
    }

    pub fn singular_values(&self) -> &[f32] {
        &self.singular_values
    }

    /// Project one weight vector into the latent space.
    ///
    /// Fails with `DimensionMismatch` when the input does not live in the
    /// space the projection was fitted on.
    pub fn transform(&self, vector: &SparseVector) -> QuarryResult<Vec<f32>> {
        if vector.dim != self.n_features {
            return Err(RetrievalError::DimensionMismatch {
                expected: self.n_features,
                actual: vector.dim,
            }
            .into());
        }
        Ok(self
            .components
            .iter()
            .map(|component| vector.dot_dense(component))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn axis_projection() -> SvdProjection {
        // Picks out features 0 and 2 of a 3-dim space.
        SvdProjection::from_fitted(
            vec![vec![1.0, 0.0, 0.0], vec![0.0, 0.0, 1.0]],
            vec![2.0, 1.0],
            3,
        )
    }

    #[test]
    fn transform_applies_each_component() {
        let proj = axis_projection();
        let sv = SparseVector {
            dim: 3,
            entries: vec![(0, 0.5), (1, 9.0), (2, 0.25)],
        };
        assert_eq!(proj.transform(&sv).unwrap(), vec![0.5, 0.25]);
    }

    #[test]
    fn transform_rejects_wrong_dimension() {
        let proj = axis_projection();
        let sv = SparseVector::zero(7);
        assert!(proj.transform(&sv).is_err());
    }

    #[test]
    fn serde_roundtrip_preserves_transform_behavior() {
        let proj = axis_projection();
        let json = serde_json::to_string(&proj).unwrap();
        let reloaded: SvdProjection = serde_json::from_str(&json).unwrap();
        let sv = SparseVector {
            dim: 3,
            entries: vec![(0, 1.5), (2, -0.5)],
        };
        assert_eq!(proj.transform(&sv).unwrap(), reloaded.transform(&sv).unwrap());
    }
}
