//! Truncated SVD: learns the frozen linear projection from weight-vector
//! space into the k-dimensional latent space.
//!
//! Power iteration on AᵀA with Gram-Schmidt deflation against already
//! extracted components. Initial vectors come from a seeded xorshift
//! generator, so a given fit is fully deterministic; bit-identical results
//! across different fits of the same corpus are not promised.

use tracing::{debug, info};

use quarry_core::errors::{IngestError, QuarryResult};
use quarry_core::models::{SparseVector, SvdProjection};

const MAX_ITERATIONS: usize = 100;
const CONVERGENCE_TOL: f32 = 1e-7;
/// Below this norm a deflated candidate is treated as rank exhaustion.
const RANK_EPS: f32 = 1e-12;

/// Builder for the frozen SVD projection.
#[derive(Debug, Clone)]
pub struct TruncatedSvd {
    /// Latent dimension k.
    pub n_components: usize,
}

impl TruncatedSvd {
    pub fn new(n_components: usize) -> Self {
        Self { n_components }
    }

    /// Learn the projection from the weight matrix (one sparse row per
    /// document) and return it together with the reduced row matrix.
    ///
    /// Fails with `VocabularyTooSmall` when k exceeds the feature
    /// dimension. When the matrix rank is below k, trailing components are
    /// zero vectors with zero singular values; transforms stay well-defined.
    pub fn fit_transform(
        &self,
        rows: &[SparseVector],
    ) -> QuarryResult<(SvdProjection, Vec<Vec<f32>>)> {
        if rows.is_empty() {
            return Err(IngestError::EmptyInput { stage: "svd fit" }.into());
        }
        let n_features = rows[0].dim;
        debug_assert!(rows.iter().all(|r| r.dim == n_features));
        if self.n_components > n_features {
            return Err(IngestError::VocabularyTooSmall {
                requested: self.n_components,
                features: n_features,
            }
            .into());
        }

        let mut components: Vec<Vec<f32>> = Vec::with_capacity(self.n_components);
        let mut singular_values: Vec<f32> = Vec::with_capacity(self.n_components);

        for c in 0..self.n_components {
            let component = self.extract_component(rows, &components, c, n_features);
            match component {
                Some(v) => {
                    let sigma = row_space_norm(rows, &v);
                    debug!(component = c, sigma, "component extracted");
                    components.push(v);
                    singular_values.push(sigma);
                }
                None => {
                    // Rank exhausted: remaining components are zero.
                    debug!(component = c, "rank exhausted, zero component");
                    components.push(vec![0.0; n_features]);
                    singular_values.push(0.0);
                }
            }
        }

        let reduced: Vec<Vec<f32>> = rows
            .iter()
            .map(|row| components.iter().map(|comp| row.dot_dense(comp)).collect())
            .collect();

        info!(
            documents = rows.len(),
            features = n_features,
            k = self.n_components,
            "svd projection fitted"
        );
        let projection = SvdProjection::from_fitted(components, singular_values, n_features);
        Ok((projection, reduced))
    }

    /// Power-iterate one right-singular vector of A, deflated against the
    /// components found so far. Returns None when the residual rank is gone.
    fn extract_component(
        &self,
        rows: &[SparseVector],
        previous: &[Vec<f32>],
        index: usize,
        n_features: usize,
    ) -> Option<Vec<f32>> {
        let mut v = seeded_unit_vector(n_features, index as u64 + 1);
        orthogonalize(&mut v, previous);
        if l2_normalize(&mut v) < RANK_EPS {
            return None;
        }

        for _ in 0..MAX_ITERATIONS {
            // w = Aᵀ (A v)
            let mut w = vec![0.0f32; n_features];
            for row in rows {
                let s = row.dot_dense(&v);
                if s != 0.0 {
                    for &(i, x) in &row.entries {
                        w[i] += s * x;
                    }
                }
            }

            orthogonalize(&mut w, previous);
            if l2_normalize(&mut w) < RANK_EPS {
                return None;
            }

            let alignment = dot(&w, &v).abs();
            v = w;
            if 1.0 - alignment < CONVERGENCE_TOL {
                break;
            }
        }
        Some(v)
    }
}

/// ‖A v‖: the singular value associated with right-singular vector v.
fn row_space_norm(rows: &[SparseVector], v: &[f32]) -> f32 {
    rows.iter()
        .map(|row| {
            let s = row.dot_dense(v);
            s * s
        })
        .sum::<f32>()
        .sqrt()
}

fn dot(a: &[f32], b: &[f32]) -> f32 {
    a.iter().zip(b).map(|(x, y)| x * y).sum()
}

/// Remove the projections of `v` onto each basis vector, in place.
fn orthogonalize(v: &mut [f32], basis: &[Vec<f32>]) {
    for b in basis {
        let proj = dot(v, b);
        if proj != 0.0 {
            for (x, y) in v.iter_mut().zip(b) {
                *x -= proj * y;
            }
        }
    }
}

/// Normalize in place and return the pre-normalization norm.
fn l2_normalize(v: &mut [f32]) -> f32 {
    let norm = dot(v, v).sqrt();
    if norm > RANK_EPS {
        for x in v.iter_mut() {
            *x /= norm;
        }
    }
    norm
}

/// Deterministic pseudo-random unit vector (xorshift64*), seeded per
/// component. No `rand` dependency needed for initialization noise.
fn seeded_unit_vector(dim: usize, seed: u64) -> Vec<f32> {
    let mut state = seed
        .wrapping_mul(0x9E37_79B9_7F4A_7C15)
        .wrapping_add(0xD1B5_4A32_D192_ED03)
        | 1;
    let mut v: Vec<f32> = (0..dim)
        .map(|_| {
            state ^= state << 13;
            state ^= state >> 7;
            state ^= state << 17;
            ((state >> 40) as f32 / (1u64 << 24) as f32) - 0.5
        })
        .collect();
    l2_normalize(&mut v);
    v
}
