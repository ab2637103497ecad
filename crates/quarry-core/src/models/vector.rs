use serde::{Deserialize, Serialize};

/// Sparse weight vector over the frozen vocabulary.
///
/// Entries are (feature index, weight) pairs sorted by strictly ascending
/// index. The logical dimension is the vocabulary size, so storage scales
/// with document length rather than vocabulary size.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SparseVector {
    /// Logical dimension (vocabulary size).
    pub dim: usize,
    /// (index, weight) pairs, sorted by index.
    pub entries: Vec<(usize, f32)>,
}

impl SparseVector {
    /// A vector with no non-zero entries.
    pub fn zero(dim: usize) -> Self {
        Self {
            dim,
            entries: Vec::new(),
        }
    }

    pub fn is_zero(&self) -> bool {
        self.entries.is_empty()
    }

    /// Dot product against a dense vector of the same logical dimension.
    pub fn dot_dense(&self, dense: &[f32]) -> f32 {
        debug_assert_eq!(self.dim, dense.len());
        self.entries.iter().map(|&(i, w)| w * dense[i]).sum()
    }

    pub fn l2_norm(&self) -> f32 {
        self.entries
            .iter()
            .map(|&(_, w)| w * w)
            .sum::<f32>()
            .sqrt()
    }

    /// Scale to unit length. A zero vector is left untouched.
    pub fn l2_normalize(&mut self) {
        let norm = self.l2_norm();
        if norm > f32::EPSILON {
            for (_, w) in &mut self.entries {
                *w /= norm;
            }
        }
    }
}
