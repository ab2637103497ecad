//! Cosine similarity and candidate-set score centering.

/// Cosine similarity between two vectors.
/// Returns 0.0 for zero-magnitude or length-mismatched inputs.
pub fn cosine(a: &[f32], b: &[f32]) -> f32 {
    if a.len() != b.len() || a.is_empty() {
        return 0.0;
    }
    let (mut dot, mut mag_a, mut mag_b) = (0.0f64, 0.0f64, 0.0f64);
    for (x, y) in a.iter().zip(b.iter()) {
        let (x, y) = (*x as f64, *y as f64);
        dot += x * y;
        mag_a += x * x;
        mag_b += y * y;
    }
    let denom = mag_a.sqrt() * mag_b.sqrt();
    if denom < f64::EPSILON {
        0.0
    } else {
        (dot / denom).clamp(-1.0, 1.0) as f32
    }
}

/// Center scores on the arithmetic mean of the candidate set.
///
/// When every raw score is the same value, every centered score is exactly
/// 0.0: an identical candidate set carries no distinguishing relevance, and
/// reporting the tied raw similarity would be misleading. The all-equal
/// case short-circuits rather than relying on `x - sum/n` cancelling,
/// which is only exact when n divides the sum without rounding.
pub fn center(scores: &mut [f32]) {
    let Some(&first) = scores.first() else {
        return;
    };
    if scores.iter().all(|&s| s == first) {
        scores.fill(0.0);
        return;
    }
    let mean = (scores.iter().map(|&s| s as f64).sum::<f64>() / scores.len() as f64) as f32;
    for s in scores.iter_mut() {
        *s -= mean;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cosine_of_identical_vectors_is_one() {
        let v = vec![0.3, 0.5, 0.2];
        assert!((cosine(&v, &v) - 1.0).abs() < 1e-6);
    }

    #[test]
    fn cosine_of_orthogonal_vectors_is_zero() {
        assert_eq!(cosine(&[1.0, 0.0], &[0.0, 1.0]), 0.0);
    }

    #[test]
    fn cosine_of_zero_vector_is_zero() {
        assert_eq!(cosine(&[0.0, 0.0], &[0.5, 0.5]), 0.0);
    }

    #[test]
    fn cosine_of_mismatched_lengths_is_zero() {
        assert_eq!(cosine(&[1.0], &[1.0, 1.0]), 0.0);
    }

    #[test]
    fn center_subtracts_the_mean() {
        let mut scores = vec![1.0, 2.0, 3.0, 6.0];
        center(&mut scores);
        assert_eq!(scores, vec![-2.0, -1.0, 0.0, 3.0]);
    }

    #[test]
    fn center_collapses_identical_scores_to_exactly_zero() {
        // Three entries: a naive sum/n mean is not exactly representable.
        let mut scores = vec![0.7, 0.7, 0.7];
        center(&mut scores);
        assert!(scores.iter().all(|&s| s == 0.0));
    }

    #[test]
    fn center_of_empty_slice_is_a_no_op() {
        let mut scores: Vec<f32> = vec![];
        center(&mut scores);
        assert!(scores.is_empty());
    }
}
