/// Cosine similarity of two equal-length vectors.
///
/// Returns 0.0 when either vector has zero norm or the quotient is not a finite
/// positive number, so callers never see NaN.
pub fn cosine_similarity(a: &[f64], b: &[f64]) -> f64 {
    debug_assert_eq!(a.len(), b.len(), "vectors must share the vocabulary dimension");
    let mut dot = 0.0f64;
    let mut norm_a = 0.0f64;
    let mut norm_b = 0.0f64;
    for (x, y) in a.iter().zip(b.iter()) {
        dot += x * y;
        norm_a += x * x;
        norm_b += y * y;
    }
    let score = dot / (norm_a.sqrt() * norm_b.sqrt());
    if score.is_finite() && score > 0.0 {
        score
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parallel_vectors_score_one() {
        let s = cosine_similarity(&[1.0, 2.0, 0.0], &[2.0, 4.0, 0.0]);
        assert!((s - 1.0).abs() < 1e-12);
    }

    #[test]
    fn zero_vector_scores_zero() {
        assert_eq!(cosine_similarity(&[0.0, 0.0], &[1.0, 1.0]), 0.0);
        assert_eq!(cosine_similarity(&[], &[]), 0.0);
    }

    #[test]
    fn orthogonal_and_opposite_score_zero() {
        assert_eq!(cosine_similarity(&[1.0, 0.0], &[0.0, 3.0]), 0.0);
        assert_eq!(cosine_similarity(&[1.0, 1.0], &[-1.0, -1.0]), 0.0);
    }

    #[test]
    fn partial_overlap_in_unit_range() {
        let s = cosine_similarity(&[1.0, 1.0, 0.0], &[1.0, 0.0, 1.0]);
        assert!((s - 0.5).abs() < 1e-12);
    }
}
