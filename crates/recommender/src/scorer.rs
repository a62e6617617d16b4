//! Vector primitives shared by both recommenders.
//!
//! Plain free functions: dot product, Euclidean norm, cosine similarity.
//! Both recommendation algorithms are built entirely on these three.

use crate::error::{Result, ScoreError};

/// Dot product of two equally-long vectors.
///
/// Fails with `LengthMismatch` on differing lengths; that means the
/// input tables were malformed and must not be papered over.
pub fn dot(a: &[f64], b: &[f64]) -> Result<f64> {
    if a.len() != b.len() {
        return Err(ScoreError::LengthMismatch {
            left: a.len(),
            right: b.len(),
        });
    }
    Ok(a.iter().zip(b).map(|(x, y)| x * y).sum())
}

/// Euclidean (L2) norm of a vector
pub fn euclidean_norm(v: &[f64]) -> f64 {
    v.iter().map(|x| x * x).sum::<f64>().sqrt()
}

/// Cosine similarity: `dot(a, b) / (‖a‖ · ‖b‖)`.
///
/// Undefined when either vector has zero norm; reported as
/// `UndefinedSimilarity` rather than returned as NaN.
pub fn cosine_similarity(a: &[f64], b: &[f64]) -> Result<f64> {
    let product = dot(a, b)?;
    let denominator = euclidean_norm(a) * euclidean_norm(b);
    if denominator == 0.0 {
        return Err(ScoreError::UndefinedSimilarity);
    }
    Ok(product / denominator)
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOLERANCE: f64 = 1e-12;

    #[test]
    fn test_dot() {
        assert_eq!(dot(&[1.0, 2.0, 3.0], &[4.0, 5.0, 6.0]).unwrap(), 32.0);
        assert_eq!(dot(&[], &[]).unwrap(), 0.0);
    }

    #[test]
    fn test_dot_length_mismatch() {
        let result = dot(&[1.0, 2.0], &[1.0]);
        assert_eq!(
            result,
            Err(ScoreError::LengthMismatch { left: 2, right: 1 })
        );
    }

    #[test]
    fn test_euclidean_norm() {
        assert!((euclidean_norm(&[3.0, 4.0]) - 5.0).abs() < TOLERANCE);
        assert_eq!(euclidean_norm(&[]), 0.0);
        assert_eq!(euclidean_norm(&[0.0, 0.0]), 0.0);
    }

    #[test]
    fn test_cosine_self_similarity_is_one() {
        let v = [2.0, -1.0, 0.5];
        assert!((cosine_similarity(&v, &v).unwrap() - 1.0).abs() < TOLERANCE);
    }

    #[test]
    fn test_cosine_symmetry() {
        let a = [1.0, 2.0, 3.0];
        let b = [-2.0, 0.5, 4.0];
        let ab = cosine_similarity(&a, &b).unwrap();
        let ba = cosine_similarity(&b, &a).unwrap();
        assert!((ab - ba).abs() < TOLERANCE);
    }

    #[test]
    fn test_cosine_orthogonal() {
        let similarity = cosine_similarity(&[1.0, 0.0], &[0.0, 1.0]).unwrap();
        assert!(similarity.abs() < TOLERANCE);
    }

    #[test]
    fn test_cosine_zero_norm_is_undefined() {
        let result = cosine_similarity(&[0.0, 0.0], &[1.0, 2.0]);
        assert_eq!(result, Err(ScoreError::UndefinedSimilarity));
    }

    #[test]
    fn test_cosine_length_mismatch_wins_over_zero_norm() {
        // Malformed data beats the degenerate-numeric report
        let result = cosine_similarity(&[0.0], &[0.0, 0.0]);
        assert_eq!(
            result,
            Err(ScoreError::LengthMismatch { left: 1, right: 2 })
        );
    }
}
