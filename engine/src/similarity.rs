use crate::index::DocVector;
use std::cmp::Ordering;

/// Cosine similarity of two sparse vectors normalized at build time, so the
/// dot product is the cosine. A zero-magnitude vector (empty overview)
/// scores 0 against everything, itself included; never NaN.
///
/// The merge walks both vectors in term-id order, so swapping the arguments
/// accumulates the same products in the same order and symmetry is exact.
pub fn cosine(a: &DocVector, b: &DocVector) -> f32 {
    let (x, y) = (&a.0, &b.0);
    let mut i = 0;
    let mut j = 0;
    let mut dot = 0.0f32;
    while i < x.len() && j < y.len() {
        match x[i].0.cmp(&y[j].0) {
            Ordering::Less => i += 1,
            Ordering::Greater => j += 1,
            Ordering::Equal => {
                dot += x[i].1 * y[j].1;
                i += 1;
                j += 1;
            }
        }
    }
    // Rounding on unit vectors can nudge the dot just past 1.
    dot.min(1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vec_of(entries: &[(u32, f32)]) -> DocVector {
        DocVector(entries.to_vec())
    }

    #[test]
    fn symmetric_exactly() {
        let a = vec_of(&[(0, 0.6), (2, 0.8)]);
        let b = vec_of(&[(0, 0.28), (1, 0.96)]);
        assert_eq!(cosine(&a, &b), cosine(&b, &a));
    }

    #[test]
    fn zero_vector_scores_zero_even_against_itself() {
        let zero = DocVector::default();
        let a = vec_of(&[(0, 1.0)]);
        assert_eq!(cosine(&zero, &a), 0.0);
        assert_eq!(cosine(&zero, &zero), 0.0);
    }

    #[test]
    fn identical_unit_vectors_score_one() {
        let a = vec_of(&[(0, 0.6), (1, 0.8)]);
        assert!((cosine(&a, &a) - 1.0).abs() < 1e-6);
    }

    #[test]
    fn disjoint_vectors_score_zero() {
        let a = vec_of(&[(0, 1.0)]);
        let b = vec_of(&[(1, 1.0)]);
        assert_eq!(cosine(&a, &b), 0.0);
    }
}
