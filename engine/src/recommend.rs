use crate::catalog::Catalog;
use crate::index::{DocVector, FeatureIndex};
use crate::similarity::cosine;
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum RecommendError {
    /// The query title has no exact match in the catalog. Distinct from a
    /// successful query with zero recommendations.
    #[error("title not found in catalog: {0}")]
    TitleNotFound(String),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Recommendation {
    pub title: String,
    pub score: f32,
}

/// Rank the `top_n` titles most similar to `title` by overview text.
///
/// The query record is excluded by catalog position rather than by title
/// comparison. Results are sorted by score descending with ties kept in
/// catalog order; `top_n = 0` returns an empty list. Pure function of its
/// inputs: identical calls against an unchanged index return identical,
/// identically ordered output.
pub fn recommend(
    title: &str,
    catalog: &Catalog,
    index: &FeatureIndex,
    top_n: usize,
) -> Result<Vec<Recommendation>, RecommendError> {
    let query_pos = catalog
        .position(title)
        .ok_or_else(|| RecommendError::TitleNotFound(title.to_string()))?;

    let zero = DocVector::default();
    let query_vec = index.vector(query_pos).unwrap_or(&zero);

    let mut scored: Vec<(usize, f32)> = Vec::with_capacity(catalog.len().saturating_sub(1));
    for pos in 0..catalog.len() {
        if pos == query_pos {
            continue;
        }
        let vec = index.vector(pos).unwrap_or(&zero);
        scored.push((pos, cosine(query_vec, vec)));
    }

    // Stable sort keeps catalog order for equal scores.
    scored.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));

    Ok(scored
        .into_iter()
        .take(top_n)
        .map(|(pos, score)| Recommendation {
            title: catalog.records()[pos].title.clone(),
            score,
        })
        .collect())
}
