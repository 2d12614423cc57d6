use crate::catalog::Catalog;
use crate::tokenizer::tokenize;
use std::collections::{BTreeMap, HashMap};

pub type TermId = u32;

/// Sparse TF-IDF vector for one catalog position: `(term, weight)` entries
/// sorted by term id and L2-normalized at build time. An empty or
/// all-stopword overview yields an empty (zero-magnitude) vector.
#[derive(Debug, Clone, Default)]
pub struct DocVector(pub Vec<(TermId, f32)>);

impl DocVector {
    pub fn is_zero(&self) -> bool {
        self.0.is_empty()
    }
}

/// Term-weight index over a catalog's overview corpus. Built once; the
/// vocabulary and vector dimensionality are fixed afterwards, and a changed
/// catalog requires a rebuild from scratch.
pub struct FeatureIndex {
    vocab: HashMap<String, TermId>,
    idf: Vec<f32>,
    vectors: Vec<DocVector>,
}

impl FeatureIndex {
    /// Build the index from a catalog. Deterministic for identical input:
    /// term ids are assigned in lexicographic term order, and no clock or
    /// hash-iteration order leaks into the result. An empty catalog
    /// produces an empty vocabulary and no vectors.
    pub fn build(catalog: &Catalog) -> FeatureIndex {
        // Per-document term frequencies.
        let docs: Vec<HashMap<String, u32>> = catalog
            .records()
            .iter()
            .map(|r| {
                let mut tf: HashMap<String, u32> = HashMap::new();
                for term in tokenize(&r.overview) {
                    *tf.entry(term).or_insert(0) += 1;
                }
                tf
            })
            .collect();

        // Document frequencies. The BTreeMap fixes term-id assignment to
        // lexicographic order.
        let mut df: BTreeMap<&str, u32> = BTreeMap::new();
        for tf in &docs {
            for term in tf.keys() {
                *df.entry(term.as_str()).or_insert(0) += 1;
            }
        }

        let n = catalog.len() as f32;
        let mut vocab: HashMap<String, TermId> = HashMap::with_capacity(df.len());
        let mut idf: Vec<f32> = Vec::with_capacity(df.len());
        for (tid, (term, df_t)) in df.iter().enumerate() {
            vocab.insert((*term).to_string(), tid as TermId);
            // A term present in every document weighs ln(1) = 0.
            idf.push((n / *df_t as f32).ln());
        }

        let mut vectors: Vec<DocVector> = Vec::with_capacity(docs.len());
        for tf in &docs {
            let mut entries: Vec<(TermId, f32)> = tf
                .iter()
                .map(|(term, &count)| {
                    let tid = vocab[term.as_str()];
                    let weight = (1.0 + (count as f32).ln()) * idf[tid as usize];
                    (tid, weight)
                })
                .filter(|&(_, weight)| weight > 0.0)
                .collect();
            entries.sort_unstable_by_key(|&(tid, _)| tid);

            let norm = entries.iter().map(|&(_, w)| w * w).sum::<f32>().sqrt();
            if norm > 0.0 {
                for entry in entries.iter_mut() {
                    entry.1 /= norm;
                }
            } else {
                entries.clear();
            }
            vectors.push(DocVector(entries));
        }

        tracing::info!(
            num_docs = vectors.len(),
            num_terms = vocab.len(),
            "feature index built"
        );
        FeatureIndex { vocab, idf, vectors }
    }

    /// Vector for the record at `pos` in the source catalog.
    pub fn vector(&self, pos: usize) -> Option<&DocVector> {
        self.vectors.get(pos)
    }

    pub fn vectors(&self) -> &[DocVector] {
        &self.vectors
    }

    pub fn num_terms(&self) -> usize {
        self.vocab.len()
    }

    pub fn term_id(&self, term: &str) -> Option<TermId> {
        self.vocab.get(term).copied()
    }

    pub fn idf(&self, term: &str) -> Option<f32> {
        self.term_id(term).map(|tid| self.idf[tid as usize])
    }
}
