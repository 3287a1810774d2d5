use crate::{DocumentFrequencies, Error, FeatureIndex, Result, TermFrequencies};
use std::collections::HashMap;

/// Smoothed inverse document frequency, `ln((D + 1) / (df + 1))`.
///
/// Returns 0 for features below `min_doc_freq`. Non-increasing in `df` for a
/// fixed `num_docs`.
pub fn idf_weight(num_docs: usize, df: u32, min_doc_freq: u32) -> f64 {
    if df < min_doc_freq {
        return 0.0;
    }
    ((num_docs as f64 + 1.0) / (f64::from(df) + 1.0)).ln()
}

/// Per-feature IDF weights fitted on one corpus.
#[derive(Debug, Clone, PartialEq)]
pub struct Idf {
    weights: HashMap<FeatureIndex, f64>,
    num_docs: usize,
    min_doc_freq: u32,
}

impl Idf {
    pub fn fit(df: &DocumentFrequencies, min_doc_freq: u32) -> Result<Self> {
        let num_docs = df.num_docs();
        if num_docs == 0 {
            return Err(Error::EmptyCorpus);
        }
        // Zero weights are not stored; lookups default to 0.
        let weights: HashMap<FeatureIndex, f64> = df
            .iter()
            .map(|(index, count)| (index, idf_weight(num_docs, count, min_doc_freq)))
            .filter(|&(_, w)| w != 0.0)
            .collect();
        tracing::debug!(num_docs, min_doc_freq, weighted_features = weights.len(), "fitted idf");
        Ok(Self { weights, num_docs, min_doc_freq })
    }

    /// IDF weight of `index`; 0 for unseen or cut-off features.
    pub fn weight(&self, index: FeatureIndex) -> f64 {
        self.weights.get(&index).copied().unwrap_or(0.0)
    }

    pub fn num_docs(&self) -> usize {
        self.num_docs
    }

    pub fn min_doc_freq(&self) -> u32 {
        self.min_doc_freq
    }

    /// Features carrying a non-zero weight.
    pub fn weighted_features(&self) -> usize {
        self.weights.len()
    }

    /// Pointwise `tf[index] * idf[index]` over the indices present in `tf`.
    pub fn transform(&self, tf: &TermFrequencies) -> TfIdfVector {
        let weights = tf
            .iter()
            .filter_map(|(index, count)| {
                let w = self.weight(index);
                (w != 0.0).then(|| (index, f64::from(count) * w))
            })
            .collect();
        TfIdfVector { weights }
    }
}

/// Sparse TF-IDF weights of one document. Zero wherever the IDF is zero.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TfIdfVector {
    weights: HashMap<FeatureIndex, f64>,
}

impl TfIdfVector {
    pub fn get(&self, index: FeatureIndex) -> f64 {
        self.weights.get(&index).copied().unwrap_or(0.0)
    }

    pub fn iter(&self) -> impl Iterator<Item = (FeatureIndex, f64)> + '_ {
        self.weights.iter().map(|(&i, &w)| (i, w))
    }

    pub fn nnz(&self) -> usize {
        self.weights.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::HashingTf;

    #[test]
    fn cutoff_zeroes_rare_features() {
        assert_eq!(idf_weight(10, 1, 2), 0.0);
        assert!(idf_weight(10, 2, 2) > 0.0);
    }

    #[test]
    fn feature_in_every_document_weighs_zero() {
        assert_eq!(idf_weight(4, 4, 1), 0.0);
    }

    #[test]
    fn matches_smoothed_formula() {
        let w = idf_weight(3, 2, 2);
        assert!((w - (4.0f64 / 3.0).ln()).abs() < 1e-12);
    }

    #[test]
    fn transform_scales_counts() {
        let h = HashingTf::new(100_000).unwrap();
        let tfs = vec![
            h.transform(&["rust", "rust", "crab"]),
            h.transform(&["rust", "ferris"]),
            h.transform(&["python"]),
        ];
        let df = DocumentFrequencies::estimate(&tfs).unwrap();
        let idf = Idf::fit(&df, 2).unwrap();
        let rust = h.index_of("rust");
        let expected = (4.0f64 / 3.0).ln();
        assert!((idf.weight(rust) - expected).abs() < 1e-12);

        let v = idf.transform(&tfs[0]);
        assert!((v.get(rust) - 2.0 * expected).abs() < 1e-12);
        assert_eq!(v.get(h.index_of("crab")), 0.0);
        assert_eq!(v.nnz(), 1);
    }

    #[test]
    fn empty_table_fails() {
        let df = DocumentFrequencies::default();
        assert!(matches!(Idf::fit(&df, 2), Err(Error::EmptyCorpus)));
    }
}
