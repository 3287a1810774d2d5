use crate::rank::{best_match, RankingResult};
use crate::{Document, DocumentFrequencies, HashingTf, Idf, PipelineConfig, Result, TfIdfVector};
use rayon::prelude::*;

/// TF-IDF vectors of one corpus, ready for single-term lookups.
///
/// Built once; the hasher used for the corpus is kept so queries land in the
/// same feature space.
#[derive(Debug, Clone)]
pub struct TfIdfIndex {
    hasher: HashingTf,
    idf: Idf,
    distinct_features: usize,
    docs: Vec<(String, TfIdfVector)>,
}

impl TfIdfIndex {
    pub fn build(corpus: &[Document], config: &PipelineConfig) -> Result<Self> {
        let hasher = HashingTf::new(config.num_features)?;
        let tfs: Vec<_> = corpus.par_iter().map(|d| hasher.transform(&d.terms)).collect();
        let df = DocumentFrequencies::estimate(&tfs)?;
        let idf = Idf::fit(&df, config.min_doc_freq)?;
        let docs = corpus
            .par_iter()
            .zip(tfs.par_iter())
            .map(|(d, tf)| (d.id.clone(), idf.transform(tf)))
            .collect();
        tracing::info!(
            num_docs = corpus.len(),
            num_features = config.num_features,
            min_doc_freq = config.min_doc_freq,
            distinct_features = df.distinct_features(),
            weighted_features = idf.weighted_features(),
            "built tf-idf index"
        );
        Ok(Self { hasher, idf, distinct_features: df.distinct_features(), docs })
    }

    pub fn best_match(&self, term: &str) -> Result<RankingResult> {
        best_match(&self.hasher, term, &self.docs)
    }

    pub fn hasher(&self) -> &HashingTf {
        &self.hasher
    }

    pub fn idf(&self) -> &Idf {
        &self.idf
    }

    /// Identifier and TF-IDF vector of each document, in corpus order.
    pub fn documents(&self) -> &[(String, TfIdfVector)] {
        &self.docs
    }

    pub fn num_docs(&self) -> usize {
        self.docs.len()
    }

    pub fn num_features(&self) -> usize {
        self.hasher.num_features()
    }

    pub fn min_doc_freq(&self) -> u32 {
        self.idf.min_doc_freq()
    }

    pub fn distinct_features(&self) -> usize {
        self.distinct_features
    }

    pub fn weighted_features(&self) -> usize {
        self.idf.weighted_features()
    }
}

/// Build an index over `corpus` and return the best document for `query`.
pub fn search(corpus: &[Document], query: &str, config: &PipelineConfig) -> Result<RankingResult> {
    TfIdfIndex::build(corpus, config)?.best_match(query)
}
