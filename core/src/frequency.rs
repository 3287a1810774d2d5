use crate::{Error, FeatureIndex, Result, TermFrequencies};
use rayon::prelude::*;
use std::collections::HashMap;

/// Number of documents each feature index appears in, over one corpus.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocumentFrequencies {
    df: HashMap<FeatureIndex, u32>,
    num_docs: usize,
}

impl DocumentFrequencies {
    /// Count, per feature, the documents whose term frequency there is >= 1.
    ///
    /// Partitions are merged by summation so the table does not depend on how
    /// rayon splits the corpus.
    pub fn estimate(tfs: &[TermFrequencies]) -> Result<Self> {
        if tfs.is_empty() {
            return Err(Error::EmptyCorpus);
        }
        let df = tfs
            .par_iter()
            .fold(HashMap::new, |mut acc: HashMap<FeatureIndex, u32>, tf| {
                for (index, count) in tf.iter() {
                    if count > 0 {
                        *acc.entry(index).or_insert(0) += 1;
                    }
                }
                acc
            })
            .reduce(HashMap::new, merge_counts);
        tracing::debug!(num_docs = tfs.len(), distinct_features = df.len(), "estimated document frequencies");
        Ok(Self { df, num_docs: tfs.len() })
    }

    /// Document frequency of `index`, 0 when no document contains it.
    pub fn get(&self, index: FeatureIndex) -> u32 {
        self.df.get(&index).copied().unwrap_or(0)
    }

    pub fn iter(&self) -> impl Iterator<Item = (FeatureIndex, u32)> + '_ {
        self.df.iter().map(|(&i, &c)| (i, c))
    }

    pub fn num_docs(&self) -> usize {
        self.num_docs
    }

    pub fn distinct_features(&self) -> usize {
        self.df.len()
    }
}

fn merge_counts(mut a: HashMap<FeatureIndex, u32>, b: HashMap<FeatureIndex, u32>) -> HashMap<FeatureIndex, u32> {
    if a.len() < b.len() {
        return merge_counts(b, a);
    }
    for (index, count) in b {
        *a.entry(index).or_insert(0) += count;
    }
    a
}
