use crate::{Error, FeatureIndex, Result};
use std::collections::HashMap;
use xxhash_rust::xxh3::xxh3_64;

/// Maps terms into a fixed number of buckets and counts them per document.
///
/// Distinct terms may share a bucket. Collisions are part of the model and are
/// never resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HashingTf {
    num_features: u32,
}

impl HashingTf {
    pub fn new(num_features: usize) -> Result<Self> {
        match u32::try_from(num_features) {
            Ok(n) if n > 0 => Ok(Self { num_features: n }),
            _ => Err(Error::InvalidHashSpace(num_features)),
        }
    }

    pub fn num_features(&self) -> usize {
        self.num_features as usize
    }

    /// Feature index of a single term. Stable across runs and platforms.
    #[inline]
    pub fn index_of(&self, term: &str) -> FeatureIndex {
        (xxh3_64(term.as_bytes()) % u64::from(self.num_features)) as FeatureIndex
    }

    pub fn transform<S: AsRef<str>>(&self, terms: &[S]) -> TermFrequencies {
        let mut counts: HashMap<FeatureIndex, u32> = HashMap::new();
        for term in terms {
            *counts.entry(self.index_of(term.as_ref())).or_insert(0) += 1;
        }
        TermFrequencies { counts }
    }
}

/// Sparse per-document occurrence counts keyed by feature index.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TermFrequencies {
    counts: HashMap<FeatureIndex, u32>,
}

impl TermFrequencies {
    /// Count at `index`, 0 when absent.
    pub fn get(&self, index: FeatureIndex) -> u32 {
        self.counts.get(&index).copied().unwrap_or(0)
    }

    pub fn iter(&self) -> impl Iterator<Item = (FeatureIndex, u32)> + '_ {
        self.counts.iter().map(|(&i, &c)| (i, c))
    }

    pub fn indices(&self) -> impl Iterator<Item = FeatureIndex> + '_ {
        self.counts.keys().copied()
    }

    /// Number of non-zero entries.
    pub fn nnz(&self) -> usize {
        self.counts.len()
    }

    /// Sum of all counts, i.e. the length of the hashed document.
    pub fn total(&self) -> u64 {
        self.counts.values().map(|&c| u64::from(c)).sum()
    }
}
