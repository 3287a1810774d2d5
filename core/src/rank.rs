use crate::{Error, HashingTf, Result, TfIdfVector};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Best document for a query term.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankingResult {
    pub id: String,
    pub score: f64,
    /// Zero-based index of the document in corpus order.
    pub position: usize,
}

/// Return the document whose TF-IDF weight at `hash(term)` is largest.
///
/// Ties go to the document that comes first in corpus order. A term no
/// document carries still yields a result, with score 0.
pub fn best_match<D>(hasher: &HashingTf, term: &str, docs: &[(D, TfIdfVector)]) -> Result<RankingResult>
where
    D: AsRef<str> + Sync,
{
    let index = hasher.index_of(term);
    let (position, score) = docs
        .par_iter()
        .enumerate()
        .map(|(position, (_, v))| (position, v.get(index)))
        .reduce_with(pick)
        .ok_or(Error::EmptyCorpus)?;
    tracing::debug!(term, index, position, score, "ranked corpus");
    Ok(RankingResult { id: docs[position].0.as_ref().to_owned(), score, position })
}

// Max by score, then min by position; associative and commutative.
fn pick(a: (usize, f64), b: (usize, f64)) -> (usize, f64) {
    match a.1.total_cmp(&b.1) {
        Ordering::Greater => a,
        Ordering::Less => b,
        Ordering::Equal if a.0 <= b.0 => a,
        Ordering::Equal => b,
    }
}
