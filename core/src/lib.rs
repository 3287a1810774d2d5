//! Feature-hashing TF-IDF engine with single-term, top-1 retrieval.
//!
//! Documents are tokenized on whitespace, hashed into a fixed feature space,
//! weighted by smoothed inverse document frequency, and ranked by the weight of
//! one query feature.

pub mod config;
pub mod corpus;
pub mod error;
pub mod frequency;
pub mod hashing;
pub mod idf;
pub mod index;
pub mod rank;
pub mod tokenizer;

pub use config::PipelineConfig;
pub use corpus::{Document, TsvLayout};
pub use error::{Error, Result};
pub use frequency::DocumentFrequencies;
pub use hashing::{HashingTf, TermFrequencies};
pub use idf::{Idf, TfIdfVector};
pub use index::{search, TfIdfIndex};
pub use rank::RankingResult;

/// Bucket a term hashes into, in `[0, num_features)`.
pub type FeatureIndex = u32;
