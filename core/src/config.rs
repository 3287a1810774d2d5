use crate::Result;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

pub const DEFAULT_NUM_FEATURES: usize = 100_000;
pub const DEFAULT_MIN_DOC_FREQ: u32 = 2;

/// Parameters shared by corpus featurization and query lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    /// Hash-space size N. Larger values trade memory for fewer collisions.
    pub num_features: usize,
    /// Features present in fewer documents than this get an IDF weight of 0.
    pub min_doc_freq: u32,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self { num_features: DEFAULT_NUM_FEATURES, min_doc_freq: DEFAULT_MIN_DOC_FREQ }
    }
}

impl PipelineConfig {
    pub fn new(num_features: usize, min_doc_freq: u32) -> Self {
        Self { num_features, min_doc_freq }
    }

    /// Read a JSON config file. Missing fields fall back to the defaults.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let f = File::open(path)?;
        let config = serde_json::from_reader(BufReader::new(f))?;
        Ok(config)
    }
}
