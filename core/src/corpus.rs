use crate::tokenizer::tokenize;
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::io::BufRead;

/// A titled document, already split into terms.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    pub id: String,
    pub terms: Vec<String>,
}

impl Document {
    pub fn new(id: impl Into<String>, terms: Vec<String>) -> Self {
        Self { id: id.into(), terms }
    }

    pub fn from_text(id: impl Into<String>, text: &str) -> Self {
        Self::new(id, tokenize(text))
    }
}

/// Which tab-separated columns hold the identifier and the text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TsvLayout {
    pub id_field: usize,
    pub text_field: usize,
}

impl Default for TsvLayout {
    /// Wikipedia dump layout: `id \t title \t date \t text`.
    fn default() -> Self {
        Self { id_field: 1, text_field: 3 }
    }
}

impl TsvLayout {
    fn needed(&self) -> usize {
        self.id_field.max(self.text_field) + 1
    }

    /// Parse one record. `line` is 1-based and used only for error reporting.
    pub fn parse_record(&self, line: usize, record: &str) -> Result<Document> {
        let fields: Vec<&str> = record.split('\t').collect();
        if fields.len() < self.needed() {
            return Err(Error::MalformedRecord { line, fields: fields.len(), needed: self.needed() });
        }
        Ok(Document::from_text(fields[self.id_field], fields[self.text_field]))
    }
}

/// Read every non-blank line of `reader` as a document, keeping file order.
pub fn read_tsv<R: BufRead>(reader: R, layout: &TsvLayout) -> Result<Vec<Document>> {
    let mut docs = Vec::new();
    for (i, line) in reader.lines().enumerate() {
        let line = line?;
        let record = line.trim_end_matches('\r');
        if record.trim().is_empty() {
            continue;
        }
        docs.push(layout.parse_record(i + 1, record)?);
    }
    tracing::debug!(num_docs = docs.len(), "read tsv corpus");
    Ok(docs)
}
