//! Corpus parsing and shape normalization.
//!
//! Source files come in two layouts: coding corpora nest
//! `difficulty`/`topics`/`companies` under a `metadata` object, theory
//! corpora store a flat `difficulty` and singular `topic` directly on
//! the record. Both are normalized here into one canonical
//! [`QuestionRecord`] so no read site ever branches on shape.

use serde::Deserialize;
use serde_json::{Map, Value};
use std::fs;
use std::path::Path;
use tracing::info;

use qbank_core::types::{QuestionMetadata, QuestionRecord};
use qbank_core::{Error, Result};

#[derive(Debug, Default, Deserialize)]
struct RawMetadata {
    #[serde(default)]
    difficulty: Option<String>,
    #[serde(default)]
    topics: Vec<String>,
    #[serde(default)]
    companies: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct RawQuestion {
    id: String,
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    question: Option<String>,
    #[serde(default)]
    embedding: Vec<f32>,
    #[serde(default)]
    metadata: Option<RawMetadata>,
    // Flat theory-corpus fields.
    #[serde(default)]
    difficulty: Option<String>,
    #[serde(default)]
    topic: Option<String>,
    #[serde(default)]
    topics: Option<Vec<String>>,
    #[serde(default)]
    companies: Option<Vec<String>>,
    // Everything else (judge_context, reference_answer, _metadata, ...)
    // rides through untouched.
    #[serde(flatten)]
    extra: Map<String, Value>,
}

impl RawQuestion {
    fn normalize(self) -> QuestionRecord {
        let meta = self.metadata.unwrap_or_default();
        let difficulty = meta.difficulty.or(self.difficulty);
        let topics = if meta.topics.is_empty() {
            self.topics
                .or_else(|| self.topic.map(|t| vec![t]))
                .unwrap_or_default()
        } else {
            meta.topics
        };
        let companies = if meta.companies.is_empty() {
            self.companies.unwrap_or_default()
        } else {
            meta.companies
        };
        let title = self
            .title
            .or_else(|| self.question.clone())
            .unwrap_or_else(|| self.id.clone());
        QuestionRecord {
            id: self.id,
            title,
            question: self.question,
            embedding: self.embedding,
            metadata: QuestionMetadata {
                difficulty,
                topics,
                companies,
            },
            extra: self.extra,
        }
    }
}

/// Parse one corpus file into normalized records and validate the
/// load-time invariants: unique ids, non-empty embeddings, and one
/// embedding dimensionality across the whole corpus.
///
/// Returns the records plus the corpus dimensionality. Any violation
/// is a [`Error::MalformedCorpus`]; callers are expected to fail fast
/// at startup rather than serve requests from a broken corpus.
pub fn load_corpus_file(subject: &str, path: &Path) -> Result<(Vec<QuestionRecord>, usize)> {
    let raw = fs::read_to_string(path).map_err(|e| {
        Error::MalformedCorpus(format!("{subject}: cannot read {}: {e}", path.display()))
    })?;
    let questions: Vec<RawQuestion> = serde_json::from_str(&raw).map_err(|e| {
        Error::MalformedCorpus(format!("{subject}: cannot parse {}: {e}", path.display()))
    })?;
    let records: Vec<QuestionRecord> = questions.into_iter().map(RawQuestion::normalize).collect();
    let dim = validate(subject, &records)?;
    info!(subject, count = records.len(), dim, "corpus loaded");
    Ok((records, dim))
}

/// Validate records that did not come from a file (fixtures, tests).
pub fn validate(subject: &str, records: &[QuestionRecord]) -> Result<usize> {
    if records.is_empty() {
        return Err(Error::MalformedCorpus(format!(
            "{subject}: corpus contains no records"
        )));
    }
    let dim = records[0].embedding.len();
    let mut seen = std::collections::HashSet::with_capacity(records.len());
    for record in records {
        if !seen.insert(record.id.as_str()) {
            return Err(Error::MalformedCorpus(format!(
                "{subject}: duplicate question id '{}'",
                record.id
            )));
        }
        if record.embedding.is_empty() {
            return Err(Error::MalformedCorpus(format!(
                "{subject}: question '{}' has no embedding",
                record.id
            )));
        }
        if record.embedding.len() != dim {
            return Err(Error::MalformedCorpus(format!(
                "{subject}: question '{}' has embedding dim {} (corpus dim {dim})",
                record.id,
                record.embedding.len()
            )));
        }
    }
    Ok(dim)
}
