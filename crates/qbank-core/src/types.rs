//! Domain types shared by the corpus store and the retrieval engine.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

pub type QuestionId = String;

/// Categorical attributes used by the filter engine and the
/// distinct-metadata query. Theory corpora often carry no companies.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct QuestionMetadata {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub difficulty: Option<String>,
    #[serde(default)]
    pub topics: Vec<String>,
    #[serde(default)]
    pub companies: Vec<String>,
}

/// One entry of a loaded corpus, normalized into a single canonical
/// shape regardless of how the source file nested its metadata.
///
/// - `id`: unique within the corpus
/// - `title`: display name (falls back to the prompt text at load)
/// - `question`: prompt text, when distinct from the title
/// - `embedding`: fixed-length vector, uniform across the corpus
/// - `extra`: opaque domain fields (judge context, reference answers,
///   display markdown, ...) carried through untouched
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuestionRecord {
    pub id: QuestionId,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub question: Option<String>,
    pub embedding: Vec<f32>,
    pub metadata: QuestionMetadata,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl QuestionRecord {
    /// Full-field projection with the embedding stripped. Used by
    /// lookup-by-id (no similarity) and by sample-mode retrieval
    /// (similarity attached by the caller).
    pub fn detail(&self) -> QuestionDetail {
        QuestionDetail {
            id: self.id.clone(),
            title: self.title.clone(),
            question: self.question.clone(),
            metadata: self.metadata.clone(),
            extra: self.extra.clone(),
            similarity: None,
        }
    }
}

/// Metadata-only projection returned by list-mode retrieval.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct QuestionSummary {
    pub id: QuestionId,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub difficulty: Option<String>,
    pub topics: Vec<String>,
    pub companies: Vec<String>,
    pub similarity: f32,
}

/// Everything a caller may see about one question. The raw embedding
/// vector never appears here.
#[derive(Debug, Clone, Serialize)]
pub struct QuestionDetail {
    pub id: QuestionId,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub question: Option<String>,
    pub metadata: QuestionMetadata,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub similarity: Option<f32>,
}

/// Deduplicated, lexicographically sorted filter values present in one
/// corpus. Populates the filter dropdowns.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct FilterOptions {
    pub companies: Vec<String>,
    pub difficulties: Vec<String>,
    pub topics: Vec<String>,
}
