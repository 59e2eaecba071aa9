//! Categorical candidate filtering.

use serde::{Deserialize, Serialize};

use qbank_core::types::QuestionRecord;

/// Sentinel meaning "no constraint on this dimension".
pub const ALL: &str = "All";

/// Conjunctive categorical constraints. Matching is case-sensitive and
/// exact: `company`/`topic` test set membership, `difficulty` tests
/// equality. Wire names match the request body of the original API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Filters {
    #[serde(rename = "companyFilter")]
    pub company: String,
    #[serde(rename = "difficultyFilter")]
    pub difficulty: String,
    #[serde(rename = "topicFilter")]
    pub topic: String,
}

impl Default for Filters {
    fn default() -> Self {
        Self {
            company: ALL.to_string(),
            difficulty: ALL.to_string(),
            topic: ALL.to_string(),
        }
    }
}

impl Filters {
    pub fn with_company(mut self, company: impl Into<String>) -> Self {
        self.company = company.into();
        self
    }

    pub fn with_difficulty(mut self, difficulty: impl Into<String>) -> Self {
        self.difficulty = difficulty.into();
        self
    }

    pub fn with_topic(mut self, topic: impl Into<String>) -> Self {
        self.topic = topic.into();
        self
    }

    fn active(value: &str) -> bool {
        value != ALL
    }

    pub fn matches(&self, q: &QuestionRecord) -> bool {
        if Self::active(&self.company) && !q.metadata.companies.iter().any(|c| c == &self.company) {
            return false;
        }
        if Self::active(&self.difficulty)
            && q.metadata.difficulty.as_deref() != Some(self.difficulty.as_str())
        {
            return false;
        }
        if Self::active(&self.topic) && !q.metadata.topics.iter().any(|t| t == &self.topic) {
            return false;
        }
        true
    }
}

/// Narrow a corpus to the records satisfying every active constraint.
/// Output keeps corpus order; the ranker re-orders it anyway.
pub fn filter_candidates<'a>(
    questions: &'a [QuestionRecord],
    filters: &Filters,
) -> Vec<&'a QuestionRecord> {
    questions.iter().filter(|q| filters.matches(q)).collect()
}
