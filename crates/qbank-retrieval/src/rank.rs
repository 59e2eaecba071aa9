//! Brute-force cosine ranking of filtered candidates.

use qbank_core::similarity::cosine_similarity;
use qbank_core::types::{QuestionDetail, QuestionRecord, QuestionSummary};

/// A candidate annotated with its similarity to the query vector.
/// The score is raw cosine output, not clamped.
#[derive(Debug, Clone)]
pub struct RankedCandidate<'a> {
    pub question: &'a QuestionRecord,
    pub similarity: f32,
}

impl RankedCandidate<'_> {
    /// Metadata-only projection for list-mode output.
    pub fn summary(&self) -> QuestionSummary {
        QuestionSummary {
            id: self.question.id.clone(),
            title: self.question.title.clone(),
            difficulty: self.question.metadata.difficulty.clone(),
            topics: self.question.metadata.topics.clone(),
            companies: self.question.metadata.companies.clone(),
            similarity: self.similarity,
        }
    }

    /// Full projection (embedding stripped) with the score attached.
    pub fn detail(&self) -> QuestionDetail {
        let mut detail = self.question.detail();
        detail.similarity = Some(self.similarity);
        detail
    }
}

/// Score every candidate against the query vector and sort descending
/// by similarity. The sort is stable, so equal scores keep their input
/// (corpus) order; repeated calls with identical input produce
/// identical output.
pub fn rank<'a>(candidates: &[&'a QuestionRecord], query_vector: &[f32]) -> Vec<RankedCandidate<'a>> {
    let mut ranked: Vec<RankedCandidate<'a>> = candidates
        .iter()
        .map(|q| RankedCandidate {
            question: q,
            similarity: cosine_similarity(query_vector, &q.embedding),
        })
        .collect();
    ranked.sort_by(|a, b| {
        b.similarity
            .partial_cmp(&a.similarity)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    ranked
}
