//! The retrieval engine: corpus resolution, filtering, query
//! embedding, ranking, and projection/sampling, in that order. The
//! filter runs before the embedding call so an empty candidate set
//! aborts without a network round trip.

use std::sync::Arc;
use std::time::Duration;

use rand::Rng;
use serde::Deserialize;
use tracing::debug;

use qbank_core::traits::QueryEmbedder;
use qbank_core::types::{QuestionDetail, QuestionSummary};
use qbank_core::{Error, Result};
use qbank_corpus::CorpusSet;

use crate::filter::{filter_candidates, Filters};
use crate::rank::{rank, RankedCandidate};
use crate::select::{sample_top, DEFAULT_TOP_K};

/// Query text used when the caller sends none.
pub const DEFAULT_QUERY: &str = "coding question";

const DEFAULT_EMBED_TIMEOUT: Duration = Duration::from_secs(30);

/// One retrieval request. Field names mirror the original API body.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchRequest {
    #[serde(default)]
    pub query: Option<String>,
    #[serde(flatten)]
    pub filters: Filters,
}

/// Stateless per-request retrieval over a shared read-only corpus set.
/// Many requests may be in flight at once; the only suspension point
/// is the embedding call, which is bounded by `embed_timeout`.
pub struct RetrievalEngine {
    corpora: Arc<CorpusSet>,
    embedder: Box<dyn QueryEmbedder>,
    top_k: usize,
    embed_timeout: Duration,
}

impl RetrievalEngine {
    pub fn new(corpora: Arc<CorpusSet>, embedder: Box<dyn QueryEmbedder>) -> Self {
        Self {
            corpora,
            embedder,
            top_k: DEFAULT_TOP_K,
            embed_timeout: DEFAULT_EMBED_TIMEOUT,
        }
    }

    pub fn with_top_k(mut self, top_k: usize) -> Self {
        self.top_k = top_k.max(1);
        self
    }

    pub fn with_embed_timeout(mut self, timeout: Duration) -> Self {
        self.embed_timeout = timeout;
        self
    }

    /// List mode: the full ranked list, metadata-only projection.
    pub async fn search_all(
        &self,
        subject: &str,
        request: &SearchRequest,
    ) -> Result<Vec<QuestionSummary>> {
        let ranked = self.ranked(subject, request).await?;
        Ok(ranked.iter().map(RankedCandidate::summary).collect())
    }

    /// Sample mode: one uniform draw from the top `top_k` ranked
    /// candidates, full projection without the embedding. Unseeded;
    /// repeated identical calls may legitimately differ.
    pub async fn search_one(&self, subject: &str, request: &SearchRequest) -> Result<QuestionDetail> {
        let ranked = self.ranked(subject, request).await?;
        let mut rng = rand::thread_rng();
        Self::pick(&ranked, self.top_k, &mut rng)
    }

    /// Sample mode with a caller-supplied rng, for deterministic tests.
    pub async fn search_one_with_rng<R>(
        &self,
        subject: &str,
        request: &SearchRequest,
        rng: &mut R,
    ) -> Result<QuestionDetail>
    where
        R: Rng + ?Sized + Send,
    {
        let ranked = self.ranked(subject, request).await?;
        Self::pick(&ranked, self.top_k, rng)
    }

    fn pick<R: Rng + ?Sized>(
        ranked: &[RankedCandidate<'_>],
        top_k: usize,
        rng: &mut R,
    ) -> Result<QuestionDetail> {
        sample_top(ranked, top_k, rng)
            .map(RankedCandidate::detail)
            .ok_or(Error::NoMatch)
    }

    async fn ranked(
        &self,
        subject: &str,
        request: &SearchRequest,
    ) -> Result<Vec<RankedCandidate<'_>>> {
        let corpus = self.corpora.corpus(subject)?;
        let candidates = filter_candidates(corpus.questions(), &request.filters);
        if candidates.is_empty() {
            return Err(Error::NoMatch);
        }
        debug!(subject, candidates = candidates.len(), "filtered candidates");
        let query = request.query.as_deref().unwrap_or(DEFAULT_QUERY);
        let query_vector = self.query_vector(query).await?;
        Ok(rank(&candidates, &query_vector))
    }

    async fn query_vector(&self, text: &str) -> Result<Vec<f32>> {
        match tokio::time::timeout(self.embed_timeout, self.embedder.embed(text)).await {
            Err(_) => Err(Error::Embedding(format!(
                "query embedding timed out after {:?}",
                self.embed_timeout
            ))),
            Ok(Err(e)) => Err(Error::Embedding(e.to_string())),
            Ok(Ok(vector)) if vector.is_empty() => {
                Err(Error::Embedding("embedder returned an empty vector".to_string()))
            }
            Ok(Ok(vector)) => Ok(vector),
        }
    }
}
