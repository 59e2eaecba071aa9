//! REST client for a Vertex-style text-embedding predict endpoint.
//!
//! Request: `{"instances": [{"content": <text>}]}`
//! Response: `{"predictions": [{"embeddings": {"values": [...]}}]}`
//!
//! Retries are owned here, not by the retrieval engine: a fixed number
//! of attempts with a constant backoff between them. A response that
//! parses but carries no vector is a hard failure, never a default
//! vector.

use anyhow::{anyhow, Result};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, warn};

use qbank_core::traits::QueryEmbedder;

#[derive(Debug, Clone, Copy)]
pub struct RetryPolicy {
    pub max_attempts: u32,
    pub backoff: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            backoff: Duration::from_secs(1),
        }
    }
}

#[derive(Serialize)]
struct PredictRequest<'a> {
    instances: [Instance<'a>; 1],
}

#[derive(Serialize)]
struct Instance<'a> {
    content: &'a str,
}

#[derive(Deserialize)]
struct PredictResponse {
    #[serde(default)]
    predictions: Vec<Prediction>,
}

#[derive(Deserialize)]
struct Prediction {
    embeddings: Embeddings,
}

#[derive(Deserialize)]
struct Embeddings {
    values: Vec<f32>,
}

pub struct RemoteEmbedder {
    client: reqwest::Client,
    endpoint: String,
    token: Option<String>,
    dim: usize,
    retry: RetryPolicy,
}

impl RemoteEmbedder {
    pub fn new(
        endpoint: String,
        token: Option<String>,
        dim: usize,
        retry: RetryPolicy,
    ) -> Result<Self> {
        let client = reqwest::Client::builder().build()?;
        Ok(Self {
            client,
            endpoint,
            token,
            dim,
            retry,
        })
    }

    async fn attempt(&self, text: &str) -> Result<Vec<f32>> {
        let body = PredictRequest {
            instances: [Instance { content: text }],
        };
        let mut request = self.client.post(&self.endpoint).json(&body);
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }
        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(anyhow!("embedding endpoint returned {status}"));
        }
        let parsed: PredictResponse = response.json().await?;
        let values = parsed
            .predictions
            .into_iter()
            .next()
            .map(|p| p.embeddings.values)
            .ok_or_else(|| anyhow!("embedding response missing prediction vector"))?;
        if values.is_empty() {
            return Err(anyhow!("embedding response carried an empty vector"));
        }
        if values.len() != self.dim {
            warn!(
                got = values.len(),
                expected = self.dim,
                "embedding dimensionality differs from configuration"
            );
        }
        Ok(values)
    }
}

#[async_trait]
impl QueryEmbedder for RemoteEmbedder {
    fn dim(&self) -> usize {
        self.dim
    }

    async fn embed(&self, text: &str) -> Result<Vec<f32>> {
        let attempts = self.retry.max_attempts.max(1);
        let mut last_err = None;
        for attempt in 1..=attempts {
            match self.attempt(text).await {
                Ok(values) => {
                    debug!(attempt, dim = values.len(), "query embedded");
                    return Ok(values);
                }
                Err(e) => {
                    warn!(attempt, attempts, error = %e, "embedding attempt failed");
                    last_err = Some(e);
                    if attempt < attempts {
                        tokio::time::sleep(self.retry.backoff).await;
                    }
                }
            }
        }
        Err(last_err.unwrap_or_else(|| anyhow!("embedding failed with no attempts made")))
    }
}
