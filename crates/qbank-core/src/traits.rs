use async_trait::async_trait;

/// External text-to-vector boundary. Implementations call a remote
/// model or a local stand-in; the retrieval engine only requires that
/// the output dimensionality stays fixed per embedder.
///
/// Retries belong to the implementation, never to callers; the engine
/// wraps each call in a timeout and surfaces any failure as a distinct
/// embedding error rather than substituting a default vector.
#[async_trait]
pub trait QueryEmbedder: Send + Sync {
    /// Embedding dimensionality (D).
    fn dim(&self) -> usize;
    /// Compute the embedding for one query text.
    async fn embed(&self, text: &str) -> anyhow::Result<Vec<f32>>;
}
