#![deny(warnings)]
#![deny(dead_code)]
#![deny(unused_variables)]
#![deny(unused_imports)]

//! Query-embedder implementations.
//!
//! The retrieval engine only sees the [`qbank_core::traits::QueryEmbedder`]
//! trait; this crate provides the remote REST client used in production
//! and a deterministic hash-based fake for tests and offline work.

pub mod fake;
pub mod remote;

use anyhow::Result;
use qbank_core::config::EmbeddingSettings;
use qbank_core::traits::QueryEmbedder;
use qbank_core::Error;
use tracing::info;

pub use fake::FakeEmbedder;
pub use remote::{RemoteEmbedder, RetryPolicy};

/// Pick an embedder from the settings. `QBANK_USE_FAKE_EMBEDDINGS=1`
/// forces the fake regardless of configuration. Without that and
/// without `use_fake`, a missing endpoint is a configuration error:
/// hash-based rankings must never silently stand in for the real
/// model.
pub fn default_embedder(settings: &EmbeddingSettings) -> Result<Box<dyn QueryEmbedder>> {
    let force_fake = std::env::var("QBANK_USE_FAKE_EMBEDDINGS")
        .ok()
        .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
        .unwrap_or(false);
    if force_fake || settings.use_fake {
        info!(dim = settings.dim, "using fake embedder");
        return Ok(Box::new(FakeEmbedder::new(settings.dim)));
    }
    let endpoint = settings.endpoint.clone().ok_or_else(|| {
        Error::InvalidConfig(
            "no embedding endpoint configured; set [embedding].endpoint or use_fake = true"
                .to_string(),
        )
    })?;
    let token = std::env::var("QBANK_EMBED_TOKEN").ok();
    Ok(Box::new(RemoteEmbedder::new(
        endpoint,
        token,
        settings.dim,
        RetryPolicy {
            max_attempts: settings.max_attempts,
            backoff: std::time::Duration::from_millis(settings.backoff_ms),
        },
    )?))
}
