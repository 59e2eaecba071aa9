//! Configuration loader.
//!
//! Merges `config.toml`, an environment-specific `config.<env>.toml`
//! selected by `RUST_ENV`, and `QBANK_*` environment variables, then
//! extracts the result into a typed [`Settings`] struct.

use figment::{
    providers::{Env, Format, Toml},
    Figment,
};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::env;

use crate::error::{Error, Result};

/// Top-level settings for the retrieval service.
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    /// Subject used when a caller names a corpus that is not loaded.
    #[serde(default = "default_subject")]
    pub default_subject: String,
    /// Subject name -> corpus JSON path.
    #[serde(default)]
    pub corpora: BTreeMap<String, String>,
    /// Sample-mode draws uniformly from the top `top_k` ranked candidates.
    #[serde(default = "default_top_k")]
    pub top_k: usize,
    #[serde(default)]
    pub embedding: EmbeddingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EmbeddingSettings {
    /// Remote predict endpoint. When absent the fake embedder is used.
    #[serde(default)]
    pub endpoint: Option<String>,
    #[serde(default = "default_dim")]
    pub dim: usize,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    #[serde(default = "default_max_attempts")]
    pub max_attempts: u32,
    #[serde(default = "default_backoff_ms")]
    pub backoff_ms: u64,
    /// Force the deterministic offline embedder regardless of endpoint.
    #[serde(default)]
    pub use_fake: bool,
}

impl Default for EmbeddingSettings {
    fn default() -> Self {
        Self {
            endpoint: None,
            dim: default_dim(),
            timeout_secs: default_timeout_secs(),
            max_attempts: default_max_attempts(),
            backoff_ms: default_backoff_ms(),
            use_fake: false,
        }
    }
}

fn default_subject() -> String {
    "dsa".to_string()
}

fn default_top_k() -> usize {
    10
}

fn default_dim() -> usize {
    768
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_max_attempts() -> u32 {
    3
}

fn default_backoff_ms() -> u64 {
    1000
}

impl Settings {
    pub fn load() -> Result<Self> {
        let env_name = env::var("RUST_ENV").unwrap_or_else(|_| "dev".to_string());

        let mut figment = Figment::new().merge(Toml::file("config.toml"));
        match env_name.as_str() {
            "dev" | "development" => figment = figment.merge(Toml::file("config.dev.toml")),
            "prod" | "production" => figment = figment.merge(Toml::file("config.prod.toml")),
            "test" | "testing" => figment = figment.merge(Toml::file("config.test.toml")),
            _ => {}
        }
        figment = figment.merge(Env::prefixed("QBANK_").split("__"));

        let settings: Settings = figment
            .extract()
            .map_err(|e| Error::InvalidConfig(e.to_string()))?;
        settings.validate()?;
        Ok(settings)
    }

    fn validate(&self) -> Result<()> {
        if self.corpora.is_empty() {
            return Err(Error::InvalidConfig(
                "no corpora configured (set [corpora] subject = path)".to_string(),
            ));
        }
        if self.top_k == 0 {
            return Err(Error::InvalidConfig("top_k must be at least 1".to_string()));
        }
        if !self.corpora.contains_key(&self.default_subject) {
            return Err(Error::InvalidConfig(format!(
                "default_subject '{}' has no configured corpus",
                self.default_subject
            )));
        }
        Ok(())
    }
}
