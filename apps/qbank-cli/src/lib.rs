//! Shared startup plumbing for the qbank binaries.

use std::sync::Arc;

use anyhow::Result;
use tracing_subscriber::EnvFilter;

use qbank_core::config::Settings;
use qbank_corpus::CorpusSet;

pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();
}

/// Load settings and every configured corpus. Fails fast on a
/// malformed corpus file; nothing is served from a broken load.
pub fn bootstrap() -> Result<(Settings, Arc<CorpusSet>)> {
    let settings = Settings::load()?;
    let corpora = Arc::new(CorpusSet::load(&settings)?);
    Ok((settings, corpora))
}

/// The original service silently fell back to its default question
/// bank for unknown subjects; the CLI keeps that behavior but says so.
pub fn resolve_subject<'a>(settings: &'a Settings, corpora: &CorpusSet, requested: &'a str) -> &'a str {
    if corpora.contains(requested) {
        requested
    } else {
        eprintln!(
            "⚠️  Unknown subject '{}', falling back to '{}'",
            requested, settings.default_subject
        );
        &settings.default_subject
    }
}
