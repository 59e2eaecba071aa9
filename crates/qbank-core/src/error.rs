use thiserror::Error;

/// Retrieval-core error taxonomy.
///
/// `NoMatch` and `NotFound` are expected outcomes the boundary layer
/// translates into "try different filters" / 404-style messages;
/// `Embedding` is a hard failure of a single request; `MalformedCorpus`
/// only occurs at startup.
#[derive(Debug, Error)]
pub enum Error {
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("no questions match the requested filters")]
    NoMatch,

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Embedding failed: {0}")]
    Embedding(String),

    #[error("Malformed corpus: {0}")]
    MalformedCorpus(String),
}

pub type Result<T> = std::result::Result<T, Error>;
