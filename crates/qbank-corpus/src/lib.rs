#![deny(warnings)]
#![deny(dead_code)]
#![deny(unused_variables)]
#![deny(unused_imports)]

//! Immutable in-memory question corpora.
//!
//! Each subject's corpus is parsed from JSON once at startup,
//! normalized into the canonical [`qbank_core::types::QuestionRecord`]
//! shape, validated, and never mutated afterwards. Concurrent reads
//! need no coordination.

pub mod load;
pub mod store;

pub use store::{Corpus, CorpusSet};
