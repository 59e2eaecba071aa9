#![deny(warnings)]
#![deny(dead_code)]
#![deny(unused_variables)]
#![deny(unused_imports)]

//! Semantic retrieval over an immutable question corpus: categorical
//! filtering, brute-force cosine ranking, and top-k sampling.

pub mod engine;
pub mod filter;
pub mod rank;
pub mod select;

pub use engine::{RetrievalEngine, SearchRequest};
pub use filter::Filters;
pub use rank::RankedCandidate;
