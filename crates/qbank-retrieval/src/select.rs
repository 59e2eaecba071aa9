//! Top-k sampling over ranked candidates.
//!
//! Sample mode deliberately avoids always returning the single best
//! match: a uniform draw from the top k keeps repeated requests with
//! the same filters from handing back the same question every time
//! while still biasing toward relevant results. There is no seed
//! contract; callers that need reproducibility inject their own rng.

use rand::Rng;

use crate::rank::RankedCandidate;

pub const DEFAULT_TOP_K: usize = 10;

/// Uniform draw from the first `min(top_k, len)` candidates.
/// `None` only when `ranked` is empty.
pub fn sample_top<'a, 'r, R: Rng + ?Sized>(
    ranked: &'r [RankedCandidate<'a>],
    top_k: usize,
    rng: &mut R,
) -> Option<&'r RankedCandidate<'a>> {
    if ranked.is_empty() {
        return None;
    }
    let k = top_k.max(1).min(ranked.len());
    Some(&ranked[rng.gen_range(0..k)])
}
