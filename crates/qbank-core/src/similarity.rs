//! Cosine similarity over raw embedding slices.

/// Cosine similarity of two vectors: dot(a, b) / (|a| * |b|).
///
/// Returns 0.0 when either slice is empty or the lengths differ, so a
/// corrupt or missing embedding degrades that record's rank instead of
/// failing the whole request. A zero-norm vector also scores 0.0
/// rather than producing NaN. The result is not clamped to [-1, 1].
#[allow(clippy::cast_possible_truncation)]
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> f32 {
    if a.is_empty() || b.is_empty() || a.len() != b.len() {
        return 0.0;
    }
    let mut dot = 0.0f64;
    let mut norm_a = 0.0f64;
    let mut norm_b = 0.0f64;
    for (x, y) in a.iter().zip(b.iter()) {
        let (x, y) = (f64::from(*x), f64::from(*y));
        dot += x * y;
        norm_a += x * x;
        norm_b += y * y;
    }
    let denom = norm_a.sqrt() * norm_b.sqrt();
    if denom == 0.0 {
        return 0.0;
    }
    (dot / denom) as f32
}
