use qbank_core::similarity::cosine_similarity;

const EPS: f32 = 1e-5;

#[test]
fn identical_vectors_score_one() {
    let v = vec![0.3f32, -1.2, 4.5, 0.0, 2.2];
    let s = cosine_similarity(&v, &v);
    assert!((s - 1.0).abs() <= EPS, "self-similarity is ~1 (got {s})");
}

#[test]
fn opposite_vectors_score_minus_one() {
    let a = vec![1.0f32, 2.0, 3.0];
    let b = vec![-1.0f32, -2.0, -3.0];
    let s = cosine_similarity(&a, &b);
    assert!((s + 1.0).abs() <= EPS, "anti-parallel is ~-1 (got {s})");
}

#[test]
fn orthogonal_vectors_score_zero() {
    let a = vec![1.0f32, 0.0];
    let b = vec![0.0f32, 1.0];
    assert!(cosine_similarity(&a, &b).abs() <= EPS);
}

#[test]
fn result_stays_within_unit_interval() {
    let a = vec![0.12f32, 9.4, -3.3, 0.004, 17.0, -0.5];
    let b = vec![5.5f32, -0.2, 1.1, 8.8, -4.0, 0.33];
    let s = cosine_similarity(&a, &b);
    assert!((-1.0 - EPS..=1.0 + EPS).contains(&s), "out of bounds: {s}");
}

#[test]
fn degenerate_inputs_score_zero() {
    let v = vec![1.0f32, 2.0, 3.0];
    assert_eq!(cosine_similarity(&[], &v), 0.0, "empty left");
    assert_eq!(cosine_similarity(&v, &[]), 0.0, "empty right");
    assert_eq!(cosine_similarity(&[], &[]), 0.0, "both empty");
    // Mismatched dimensionality degrades to 0 instead of failing.
    assert_eq!(cosine_similarity(&v, &[1.0, 2.0]), 0.0, "length mismatch");
}

#[test]
fn zero_norm_vector_scores_zero_not_nan() {
    let zero = vec![0.0f32; 4];
    let v = vec![1.0f32, 2.0, 3.0, 4.0];
    let s = cosine_similarity(&zero, &v);
    assert_eq!(s, 0.0);
    assert!(!s.is_nan());
}

#[test]
fn scaling_does_not_change_similarity() {
    let a = vec![0.5f32, 1.5, -2.0];
    let b: Vec<f32> = a.iter().map(|x| x * 40.0).collect();
    let s = cosine_similarity(&a, &b);
    assert!((s - 1.0).abs() <= EPS, "cosine ignores magnitude (got {s})");
}
