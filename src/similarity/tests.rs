use super::*;

const EPSILON: f64 = 1e-9;

#[test]
fn test_identical_texts_score_one() {
    let text = "The quick brown fox jumps over the lazy dog";
    let similarity = compare(text, text);
    assert!(
        (similarity - 1.0).abs() < EPSILON,
        "identical texts should score ~1.0, got {similarity}"
    );
}

#[test]
fn test_scores_are_bounded_and_symmetric() {
    let pairs = [
        ("breaking news about rust", "breaking news about go"),
        ("completely unrelated words", "nothing shared here at all"),
        ("a b c", "c b a"),
        ("repeated repeated repeated", "repeated once"),
    ];

    for (a, b) in pairs {
        let ab = compare(a, b);
        let ba = compare(b, a);

        assert!((0.0..=1.0).contains(&ab), "score out of bounds: {ab}");
        assert!(
            (ab - ba).abs() < EPSILON,
            "compare should be symmetric: {ab} vs {ba}"
        );
    }
}

#[test]
fn test_empty_texts_score_zero() {
    assert_eq!(compare("some text", ""), 0.0);
    assert_eq!(compare("", "some text"), 0.0);
    assert_eq!(compare("", ""), 0.0);
}

#[test]
fn test_punctuation_only_text_scores_zero() {
    assert_eq!(compare("?!...,;", "real words here"), 0.0);
}

#[test]
fn test_normalization_ignores_case_and_punctuation() {
    let similarity = compare("Hello, World!", "hello world");
    assert!(
        (similarity - 1.0).abs() < EPSILON,
        "case and punctuation should not matter, got {similarity}"
    );
}

#[test]
fn test_disjoint_texts_score_zero() {
    let similarity = compare("alpha beta gamma", "delta epsilon zeta");
    assert!(
        similarity.abs() < EPSILON,
        "no shared terms should score ~0.0, got {similarity}"
    );
}

#[test]
fn test_partial_overlap_scores_between_bounds() {
    let similarity = compare("rust memory safety", "rust thread safety");
    assert!(
        similarity > 0.0 && similarity < 1.0,
        "partial overlap should score strictly between 0 and 1, got {similarity}"
    );
}

#[test]
fn test_term_frequency_weighting() {
    // Both candidates share one term with the original, but the first
    // repeats it, shifting its frequency vector away from the original's.
    let original = "rust safety";
    let skewed = compare(original, "rust rust rust rust");
    let balanced = compare(original, "rust safety");

    assert!(
        skewed < balanced,
        "frequency skew should lower the score: {skewed} vs {balanced}"
    );
}

#[test]
fn test_compare_many_preserves_input_order() {
    let original = "rust web framework";
    let candidates = [
        "rust web framework",
        "python web framework",
        "cooking recipes",
    ];

    let scores = compare_many(original, &candidates);

    assert_eq!(scores.len(), 3);
    assert!((scores[0] - 1.0).abs() < EPSILON);
    assert!(scores[1] > scores[2], "scores must stay in input order");
}

#[test]
fn test_compare_many_empty_candidates() {
    let scores = compare_many("anything", &[]);
    assert!(scores.is_empty());
}
