use super::*;

#[test]
fn test_empty_text_returns_no_keywords() {
    let extractor = KeywordExtractor::english();

    assert!(extractor.extract("", 0, DEFAULT_MIN_LENGTH).is_empty());
    assert!(extractor.extract("   \t\n", 0, DEFAULT_MIN_LENGTH).is_empty());
}

#[test]
fn test_normalizes_special_characters_before_tokenizing() {
    let extractor = KeywordExtractor::english();

    let result = extractor.extract("Hello—world!!!", 0, DEFAULT_MIN_LENGTH);

    assert_eq!(result, vec!["hello", "world"]);
}

#[test]
fn test_filters_stopwords_short_tokens_and_digits() {
    let extractor = KeywordExtractor::english();

    let result = extractor.extract(
        "The cat and the dog met 42 times at an old mill",
        0,
        DEFAULT_MIN_LENGTH,
    );

    assert!(!result.contains(&"the".to_string()), "stopword kept: the");
    assert!(!result.contains(&"and".to_string()), "stopword kept: and");
    assert!(!result.contains(&"at".to_string()), "short token kept: at");
    assert!(!result.contains(&"42".to_string()), "numeric token kept: 42");
    assert!(result.contains(&"cat".to_string()));
    assert!(result.contains(&"dog".to_string()));
    assert!(result.contains(&"mill".to_string()));
}

#[test]
fn test_ranks_by_descending_frequency() {
    let extractor = KeywordExtractor::english();

    let result = extractor.extract(
        "rust rust rust tokio tokio serde",
        0,
        DEFAULT_MIN_LENGTH,
    );

    assert_eq!(result, vec!["rust", "tokio", "serde"]);
}

#[test]
fn test_frequency_ties_keep_first_occurrence_order() {
    let extractor = KeywordExtractor::english();

    let result = extractor.extract(
        "zebra apple zebra apple mango mango",
        0,
        DEFAULT_MIN_LENGTH,
    );

    // All three occur twice; input order decides.
    assert_eq!(result, vec!["zebra", "apple", "mango"]);
}

#[test]
fn test_max_words_caps_the_result() {
    let extractor = KeywordExtractor::english();

    let result = extractor.extract("alpha beta gamma delta epsilon", 2, DEFAULT_MIN_LENGTH);

    assert_eq!(result.len(), 2);
}

#[test]
fn test_max_words_zero_means_no_limit() {
    let extractor = KeywordExtractor::english();

    let result = extractor.extract("alpha beta gamma delta epsilon", 0, DEFAULT_MIN_LENGTH);

    assert_eq!(result.len(), 5);
}

#[test]
fn test_unsupported_language_is_rejected() {
    let config = StopwordConfig::builtin();

    let err = KeywordExtractor::new(&config, "xx").unwrap_err();

    match err {
        KeywordError::UnsupportedLanguage { language } => assert_eq!(language, "xx"),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_language_code_is_case_insensitive() {
    let config = StopwordConfig::builtin();

    let extractor = KeywordExtractor::new(&config, " EN ").expect("should accept EN");

    assert_eq!(extractor.language(), "en");
}

#[test]
fn test_builtin_languages_extract_relevant_words() {
    let config = StopwordConfig::builtin();

    let cases = [
        (
            "en",
            "Rust 1.92 introduces new features and best practices for modern web development.",
            vec!["rust", "introduces", "features", "development"],
        ),
        (
            "es",
            "Rust 1.92 introduce nuevas características para el desarrollo web moderno.",
            vec!["rust", "introduce", "nuevas", "desarrollo"],
        ),
        (
            "nl",
            "Rust 1.92 biedt nieuwe mogelijkheden voor moderne webapplicaties.",
            vec!["rust", "biedt", "nieuwe", "webapplicaties"],
        ),
    ];

    for (language, text, expected) in cases {
        let extractor = KeywordExtractor::new(&config, language).expect("builtin language");
        let result = extractor.extract(text, DEFAULT_MAX_WORDS, DEFAULT_MIN_LENGTH);

        for word in expected {
            assert!(
                result.contains(&word.to_string()),
                "expected '{word}' in keywords for '{language}', got {result:?}"
            );
        }
    }
}

#[test]
fn test_stopword_config_from_json() {
    let config = StopwordConfig::from_json_str(r#"{"DE": ["Der", "die", "das", " "]}"#)
        .expect("valid document");

    assert!(config.supports("de"));
    let words = config.words("de").expect("de configured");
    assert!(words.contains("der"), "keys and words should be lowercased");
    assert_eq!(words.len(), 3, "blank words should be dropped");
}

#[test]
fn test_stopword_config_rejects_invalid_json() {
    let err = StopwordConfig::from_json_str("not json").unwrap_err();

    assert!(matches!(
        err,
        KeywordError::InvalidStopwordDocument { .. }
    ));
}

#[test]
fn test_min_length_counts_characters_not_bytes() {
    let extractor = KeywordExtractor::english();

    // "café" is 4 characters but 5 bytes.
    let result = extractor.extract("café café visit", 0, 4);

    assert_eq!(result, vec!["café", "visit"]);
}
