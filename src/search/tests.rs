use std::sync::Arc;

use super::mock::{MockSearchProvider, candidate};
use super::*;

fn transport_error(provider: &'static str, message: &str) -> SearchProviderError {
    SearchProviderError::Transport {
        provider,
        message: message.to_string(),
    }
}

#[tokio::test]
async fn test_primary_results_skip_the_fallback() {
    let primary = Arc::new(MockSearchProvider::new("primary"));
    let fallback = Arc::new(MockSearchProvider::new("fallback"));
    primary.push_results(vec![candidate("a", "first"), candidate("b", "second")]);

    let orchestrator = SearchOrchestrator::with_fallback(primary.clone(), fallback.clone());
    let results = orchestrator.search("query").await.expect("primary result");

    assert_eq!(results.len(), 2);
    assert_eq!(primary.calls(), 1);
    assert_eq!(fallback.calls(), 0, "fallback must never be invoked");
}

#[tokio::test]
async fn test_empty_primary_defers_to_fallback() {
    let primary = Arc::new(MockSearchProvider::new("primary"));
    let fallback = Arc::new(MockSearchProvider::new("fallback"));
    primary.push_results(Vec::new());
    fallback.push_results(vec![candidate("c", "from fallback")]);

    let orchestrator = SearchOrchestrator::with_fallback(primary.clone(), fallback.clone());
    let results = orchestrator.search("query").await.expect("fallback result");

    assert_eq!(results.len(), 1);
    assert_eq!(results[0].title, "c");
    assert_eq!(fallback.calls(), 1);
}

#[tokio::test]
async fn test_empty_fallback_result_is_returned_as_is() {
    let primary = Arc::new(MockSearchProvider::new("primary"));
    let fallback = Arc::new(MockSearchProvider::new("fallback"));
    primary.push_results(Vec::new());
    fallback.push_results(Vec::new());

    let orchestrator = SearchOrchestrator::with_fallback(primary, fallback.clone());
    let results = orchestrator.search("query").await.expect("empty is valid");

    assert!(results.is_empty());
    assert_eq!(fallback.calls(), 1);
}

#[tokio::test]
async fn test_empty_primary_without_fallback_returns_empty() {
    let primary = Arc::new(MockSearchProvider::new("primary"));
    primary.push_results(Vec::new());

    let orchestrator = SearchOrchestrator::new(primary.clone());
    let results = orchestrator.search("query").await.expect("empty is valid");

    assert!(results.is_empty());
    assert_eq!(primary.calls(), 1);
}

#[tokio::test]
async fn test_failed_primary_recovers_through_fallback() {
    let primary = Arc::new(MockSearchProvider::new("primary"));
    let fallback = Arc::new(MockSearchProvider::new("fallback"));
    primary.push_error(transport_error("primary", "connection refused"));
    fallback.push_results(vec![candidate("d", "rescued")]);

    let orchestrator = SearchOrchestrator::with_fallback(primary, fallback);
    let results = orchestrator.search("query").await.expect("fallback result");

    assert_eq!(results.len(), 1);
    assert_eq!(results[0].title, "d");
}

#[tokio::test]
async fn test_both_providers_failing_propagates_the_primary_error() {
    let primary = Arc::new(MockSearchProvider::new("primary"));
    let fallback = Arc::new(MockSearchProvider::new("fallback"));
    primary.push_error(transport_error("primary", "primary exploded"));
    fallback.push_error(transport_error("fallback", "fallback exploded"));

    let orchestrator = SearchOrchestrator::with_fallback(primary, fallback.clone());
    let err = orchestrator.search("query").await.unwrap_err();

    assert!(
        err.to_string().contains("primary exploded"),
        "the primary's error must win, got: {err}"
    );
    assert_eq!(fallback.calls(), 1, "fallback still gets its attempt");
}

#[tokio::test]
async fn test_failed_primary_without_fallback_propagates_unchanged() {
    let primary = Arc::new(MockSearchProvider::new("primary"));
    primary.push_error(transport_error("primary", "nobody home"));

    let orchestrator = SearchOrchestrator::new(primary);
    let err = orchestrator.search("query").await.unwrap_err();

    assert!(err.to_string().contains("nobody home"));
}

#[tokio::test]
async fn test_fallback_error_after_empty_primary_propagates() {
    let primary = Arc::new(MockSearchProvider::new("primary"));
    let fallback = Arc::new(MockSearchProvider::new("fallback"));
    primary.push_results(Vec::new());
    fallback.push_error(transport_error("fallback", "quota exceeded"));

    let orchestrator = SearchOrchestrator::with_fallback(primary, fallback);
    let err = orchestrator.search("query").await.unwrap_err();

    assert!(err.to_string().contains("quota exceeded"));
}

#[test]
fn test_orchestrator_reports_its_configuration() {
    let primary = Arc::new(MockSearchProvider::new("primary"));
    let fallback = Arc::new(MockSearchProvider::new("fallback"));

    let solo = SearchOrchestrator::new(primary.clone());
    assert!(!solo.has_fallback());
    assert_eq!(solo.primary_name(), "primary");

    let paired = SearchOrchestrator::with_fallback(primary, fallback);
    assert!(paired.has_fallback());
}
