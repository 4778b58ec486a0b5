//! Google News search provider, via SerpAPI.

use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use reqwest::Client as HttpClient;
use serde::Deserialize;
use tracing::debug;

use super::error::SearchProviderError;
use super::newsapi::DEFAULT_TIMEOUT;
use super::provider::{CandidateArticle, SearchProvider};

/// SerpAPI search endpoint.
pub const SERP_API_URL: &str = "https://serpapi.com/search.json";

const PROVIDER: &str = "Google News";
const PAGE_SIZE: &str = "50";

/// SerpAPI timestamp format, e.g. `03/01/2024, 12:30 PM, +0000 UTC`.
const SERP_DATE_FORMAT: &str = "%m/%d/%Y, %I:%M %p, %z UTC";

/// Search provider backed by SerpAPI's Google News engine.
pub struct SerpNewsProvider {
    http: HttpClient,
    base_url: String,
    api_key: String,
}

impl SerpNewsProvider {
    /// Creates a provider with the default request timeout.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::with_timeout(api_key, DEFAULT_TIMEOUT)
    }

    /// Creates a provider with a custom request timeout.
    pub fn with_timeout(api_key: impl Into<String>, timeout: Duration) -> Self {
        Self {
            http: HttpClient::builder()
                .timeout(timeout)
                .build()
                .unwrap_or_else(|_| HttpClient::new()),
            base_url: SERP_API_URL.to_string(),
            api_key: api_key.into(),
        }
    }

    /// Overrides the endpoint URL (integration tests point this at a local
    /// server).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}

#[async_trait]
impl SearchProvider for SerpNewsProvider {
    async fn search(&self, query: &str) -> Result<Vec<CandidateArticle>, SearchProviderError> {
        let response = self
            .http
            .get(&self.base_url)
            .query(&[
                ("api_key", self.api_key.as_str()),
                ("q", query),
                ("tbm", "nws"),
                ("num", PAGE_SIZE),
            ])
            .send()
            .await
            .map_err(|e| SearchProviderError::Transport {
                provider: PROVIDER,
                message: e.to_string(),
            })?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| SearchProviderError::Transport {
                provider: PROVIDER,
                message: e.to_string(),
            })?;

        if !status.is_success() {
            return Err(SearchProviderError::Status {
                provider: PROVIDER,
                status: status.as_u16(),
                message: "unexpected status code".to_string(),
            });
        }

        debug!(bytes = body.len(), "received SerpAPI response");
        parse_response(&body)
    }

    fn name(&self) -> &'static str {
        PROVIDER
    }
}

#[derive(Debug, Deserialize)]
struct SerpResponse {
    error: Option<String>,
    news_results: Option<Vec<SerpNewsItem>>,
}

#[derive(Debug, Deserialize)]
struct SerpNewsItem {
    source: Option<String>,
    title: Option<String>,
    snippet: Option<String>,
    link: Option<String>,
    date: Option<String>,
}

fn parse_response(body: &str) -> Result<Vec<CandidateArticle>, SearchProviderError> {
    let payload: SerpResponse =
        serde_json::from_str(body).map_err(|e| SearchProviderError::Malformed {
            provider: PROVIDER,
            message: format!("invalid JSON: {e}"),
        })?;

    if let Some(message) = payload.error {
        return Err(SearchProviderError::Upstream {
            provider: PROVIDER,
            message,
        });
    }

    // A response without news_results means the query matched nothing.
    let Some(items) = payload.news_results else {
        return Ok(Vec::new());
    };

    items.into_iter().map(map_item).collect()
}

fn map_item(item: SerpNewsItem) -> Result<CandidateArticle, SearchProviderError> {
    let raw_date = item.date.ok_or_else(|| SearchProviderError::Malformed {
        provider: PROVIDER,
        message: "news result without date".to_string(),
    })?;

    let published_at = parse_date(&raw_date)?;
    let source = item.source.unwrap_or_default();

    Ok(CandidateArticle {
        // The upstream has no author field; the outlet stands in for it.
        author: source.clone(),
        source,
        title: item.title.unwrap_or_default(),
        description: item.snippet.unwrap_or_default(),
        url: item.link.unwrap_or_default(),
        published_at,
    })
}

fn parse_date(raw: &str) -> Result<DateTime<Utc>, SearchProviderError> {
    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return Ok(parsed.with_timezone(&Utc));
    }

    DateTime::parse_from_str(raw, SERP_DATE_FORMAT)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|_| SearchProviderError::Malformed {
            provider: PROVIDER,
            message: format!("unparseable date '{raw}'"),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    const VALID_BODY: &str = r#"{
        "search_metadata": {"status": "Success"},
        "news_results": [
            {
                "position": 1,
                "source": "Example Times",
                "title": "Rust adoption grows",
                "snippet": "More teams pick Rust",
                "link": "https://example.com/rust-adoption",
                "date": "03/01/2024, 12:30 PM, +0000 UTC"
            },
            {
                "position": 2,
                "title": "Bare result",
                "date": "2024-03-02T08:00:00Z"
            }
        ]
    }"#;

    #[test]
    fn test_parse_valid_response() {
        let articles = parse_response(VALID_BODY).expect("valid body");

        assert_eq!(articles.len(), 2);
        assert_eq!(articles[0].source, "Example Times");
        assert_eq!(articles[0].author, "Example Times");
        assert_eq!(articles[0].description, "More teams pick Rust");
        assert_eq!(
            articles[0].published_at,
            Utc.with_ymd_and_hms(2024, 3, 1, 12, 30, 0).unwrap()
        );
    }

    #[test]
    fn test_missing_optional_fields_default_to_empty() {
        let articles = parse_response(VALID_BODY).expect("valid body");

        assert_eq!(articles[1].source, "");
        assert_eq!(articles[1].author, "");
        assert_eq!(articles[1].description, "");
        assert_eq!(articles[1].url, "");
        assert_eq!(
            articles[1].published_at,
            Utc.with_ymd_and_hms(2024, 3, 2, 8, 0, 0).unwrap()
        );
    }

    #[test]
    fn test_missing_news_results_is_a_valid_empty_result() {
        let body = r#"{"search_metadata": {"status": "Success"}}"#;

        let articles = parse_response(body).expect("no results is valid");

        assert!(articles.is_empty());
    }

    #[test]
    fn test_top_level_error_field_is_an_upstream_error() {
        let body = r#"{"error": "Invalid API key. Your API key should be here."}"#;

        let err = parse_response(body).unwrap_err();

        match err {
            SearchProviderError::Upstream { message, .. } => {
                assert!(message.starts_with("Invalid API key"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_invalid_json_is_malformed() {
        let err = parse_response("{{{").unwrap_err();

        assert!(matches!(err, SearchProviderError::Malformed { .. }));
    }

    #[test]
    fn test_missing_date_aborts_the_whole_mapping() {
        let body = r#"{"news_results": [
            {"title": "ok", "date": "2024-03-02T08:00:00Z"},
            {"title": "broken"}
        ]}"#;

        let err = parse_response(body).unwrap_err();

        assert!(matches!(err, SearchProviderError::Malformed { .. }));
    }

    #[test]
    fn test_relative_date_is_rejected() {
        let body = r#"{"news_results": [{"title": "x", "date": "2 hours ago"}]}"#;

        let err = parse_response(body).unwrap_err();

        assert!(matches!(err, SearchProviderError::Malformed { .. }));
    }
}
