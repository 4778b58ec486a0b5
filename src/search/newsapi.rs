//! News API (newsapi.org) search provider.

use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use reqwest::Client as HttpClient;
use serde::Deserialize;
use tracing::debug;

use super::error::SearchProviderError;
use super::provider::{CandidateArticle, SearchProvider};

/// Endpoint for full-text article search.
pub const NEWS_API_URL: &str = "https://newsapi.org/v2/everything";

const PROVIDER: &str = "News API";
const PAGE_SIZE: &str = "50";

/// Default per-request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Search provider backed by newsapi.org.
pub struct NewsApiProvider {
    http: HttpClient,
    base_url: String,
    api_key: String,
}

impl NewsApiProvider {
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
            base_url: NEWS_API_URL.to_string(),
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
impl SearchProvider for NewsApiProvider {
    async fn search(&self, query: &str) -> Result<Vec<CandidateArticle>, SearchProviderError> {
        let response = self
            .http
            .get(&self.base_url)
            .query(&[
                ("q", query),
                ("apiKey", self.api_key.as_str()),
                ("pageSize", PAGE_SIZE),
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
            let message = serde_json::from_str::<NewsApiResponse>(&body)
                .ok()
                .and_then(|payload| payload.message)
                .unwrap_or_else(|| "unknown error".to_string());

            return Err(SearchProviderError::Status {
                provider: PROVIDER,
                status: status.as_u16(),
                message,
            });
        }

        debug!(bytes = body.len(), "received News API response");
        parse_response(&body)
    }

    fn name(&self) -> &'static str {
        PROVIDER
    }
}

#[derive(Debug, Deserialize)]
struct NewsApiResponse {
    status: Option<String>,
    message: Option<String>,
    articles: Option<Vec<NewsApiArticle>>,
}

#[derive(Debug, Deserialize)]
struct NewsApiArticle {
    source: Option<NewsApiSource>,
    author: Option<String>,
    title: Option<String>,
    description: Option<String>,
    url: Option<String>,
    #[serde(rename = "publishedAt")]
    published_at: Option<String>,
}

#[derive(Debug, Deserialize)]
struct NewsApiSource {
    name: Option<String>,
}

fn parse_response(body: &str) -> Result<Vec<CandidateArticle>, SearchProviderError> {
    let payload: NewsApiResponse =
        serde_json::from_str(body).map_err(|e| SearchProviderError::Malformed {
            provider: PROVIDER,
            message: format!("invalid JSON: {e}"),
        })?;

    if payload.status.as_deref() != Some("ok") {
        let message = payload
            .message
            .unwrap_or_else(|| "unknown error".to_string());
        return Err(SearchProviderError::Upstream {
            provider: PROVIDER,
            message,
        });
    }

    let articles = payload
        .articles
        .ok_or_else(|| SearchProviderError::Malformed {
            provider: PROVIDER,
            message: "missing articles field".to_string(),
        })?;

    articles.into_iter().map(map_article).collect()
}

fn map_article(item: NewsApiArticle) -> Result<CandidateArticle, SearchProviderError> {
    let raw_date = item
        .published_at
        .ok_or_else(|| SearchProviderError::Malformed {
            provider: PROVIDER,
            message: "article without publishedAt".to_string(),
        })?;

    let published_at = parse_published_at(&raw_date)?;

    Ok(CandidateArticle {
        source: item.source.and_then(|s| s.name).unwrap_or_default(),
        author: item.author.unwrap_or_default(),
        title: item.title.unwrap_or_default(),
        description: item.description.unwrap_or_default(),
        url: item.url.unwrap_or_default(),
        published_at,
    })
}

fn parse_published_at(raw: &str) -> Result<DateTime<Utc>, SearchProviderError> {
    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|_| SearchProviderError::Malformed {
            provider: PROVIDER,
            message: format!("unparseable publishedAt '{raw}'"),
        })
}
