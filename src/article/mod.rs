//! Article records, the content-source boundary and article intake.

pub mod error;
pub mod intake;

#[cfg(any(test, feature = "mock"))]
pub mod mock;


pub use error::{ContentError, IntakeError};
pub use intake::ArticleIntake;

#[cfg(any(test, feature = "mock"))]
pub use mock::MockContentSource;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

/// A submitted article under verification.
///
/// Owned by the calling system; the verification core reads `title` and
/// `content` and writes `verified_at`/`errored_at`.
#[derive(Debug, Clone, Serialize)]
pub struct Article {
    pub id: Uuid,
    pub title: String,
    pub url: String,
    /// Plain-text body, when the caller extracted one.
    pub content: Option<String>,
    /// Set on a successful verification; cleared on a failed one.
    pub verified_at: Option<DateTime<Utc>>,
    /// Set on a failed verification; cleared on a successful one.
    pub errored_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

impl Article {
    /// Creates an unverified article with a fresh id.
    pub fn new(title: impl Into<String>, url: impl Into<String>, content: Option<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            url: url.into(),
            content,
            verified_at: None,
            errored_at: None,
            created_at: Utc::now(),
        }
    }

    /// Text the article is compared by: the content when present and
    /// non-blank, the title otherwise.
    pub fn comparison_text(&self) -> &str {
        match &self.content {
            Some(content) if !content.trim().is_empty() => content,
            _ => &self.title,
        }
    }
}

#[async_trait]
/// Source of an article's plain-text content.
///
/// The fetching and HTML-to-text mechanics belong to the implementor; the
/// core only requires that the returned text is already clean.
pub trait ContentSource: Send + Sync {
    /// Downloads and returns the plain-text content behind `url`.
    async fn fetch(&self, url: &str) -> Result<String, ContentError>;
}
