//! Article creation ahead of verification.

use std::sync::Arc;

use tracing::{info, instrument};

use crate::verification::VerificationStore;

use super::error::{ContentError, IntakeError};
use super::{Article, ContentSource};

/// Creates articles from a title and URL, fetching their content first.
///
/// Intake is the precondition gate for verification: an article whose
/// content cannot be fetched, or arrives blank, is rejected here with
/// [`ContentError`] and never reaches the pipeline.
pub struct ArticleIntake {
    source: Arc<dyn ContentSource>,
    store: Arc<dyn VerificationStore>,
}

impl ArticleIntake {
    /// Creates an intake service over a content source and sink.
    pub fn new(source: Arc<dyn ContentSource>, store: Arc<dyn VerificationStore>) -> Self {
        Self { source, store }
    }

    /// Fetches content for `url`, validates it and persists a new article.
    #[instrument(skip(self, title), fields(url = %url))]
    pub async fn create(&self, title: &str, url: &str) -> Result<Article, IntakeError> {
        let title = title.trim();
        let url = url.trim();

        let content = self.source.fetch(url).await?;

        if content.trim().is_empty() {
            return Err(ContentError::Corrupted.into());
        }

        let article = Article::new(title, url, Some(content));

        self.store
            .save_article(&article)
            .await
            .map_err(IntakeError::Persistence)?;

        info!(article_id = %article.id, "article created");
        Ok(article)
    }
}
