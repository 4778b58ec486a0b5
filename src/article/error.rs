use thiserror::Error;

#[derive(Debug, Error)]
/// Errors from the content-source boundary.
pub enum ContentError {
    /// The content could not be downloaded.
    #[error("failed to fetch content from '{url}': {message}")]
    Fetch {
        /// Requested URL.
        url: String,
        /// Error message.
        message: String,
    },

    /// The downloaded content is empty or unusable.
    #[error("the downloaded content appears to be empty or corrupted")]
    Corrupted,
}

#[derive(Debug, Error)]
/// Errors from article intake.
pub enum IntakeError {
    /// Content could not be fetched or was unusable.
    #[error(transparent)]
    Content(#[from] ContentError),

    /// The persistence sink rejected the new article.
    #[error("failed to persist article: {0}")]
    Persistence(#[source] anyhow::Error),
}
