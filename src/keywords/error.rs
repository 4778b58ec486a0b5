use thiserror::Error;

#[derive(Debug, Error)]
/// Errors from keyword extraction setup.
pub enum KeywordError {
    /// The requested language has no configured stopword list.
    #[error("language '{language}' is not configured for stopwords")]
    UnsupportedLanguage {
        /// Requested ISO 639-1 code (lowercased).
        language: String,
    },

    /// A stopword document could not be parsed.
    #[error("invalid stopword document: {message}")]
    InvalidStopwordDocument {
        /// Parser error message.
        message: String,
    },
}
