use thiserror::Error;

#[derive(Debug, Error)]
/// Errors raised by search providers.
pub enum SearchProviderError {
    /// The request never produced a usable response (connect failure,
    /// timeout, body read error).
    #[error("failed to reach {provider}: {message}")]
    Transport {
        /// Provider name.
        provider: &'static str,
        /// Error message.
        message: String,
    },

    /// The backend answered with a non-success status code.
    #[error("{provider} returned status {status}: {message}")]
    Status {
        /// Provider name.
        provider: &'static str,
        /// HTTP status code.
        status: u16,
        /// Upstream message, when the body carried one.
        message: String,
    },

    /// The backend reported an application-level error in its payload.
    #[error("{provider} error: {message}")]
    Upstream {
        /// Provider name.
        provider: &'static str,
        /// Upstream error message.
        message: String,
    },

    /// The response body did not match the expected shape.
    #[error("malformed response from {provider}: {message}")]
    Malformed {
        /// Provider name.
        provider: &'static str,
        /// What was wrong.
        message: String,
    },
}
