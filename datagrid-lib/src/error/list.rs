//! List endpoint errors

/// Errors raised while building list requests or parsing list responses.
#[derive(Debug, thiserror::Error)]
pub enum ListError {
    /// The backend answered with `success: false`.
    #[error("API error: {message}")]
    Api {
        /// Message from the response envelope.
        message: String,
    },

    /// The response body could not be parsed.
    #[error("Response parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// A record in the response was malformed.
    #[error(transparent)]
    Record(#[from] super::RecordError),

    /// The endpoint URL could not be built.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

impl ListError {
    /// Creates an API error from an envelope message.
    pub fn api(message: impl Into<String>) -> Self {
        Self::Api {
            message: message.into(),
        }
    }
}
