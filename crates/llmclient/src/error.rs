use std::path::PathBuf;

use thiserror::Error;

/// Errors returned by [`crate::ChatClient`].
///
/// The variants matter to callers: `Auth` can never succeed on retry and
/// should abort a batch run, while `RateLimited` and `Http` are transient.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("authentication rejected (HTTP {status}); check the API key")]
    Auth { status: u16 },

    #[error("rate limited by the API (HTTP 429)")]
    RateLimited,

    #[error("API returned HTTP {status}: {body}")]
    Api { status: u16, body: String },

    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("failed to decode response JSON: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("response contained no text content")]
    EmptyResponse,

    #[error("failed to read image file {}: {source}", path.display())]
    ImageRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ClientError {
    /// Whether another attempt at the same request could succeed.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::RateLimited | Self::Http(_))
    }

    /// Whether the error invalidates the whole run rather than one request.
    pub fn is_fatal(&self) -> bool {
        matches!(self, Self::Auth { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn auth_is_fatal_and_not_retryable() {
        let err = ClientError::Auth { status: 401 };
        assert!(err.is_fatal());
        assert!(!err.is_retryable());
    }

    #[test]
    fn rate_limit_is_retryable_and_not_fatal() {
        let err = ClientError::RateLimited;
        assert!(err.is_retryable());
        assert!(!err.is_fatal());
    }

    #[test]
    fn api_error_is_neither() {
        let err = ClientError::Api {
            status: 500,
            body: "oops".into(),
        };
        assert!(!err.is_retryable());
        assert!(!err.is_fatal());
    }
}
