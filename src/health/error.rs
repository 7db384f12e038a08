// src/health/error.rs

/// Ways a single liveness check can fail.
///
/// The checker turns every variant into a `CheckResult::Failure` whose reason
/// is this type's `Display` text.
#[derive(Debug, thiserror::Error)]
pub enum CheckError {
    #[error("Invalid target URL {url}: {source}")]
    InvalidTarget {
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error("Invalid request method: {0}")]
    InvalidMethod(String),

    #[error("Failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("Connection error: {0}")]
    Connection(#[source] reqwest::Error),

    #[error("Request timeout: {0}")]
    Timeout(#[source] reqwest::Error),

    #[error("Failed to read response body: {0}")]
    Body(#[source] reqwest::Error),
}

impl CheckError {
    /// Classify a transport error raised while sending the request.
    pub(crate) fn from_send(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            CheckError::Timeout(err)
        } else {
            CheckError::Connection(err)
        }
    }

    /// Classify a transport error raised while streaming the body.
    pub(crate) fn from_body(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            CheckError::Timeout(err)
        } else {
            CheckError::Body(err)
        }
    }
}
