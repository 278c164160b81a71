use std::time::Duration;

use hyper::StatusCode;

/// The coarse categories failures are reported under
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Configuration,
    Transport,
    Parse,
    Unexpected,
}

#[derive(Debug, thiserror::Error)]
pub enum ResolveError {
    #[error("invalid configuration: {0}")]
    Configuration(String),

    #[error("request failed: {0}")]
    Transport(String),

    #[error("search request to {url} failed: HTTP status {status}")]
    Status {
        status: StatusCode,
        url: String,
    },

    #[error("search request timed out after {after:?}")]
    Timeout {
        after: Duration,
    },

    #[error("failed to parse search response: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("search returned more than {limit} pages")]
    PageLimitExceeded {
        limit: usize,
    },

    #[error("unexpected error: {0}")]
    Unexpected(String),
}
impl ResolveError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ResolveError::Configuration(_) => ErrorKind::Configuration,
            ResolveError::Transport(_) | ResolveError::Status { .. } | ResolveError::Timeout { .. } => ErrorKind::Transport,
            ResolveError::Parse(_) => ErrorKind::Parse,
            ResolveError::PageLimitExceeded { .. } | ResolveError::Unexpected(_) => ErrorKind::Unexpected,
        }
    }
}

impl From<hyper::Error> for ResolveError {
    fn from(e: hyper::Error) -> Self {
        ResolveError::Transport(e.to_string())
    }
}

impl From<hyper::http::Error> for ResolveError {
    fn from(e: hyper::http::Error) -> Self {
        ResolveError::Unexpected(format!("failed to build request: {}", e))
    }
}

impl From<url::ParseError> for ResolveError {
    fn from(e: url::ParseError) -> Self {
        ResolveError::Configuration(format!("invalid repository URL: {}", e))
    }
}
