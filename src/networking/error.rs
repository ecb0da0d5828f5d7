//! Error types for the move service
//!
//! A malformed reply is its own kind, separate from transport and status
//! failures, so callers can tell "the service answered nonsense" apart from
//! "the service could not be reached".

/// Errors from talking to the remote move service
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    /// Connection, TLS, or body-read failure
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Service answered with a non-success status
    #[error("Service returned status {status}: {body}")]
    Status { status: u16, body: String },

    /// Service answered 2xx but the body does not fit the reply contract
    #[error("Malformed reply: {reason}")]
    MalformedReply { reason: String },

    /// Endpoint URL could not be built from configuration
    #[error("Invalid service URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// No tokio runtime to run requests on
    #[error("No async runtime for move service requests: {0}")]
    NoRuntime(#[from] tokio::runtime::TryCurrentError),
}

impl ServiceError {
    pub fn kind(&self) -> FailureKind {
        match self {
            ServiceError::Transport(_) => FailureKind::Transport,
            ServiceError::Status { .. } => FailureKind::Status,
            ServiceError::MalformedReply { .. } => FailureKind::MalformedReply,
            ServiceError::InvalidUrl(_) => FailureKind::InvalidUrl,
            ServiceError::NoRuntime(_) => FailureKind::NoRuntime,
        }
    }
}

/// Coarse failure classification reported by the session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FailureKind {
    Transport,
    Status,
    MalformedReply,
    InvalidUrl,
    NoRuntime,
    /// Reply was well-formed but the game model refused its position
    RejectedPosition,
}

/// Result type alias for service operations
pub type ServiceResult<T> = Result<T, ServiceError>;
