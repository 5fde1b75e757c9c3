use thiserror::Error;

/// Failures talking to the remote pricing service. Kept apart from the
/// estimator, which cannot fail.
#[derive(Debug, Error)]
pub enum RemoteError {
    #[error("Network error: {0}")]
    Network(String),
    #[error("Pricing service returned {status}: {body}")]
    Status { status: u16, body: String },
    #[error("Unexpected response shape: {0}")]
    Decode(String),
}

impl RemoteError {
    /// Whether asking again might succeed.
    pub fn is_retryable(&self) -> bool {
        match self {
            RemoteError::Network(_) => true,
            RemoteError::Status { status, .. } => *status >= 500 || *status == 429,
            RemoteError::Decode(_) => false,
        }
    }
}
