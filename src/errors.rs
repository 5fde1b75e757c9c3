use crate::remote::RemoteError;
use astra::Response;
// errors.rs
use thiserror::Error;

/// Errors originating from either the server logic
/// (routing, bad input, etc.) or downstream layers (pricing service, XLSX).
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("Not Found")]
    NotFound,
    #[error("Method Not Allowed")]
    MethodNotAllowed,
    #[error("Bad Request: {0}")]
    BadRequest(String),
    #[error("Valuation service error: {0}")]
    Remote(#[from] RemoteError),
    #[error("Spreadsheet Error: {0}")]
    XlsxError(String),
    #[error("Internal Server Error")]
    InternalError,
}

impl ServerError {
    pub fn status(&self) -> u16 {
        match self {
            ServerError::NotFound => 404,
            ServerError::MethodNotAllowed => 405,
            ServerError::BadRequest(_) => 400,
            ServerError::Remote(e) if e.is_retryable() => 503,
            ServerError::Remote(_) => 502,
            ServerError::XlsxError(_) | ServerError::InternalError => 500,
        }
    }
}

// Type alias commonly used by route handlers.
pub type ResultResp = Result<Response, ServerError>;
