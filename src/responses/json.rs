// responses/json.rs
use crate::errors::{ResultResp, ServerError};
use astra::{Body, Response, ResponseBuilder};
use serde::Serialize;
use serde_json::json;

pub fn json_response<T: Serialize>(status: u16, value: &T) -> ResultResp {
    let body = serde_json::to_vec(value).map_err(|_| ServerError::InternalError)?;

    ResponseBuilder::new()
        .status(status)
        .header("Content-Type", "application/json")
        .body(Body::from(body))
        .map_err(|_| ServerError::InternalError)
}

/// `{"error": "...", "retryable": bool}` with the error's status.
pub fn json_error_response(err: &ServerError) -> Response {
    let retryable = matches!(err, ServerError::Remote(e) if e.is_retryable());
    let body = json!({ "error": err.to_string(), "retryable": retryable }).to_string();

    ResponseBuilder::new()
        .status(err.status())
        .header("Content-Type", "application/json")
        .body(Body::from(body))
        .unwrap_or_else(|_| Response::new(Body::from("Internal Server Error")))
}
