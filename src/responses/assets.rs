// responses/assets.rs
use crate::errors::{ResultResp, ServerError};
use astra::{Body, ResponseBuilder};

pub const APP_CSS: &str = include_str!("../../static/app.css");
pub const APP_JS: &str = include_str!("../../static/app.js");

/// Serves one of the compiled-in static files.
pub fn asset_response(path: &str) -> ResultResp {
    let (content_type, body) = match path {
        "/static/app.css" => ("text/css; charset=utf-8", APP_CSS),
        "/static/app.js" => ("application/javascript; charset=utf-8", APP_JS),
        _ => return Err(ServerError::NotFound),
    };

    ResponseBuilder::new()
        .status(200)
        .header("Content-Type", content_type)
        .header("Cache-Control", "public, max-age=3600")
        .body(Body::from(body))
        .map_err(|_| ServerError::InternalError)
}
