use crate::config::AppConfig;
use crate::state::AppState;
use astra::{Body, Request, Response};
use http::Method;
use std::io::Read;
use std::time::Duration;

/// Local estimator, default config.
pub fn test_state() -> AppState {
    AppState::new(AppConfig::default()).expect("Failed to build app state")
}

/// Remote valuer pointed at a port nothing listens on.
pub fn unreachable_remote_state() -> AppState {
    let port = std::net::TcpListener::bind("127.0.0.1:0")
        .and_then(|l| l.local_addr())
        .expect("Failed to reserve a port")
        .port();

    AppState::new(AppConfig {
        use_remote: true,
        api_base: format!("http://127.0.0.1:{port}"),
        remote_timeout: Duration::from_secs(2),
        ..AppConfig::default()
    })
    .expect("Failed to build app state")
}

pub fn get(uri: &str) -> Request {
    http::Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub fn post_form(uri: &str, body: &str) -> Request {
    http::Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("Content-Type", "application/x-www-form-urlencoded")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub fn post_json(uri: &str, body: &str) -> Request {
    http::Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("Content-Type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub fn body_string(resp: Response) -> String {
    let mut body = String::new();
    resp.into_body()
        .reader()
        .read_to_string(&mut body)
        .expect("Failed to read body");
    body
}

pub fn header<'a>(resp: &'a Response, name: &str) -> &'a str {
    resp.headers()
        .get(name)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
}
