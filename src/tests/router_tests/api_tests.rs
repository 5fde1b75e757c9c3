// src/tests/router_tests/api_tests.rs
use crate::domain::history::MAX_POINT_COUNT;
use crate::router::handle;
use crate::tests::utils::{body_string, get, header, post_json, test_state};
use serde_json::Value;

fn json_of(resp: astra::Response) -> Value {
    serde_json::from_str(&body_string(resp)).expect("Body is not JSON")
}

#[test]
fn history_ends_at_price() {
    let state = test_state();

    let resp = handle(get("/api/history?price=300000&points=12"), &state).expect("Handler failed");
    assert_eq!(resp.status(), 200);
    assert_eq!(header(&resp, "Content-Type"), "application/json");

    let json = json_of(resp);
    let points = json["points"].as_array().unwrap();
    assert_eq!(points.len(), 12);
    assert_eq!(points[11].as_f64(), Some(300_000.0));
    assert_eq!(json["labels"][0], "JAN");
    assert_eq!(json["labels"][11], "DEC");
}

#[test]
fn history_defaults_and_caps_point_count() {
    let state = test_state();

    let default = json_of(handle(get("/api/history?price=250000"), &state).unwrap());
    assert_eq!(default["points"].as_array().unwrap().len(), 12);

    let capped = json_of(handle(get("/api/history?price=250000&points=5000"), &state).unwrap());
    assert_eq!(capped["points"].as_array().unwrap().len(), MAX_POINT_COUNT);

    let empty = json_of(handle(get("/api/history?price=250000&points=0"), &state).unwrap());
    assert!(empty["points"].as_array().unwrap().is_empty());
}

#[test]
fn history_rejects_bad_price() {
    let state = test_state();

    assert_eq!(handle(get("/api/history"), &state).unwrap_err().status(), 400);
    assert_eq!(handle(get("/api/history?price=abc"), &state).unwrap_err().status(), 400);
    assert_eq!(
        handle(get("/api/history?price=1000&points=-3"), &state).unwrap_err().status(),
        400
    );
}

#[test]
fn json_valuation() {
    let state = test_state();
    let body = r#"{"living_area_m2": 100, "zipcode": "98103"}"#;

    let resp = handle(post_json("/api/valuation", body), &state).expect("Handler failed");
    assert_eq!(resp.status(), 200);

    let json = json_of(resp);
    assert_eq!(json["result"]["price_range"]["mid"], 215_000);
    assert_eq!(json["result"]["price_range"]["min"], 207_000);
    assert_eq!(json["result"]["confidence"], "HIGH");
    assert_eq!(json["property"]["zipcode"], "98103");
    assert!(json["id"].as_str().unwrap().starts_with("local-"));
}

#[test]
fn json_valuation_errors_are_json() {
    let state = test_state();

    let resp = handle(post_json("/api/valuation", "{not json"), &state).expect("Handler failed");
    assert_eq!(resp.status(), 400);

    let json = json_of(resp);
    assert_eq!(json["retryable"], false);
    assert!(json["error"].as_str().unwrap().starts_with("Bad Request"));
}

#[test]
fn json_valuation_ignores_unparseable_numbers() {
    let state = test_state();

    let resp = handle(post_json("/api/valuation", r#"{"bedrooms": "abc"}"#), &state)
        .expect("Handler failed");
    assert_eq!(resp.status(), 200);
    assert_eq!(json_of(resp)["property"]["bedroom_count"], 3);
}

#[test]
fn json_valuation_accepts_numeric_strings() {
    let state = test_state();

    let resp = handle(post_json("/api/valuation", r#"{"bedrooms": "4"}"#), &state)
        .expect("Handler failed");
    assert_eq!(resp.status(), 200);
    assert_eq!(json_of(resp)["property"]["bedroom_count"], 4);
}

#[test]
fn json_valuation_accepts_numeric_waterfront() {
    let state = test_state();

    let resp = handle(post_json("/api/valuation", r#"{"waterfront": 1}"#), &state)
        .expect("Handler failed");
    assert_eq!(resp.status(), 200);
    assert_eq!(json_of(resp)["property"]["is_waterfront"], true);
}
