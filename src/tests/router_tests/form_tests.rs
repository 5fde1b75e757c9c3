// src/tests/router_tests/form_tests.rs
use crate::errors::ServerError;
use crate::router::handle;
use crate::tests::utils::{body_string, get, header, post_form, test_state};
use http::Method;

#[test]
fn home_renders_property_form() {
    let state = test_state();

    let resp = handle(get("/"), &state).expect("Handler failed");
    assert_eq!(resp.status(), 200);
    assert!(header(&resp, "Content-Type").starts_with("text/html"));

    let body = body_string(resp);
    assert!(body.contains("Property Details"));
    assert!(body.contains("id=\"property-form\""));
    assert!(body.contains("name=\"bedrooms\" value=\"3\""));
    assert!(!body.contains("id=\"nav-back\""));
}

#[test]
fn edit_prefills_previous_answers() {
    let state = test_state();
    let form = "sqft_living=95&bedrooms=5&zipcode=98103&waterfront=1&has_basement=on&sqft_basement=20";

    let resp = handle(post_form("/edit", form), &state).expect("Handler failed");
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    assert!(body.contains("value=\"95\""));
    assert!(body.contains("name=\"bedrooms\" value=\"5\""));
    assert!(body.contains("value=\"98103\""));
    assert!(body.contains("value=\"20\""));
    assert!(body.contains("name=\"waterfront\" value=\"1\" checked"));
}

#[test]
fn edit_keeps_basement_toggle_without_area() {
    let state = test_state();

    let resp = handle(post_form("/edit", "has_basement=on&sqft_basement="), &state)
        .expect("Handler failed");
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    assert!(body.contains("name=\"has_basement\" checked"));
    assert!(!body.contains("id=\"basement-reveal\" class=\"field\" hidden"));
}

#[test]
fn unknown_path_is_not_found() {
    let state = test_state();

    let err = handle(get("/nope"), &state).unwrap_err();
    assert!(matches!(err, ServerError::NotFound));
}

#[test]
fn wrong_method_on_known_path() {
    let state = test_state();

    let err = handle(get("/valuation"), &state).unwrap_err();
    assert!(matches!(err, ServerError::MethodNotAllowed));

    let req = http::Request::builder()
        .method(Method::DELETE)
        .uri("/")
        .body(astra::Body::empty())
        .unwrap();
    assert_eq!(handle(req, &state).unwrap_err().status(), 405);
}

#[test]
fn static_assets_are_served() {
    let state = test_state();

    let css = handle(get("/static/app.css"), &state).expect("Handler failed");
    assert_eq!(css.status(), 200);
    assert!(header(&css, "Content-Type").starts_with("text/css"));

    let js = handle(get("/static/app.js"), &state).expect("Handler failed");
    assert!(header(&js, "Content-Type").starts_with("application/javascript"));
    assert!(body_string(js).contains("DOMContentLoaded"));

    let missing = handle(get("/static/other.css"), &state).unwrap_err();
    assert!(matches!(missing, ServerError::NotFound));
}
