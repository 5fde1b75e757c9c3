// src/tests/router_tests/valuation_tests.rs
use super::MEDIAN_FORM;
use crate::router::{handle, VALUATION_FAILED_TOAST};
use crate::tests::utils::{body_string, post_form, test_state, unreachable_remote_state};

#[test]
fn valuation_page_shows_the_estimate() {
    let state = test_state();

    let resp = handle(post_form("/valuation", MEDIAN_FORM), &state).expect("Handler failed");
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    // 100 m² = 1076.39 ft² at $200 = $215,278
    assert!(body.contains("$207,000 – $224,000"));
    assert!(body.contains(">High<"));
    assert!(body.contains("$203,000"));
    assert!(body.contains("6% above"));
    assert!(body.contains("left: 40%"));
    assert!(body.contains("Your Valuation"));
    assert!(body.contains("data-share-text=\"My property is valued at $207,000 – $224,000 according to MAIA.\""));
}

#[test]
fn valuation_carries_the_form_forward_and_back() {
    let state = test_state();

    let body = body_string(handle(post_form("/valuation", MEDIAN_FORM), &state).unwrap());

    for action in ["/edit", "/analysis", "/report"] {
        assert!(body.contains(&format!("action=\"{action}\"")), "{action}");
    }
    // back, analysis and report forms
    assert_eq!(body.matches("name=\"sqft_living\" value=\"100\"").count(), 3);
}

#[test]
fn missing_fields_fall_back_to_defaults() {
    let state = test_state();

    let resp = handle(post_form("/valuation", ""), &state).expect("Handler failed");
    assert_eq!(resp.status(), 200);

    // 140 m² default, no zipcode
    let body = body_string(resp);
    assert!(body.contains(">Medium<"));
    assert!(body.contains("$289,000 – $313,000"));
}

#[test]
fn pricing_service_down_keeps_the_form() {
    let state = unreachable_remote_state();

    let resp = handle(post_form("/valuation", MEDIAN_FORM), &state).expect("Handler failed");
    assert_eq!(resp.status(), 503);

    let body = body_string(resp);
    assert!(body.contains(VALUATION_FAILED_TOAST));
    assert!(body.contains("toast show"));
    assert!(body.contains("id=\"property-form\""));
    assert!(body.contains("value=\"98103\""));
}
