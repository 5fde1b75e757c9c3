// src/tests/router_tests/analysis_tests.rs
use super::MEDIAN_FORM;
use crate::errors::ServerError;
use crate::responses::xlsx::XLSX_CONTENT_TYPE;
use crate::router::handle;
use crate::tests::utils::{body_string, header, post_form, test_state, unreachable_remote_state};

#[test]
fn analysis_page_shows_chart_and_kpis() {
    let state = test_state();

    let resp = handle(post_form("/analysis", MEDIAN_FORM), &state).expect("Handler failed");
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    assert!(body.contains("Market Analysis"));
    assert!(body.contains("$215,000"));
    assert!(body.contains("High Confidence"));
    assert!(body.contains("$200/sqft"));
    assert!(body.contains("Calm Market"));
    assert!(body.contains("14 similar properties sold recently"));
    assert!(body.contains("Market Tension"));
    assert_eq!(body.matches("<circle").count(), 12);
    assert!(body.contains(">JAN<") && body.contains(">DEC<"));
    assert!(body.contains("DEC $215,000"));
    assert!(body.contains("action=\"/valuation\""));
}

#[test]
fn analysis_with_service_down_is_an_error() {
    let state = unreachable_remote_state();

    let err = handle(post_form("/analysis", MEDIAN_FORM), &state).unwrap_err();
    assert!(matches!(err, ServerError::Remote(_)));
    assert_eq!(err.status(), 503);
}

#[test]
fn report_downloads_a_workbook() {
    let state = test_state();

    let resp = handle(post_form("/report", MEDIAN_FORM), &state).expect("Handler failed");
    assert_eq!(resp.status(), 200);
    assert_eq!(header(&resp, "Content-Type"), XLSX_CONTENT_TYPE);
    assert!(header(&resp, "Content-Disposition").starts_with("attachment; filename=\"valuation_local-"));

    let mut bytes = Vec::new();
    std::io::Read::read_to_end(&mut resp.into_body().reader(), &mut bytes).unwrap();
    assert_eq!(&bytes[..2], b"PK");
}
