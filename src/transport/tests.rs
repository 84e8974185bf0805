//! Unit tests for the transport boundary types.

use super::{CALLBACK_URL, CONTENT_TYPE, Headers, Request, Response, StatusCode};
use rstest::rstest;

#[rstest]
fn headers_lookup_is_case_insensitive() {
    let mut headers = Headers::new();
    headers.insert("Content-Type", "application/json");
    assert_eq!(headers.get("CONTENT-TYPE"), Some("application/json"));
    assert_eq!(headers.get(CONTENT_TYPE), Some("application/json"));
}

#[rstest]
fn headers_insert_replaces_existing_values() {
    let mut headers = Headers::new();
    headers.append("accept", "text/plain");
    headers.append("Accept", "application/json");
    assert_eq!(headers.get_all("accept").len(), 2);

    headers.insert("ACCEPT", "application/cloudevents+json");
    assert_eq!(
        headers.get_all("accept"),
        &["application/cloudevents+json".to_owned()]
    );
}

#[rstest]
fn headers_get_returns_first_value() {
    let headers: Headers = [("x-tag", "one"), ("X-Tag", "two")].into_iter().collect();
    assert_eq!(headers.get("x-tag"), Some("one"));
}

#[rstest]
fn headers_absent_name_yields_empty_slice() {
    let headers = Headers::new();
    assert!(headers.get_all("missing").is_empty());
    assert_eq!(headers.get("missing"), None);
    assert!(!headers.contains("missing"));
}

#[rstest]
fn headers_iteration_uses_canonical_names() {
    let headers: Headers = [("X-Callback-Url", "http://example.com/sink")]
        .into_iter()
        .collect();
    let names: Vec<&str> = headers.iter().map(|(name, _)| name).collect();
    assert_eq!(names, vec![CALLBACK_URL]);
}

#[rstest]
fn request_exposes_headers_and_body() {
    let headers: Headers = [("content-type", "application/json")].into_iter().collect();
    let request = Request::new(headers, b"{}".to_vec());
    assert_eq!(request.body(), b"{}");
    assert!(request.headers().contains(CONTENT_TYPE));
}

#[rstest]
fn response_empty_has_no_body_or_headers() {
    let response = Response::empty(StatusCode::ACCEPTED);
    assert_eq!(response.status(), StatusCode::ACCEPTED);
    assert!(response.body().is_empty());
    assert!(response.headers().is_empty());
}

#[rstest]
#[case(StatusCode::OK, 200, true)]
#[case(StatusCode::ACCEPTED, 202, true)]
#[case(StatusCode::BAD_REQUEST, 400, false)]
#[case(StatusCode::INTERNAL_SERVER_ERROR, 500, false)]
#[case(StatusCode::BAD_GATEWAY, 502, false)]
fn status_code_values(#[case] status: StatusCode, #[case] value: u16, #[case] success: bool) {
    assert_eq!(status.as_u16(), value);
    assert_eq!(status.is_success(), success);
    assert_eq!(status.to_string(), value.to_string());
}
