use axum::{
    body::Body,
    http::{HeaderName, StatusCode},
    response::Response,
};

#[track_caller]
pub(crate) fn assert_status_ok(response: &Response<Body>) {
    assert_eq!(response.status(), StatusCode::OK);
}

#[track_caller]
fn must_get_header<'a>(response: &'a Response<Body>, name: HeaderName) -> &'a str {
    response
        .headers()
        .get(&name)
        .unwrap_or_else(|| panic!("response is missing the {name} header"))
        .to_str()
        .expect("header is not valid text")
}

#[track_caller]
pub(crate) fn assert_content_type(response: &Response<Body>, content_type: &str) {
    assert_eq!(
        must_get_header(response, axum::http::header::CONTENT_TYPE),
        content_type
    );
}

/// Assert that htmx is told to navigate to `endpoint` after a successful form submission.
#[track_caller]
pub(crate) fn assert_hx_redirect(response: &Response<Body>, endpoint: &str) {
    assert_eq!(
        must_get_header(response, HeaderName::from_static("hx-redirect")),
        endpoint
    );
}
