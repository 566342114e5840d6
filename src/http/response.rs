//! HTTP response building module
//!
//! Provides builders for the status code responses the service emits.
//! Builders never panic; a failed build is logged and a bare response returned.

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{Response, StatusCode};
use serde::Serialize;

pub const JSON_CONTENT_TYPE: &str = "application/json";

/// Methods served by every route
pub const ALLOWED_METHODS: &str = "GET, HEAD";

/// Build a compact JSON response from any serializable payload
pub fn json_response<T: Serialize>(status: StatusCode, body: &T) -> Response<Full<Bytes>> {
    match serde_json::to_vec(body) {
        Ok(json) => build_json_bytes(status, Bytes::from(json)),
        Err(e) => {
            log_build_error("JSON", &e);
            build_json_bytes(
                StatusCode::INTERNAL_SERVER_ERROR,
                Bytes::from_static(br#"{"detail":"Internal Server Error"}"#),
            )
        }
    }
}

fn build_json_bytes(status: StatusCode, json: Bytes) -> Response<Full<Bytes>> {
    Response::builder()
        .status(status)
        .header("Content-Type", JSON_CONTENT_TYPE)
        .header("Content-Length", json.len())
        .body(Full::new(json))
        .unwrap_or_else(|e| {
            log_build_error(status.as_str(), &e);
            Response::new(Full::new(Bytes::new()))
        })
}

/// `{"detail": "..."}` error body
fn detail(message: &'static str) -> serde_json::Value {
    serde_json::json!({ "detail": message })
}

/// Build 404 Not Found response
pub fn build_404_response() -> Response<Full<Bytes>> {
    json_response(StatusCode::NOT_FOUND, &detail("Not Found"))
}

/// Build 405 Method Not Allowed response
pub fn build_405_response() -> Response<Full<Bytes>> {
    let mut resp = json_response(StatusCode::METHOD_NOT_ALLOWED, &detail("Method Not Allowed"));
    resp.headers_mut()
        .insert(hyper::header::ALLOW, hyper::header::HeaderValue::from_static(ALLOWED_METHODS));
    resp
}

/// Build redirect response with a specific status code
pub fn build_redirect_response_with_code(target: &str, code: StatusCode) -> Response<Full<Bytes>> {
    Response::builder()
        .status(code)
        .header("Location", target)
        .header("Content-Length", 0)
        .body(Full::new(Bytes::new()))
        .unwrap_or_else(|e| {
            log_build_error(code.as_str(), &e);
            Response::new(Full::new(Bytes::new()))
        })
}

/// Build generic HTML response
pub fn build_html_response(content: &'static str) -> Response<Full<Bytes>> {
    Response::builder()
        .status(StatusCode::OK)
        .header("Content-Type", "text/html; charset=utf-8")
        .header("Content-Length", content.len())
        .header("Cache-Control", "no-cache")
        .body(Full::new(Bytes::from_static(content.as_bytes())))
        .unwrap_or_else(|e| {
            log_build_error("HTML", &e);
            Response::new(Full::new(Bytes::new()))
        })
}

/// Drop the body of a response while keeping its headers (for HEAD)
pub fn strip_body(resp: Response<Full<Bytes>>) -> Response<Full<Bytes>> {
    let (parts, _) = resp.into_parts();
    Response::from_parts(parts, Full::new(Bytes::new()))
}

/// Log response build error
fn log_build_error(status: &str, error: &dyn std::fmt::Display) {
    crate::logger::log_error(&format!("Failed to build {status} response: {error}"));
}
