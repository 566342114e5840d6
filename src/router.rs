//! Request routing dispatch module
//!
//! Entry point for HTTP request processing: CORS preflight, route
//! resolution, HEAD handling, response decoration and access logging.

use crate::api::{self, Resolution};
use crate::config::AppState;
use crate::http;
use crate::logger::{self, AccessLogEntry};
use http_body_util::Full;
use hyper::body::{Body, Bytes};
use hyper::header::SERVER;
use hyper::http::request::Parts;
use hyper::{Method, Request, Response, StatusCode};
use std::convert::Infallible;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Instant;

/// Main entry point for HTTP request handling
///
/// The request body is never read.
pub async fn handle_request<B>(
    req: Request<B>,
    state: Arc<AppState>,
    remote_addr: Option<SocketAddr>,
) -> Result<Response<Full<Bytes>>, Infallible> {
    let started = Instant::now();
    let (parts, _body) = req.into_parts();

    let mut response = if http::CorsPolicy::is_preflight(&parts.method, &parts.headers) {
        state.cors.preflight_response(&parts.headers)
    } else {
        let mut resp = route_request(&parts);
        state.cors.apply(&parts.headers, &mut resp);
        resp
    };

    if let Some(server) = &state.server_header {
        response.headers_mut().insert(SERVER, server.clone());
    }

    if state.access_log {
        log_access(&parts, &response, remote_addr, started, &state.access_log_format);
    }

    Ok(response)
}

/// Resolve the route and build the undecorated response
fn route_request(parts: &Parts) -> Response<Full<Bytes>> {
    match api::resolve(&parts.method, &parts.uri) {
        Resolution::Found(route) => {
            let resp = route.respond();
            if parts.method == Method::HEAD {
                http::strip_body(resp)
            } else {
                resp
            }
        }
        Resolution::RedirectTo(location) => {
            http::build_redirect_response_with_code(&location, StatusCode::TEMPORARY_REDIRECT)
        }
        Resolution::MethodNotAllowed => {
            logger::log_warning(&format!(
                "Method not allowed: {} {}",
                parts.method,
                parts.uri.path()
            ));
            http::build_405_response()
        }
        Resolution::NotFound => http::build_404_response(),
    }
}

fn log_access(
    parts: &Parts,
    response: &Response<Full<Bytes>>,
    remote_addr: Option<SocketAddr>,
    started: Instant,
    format: &str,
) {
    let mut entry = AccessLogEntry::from_request(parts, remote_addr);
    entry.status = response.status().as_u16();
    entry.body_bytes = response
        .body()
        .size_hint()
        .exact()
        .and_then(|n| usize::try_from(n).ok())
        .unwrap_or(0);
    entry.request_time_us = u64::try_from(started.elapsed().as_micros()).unwrap_or(u64::MAX);
    logger::log_access(&entry, format);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use http_body_util::BodyExt;

    fn state() -> Arc<AppState> {
        let mut cfg = Config::load_from("does-not-exist/priceoptimize").unwrap();
        cfg.logging.access_log = false;
        Arc::new(AppState::new(&cfg))
    }

    fn get(path: &str) -> Request<()> {
        Request::builder().uri(path).body(()).unwrap()
    }

    async fn send(req: Request<()>) -> Response<Full<Bytes>> {
        handle_request(req, state(), None).await.unwrap()
    }

    async fn json_body(resp: Response<Full<Bytes>>) -> serde_json::Value {
        let bytes = resp.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn keys(value: &serde_json::Value) -> Vec<&str> {
        let mut keys: Vec<&str> = value.as_object().unwrap().keys().map(String::as_str).collect();
        keys.sort_unstable();
        keys
    }

    #[tokio::test]
    async fn test_root_banner() {
        let resp = send(get("/")).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let body = json_body(resp).await;
        assert_eq!(keys(&body), ["endpoints", "message", "status", "version"]);
        assert_eq!(body["status"], "running");
        assert_eq!(body["version"], "1.0.0");
        assert_eq!(body["endpoints"]["demo_products"], "/api/products");
    }

    #[tokio::test]
    async fn test_health_always_healthy() {
        let body = json_body(send(get("/health")).await).await;
        assert_eq!(keys(&body), ["cache", "database", "service", "status"]);
        assert_eq!(body["status"], "healthy");
        assert_eq!(body["database"], "connected");
        assert_eq!(body["cache"], "active");
    }

    #[tokio::test]
    async fn test_products() {
        let body = json_body(send(get("/api/products")).await).await;
        assert_eq!(keys(&body), ["message", "products", "total"]);
        let products = body["products"].as_array().unwrap();
        assert_eq!(products.len(), 3);
        assert_eq!(body["total"], 3);
        assert_eq!(products[1]["sku"], "SKU-002");
        assert!(products[0]["inventory_level"].is_u64());
        assert!(products[0]["cost"].is_f64());
    }

    #[tokio::test]
    async fn test_analytics() {
        let body = json_body(send(get("/api/analytics")).await).await;
        assert_eq!(
            keys(&body),
            ["margin_distribution", "message", "revenue_impact", "summary"]
        );
        assert_eq!(body["revenue_impact"]["revenue_lift"], 10000);
        assert_eq!(body["summary"]["pending_approvals"], 3);
    }

    #[tokio::test]
    async fn test_pending_price_changes() {
        let body = json_body(send(get("/api/price-changes/pending")).await).await;
        assert_eq!(keys(&body), ["message", "pending_changes", "total"]);
        assert_eq!(body["pending_changes"].as_array().unwrap().len(), 2);
        assert_eq!(body["total"], 2);
        assert_eq!(body["pending_changes"][1]["sku"], "SKU-015");
    }

    #[tokio::test]
    async fn test_every_response_allows_any_origin() {
        for path in ["/", "/health", "/api/products", "/missing"] {
            let resp = send(get(path)).await;
            assert_eq!(resp.headers()["access-control-allow-origin"], "*", "{path}");
            assert_eq!(resp.headers()["access-control-allow-credentials"], "true");
        }
    }

    #[tokio::test]
    async fn test_unknown_path_is_not_found() {
        let resp = send(get("/api/unknown")).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        assert_eq!(json_body(resp).await["detail"], "Not Found");
    }

    #[tokio::test]
    async fn test_post_is_method_not_allowed() {
        let req = Request::builder()
            .method("POST")
            .uri("/api/products")
            .body(())
            .unwrap();
        let resp = send(req).await;
        assert_eq!(resp.status(), StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(resp.headers()["allow"], "GET, HEAD");
    }

    #[tokio::test]
    async fn test_head_has_headers_without_body() {
        let get_resp = send(get("/api/analytics")).await;
        let head = Request::builder()
            .method("HEAD")
            .uri("/api/analytics")
            .body(())
            .unwrap();
        let head_resp = send(head).await;
        assert_eq!(head_resp.status(), StatusCode::OK);
        assert_eq!(
            head_resp.headers()["content-length"],
            get_resp.headers()["content-length"]
        );
        let bytes = head_resp.into_body().collect().await.unwrap().to_bytes();
        assert!(bytes.is_empty());
    }

    #[tokio::test]
    async fn test_trailing_slash_redirects() {
        let resp = send(get("/api/products/")).await;
        assert_eq!(resp.status(), StatusCode::TEMPORARY_REDIRECT);
        assert_eq!(resp.headers()["location"], "/api/products");
    }

    #[tokio::test]
    async fn test_preflight() {
        let req = Request::builder()
            .method("OPTIONS")
            .uri("/api/products")
            .header("origin", "http://localhost:5173")
            .header("access-control-request-method", "GET")
            .body(())
            .unwrap();
        let resp = send(req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(
            resp.headers()["access-control-allow-origin"],
            "http://localhost:5173"
        );
        assert_eq!(resp.headers()["server"], "priceoptimize-api");
    }

    #[tokio::test]
    async fn test_plain_options_is_not_preflight() {
        let req = Request::builder()
            .method("OPTIONS")
            .uri("/health")
            .body(())
            .unwrap();
        assert_eq!(send(req).await.status(), StatusCode::METHOD_NOT_ALLOWED);
    }

    #[tokio::test]
    async fn test_repeated_requests_are_byte_identical() {
        for path in ["/", "/health", "/api/products", "/api/analytics", "/api/price-changes/pending"] {
            let first = send(get(path)).await.into_body().collect().await.unwrap().to_bytes();
            let second = send(get(path)).await.into_body().collect().await.unwrap().to_bytes();
            assert_eq!(first, second, "{path}");
        }
    }

    #[tokio::test]
    async fn test_docs_and_openapi() {
        let resp = send(get("/docs")).await;
        assert_eq!(resp.status(), StatusCode::OK);
        assert!(resp.headers()["content-type"]
            .to_str()
            .unwrap()
            .starts_with("text/html"));

        let body = json_body(send(get("/openapi.json")).await).await;
        assert_eq!(body["openapi"], "3.1.0");
    }
}
