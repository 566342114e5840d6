//! Cross-origin resource sharing
//!
//! Decorates every response with `Access-Control-*` headers and answers
//! preflight requests. The default policy allows any origin, method and
//! header with credentials.

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::header::{
    HeaderMap, HeaderValue, ACCESS_CONTROL_ALLOW_CREDENTIALS, ACCESS_CONTROL_ALLOW_ORIGIN, VARY,
};
use hyper::{Method, Response, StatusCode};

use crate::config::CorsConfig;

/// Methods advertised when `allow_methods = "*"`
const ALL_METHODS: [&str; 7] = ["DELETE", "GET", "HEAD", "OPTIONS", "PATCH", "POST", "PUT"];

/// Headers a browser may always send, kept allowed even for an explicit list
const SAFELISTED_HEADERS: [&str; 4] = ["accept", "accept-language", "content-language", "content-type"];

const ORIGIN: &str = "origin";
const REQUEST_METHOD: &str = "access-control-request-method";
const REQUEST_HEADERS: &str = "access-control-request-headers";

/// Pre-computed CORS policy built once from configuration
#[derive(Debug, Clone)]
pub struct CorsPolicy {
    allow_all_origins: bool,
    allow_origins: Vec<String>,
    allow_all_headers: bool,
    allow_headers: Vec<String>,
    allow_methods: Vec<String>,
    allow_credentials: bool,
    max_age: u64,
}

impl CorsPolicy {
    pub fn from_config(config: &CorsConfig) -> Self {
        let allow_methods = if config.allows_any_method() {
            ALL_METHODS.iter().map(ToString::to_string).collect()
        } else {
            split_list(&config.allow_methods)
                .map(|m| m.to_ascii_uppercase())
                .collect()
        };

        let mut allow_headers: Vec<String> = SAFELISTED_HEADERS.iter().map(ToString::to_string).collect();
        if !config.allows_any_header() {
            allow_headers.extend(split_list(&config.allow_headers).map(|h| h.to_ascii_lowercase()));
        }
        allow_headers.sort();
        allow_headers.dedup();

        Self {
            allow_all_origins: config.allows_any_origin(),
            allow_origins: split_list(&config.allow_origin).map(ToString::to_string).collect(),
            allow_all_headers: config.allows_any_header(),
            allow_headers,
            allow_methods,
            allow_credentials: config.allow_credentials,
            max_age: config.max_age,
        }
    }

    fn is_allowed_origin(&self, origin: &str) -> bool {
        self.allow_all_origins || self.allow_origins.iter().any(|o| o == origin)
    }

    /// A preflight is an OPTIONS request carrying both `Origin` and
    /// `Access-Control-Request-Method`.
    pub fn is_preflight(method: &Method, headers: &HeaderMap) -> bool {
        method == Method::OPTIONS && headers.contains_key(ORIGIN) && headers.contains_key(REQUEST_METHOD)
    }

    /// Answer a preflight request
    ///
    /// Returns 200 `OK` when origin, method and headers are allowed,
    /// otherwise 400 naming what was rejected.
    pub fn preflight_response(&self, headers: &HeaderMap) -> Response<Full<Bytes>> {
        let origin = header_str(headers, ORIGIN).unwrap_or_default();
        let requested_method = header_str(headers, REQUEST_METHOD).unwrap_or_default();
        let requested_headers = header_str(headers, REQUEST_HEADERS);

        // Wildcard is not valid together with credentials, echo the origin instead
        let explicit_origin = !self.allow_all_origins || self.allow_credentials;

        let mut builder = Response::builder()
            .header("Access-Control-Allow-Methods", self.allow_methods.join(", "))
            .header("Access-Control-Max-Age", self.max_age.to_string());
        if explicit_origin {
            builder = builder.header("Vary", "Origin");
        } else {
            builder = builder.header("Access-Control-Allow-Origin", "*");
        }
        if self.allow_credentials {
            builder = builder.header("Access-Control-Allow-Credentials", "true");
        }

        let mut failures = Vec::new();
        if self.is_allowed_origin(origin) {
            if explicit_origin {
                builder = builder.header("Access-Control-Allow-Origin", origin);
            }
        } else {
            failures.push("origin");
        }

        if !self.allow_methods.iter().any(|m| m == requested_method) {
            failures.push("method");
        }

        match requested_headers {
            Some(requested) if self.allow_all_headers => {
                builder = builder.header("Access-Control-Allow-Headers", requested);
            }
            Some(requested) => {
                builder = builder.header("Access-Control-Allow-Headers", self.allow_headers.join(", "));
                let all_allowed = split_list(requested)
                    .all(|h| self.allow_headers.iter().any(|a| a.eq_ignore_ascii_case(h)));
                if !all_allowed {
                    failures.push("headers");
                }
            }
            None if !self.allow_all_headers => {
                builder = builder.header("Access-Control-Allow-Headers", self.allow_headers.join(", "));
            }
            None => {}
        }

        let (status, body) = if failures.is_empty() {
            (StatusCode::OK, "OK".to_string())
        } else {
            (
                StatusCode::BAD_REQUEST,
                format!("Disallowed CORS {}", failures.join(", ")),
            )
        };

        builder
            .status(status)
            .header("Content-Type", "text/plain; charset=utf-8")
            .header("Content-Length", body.len())
            .body(Full::new(Bytes::from(body)))
            .unwrap_or_else(|e| {
                crate::logger::log_error(&format!("Failed to build preflight response: {e}"));
                Response::new(Full::new(Bytes::new()))
            })
    }

    /// Add CORS headers to an actual (non-preflight) response
    pub fn apply(&self, request_headers: &HeaderMap, response: &mut Response<Full<Bytes>>) {
        let origin = header_str(request_headers, ORIGIN);
        let has_cookie = request_headers.contains_key("cookie");
        let headers = response.headers_mut();

        if self.allow_all_origins {
            headers.insert(ACCESS_CONTROL_ALLOW_ORIGIN, HeaderValue::from_static("*"));
        }
        if self.allow_credentials {
            headers.insert(ACCESS_CONTROL_ALLOW_CREDENTIALS, HeaderValue::from_static("true"));
        }

        let Some(origin) = origin else {
            return;
        };
        // Credentialed requests need the concrete origin, not a wildcard
        let echo = (self.allow_all_origins && has_cookie)
            || (!self.allow_all_origins && self.is_allowed_origin(origin));
        if echo {
            if let Ok(value) = HeaderValue::from_str(origin) {
                headers.insert(ACCESS_CONTROL_ALLOW_ORIGIN, value);
                headers.append(VARY, HeaderValue::from_static("Origin"));
            }
        }
    }
}

fn split_list(list: &str) -> impl Iterator<Item = &str> {
    list.split(',').map(str::trim).filter(|s| !s.is_empty())
}

fn header_str<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    headers.get(name).and_then(|v| v.to_str().ok())
}
