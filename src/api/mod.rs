// API module entry
// Fixed route table of the PriceOptimize demo endpoints

mod demo_data;
mod openapi;
mod types;

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{Method, Response, StatusCode, Uri};

use crate::http::{build_html_response, json_response};

pub use demo_data::{API_VERSION, SERVICE_NAME};

/// Every path the service answers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Root,
    Health,
    Products,
    Analytics,
    PendingPriceChanges,
    OpenApi,
    Docs,
}

/// Outcome of matching a request line against the route table
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    Found(Route),
    /// Known path written with a trailing slash; holds the canonical location
    RedirectTo(String),
    MethodNotAllowed,
    NotFound,
}

impl Route {
    pub const ALL: [Self; 7] = [
        Self::Root,
        Self::Health,
        Self::Products,
        Self::Analytics,
        Self::PendingPriceChanges,
        Self::OpenApi,
        Self::Docs,
    ];

    pub const fn path(self) -> &'static str {
        match self {
            Self::Root => "/",
            Self::Health => "/health",
            Self::Products => "/api/products",
            Self::Analytics => "/api/analytics",
            Self::PendingPriceChanges => "/api/price-changes/pending",
            Self::OpenApi => "/openapi.json",
            Self::Docs => "/docs",
        }
    }

    pub fn from_path(path: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|route| route.path() == path)
    }

    /// Summary and operation id for the OpenAPI document; `None` for the
    /// documentation routes themselves.
    pub(crate) const fn operation(self) -> Option<(&'static str, &'static str)> {
        match self {
            Self::Root => Some(("Root", "root__get")),
            Self::Health => Some(("Health Check", "health_check_health_get")),
            Self::Products => Some(("Get Products", "get_products_api_products_get")),
            Self::Analytics => Some(("Get Analytics", "get_analytics_api_analytics_get")),
            Self::PendingPriceChanges => Some((
                "Get Pending Changes",
                "get_pending_changes_api_price_changes_pending_get",
            )),
            Self::OpenApi | Self::Docs => None,
        }
    }

    /// Build this route's response; payloads are constructed fresh on every call
    pub fn respond(self) -> Response<Full<Bytes>> {
        match self {
            Self::Root => json_response(StatusCode::OK, &demo_data::service_banner()),
            Self::Health => json_response(StatusCode::OK, &demo_data::health_status()),
            Self::Products => json_response(StatusCode::OK, &demo_data::products()),
            Self::Analytics => json_response(StatusCode::OK, &demo_data::analytics()),
            Self::PendingPriceChanges => {
                json_response(StatusCode::OK, &demo_data::pending_price_changes())
            }
            Self::OpenApi => json_response(StatusCode::OK, &openapi::document()),
            Self::Docs => build_html_response(include_str!("docs.html")),
        }
    }
}

/// Match method and path against the route table
///
/// Only GET and HEAD are served. A known path with one trailing slash
/// redirects to the canonical path, keeping the query string.
pub fn resolve(method: &Method, uri: &Uri) -> Resolution {
    let path = uri.path();

    if let Some(route) = Route::from_path(path) {
        return match *method {
            Method::GET | Method::HEAD => Resolution::Found(route),
            _ => Resolution::MethodNotAllowed,
        };
    }

    let canonical = path
        .strip_suffix('/')
        .filter(|p| !p.is_empty() && Route::from_path(p).is_some());
    match canonical {
        Some(canonical) => Resolution::RedirectTo(match uri.query() {
            Some(q) => format!("{canonical}?{q}"),
            None => canonical.to_string(),
        }),
        None => Resolution::NotFound,
    }
}
