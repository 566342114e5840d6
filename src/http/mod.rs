//! HTTP protocol layer module
//!
//! Response builders and the cross-origin policy, decoupled from the
//! demo routes themselves.

pub mod cors;
pub mod response;

// Re-export commonly used types
pub use cors::CorsPolicy;
pub use response::{
    build_404_response, build_405_response, build_html_response,
    build_redirect_response_with_code, json_response, strip_body,
};
