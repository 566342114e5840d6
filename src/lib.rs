//! PriceOptimize AI demo API
//!
//! A small HTTP service answering a fixed set of read-only routes with
//! hardcoded sample data about a dynamic-pricing product.

pub mod api;
pub mod config;
pub mod error;
pub mod http;
pub mod logger;
pub mod router;
pub mod server;

pub use error::{Result, ServerError};
