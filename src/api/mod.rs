//! REST API layer for HTTP request/response handling.
//!
//! This layer translates form-encoded HTTP requests into service calls and
//! renders the results as JSON.
//!
//! # Modules
//!
//! - [`dto`] - Form parsing and response shapes
//! - [`extract`] - Form extractor with JSON rejections
//! - [`handlers`] - HTTP request handlers
//! - [`middleware`] - Request tracing
//! - [`response`] - Shared response helpers
//! - [`routes`] - Route configuration

pub mod dto;
pub mod extract;
pub mod handlers;
pub mod middleware;
pub mod response;
pub mod routes;
