//! Trait abstractions for dependency injection and testability.
//!
//! - [`HttpClient`] - HTTP GET/POST used by the prediction client

pub mod http;

pub use http::{json_headers, Headers, HttpClient, HttpError, Response};
