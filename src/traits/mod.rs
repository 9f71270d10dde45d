//! Trait abstractions for dependency injection and testability.
//!
//! - [`HttpClient`] - outbound GET used by the analytics fetch

pub mod http;

pub use http::{canonical_reason, Headers, HttpClient, HttpError, Response};
