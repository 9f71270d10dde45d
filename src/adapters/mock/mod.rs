//! Mock implementations for testing.
//!
//! - [`MockHttpClient`] - HTTP client with configurable and holdable responses

pub mod http;

pub use http::{MockHttpClient, MockResponse, RecordedRequest};
