use serde::{Deserialize, Serialize};

use super::deserialize_count;
use crate::error::FetchError;

/// Analytics payload returned by the endpoint for one codename.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiResponse {
    /// Resolved page path
    pub slug: String,
    #[serde(rename = "screenPageViews", deserialize_with = "deserialize_count")]
    pub screen_page_views: u64,
    #[serde(rename = "activeUsers", deserialize_with = "deserialize_count")]
    pub active_users: u64,
}

impl ApiResponse {
    /// Parse and shape-check a response body.
    ///
    /// Malformed JSON and a well-formed body with the wrong shape are reported
    /// as different errors so the message says which one happened.
    pub fn from_json(body: &[u8]) -> Result<Self, FetchError> {
        let value: serde_json::Value =
            serde_json::from_slice(body).map_err(|e| FetchError::Parse(e.to_string()))?;
        serde_json::from_value(value).map_err(|e| FetchError::InvalidShape(e.to_string()))
    }
}
