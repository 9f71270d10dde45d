//! AppMessage enum for async communication within the application.

use crate::error::FetchError;
use crate::models::ApiResponse;

/// Messages received from async operations
#[derive(Debug, Clone)]
pub enum AppMessage {
    /// A fetch cycle settled; `generation` identifies which one
    AnalyticsSettled {
        generation: u64,
        outcome: Result<ApiResponse, FetchError>,
    },
}
