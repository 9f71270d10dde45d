use thiserror::Error;

use crate::traits::HttpError;

/// Shown when a failure carries no usable description.
pub const UNEXPECTED_ERROR_MESSAGE: &str = "An unexpected error occurred.";

/// Failure of a single analytics fetch cycle.
///
/// Every variant collapses into the same error panel; `Display` is the text
/// the user sees.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum FetchError {
    /// Endpoint plus codename did not form a valid absolute URL
    #[error("Invalid API endpoint: {0}")]
    InvalidUrl(String),

    /// Server answered with a non-2xx status
    #[error("{}", format_status(.status, .status_text))]
    Http { status: u16, status_text: String },

    /// Request never produced a response (DNS, refused connection, ...)
    #[error("{}", or_fallback(.0))]
    Transport(String),

    /// Body was not valid JSON
    #[error("{}", or_fallback(.0))]
    Parse(String),

    /// Body was JSON but not the expected analytics shape
    #[error("Unexpected response shape: {0}")]
    InvalidShape(String),

    /// Anything without a description of its own
    #[error("{}", UNEXPECTED_ERROR_MESSAGE)]
    Unexpected,
}

impl FetchError {
    /// User-facing message for the error panel.
    pub fn message(&self) -> String {
        self.to_string()
    }
}

impl From<HttpError> for FetchError {
    fn from(err: HttpError) -> Self {
        match err {
            HttpError::InvalidUrl(msg) => FetchError::InvalidUrl(msg),
            other => FetchError::Transport(other.message().to_string()),
        }
    }
}

fn format_status(status: &u16, status_text: &str) -> String {
    format!("{} {}", status, status_text).trim_end().to_string()
}

fn or_fallback(message: &str) -> &str {
    if message.trim().is_empty() {
        UNEXPECTED_ERROR_MESSAGE
    } else {
        message
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_status_message() {
        let err = FetchError::Http {
            status: 404,
            status_text: "Not Found".to_string(),
        };
        assert_eq!(err.message(), "404 Not Found");
    }

    #[test]
    fn test_http_status_without_reason() {
        let err = FetchError::Http {
            status: 599,
            status_text: String::new(),
        };
        assert_eq!(err.message(), "599");
    }

    #[test]
    fn test_transport_message_passes_through() {
        let err: FetchError = HttpError::ConnectionFailed("Failed to fetch".to_string()).into();
        assert_eq!(err, FetchError::Transport("Failed to fetch".to_string()));
        assert_eq!(err.message(), "Failed to fetch");
    }

    #[test]
    fn test_empty_descriptions_fall_back() {
        assert_eq!(
            FetchError::Transport(String::new()).message(),
            UNEXPECTED_ERROR_MESSAGE
        );
        assert_eq!(FetchError::Parse("  ".to_string()).message(), UNEXPECTED_ERROR_MESSAGE);
        assert_eq!(FetchError::Unexpected.message(), UNEXPECTED_ERROR_MESSAGE);
    }

    #[test]
    fn test_invalid_url_from_http_error() {
        let err: FetchError =
            HttpError::InvalidUrl("relative URL without a base".to_string()).into();
        assert_eq!(err.message(), "Invalid API endpoint: relative URL without a base");
    }
}
