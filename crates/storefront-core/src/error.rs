//! Error types for the catalog.
//!
//! - [`FetchError`] - Transport failures reaching the product API
//! - [`DataError`] - Fetched products whose numeric fields cannot be ordered

use thiserror::Error;

use crate::model::ProductId;

/// Network/fetch-related errors for HTTP requests.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// Browser window not available
    #[error("Browser window not available")]
    NoWindow,
    /// Failed to create HTTP request
    #[error("Failed to create request")]
    RequestCreationFailed,
    /// Network request failed (CORS, DNS, offline, etc.)
    #[error("Network error: {0}")]
    NetworkError(String),
    /// HTTP error response (non-2xx status)
    #[error("HTTP error: {0}")]
    HttpError(u16),
    /// Failed to read response body
    #[error("Failed to read response")]
    ResponseReadFailed,
    /// Invalid response content (not text)
    #[error("Invalid response content")]
    InvalidContent,
    /// JSON parsing error
    #[error("JSON parse error: {0}")]
    JsonParseError(String),
    /// Request timed out
    #[error("Request timed out")]
    Timeout,
}

impl FetchError {
    /// Whether the server answered that the resource does not exist.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::HttpError(404))
    }
}

/// A product value that breaks the numeric ordering the sort engine relies on.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DataError {
    /// Price is NaN, infinite or negative.
    #[error("product {id} has an invalid price")]
    InvalidPrice { id: ProductId },
    /// Rating is NaN, infinite or outside 0..=5.
    #[error("product {id} has an invalid rating")]
    InvalidRating { id: ProductId },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_detection() {
        assert!(FetchError::HttpError(404).is_not_found());
        assert!(!FetchError::HttpError(500).is_not_found());
        assert!(!FetchError::Timeout.is_not_found());
    }

    #[test]
    fn test_messages() {
        assert_eq!(FetchError::HttpError(503).to_string(), "HTTP error: 503");
        assert_eq!(
            DataError::InvalidRating { id: 7 }.to_string(),
            "product 7 has an invalid rating"
        );
    }
}
