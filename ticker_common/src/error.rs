//! Error types shared between the widget and its CLI host.
//!
//! The `QuoteError` enum unifies the failure cases of the one-shot quote
//! fetch — transport failures, non-success HTTP statuses, and response-shape
//! problems — so callers can collapse them into a single failed state while
//! the full detail goes to the diagnostic log.
use thiserror::Error;

/// Unified error type for quote fetching and response decoding.
#[derive(Error, Debug)]
pub enum QuoteError {
    /// Network-level failure raised by the HTTP client (DNS, connect, timeout).
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The provider answered with a non-success HTTP status.
    #[error("HTTP {0}")]
    Http(u16),

    /// The response body could not be decoded as the expected JSON shape.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The result array was missing or empty.
    #[error("Empty response")]
    EmptyResponse,

    /// A wire field could not be converted to a number.
    #[error("Non-numeric field {field}: {value}")]
    NonNumericField {
        /// Provider field name as it appears on the wire.
        field: &'static str,
        /// Offending raw value.
        value: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn http_status_detail_is_preserved() {
        assert_eq!(QuoteError::Http(500).to_string(), "HTTP 500");
        assert_eq!(QuoteError::Http(404).to_string(), "HTTP 404");
    }

    #[test]
    fn empty_response_detail() {
        assert_eq!(QuoteError::EmptyResponse.to_string(), "Empty response");
    }

    #[test]
    fn non_numeric_field_names_the_field() {
        let e = QuoteError::NonNumericField {
            field: "TradePrice",
            value: "n/a".to_string(),
        };
        assert_eq!(e.to_string(), "Non-numeric field TradePrice: n/a");
    }
}
