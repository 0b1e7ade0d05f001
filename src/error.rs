//! Error types and handling for geocoder-rs.

use crate::types::Status;

/// Result type alias for geocoder operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for geocoder operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The response body was not a well-formed geocoding document
    #[error("Malformed response: {message}")]
    MalformedResponse {
        /// Description of what was wrong with the document
        message: String,
    },

    /// The service answered with a non-success status code
    #[error("{}", error_message.as_deref().unwrap_or(status.as_str()))]
    Status {
        /// Status reported by the service
        status: Status,
        /// Optional `error_message` field from the response
        error_message: Option<String>,
    },

    /// The client-side quota gate is active, or the service reported
    /// `OVER_QUERY_LIMIT` again after the single retry
    #[error("Geocoding quota exceeded")]
    QuotaExceeded,

    /// Transport-level failure
    #[error("Network error: {source}")]
    Network {
        /// Source error
        #[from]
        source: reqwest::Error,
    },

    /// A caller-supplied argument was rejected before any network activity
    #[error("Invalid argument: {message}")]
    InvalidArgument {
        /// Description of the rejected argument
        message: String,
    },

    /// I/O errors (quota store reads and writes)
    #[error("I/O error: {source}")]
    IoError {
        /// Source error
        #[from]
        source: std::io::Error,
    },
}

impl Error {
    /// Create a new malformed response error
    pub fn malformed_response(message: impl Into<String>) -> Self {
        Self::MalformedResponse {
            message: message.into(),
        }
    }

    /// Create a new error for a non-success status
    pub fn for_status(status: Status) -> Self {
        Self::Status {
            status,
            error_message: None,
        }
    }

    /// Create a new invalid argument error
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }

    /// The status reported by the service, if this error carries one
    pub fn status(&self) -> Option<Status> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// True if this error was caused by a transport-level failure
    pub fn is_network_error(&self) -> bool {
        matches!(self, Self::Network { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_error_display_prefers_server_message() {
        let error = Error::Status {
            status: Status::RequestDenied,
            error_message: Some("The provided API key is invalid.".to_string()),
        };
        assert_eq!(error.to_string(), "The provided API key is invalid.");
    }

    #[test]
    fn test_status_error_display_falls_back_to_status() {
        let error = Error::for_status(Status::OverQueryLimit);
        assert_eq!(error.to_string(), "OVER_QUERY_LIMIT");
    }

    #[test]
    fn test_status_accessor() {
        assert_eq!(
            Error::for_status(Status::InvalidRequest).status(),
            Some(Status::InvalidRequest)
        );
        assert_eq!(Error::QuotaExceeded.status(), None);
    }
}
