use thiserror::Error;

/// Main crate error type.
///
/// Fetch failures are classified so callers can surface network problems,
/// missing resources and server faults distinctly instead of collapsing
/// everything into one message.
#[derive(Error, Debug, Clone)]
pub enum Error {
    /// Connection, DNS or timeout failure before an HTTP status was received
    #[error("Network error: {0}")]
    Network(String),

    /// The requested resource does not exist (HTTP 404)
    #[error("Not found: {resource}")]
    NotFound { resource: String },

    /// Client HTTP error (4xx other than 404)
    #[error("Client error: status code: {status_code}, error message: {error_message}")]
    ClientRequest {
        status_code: u16,
        error_message: String,
    },

    /// Server HTTP error (5xx)
    #[error("Server error: status code: {status_code}, error message: {error_message}")]
    ServerRequest {
        status_code: u16,
        error_message: String,
    },

    /// A required filter field is missing; no request was sent
    #[error("Validation error: {0}")]
    Validation(String),

    /// JSON parse error
    #[error("Json parse error: {0}")]
    JsonParse(String),

    /// Generic request error
    #[error("Generic request error: {0}")]
    GenericRequest(String),
}

// Convenience constructors for common error patterns
impl Error {
    /// Create a network error
    pub fn network(msg: impl Into<String>) -> Self {
        Error::Network(msg.into())
    }

    /// Create a not-found error for a request path
    pub fn not_found(resource: impl Into<String>) -> Self {
        Error::NotFound {
            resource: resource.into(),
        }
    }

    /// Create a validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        Error::Validation(msg.into())
    }

    /// Create a JSON parse error
    pub fn json_parse(msg: impl Into<String>) -> Self {
        Error::JsonParse(msg.into())
    }

    /// Short user-facing message for this error.
    ///
    /// Validation errors carry their own screen-specific text; everything
    /// else maps to a fixed string, with a generic loading-error fallback
    /// for unclassified failures.
    pub fn user_message(&self) -> String {
        match self {
            Error::Validation(msg) => msg.clone(),
            Error::Network(_) => "Network error. Check your connection and try again.".to_string(),
            Error::NotFound { .. } => "Nothing was found for this request.".to_string(),
            Error::ServerRequest { .. } => "The service is temporarily unavailable.".to_string(),
            _ => "Loading error.".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_message_passes_through() {
        let err = Error::validation("A year is required.");
        assert_eq!(err.user_message(), "A year is required.");
    }

    #[test]
    fn test_unclassified_errors_fall_back_to_generic_message() {
        let err = Error::JsonParse("expected value at line 1".to_string());
        assert_eq!(err.user_message(), "Loading error.");

        let err = Error::GenericRequest("builder error".to_string());
        assert_eq!(err.user_message(), "Loading error.");
    }

    #[test]
    fn test_http_classes_have_distinct_messages() {
        let network = Error::network("connection refused");
        let missing = Error::not_found("/tenders/abc");
        let server = Error::ServerRequest {
            status_code: 503,
            error_message: "unavailable".to_string(),
        };
        assert_ne!(network.user_message(), missing.user_message());
        assert_ne!(missing.user_message(), server.user_message());
        assert_ne!(server.user_message(), network.user_message());
    }
}
