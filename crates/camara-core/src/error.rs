//! Error types for the Camara gateway

/// Result type alias using [`Error`]
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Main error type for the Camara gateway
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Malformed request parameter, detected before contacting the upstream
    #[error("Invalid request: {0}")]
    BadRequest(String),

    /// No catalog entry for the requested path
    #[error("Route not found: {0}")]
    RouteNotFound(String),

    /// Catalog routes are GET-only
    #[error("Method not allowed: {0}")]
    MethodNotAllowed(String),

    /// Upstream answered with a non-success status
    #[error("Upstream returned status {status}")]
    Upstream {
        /// HTTP status reported by the upstream
        status: u16,
        /// Raw upstream response body
        body: String,
    },

    /// Upstream answered 2xx but the body is not valid JSON
    #[error("Failed to decode upstream response: {0}")]
    Decode(String),

    /// Upstream could not be reached (DNS, connect, configured timeout)
    #[error("Failed to reach upstream: {0}")]
    Network(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Runtime error
    #[error("Runtime error: {0}")]
    Runtime(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// HTTP error
    #[error("HTTP error: {0}")]
    HttpError(#[from] http::Error),

    /// Internal error (should not happen in production)
    #[error("Internal error: {0}")]
    Internal(String),
}

impl Error {
    /// Convert error to HTTP status code
    pub fn to_status_code(&self) -> http::StatusCode {
        use http::StatusCode;
        match self {
            Error::BadRequest(_) => StatusCode::BAD_REQUEST,
            Error::RouteNotFound(_) => StatusCode::NOT_FOUND,
            Error::MethodNotAllowed(_) => StatusCode::METHOD_NOT_ALLOWED,
            Error::Upstream { status, .. } => {
                StatusCode::from_u16(*status).unwrap_or(StatusCode::BAD_GATEWAY)
            }
            Error::Decode(_) | Error::Network(_) => StatusCode::BAD_GATEWAY,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Create an upstream error carrying the remote status and body
    pub fn upstream(status: u16, body: impl Into<String>) -> Self {
        Error::Upstream {
            status,
            body: body.into(),
        }
    }
}
