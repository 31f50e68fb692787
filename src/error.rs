//! Error types for the cirrus-mgmt SDK
//!
//! All public APIs return `Result<T, Error>` where Error is defined here.
//! The taxonomy is deliberately small: argument faults detected before any
//! network I/O, structured errors returned by the control plane, and
//! transport faults surfaced from the HTTP client unmodified. Nothing is
//! retried at this layer; retry policy belongs to the transport's operator.

use thiserror::Error;

/// The main error type for the cirrus-mgmt SDK
#[derive(Error, Debug)]
pub enum Error {
    // ========================================================================
    // Argument / configuration errors (raised before any network call)
    // ========================================================================
    #[error("Parameter '{param}' is invalid: {message}")]
    InvalidArgument { param: String, message: String },

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Credential error: {message}")]
    Credential { message: String },

    // ========================================================================
    // Remote errors (the control plane answered with a non-success status)
    // ========================================================================
    #[error("HTTP {status}: {message}")]
    Api {
        /// HTTP status code returned by the endpoint
        status: u16,
        /// Service error code from the error envelope, when present
        code: Option<String>,
        /// Human-readable message (error envelope message, or the raw body)
        message: String,
        /// The response body, verbatim
        body: String,
    },

    // ========================================================================
    // Transport / decode errors
    // ========================================================================
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Failed to parse JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    // ========================================================================
    // Generic errors
    // ========================================================================
    #[error("{0}")]
    Other(String),

    #[error(transparent)]
    Anyhow(#[from] anyhow::Error),
}

impl Error {
    /// Create an invalid-argument error
    pub fn invalid_argument(param: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            param: param.into(),
            message: message.into(),
        }
    }

    /// Create an invalid-argument error for a required parameter
    pub fn required(param: impl Into<String>) -> Self {
        Self::InvalidArgument {
            param: param.into(),
            message: "is required and cannot be empty".to_string(),
        }
    }

    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a credential error
    pub fn credential(message: impl Into<String>) -> Self {
        Self::Credential {
            message: message.into(),
        }
    }

    /// Create an API error without a structured envelope
    pub fn api(status: u16, body: impl Into<String>) -> Self {
        let body = body.into();
        Self::Api {
            status,
            code: None,
            message: body.clone(),
            body,
        }
    }

    /// The HTTP status associated with this error, if any
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            Self::Http(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// True when the endpoint rejected the request (4xx)
    pub fn is_client_error(&self) -> bool {
        matches!(self.status(), Some(400..=499))
    }

    /// True when the endpoint itself failed (5xx)
    pub fn is_server_error(&self) -> bool {
        matches!(self.status(), Some(500..=599))
    }
}

/// Result type alias for the cirrus-mgmt SDK
pub type Result<T> = std::result::Result<T, Error>;

/// Extension trait for adding context to errors
pub trait ResultExt<T> {
    /// Add context to an error
    fn context(self, message: impl Into<String>) -> Result<T>;

    /// Add context with a closure (lazy evaluation)
    fn with_context<F: FnOnce() -> String>(self, f: F) -> Result<T>;
}

impl<T, E: Into<Error>> ResultExt<T> for std::result::Result<T, E> {
    fn context(self, message: impl Into<String>) -> Result<T> {
        self.map_err(|e| {
            let inner = e.into();
            Error::Other(format!("{}: {}", message.into(), inner))
        })
    }

    fn with_context<F: FnOnce() -> String>(self, f: F) -> Result<T> {
        self.map_err(|e| {
            let inner = e.into();
            Error::Other(format!("{}: {}", f(), inner))
        })
    }
}
