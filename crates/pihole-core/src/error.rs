use thiserror::Error;

/// Result type alias for Pi-hole operations
pub type Result<T> = std::result::Result<T, PiholeError>;

/// Errors that can occur while pausing Pi-hole blocking
#[derive(Error, Debug)]
pub enum PiholeError {
    /// Authentication failed - wrong password or no seats left
    #[error("authentication failed: {message}")]
    Unauthorized {
        /// Message reported by the appliance
        message: String,
    },

    /// The appliance answered the login but marked the session as invalid
    #[error("pi-hole returned an invalid session")]
    InvalidSession,

    /// API returned an unexpected status code
    #[error("unexpected status code ({code}): {message}")]
    Api {
        /// HTTP status code
        code: u16,
        /// Error message from the API, or the raw body
        message: String,
    },

    /// HTTP request failed before a response arrived
    #[error("HTTP request failed: {0}")]
    Http(String),

    /// The session expired before the request completed
    #[error("deadline exceeded: session validity of {validity} seconds elapsed")]
    DeadlineExceeded {
        /// Session validity in seconds
        validity: u64,
    },

    /// JSON parsing/serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Invalid duration string
    #[error("invalid duration {input:?}: {reason}")]
    InvalidDuration {
        /// The string that failed to parse
        input: String,
        /// Why it was rejected
        reason: &'static str,
    },

    /// Invalid URL
    #[error("invalid URL: {0}")]
    InvalidUrl(String),

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),
}

impl PiholeError {
    /// Returns the HTTP status code if the appliance answered with one
    #[must_use]
    pub const fn status_code(&self) -> Option<u16> {
        match self {
            Self::Unauthorized { .. } => Some(401),
            Self::Api { code, .. } => Some(*code),
            _ => None,
        }
    }
}
