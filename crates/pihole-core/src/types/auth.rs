use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};

/// Body of `POST /api/auth`
#[derive(Debug, Clone, Serialize)]
pub struct AuthRequest<'a> {
    /// Plaintext web interface password
    pub password: &'a str,
}

/// Response of `POST /api/auth`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthResponse {
    /// The session granted by the appliance
    pub session: Session,
}

/// An authenticated API session.
///
/// Obtained once per run and never persisted. An appliance without a
/// password answers with no `sid` and a negative validity, meaning the
/// session does not expire.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    /// Whether the appliance accepted the session
    pub valid: bool,

    /// Seconds the session stays usable after issuance
    pub validity: i64,

    /// Opaque session identifier
    #[serde(default)]
    pub sid: Option<String>,

    /// CSRF token for browser clients
    #[serde(default)]
    pub csrf: Option<String>,

    /// Whether two-factor authentication is enabled
    #[serde(default)]
    pub totp: bool,

    /// Human readable status message
    #[serde(default)]
    pub message: Option<String>,
}

impl Session {
    /// The validity window, or `None` if the session never expires
    #[must_use]
    pub fn validity_window(&self) -> Option<Duration> {
        u64::try_from(self.validity).ok().map(Duration::from_secs)
    }

    /// The instant after which the session can no longer be used.
    ///
    /// `issued_at` should be taken before the login request was sent so the
    /// deadline never outlives the session. A window too large to represent
    /// as an instant is treated like a session that never expires.
    #[must_use]
    pub fn deadline(&self, issued_at: Instant) -> Option<Instant> {
        self.validity_window()
            .and_then(|window| issued_at.checked_add(window))
    }
}
