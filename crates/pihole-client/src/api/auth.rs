//! Authentication endpoints.

use crate::PiholeClient;
use pihole_core::{AuthRequest, AuthResponse, PiholeError, Result, Session};
use tracing::{debug, warn};

/// Authentication endpoints
pub struct AuthApi<'a> {
    client: &'a PiholeClient,
}

impl<'a> AuthApi<'a> {
    pub(crate) fn new(client: &'a PiholeClient) -> Self {
        Self { client }
    }

    /// Log in with the web interface password and return the granted session.
    ///
    /// A session the appliance marks as not valid is an error.
    pub async fn login(&self, password: &str) -> Result<Session> {
        let response: AuthResponse = self
            .client
            .post("/api/auth", &[], &AuthRequest { password })
            .await?;

        let session = response.session;
        if !session.valid {
            warn!(message = ?session.message, "Pi-hole returned an invalid session");
            return Err(PiholeError::InvalidSession);
        }

        debug!(validity = session.validity, totp = session.totp, "authenticated");
        Ok(session)
    }
}
