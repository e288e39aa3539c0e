//! Log in, then disable blocking before the session expires.

use anyhow::{Context, Result};
use pihole_client::PiholeClientBuilder;
use std::time::Instant;
use tracing::{debug, info};

use crate::config::Settings;

/// Authenticate and disable blocking for `settings.duration`.
///
/// Returns the body of the blocking response.
pub async fn execute(settings: &Settings, password: &str) -> Result<String> {
    let client = PiholeClientBuilder::from_config(settings.client.clone()).build()?;

    // Taken before the login request so the deadline never outlives the session
    let issued_at = Instant::now();
    let session = client
        .auth()
        .login(password)
        .await
        .with_context(|| format!("couldn't authorize with pi-hole at {}", client.base_url()))?;

    let deadline = session.deadline(issued_at);
    debug!(validity = session.validity, "session acquired");

    let response = client
        .dns()
        .disable_blocking(&session, settings.duration, deadline)
        .await
        .context("failed to disable DNS blocking")?;

    info!(response = %response.trim(), "done");
    Ok(response)
}
