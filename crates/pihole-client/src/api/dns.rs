//! DNS blocking endpoints.

use crate::PiholeClient;
use pihole_core::{BlockingDuration, BlockingRequest, PiholeError, Result, Session};
use std::time::Instant;
use tracing::debug;

/// DNS blocking endpoints
pub struct DnsApi<'a> {
    client: &'a PiholeClient,
}

impl<'a> DnsApi<'a> {
    pub(crate) fn new(client: &'a PiholeClient) -> Self {
        Self { client }
    }

    /// Disable DNS blocking for `duration`, returning the raw response body.
    ///
    /// The request must finish before `deadline`; once it passes the
    /// in-flight request is dropped and [`PiholeError::DeadlineExceeded`]
    /// is returned. A request is never started past the deadline. `None`
    /// means the session does not expire.
    pub async fn disable_blocking(
        &self,
        session: &Session,
        duration: BlockingDuration,
        deadline: Option<Instant>,
    ) -> Result<String> {
        let body = BlockingRequest::disable_for(duration.as_secs());
        let params: Vec<(&str, &str)> = session
            .sid
            .iter()
            .map(|sid| ("sid", sid.as_str()))
            .collect();

        debug!(timer = duration.as_secs(), "disabling blocking");
        let request = self.client.post_text("/api/dns/blocking", &params, &body);

        let Some(deadline) = deadline else {
            return request.await;
        };

        let expired = || PiholeError::DeadlineExceeded {
            validity: session.validity_window().map_or(0, |w| w.as_secs()),
        };

        if Instant::now() >= deadline {
            return Err(expired());
        }

        tokio::time::timeout_at(deadline.into(), request)
            .await
            .map_err(|_| expired())?
    }
}
