//! Main Pi-hole API client implementation.

use crate::api::{AuthApi, DnsApi};
use crate::config::ClientConfig;
use pihole_core::{PiholeError, Result};
use reqwest::{Client as HttpClient, StatusCode};
use serde::de::DeserializeOwned;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};
use url::Url;

/// Main Pi-hole API client
#[derive(Clone)]
pub struct PiholeClient {
    inner: Arc<ClientInner>,
}

struct ClientInner {
    http: HttpClient,
    base_url: Url,
}

impl PiholeClient {
    /// Create a client for the default appliance address
    pub fn new() -> Result<Self> {
        PiholeClientBuilder::new().build()
    }

    /// Create a builder for custom configuration
    #[must_use]
    pub fn builder() -> PiholeClientBuilder {
        PiholeClientBuilder::new()
    }

    /// Access authentication endpoints
    #[must_use]
    pub fn auth(&self) -> AuthApi<'_> {
        AuthApi::new(self)
    }

    /// Access DNS control endpoints
    #[must_use]
    pub fn dns(&self) -> DnsApi<'_> {
        DnsApi::new(self)
    }

    /// The appliance base URL
    #[must_use]
    pub fn base_url(&self) -> &Url {
        &self.inner.base_url
    }

    /// Perform a POST request with a JSON body and decode the JSON response
    pub(crate) async fn post<T: DeserializeOwned, B: serde::Serialize>(
        &self,
        path: &str,
        params: &[(&str, &str)],
        body: &B,
    ) -> Result<T> {
        let body = self.post_text(path, params, body).await?;
        serde_json::from_str(&body).map_err(PiholeError::Json)
    }

    /// Perform a POST request with a JSON body and return the raw response text
    pub(crate) async fn post_text<B: serde::Serialize>(
        &self,
        path: &str,
        params: &[(&str, &str)],
        body: &B,
    ) -> Result<String> {
        let url = self.build_url(path, params)?;
        debug!(path = %path, "POST request");

        let response = self
            .inner
            .http
            .post(url)
            .json(body)
            .send()
            .await
            .map_err(|e| PiholeError::Http(e.to_string()))?;

        self.handle_response(response).await
    }

    /// Build a URL with query parameters
    fn build_url(&self, path: &str, params: &[(&str, &str)]) -> Result<Url> {
        let base = self.inner.base_url.as_str().trim_end_matches('/');
        let mut url = Url::parse(&format!("{base}{path}"))
            .map_err(|e| PiholeError::InvalidUrl(e.to_string()))?;

        if !params.is_empty() {
            url.query_pairs_mut().extend_pairs(params);
        }

        Ok(url)
    }

    /// Read the body of a successful response, or convert a failed one
    async fn handle_response(&self, response: reqwest::Response) -> Result<String> {
        let status = response.status();

        if is_successful_status(status) {
            response
                .text()
                .await
                .map_err(|e| PiholeError::Http(e.to_string()))
        } else {
            self.handle_error(status.as_u16(), response).await
        }
    }

    /// Convert an error response to a PiholeError
    async fn handle_error<T>(&self, status: u16, response: reqwest::Response) -> Result<T> {
        let body = response.text().await.unwrap_or_default();
        let message = error_message(&body);

        match status {
            401 => {
                warn!(message = %message, "Pi-hole rejected the credentials");
                Err(PiholeError::Unauthorized { message })
            }
            _ => Err(PiholeError::Api {
                code: status,
                message,
            }),
        }
    }
}

/// Anything below 400 counts as success, redirects included
fn is_successful_status(status: StatusCode) -> bool {
    (200..400).contains(&status.as_u16())
}

/// Extract `error.message` from a Pi-hole error body, falling back to the raw body
fn error_message(body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| {
            let error = v.get("error")?;
            error
                .get("message")
                .and_then(|m| m.as_str())
                .or_else(|| error.as_str())
                .map(String::from)
        })
        .unwrap_or_else(|| body.to_string())
}

/// Builder for configuring a [`PiholeClient`]
pub struct PiholeClientBuilder {
    config: ClientConfig,
}

impl PiholeClientBuilder {
    /// Create a new builder with default settings
    #[must_use]
    pub fn new() -> Self {
        Self::from_config(ClientConfig::default())
    }

    /// Start from an existing configuration
    #[must_use]
    pub const fn from_config(config: ClientConfig) -> Self {
        Self { config }
    }

    /// Set the base URL (useful for testing)
    #[must_use]
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.config.base_url = url.into();
        self
    }

    /// Set the request timeout
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = timeout;
        self
    }

    /// Build the client
    pub fn build(self) -> Result<PiholeClient> {
        let base_url = Url::parse(&self.config.base_url)
            .map_err(|e| PiholeError::InvalidUrl(format!("{}: {e}", self.config.base_url)))?;

        if !matches!(base_url.scheme(), "http" | "https") {
            return Err(PiholeError::InvalidUrl(format!(
                "{}: scheme must be http or https",
                self.config.base_url
            )));
        }

        let http = HttpClient::builder()
            .timeout(self.config.timeout)
            .user_agent(&self.config.user_agent)
            .gzip(true)
            .build()
            .map_err(|e| PiholeError::Config(e.to_string()))?;

        Ok(PiholeClient {
            inner: Arc::new(ClientInner { http, base_url }),
        })
    }
}

impl Default for PiholeClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_url() {
        let client = PiholeClient::builder()
            .base_url("http://pi.hole/")
            .build()
            .unwrap();

        assert_eq!(
            client.build_url("/api/auth", &[]).unwrap().as_str(),
            "http://pi.hole/api/auth"
        );
        assert_eq!(
            client
                .build_url("/api/dns/blocking", &[("sid", "abc")])
                .unwrap()
                .as_str(),
            "http://pi.hole/api/dns/blocking?sid=abc"
        );
    }

    #[test]
    fn test_sid_is_encoded() {
        let client = PiholeClient::new().unwrap();
        let url = client
            .build_url("/api/dns/blocking", &[("sid", "vFA+EP4M&Jnw=")])
            .unwrap();
        assert_eq!(url.query(), Some("sid=vFA%2BEP4M%26Jnw%3D"));
    }

    #[test]
    fn test_base_url_with_path() {
        let client = PiholeClient::builder()
            .base_url("https://gateway.lan/pihole")
            .build()
            .unwrap();
        assert_eq!(
            client.build_url("/api/auth", &[]).unwrap().as_str(),
            "https://gateway.lan/pihole/api/auth"
        );
    }

    #[test]
    fn test_invalid_base_url() {
        let err = PiholeClient::builder().base_url("not a url").build().err();
        assert!(matches!(err, Some(PiholeError::InvalidUrl(_))));

        let err = PiholeClient::builder().base_url("ftp://pi.hole").build().err();
        assert!(matches!(err, Some(PiholeError::InvalidUrl(_))));
    }

    #[test]
    fn test_successful_status_range() {
        assert!(is_successful_status(StatusCode::OK));
        assert!(is_successful_status(StatusCode::FOUND));
        assert!(!is_successful_status(StatusCode::SWITCHING_PROTOCOLS));
        assert!(!is_successful_status(StatusCode::BAD_REQUEST));
        assert!(!is_successful_status(StatusCode::UNAUTHORIZED));
    }

    #[test]
    fn test_error_message() {
        let body = r#"{"error":{"key":"unauthorized","message":"Unauthorized","hint":null},"took":0.1}"#;
        assert_eq!(error_message(body), "Unauthorized");
        assert_eq!(error_message(r#"{"error":"bad request"}"#), "bad request");
        assert_eq!(error_message("<html>oops</html>"), "<html>oops</html>");
    }
}
