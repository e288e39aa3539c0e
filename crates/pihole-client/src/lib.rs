//! HTTP client for the Pi-hole v6 API.
//!
//! This crate provides [`PiholeClient`], covering the two calls needed to
//! pause blocking: logging in to obtain a session and disabling DNS
//! blocking for a timer under that session.
//!
//! ```rust,ignore
//! use pihole_client::{BlockingDuration, PiholeClient};
//! use std::time::Instant;
//!
//! let client = PiholeClient::new()?;
//! let issued_at = Instant::now();
//! let session = client.auth().login("password").await?;
//! let deadline = session.deadline(issued_at);
//! let body = client
//!     .dns()
//!     .disable_blocking(&session, BlockingDuration::DEFAULT, deadline)
//!     .await?;
//! ```

#![doc(html_root_url = "https://docs.rs/pihole-client/0.1.0")]

mod client;
mod config;
pub mod api;

pub use client::{PiholeClient, PiholeClientBuilder};
pub use config::*;
pub use pihole_core::{BlockingDuration, PiholeError, Result, Session};
