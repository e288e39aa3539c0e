//! Core types and errors for the Pi-hole API client.
//!
//! This crate provides the foundational types shared by the client and CLI:
//!
//! - **Types**: The request and response shapes of the authentication and
//!   DNS blocking endpoints, plus [`BlockingDuration`]
//! - **Errors**: Every failure of the pause flow as a [`PiholeError`]
//!
//! # Example
//!
//! ```rust,ignore
//! use pihole_core::{BlockingDuration, Result};
//!
//! fn timer() -> Result<u64> {
//!     let duration: BlockingDuration = "5m".parse()?;
//!     Ok(duration.as_secs())
//! }
//! ```

#![doc(html_root_url = "https://docs.rs/pihole-core/0.1.0")]

mod error;
pub mod types;

pub use error::{PiholeError, Result};
pub use types::*;
