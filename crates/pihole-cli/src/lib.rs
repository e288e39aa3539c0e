//! # pihole-cli
//!
//! Command-line tool that temporarily disables DNS blocking on a Pi-hole.
//!
//! ## Flow
//!
//! 1. Resolve the pause duration (positional argument, config file, or 1m)
//! 2. Prompt for the web interface password without echo
//! 3. Log in to `/api/auth` to obtain a session
//! 4. Disable blocking via `/api/dns/blocking` before the session expires

pub mod cli;
pub mod config;
pub mod logging;

pub use cli::run;
