//! API endpoint modules.

mod auth;
mod dns;

pub use auth::AuthApi;
pub use dns::DnsApi;
