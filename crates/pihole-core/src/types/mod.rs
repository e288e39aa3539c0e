mod auth;
mod dns;
mod duration;

pub use auth::*;
pub use dns::*;
pub use duration::*;
