use serde::{Deserialize, Serialize};

/// Body of `POST /api/dns/blocking`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockingRequest {
    /// Desired blocking state
    pub blocking: bool,

    /// Seconds until the appliance reverts to the previous state
    pub timer: u64,
}

impl BlockingRequest {
    /// Disable blocking for `timer` seconds
    #[must_use]
    pub const fn disable_for(timer: u64) -> Self {
        Self {
            blocking: false,
            timer,
        }
    }
}
