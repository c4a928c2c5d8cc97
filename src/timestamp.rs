use std::time::{SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};

/// A serializable representation of a timestamp
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct TimeStamp {
    /// Seconds since Unix epoch
    pub seconds: u64,
    /// Nanoseconds part
    pub nanos: u32,
}

impl TimeStamp {
    /// Create a new timestamp from the current system time
    ///
    /// # Panics
    ///
    /// Panics if the system time is before the Unix epoch.
    #[must_use]
    pub fn now() -> Self {
        let now = SystemTime::now();
        #[allow(clippy::expect_used)]
        let duration = now.duration_since(UNIX_EPOCH).expect("System time is before UNIX epoch");

        Self { seconds: duration.as_secs(), nanos: duration.subsec_nanos() }
    }
}
