//! System clock adapter.

use chrono::{DateTime, Utc};

use crate::ports::Clock;

/// Clock reading the system time.
pub struct LiveClock;

impl Clock for LiveClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}
