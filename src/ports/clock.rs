//! Clock port.

use chrono::{DateTime, Utc};

/// Source of the current time, used to stamp attachments.
pub trait Clock: Send + Sync {
    /// Returns the current UTC time.
    fn now(&self) -> DateTime<Utc>;
}
