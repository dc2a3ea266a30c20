//! Clock abstraction for token stamping and expiry checks.
//!
//! Both managers read "now" through a [`Clock`] rather than the system
//! time directly, so expiry behavior is deterministic under test. All
//! timestamps are UTC Unix seconds; no local-timezone conversion happens
//! anywhere in the crate, and access and refresh expiry use the same
//! clock.

use time::OffsetDateTime;

/// Supplies the current time for token stamping and expiry comparisons.
pub trait Clock: Send + Sync {
    /// Current instant, UTC.
    fn now(&self) -> OffsetDateTime;

    /// Current Unix timestamp in seconds.
    fn now_unix(&self) -> i64 {
        self.now().unix_timestamp()
    }
}

/// System clock pinned to UTC.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> OffsetDateTime {
        OffsetDateTime::now_utc()
    }
}

/// A clock frozen at a fixed instant, for deterministic tests.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub OffsetDateTime);

impl Clock for FixedClock {
    fn now(&self) -> OffsetDateTime {
        self.0
    }
}
