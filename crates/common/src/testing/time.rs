//! Mock clock for deterministic testing
//!
//! # Examples
//!
//! ```ignore
//! use canto_common::testing::MockClock;
//! use canto_common::Clock;
//! use chrono::{Duration, TimeZone, Utc};
//!
//! let start = Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap();
//! let clock = MockClock::at(start);
//! clock.advance(Duration::seconds(5));
//! assert_eq!(clock.now(), start + Duration::seconds(5));
//! ```

use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use parking_lot::Mutex;

use crate::time::{Clock, SharedClock};

/// Clock that only moves when told to.
#[derive(Debug, Clone)]
pub struct MockClock {
    now: Arc<Mutex<DateTime<Utc>>>,
}

impl MockClock {
    /// Create a clock frozen at the current real time.
    #[must_use]
    pub fn new() -> Self {
        Self::at(Utc::now())
    }

    /// Create a clock frozen at `instant`.
    #[must_use]
    pub fn at(instant: DateTime<Utc>) -> Self {
        Self { now: Arc::new(Mutex::new(instant)) }
    }

    /// Simulate time passing without waiting.
    pub fn advance(&self, by: Duration) {
        let mut now = self.now.lock();
        *now += by;
    }

    /// Jump to an absolute time.
    pub fn set(&self, instant: DateTime<Utc>) {
        *self.now.lock() = instant;
    }

    /// Share this clock as a [`SharedClock`] while keeping a handle for
    /// advancing it.
    #[must_use]
    pub fn shared(&self) -> SharedClock {
        Arc::new(self.clone())
    }
}

impl Default for MockClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for MockClock {
    fn now(&self) -> DateTime<Utc> {
        *self.now.lock()
    }
}
