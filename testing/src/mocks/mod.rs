//! Mock implementations of the collaborator traits.
//!
//! All mocks are cheap to clone and clones share state.

mod issuer;
mod ledger;
mod repository;
mod users;

pub use issuer::MockAccountNumberIssuer;
pub use ledger::MockTransactionLedger;
pub use repository::RecordingRepository;
pub use users::MockUserDirectory;

use account_service_core::Clock;
use chrono::{DateTime, Utc};

/// Fixed clock for deterministic tests.
///
/// # Example
///
/// ```
/// use account_service_testing::mocks::FixedClock;
/// use account_service_core::Clock;
/// use chrono::Utc;
///
/// let clock = FixedClock::new(Utc::now());
/// assert_eq!(clock.now(), clock.now());
/// ```
#[derive(Debug, Clone)]
pub struct FixedClock {
    time: DateTime<Utc>,
}

impl FixedClock {
    /// Create a new fixed clock with the given time.
    #[must_use]
    pub const fn new(time: DateTime<Utc>) -> Self {
        Self { time }
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.time
    }
}

/// Create a fixed clock set to 2025-01-01 00:00:00 UTC.
///
/// # Panics
///
/// Panics if the hardcoded timestamp fails to parse.
#[must_use]
#[allow(clippy::expect_used)]
pub fn test_clock() -> FixedClock {
    FixedClock::new(
        DateTime::parse_from_rfc3339("2025-01-01T00:00:00Z")
            .expect("hardcoded timestamp should always parse")
            .with_timezone(&Utc),
    )
}
