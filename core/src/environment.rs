//! Lifecycle environment.
//!
//! Bundles every external dependency of the lifecycle engine so it can be
//! injected as one value: mocks in tests, real clients in production.

use crate::providers::{AccountNumberIssuer, AccountRepository, TransactionLedger, UserDirectory};
use chrono::{DateTime, Utc};
use std::sync::Arc;

/// Clock trait - abstracts time for testability.
pub trait Clock: Send + Sync {
    /// Get the current time.
    fn now(&self) -> DateTime<Utc>;
}

/// Wall-clock time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Account lifecycle environment.
///
/// # Type Parameters
///
/// - `U`: User directory
/// - `I`: Account number issuer
/// - `L`: Transaction ledger
/// - `R`: Account repository
#[derive(Clone)]
pub struct AccountEnvironment<U, I, L, R>
where
    U: UserDirectory,
    I: AccountNumberIssuer,
    L: TransactionLedger,
    R: AccountRepository,
{
    /// User directory.
    pub users: U,

    /// Account number issuer.
    pub issuer: I,

    /// Transaction ledger.
    pub ledger: L,

    /// Account store.
    pub accounts: R,

    /// Clock used for opening dates.
    pub clock: Arc<dyn Clock>,
}

impl<U, I, L, R> AccountEnvironment<U, I, L, R>
where
    U: UserDirectory,
    I: AccountNumberIssuer,
    L: TransactionLedger,
    R: AccountRepository,
{
    /// Create a new lifecycle environment.
    #[must_use]
    pub fn new(users: U, issuer: I, ledger: L, accounts: R, clock: Arc<dyn Clock>) -> Self {
        Self {
            users,
            issuer,
            ledger,
            accounts,
            clock,
        }
    }
}
