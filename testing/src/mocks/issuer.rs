//! Mock account number issuer.

use account_service_core::providers::AccountNumberIssuer;
use account_service_core::{AccountError, Result};
use std::future::Future;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};

/// Sequential issuer starting at 1.
///
/// Counts calls so tests can assert that no number was consumed.
#[derive(Debug, Clone, Default)]
pub struct MockAccountNumberIssuer {
    issued: Arc<AtomicU64>,
    unavailable: Arc<AtomicBool>,
}

impl MockAccountNumberIssuer {
    /// Create an issuer whose first value is 1.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of values issued so far.
    #[must_use]
    pub fn calls(&self) -> u64 {
        self.issued.load(Ordering::SeqCst)
    }

    /// Toggle simulated outage.
    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }
}

impl AccountNumberIssuer for MockAccountNumberIssuer {
    fn generate_account_number(&self) -> impl Future<Output = Result<u64>> + Send {
        let result = if self.unavailable.load(Ordering::SeqCst) {
            Err(AccountError::Collaborator {
                service: "sequence-generator",
                message: "connection refused".to_string(),
            })
        } else {
            Ok(self.issued.fetch_add(1, Ordering::SeqCst) + 1)
        };

        async move { result }
    }
}
