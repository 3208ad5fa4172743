//! Mock transaction ledger.

use account_service_core::providers::TransactionLedger;
use account_service_core::{AccountError, Result, Transaction};
use std::collections::HashMap;
use std::future::Future;
use std::sync::{Arc, Mutex};

/// In-memory ledger keyed by account id string.
#[derive(Debug, Clone, Default)]
pub struct MockTransactionLedger {
    entries: Arc<Mutex<HashMap<String, Vec<Transaction>>>>,
}

impl MockTransactionLedger {
    /// Create an empty ledger.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry for `account_id`.
    #[allow(clippy::unwrap_used)] // Test mock: mutex poisoning is a test failure
    pub fn record(&self, account_id: &str, transaction: Transaction) {
        self.entries
            .lock()
            .unwrap()
            .entry(account_id.to_string())
            .or_default()
            .push(transaction);
    }
}

impl TransactionLedger for MockTransactionLedger {
    fn transactions_for_account(
        &self,
        account_id: &str,
    ) -> impl Future<Output = Result<Vec<Transaction>>> + Send {
        let entries = Arc::clone(&self.entries);
        let account_id = account_id.to_string();

        async move {
            Ok(entries
                .lock()
                .map_err(|_| AccountError::InternalError)?
                .get(&account_id)
                .cloned()
                .unwrap_or_default())
        }
    }
}
