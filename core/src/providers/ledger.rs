//! Transaction ledger trait.

use crate::error::Result;
use crate::types::Transaction;

/// Read access to the transaction ledger.
pub trait TransactionLedger: Send + Sync {
    /// Get all ledger entries for an account.
    ///
    /// The identifier is passed through as given; an unknown account yields an
    /// empty list.
    ///
    /// # Errors
    ///
    /// Returns `AccountError::Collaborator` if the ledger call fails.
    fn transactions_for_account(
        &self,
        account_id: &str,
    ) -> impl std::future::Future<Output = Result<Vec<Transaction>>> + Send;
}
