//! Account number issuer trait.

use crate::error::Result;

/// Source of unique account number sequence values.
///
/// The engine formats the returned value with the policy prefix; see
/// [`crate::types::AccountNumber::from_sequence`].
pub trait AccountNumberIssuer: Send + Sync {
    /// Issue the next sequence value.
    ///
    /// Every call consumes a value, so the engine only calls this once all
    /// creation checks have passed.
    ///
    /// # Errors
    ///
    /// Returns `AccountError::Collaborator` if the issuer is unreachable.
    fn generate_account_number(&self) -> impl std::future::Future<Output = Result<u64>> + Send;
}
