//! Account repository trait.
//!
//! The repository is the only holder of durable state. It owns the two
//! consistency guarantees the engine relies on:
//!
//! - **Uniqueness**: `account_number` and `(user_id, account_type)` are unique.
//!   `insert` checks and writes atomically.
//! - **Compare-and-swap**: `update` only succeeds if the stored `version` still
//!   equals the version the caller read.

use crate::error::Result;
use crate::types::{Account, AccountType, NewAccount, UserId};

/// Account store.
pub trait AccountRepository: Send + Sync {
    /// Find an account by its account number.
    ///
    /// # Errors
    ///
    /// Returns `AccountError::DatabaseError` if the query fails.
    fn find_by_account_number(
        &self,
        account_number: &str,
    ) -> impl std::future::Future<Output = Result<Option<Account>>> + Send;

    /// Find the earliest-created account of a user.
    ///
    /// # Errors
    ///
    /// Returns `AccountError::DatabaseError` if the query fails.
    fn find_by_user_id(
        &self,
        user_id: UserId,
    ) -> impl std::future::Future<Output = Result<Option<Account>>> + Send;

    /// Find a user's account of the given type.
    ///
    /// # Errors
    ///
    /// Returns `AccountError::DatabaseError` if the query fails.
    fn find_by_user_id_and_account_type(
        &self,
        user_id: UserId,
        account_type: AccountType,
    ) -> impl std::future::Future<Output = Result<Option<Account>>> + Send;

    /// Insert a new account, assigning its identifier.
    ///
    /// The returned record has `version == 0`.
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - The user already holds this account type → `AccountError::DuplicateAccount`
    /// - The account number is taken → `AccountError::DatabaseError`
    /// - The write fails → `AccountError::DatabaseError`
    fn insert(
        &self,
        account: NewAccount,
    ) -> impl std::future::Future<Output = Result<Account>> + Send;

    /// Replace a stored account if its version is unchanged.
    ///
    /// `account.version` is the version the caller read. On success the stored
    /// record, with `version + 1`, is returned.
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - No record with this id exists → `AccountError::AccountNotFound`
    /// - The stored version differs → `AccountError::ConcurrentModification`
    /// - The write fails → `AccountError::DatabaseError`
    fn update(
        &self,
        account: &Account,
    ) -> impl std::future::Future<Output = Result<Account>> + Send;
}
