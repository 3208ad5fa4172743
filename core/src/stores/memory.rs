//! In-memory account repository.
//!
//! Records live in a map keyed by `AccountId` with two secondary unique
//! indexes. All indexes sit behind one lock, so the uniqueness check and the
//! write of `insert` (and the version check and write of `update`) are a
//! single atomic step.

use crate::error::{AccountError, Result};
use crate::providers::AccountRepository;
use crate::types::{Account, AccountId, AccountType, NewAccount, UserId};
use std::collections::{BTreeMap, HashMap};
use std::future::Future;
use std::sync::{Arc, RwLock};

#[derive(Debug, Default)]
struct Tables {
    accounts: BTreeMap<AccountId, Account>,
    by_number: HashMap<String, AccountId>,
    by_owner_and_type: HashMap<(UserId, AccountType), AccountId>,
    last_id: i64,
}

/// In-memory account repository.
///
/// Cheap to clone; clones share the same tables.
#[derive(Debug, Clone, Default)]
pub struct InMemoryAccountRepository {
    tables: Arc<RwLock<Tables>>,
}

impl InMemoryAccountRepository {
    /// Create an empty repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored accounts.
    ///
    /// # Errors
    ///
    /// Returns `AccountError::InternalError` if the lock is poisoned.
    pub fn len(&self) -> Result<usize> {
        Ok(self
            .tables
            .read()
            .map_err(|_| AccountError::InternalError)?
            .accounts
            .len())
    }

    /// Checks if the repository holds no accounts.
    ///
    /// # Errors
    ///
    /// Returns `AccountError::InternalError` if the lock is poisoned.
    pub fn is_empty(&self) -> Result<bool> {
        Ok(self.len()? == 0)
    }

    fn lookup<F>(&self, select: F) -> Result<Option<Account>>
    where
        F: FnOnce(&Tables) -> Option<AccountId>,
    {
        let tables = self.tables.read().map_err(|_| AccountError::InternalError)?;
        Ok(select(&tables).and_then(|id| tables.accounts.get(&id).cloned()))
    }
}

impl AccountRepository for InMemoryAccountRepository {
    fn find_by_account_number(
        &self,
        account_number: &str,
    ) -> impl Future<Output = Result<Option<Account>>> + Send {
        let result = self.lookup(|t| t.by_number.get(account_number).copied());
        async move { result }
    }

    fn find_by_user_id(
        &self,
        user_id: UserId,
    ) -> impl Future<Output = Result<Option<Account>>> + Send {
        let result = self.lookup(|t| {
            t.accounts
                .values()
                .find(|a| a.user_id == user_id)
                .map(|a| a.account_id)
        });
        async move { result }
    }

    fn find_by_user_id_and_account_type(
        &self,
        user_id: UserId,
        account_type: AccountType,
    ) -> impl Future<Output = Result<Option<Account>>> + Send {
        let result = self.lookup(|t| t.by_owner_and_type.get(&(user_id, account_type)).copied());
        async move { result }
    }

    fn insert(&self, account: NewAccount) -> impl Future<Output = Result<Account>> + Send {
        let tables = Arc::clone(&self.tables);

        async move {
            let mut tables = tables.write().map_err(|_| AccountError::InternalError)?;

            let owner_key = (account.user_id, account.account_type);
            if tables.by_owner_and_type.contains_key(&owner_key) {
                return Err(AccountError::DuplicateAccount {
                    user_id: account.user_id,
                    account_type: account.account_type,
                });
            }
            if tables.by_number.contains_key(account.account_number.as_str()) {
                return Err(AccountError::DatabaseError(format!(
                    "Account number {} already exists",
                    account.account_number
                )));
            }

            tables.last_id += 1;
            let account = account.into_account(AccountId(tables.last_id));

            tables
                .by_number
                .insert(account.account_number.to_string(), account.account_id);
            tables.by_owner_and_type.insert(owner_key, account.account_id);
            tables.accounts.insert(account.account_id, account.clone());

            Ok(account)
        }
    }

    fn update(&self, account: &Account) -> impl Future<Output = Result<Account>> + Send {
        let tables = Arc::clone(&self.tables);
        let account = account.clone();

        async move {
            let mut tables = tables.write().map_err(|_| AccountError::InternalError)?;

            let stored = tables
                .accounts
                .get_mut(&account.account_id)
                .ok_or(AccountError::AccountNotFound)?;

            if stored.version != account.version {
                return Err(AccountError::ConcurrentModification {
                    account_number: account.account_number.to_string(),
                });
            }

            // Identity and snapshot fields are immutable; only status and
            // balance are taken from the caller.
            stored.account_status = account.account_status;
            stored.available_balance = account.available_balance;
            stored.version += 1;

            Ok(stored.clone())
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::types::{AccountNumber, AccountStatus, Money};
    use chrono::NaiveDate;

    fn new_account(number: &str, user: i64, account_type: AccountType) -> NewAccount {
        NewAccount {
            account_number: AccountNumber::new(number),
            account_type,
            account_status: AccountStatus::Pending,
            opening_date: NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
            available_balance: Money::ZERO,
            user_id: UserId(user),
            age: 25,
            salary: Money::from_major(60_000),
        }
    }

    #[tokio::test]
    async fn insert_assigns_sequential_ids() {
        let repo = InMemoryAccountRepository::new();
        let a = repo
            .insert(new_account("1", 1, AccountType::SavingsAccount))
            .await
            .unwrap();
        let b = repo
            .insert(new_account("2", 1, AccountType::FixedDeposit))
            .await
            .unwrap();

        assert_eq!(a.account_id, AccountId(1));
        assert_eq!(b.account_id, AccountId(2));
        assert_eq!(a.version, 0);
        assert_eq!(repo.len().unwrap(), 2);
    }

    #[tokio::test]
    async fn insert_enforces_one_account_per_type() {
        let repo = InMemoryAccountRepository::new();
        repo.insert(new_account("1", 1, AccountType::SavingsAccount))
            .await
            .unwrap();

        let result = repo
            .insert(new_account("2", 1, AccountType::SavingsAccount))
            .await;

        assert!(matches!(result, Err(AccountError::DuplicateAccount { .. })));
        assert_eq!(repo.len().unwrap(), 1);
    }

    #[tokio::test]
    async fn insert_enforces_unique_account_number() {
        let repo = InMemoryAccountRepository::new();
        repo.insert(new_account("1", 1, AccountType::SavingsAccount))
            .await
            .unwrap();

        let result = repo
            .insert(new_account("1", 2, AccountType::SavingsAccount))
            .await;

        assert!(matches!(result, Err(AccountError::DatabaseError(_))));
    }

    #[tokio::test]
    async fn lookups() {
        let repo = InMemoryAccountRepository::new();
        repo.insert(new_account("1", 7, AccountType::LoanAccount))
            .await
            .unwrap();
        repo.insert(new_account("2", 7, AccountType::SavingsAccount))
            .await
            .unwrap();

        let by_number = repo.find_by_account_number("2").await.unwrap().unwrap();
        assert_eq!(by_number.account_type, AccountType::SavingsAccount);

        // Earliest-created account wins
        let by_user = repo.find_by_user_id(UserId(7)).await.unwrap().unwrap();
        assert_eq!(by_user.account_number.as_str(), "1");

        assert!(repo
            .find_by_user_id_and_account_type(UserId(7), AccountType::FixedDeposit)
            .await
            .unwrap()
            .is_none());
        assert!(repo.find_by_account_number("missing").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn update_is_compare_and_swap() {
        let repo = InMemoryAccountRepository::new();
        let stored = repo
            .insert(new_account("1", 1, AccountType::SavingsAccount))
            .await
            .unwrap();

        let mut first = stored.clone();
        first.account_status = AccountStatus::Active;
        let updated = repo.update(&first).await.unwrap();
        assert_eq!(updated.version, 1);
        assert_eq!(updated.account_status, AccountStatus::Active);

        // Second writer still holds version 0
        let mut stale = stored;
        stale.available_balance = Money::from_major(10);
        assert!(matches!(
            repo.update(&stale).await,
            Err(AccountError::ConcurrentModification { .. })
        ));

        let current = repo.find_by_account_number("1").await.unwrap().unwrap();
        assert_eq!(current.available_balance, Money::ZERO);
    }
}
