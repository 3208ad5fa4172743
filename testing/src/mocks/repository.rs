//! Write-counting account repository.

use account_service_core::providers::AccountRepository;
use account_service_core::{
    Account, AccountType, InMemoryAccountRepository, NewAccount, Result, UserId,
};
use std::future::Future;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

/// In-memory repository that counts write attempts.
///
/// Rejected operations must leave this counter untouched; that is how tests
/// prove nothing was persisted.
#[derive(Debug, Clone, Default)]
pub struct RecordingRepository {
    inner: InMemoryAccountRepository,
    writes: Arc<AtomicU64>,
}

impl RecordingRepository {
    /// Create an empty repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of `insert` and `update` calls made through the trait.
    #[must_use]
    pub fn writes(&self) -> u64 {
        self.writes.load(Ordering::SeqCst)
    }

    /// Store an account directly, bypassing the write counter.
    ///
    /// # Errors
    ///
    /// Propagates uniqueness violations from the underlying store.
    pub async fn seed(&self, account: NewAccount) -> Result<Account> {
        self.inner.insert(account).await
    }

    /// The wrapped store.
    #[must_use]
    pub const fn inner(&self) -> &InMemoryAccountRepository {
        &self.inner
    }
}

impl AccountRepository for RecordingRepository {
    fn find_by_account_number(
        &self,
        account_number: &str,
    ) -> impl Future<Output = Result<Option<Account>>> + Send {
        self.inner.find_by_account_number(account_number)
    }

    fn find_by_user_id(
        &self,
        user_id: UserId,
    ) -> impl Future<Output = Result<Option<Account>>> + Send {
        self.inner.find_by_user_id(user_id)
    }

    fn find_by_user_id_and_account_type(
        &self,
        user_id: UserId,
        account_type: AccountType,
    ) -> impl Future<Output = Result<Option<Account>>> + Send {
        self.inner
            .find_by_user_id_and_account_type(user_id, account_type)
    }

    fn insert(&self, account: NewAccount) -> impl Future<Output = Result<Account>> + Send {
        self.writes.fetch_add(1, Ordering::SeqCst);
        self.inner.insert(account)
    }

    fn update(&self, account: &Account) -> impl Future<Output = Result<Account>> + Send {
        self.writes.fetch_add(1, Ordering::SeqCst);
        self.inner.update(account)
    }
}
