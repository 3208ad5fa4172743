//! Account lifecycle engine.
//!
//! Every operation follows the same shape:
//!
//! ```text
//! resolve referents ──► evaluate rules ──► persist ──► Response
//!        │                    │               │
//!        └────── typed AccountError, nothing written ──────┘
//! ```
//!
//! The engine holds no mutable state of its own. Concurrent requests against
//! the same key are serialized by the repository: `insert` enforces
//! uniqueness and `update` is a compare-and-swap on the record version.

use crate::config::LifecyclePolicy;
use crate::constants::messages;
use crate::dto::{AccountDto, Response};
use crate::environment::AccountEnvironment;
use crate::error::{AccountError, Result};
use crate::providers::{AccountNumberIssuer, AccountRepository, TransactionLedger, UserDirectory};
use crate::rules;
use crate::types::{
    Account, AccountNumber, AccountStatus, AccountType, Money, NewAccount, Transaction, UserId,
};
use std::time::Instant;

/// Input of [`AccountLifecycle::create_account`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateAccountRequest {
    /// Owning user.
    pub user_id: UserId,
    /// Requested account type.
    pub account_type: AccountType,
    /// Opening deposit. Zero when the applicant makes none.
    pub initial_deposit: Money,
    /// Applicant age.
    pub age: u32,
    /// Applicant salary.
    pub salary: Money,
}

/// The account lifecycle engine.
///
/// # Type Parameters
///
/// - `U`: User directory
/// - `I`: Account number issuer
/// - `L`: Transaction ledger
/// - `R`: Account repository
pub struct AccountLifecycle<U, I, L, R>
where
    U: UserDirectory,
    I: AccountNumberIssuer,
    L: TransactionLedger,
    R: AccountRepository,
{
    env: AccountEnvironment<U, I, L, R>,
    policy: LifecyclePolicy,
}

impl<U, I, L, R> AccountLifecycle<U, I, L, R>
where
    U: UserDirectory,
    I: AccountNumberIssuer,
    L: TransactionLedger,
    R: AccountRepository,
{
    /// Create an engine over the given environment and policy.
    #[must_use]
    pub const fn new(env: AccountEnvironment<U, I, L, R>, policy: LifecyclePolicy) -> Self {
        Self { env, policy }
    }

    /// The policy in effect.
    #[must_use]
    pub const fn policy(&self) -> &LifecyclePolicy {
        &self.policy
    }

    /// The injected collaborators.
    #[must_use]
    pub const fn environment(&self) -> &AccountEnvironment<U, I, L, R> {
        &self.env
    }

    /// Open a new account.
    ///
    /// Steps run strictly in order and the first failure stops the sequence:
    /// user lookup, duplicate check, eligibility, number issue, insert. No
    /// account number is consumed unless every check passed.
    ///
    /// # Errors
    ///
    /// - [`AccountError::UserNotFound`] if the user does not exist
    /// - [`AccountError::DuplicateAccount`] if the user already holds this type,
    ///   including when a concurrent request wins the insert
    /// - [`AccountError::IneligibleApplicant`] if age or salary is too low
    /// - [`AccountError::Collaborator`] / [`AccountError::DatabaseError`] on
    ///   infrastructure failure
    #[tracing::instrument(
        skip(self, request),
        name = "create_account",
        fields(user_id = %request.user_id, account_type = %request.account_type)
    )]
    pub async fn create_account(&self, request: CreateAccountRequest) -> Result<Response> {
        let started = Instant::now();
        let result = self.open(request).await;
        observe("create", started, &result);
        result
    }

    async fn open(&self, request: CreateAccountRequest) -> Result<Response> {
        self.env.users.read_user_by_id(request.user_id).await?;

        if self
            .env
            .accounts
            .find_by_user_id_and_account_type(request.user_id, request.account_type)
            .await?
            .is_some()
        {
            return Err(AccountError::DuplicateAccount {
                user_id: request.user_id,
                account_type: request.account_type,
            });
        }

        if let Err(reason) = rules::check_eligibility(&self.policy, request.age, request.salary) {
            tracing::debug!(%reason, "Applicant failed eligibility");
            return Err(reason.into());
        }

        let sequence = self.env.issuer.generate_account_number().await?;
        let account_number = AccountNumber::from_sequence(
            &self.policy.account_number_prefix,
            self.policy.account_number_width,
            sequence,
        );

        let new_account = NewAccount {
            account_number: account_number.clone(),
            account_type: request.account_type,
            account_status: AccountStatus::Pending,
            opening_date: self.env.clock.now().date_naive(),
            available_balance: request.initial_deposit,
            user_id: request.user_id,
            age: request.age,
            salary: request.salary,
        };

        let account = self.env.accounts.insert(new_account).await.inspect_err(|e| {
            if matches!(e, AccountError::DuplicateAccount { .. }) {
                tracing::warn!(
                    %account_number,
                    "Concurrent create won the uniqueness race, issued number left unused"
                );
            }
        })?;

        tracing::info!(
            account_id = %account.account_id,
            account_number = %account.account_number,
            "Account created"
        );
        Ok(Response::success(messages::ACCOUNT_CREATED))
    }

    /// Change the status of an account.
    ///
    /// Only `PENDING → ACTIVE` is accepted, guarded by the activation balance.
    ///
    /// # Errors
    ///
    /// - [`AccountError::AccountNotFound`] if no account has this number
    /// - [`AccountError::IllegalTransition`] if the move is not in the state machine
    /// - [`AccountError::InsufficientFunds`] if the balance is below the minimum
    /// - [`AccountError::ConcurrentModification`] if the record changed meanwhile
    #[tracing::instrument(skip(self), name = "update_status")]
    pub async fn update_status(
        &self,
        account_number: &str,
        requested: AccountStatus,
    ) -> Result<Response> {
        let started = Instant::now();
        let result = self.transition(account_number, requested).await;
        observe("update_status", started, &result);
        result
    }

    async fn transition(&self, account_number: &str, requested: AccountStatus) -> Result<Response> {
        let mut account = self.resolve(account_number).await?;
        rules::check_status_transition(&self.policy, &account, requested)?;

        let from = account.account_status;
        account.account_status = requested;
        self.env.accounts.update(&account).await?;

        tracing::info!(%account_number, %from, to = %requested, "Account status updated");
        Ok(Response::success(messages::ACCOUNT_UPDATED))
    }

    /// Record a new balance reported by the ledger.
    ///
    /// Every other field of the record is left untouched.
    ///
    /// # Errors
    ///
    /// - [`AccountError::AccountNotFound`] if no account has this number
    /// - [`AccountError::IllegalTransition`] if the account is closed
    /// - [`AccountError::ConcurrentModification`] if the record changed meanwhile
    #[tracing::instrument(skip(self), name = "update_balance")]
    pub async fn update_balance(&self, account_number: &str, balance: Money) -> Result<Response> {
        let started = Instant::now();
        let result = self.record_balance(account_number, balance).await;
        observe("update_balance", started, &result);
        result
    }

    async fn record_balance(&self, account_number: &str, balance: Money) -> Result<Response> {
        let mut account = self.resolve(account_number).await?;
        rules::check_balance_update(&account)?;

        account.available_balance = balance;
        self.env.accounts.update(&account).await?;

        tracing::info!(%account_number, %balance, "Account balance updated");
        Ok(Response::success(messages::ACCOUNT_UPDATED))
    }

    /// Read an account by its number.
    ///
    /// # Errors
    ///
    /// Returns [`AccountError::AccountNotFound`] if no account has this number.
    #[tracing::instrument(skip(self), name = "read_by_account_number")]
    pub async fn read_by_account_number(&self, account_number: &str) -> Result<AccountDto> {
        let account = self.resolve(account_number).await?;
        Ok(AccountDto::from(&account))
    }

    /// Read a user's account. Only active accounts are visible this way.
    ///
    /// # Errors
    ///
    /// - [`AccountError::AccountNotFound`] if the user has no account
    /// - [`AccountError::InactiveAccount`] if the account is not `ACTIVE`
    #[tracing::instrument(skip(self), name = "read_by_user_id")]
    pub async fn read_by_user_id(&self, user_id: UserId) -> Result<AccountDto> {
        let account = self
            .env
            .accounts
            .find_by_user_id(user_id)
            .await?
            .ok_or(AccountError::AccountNotFound)?;

        if account.account_status != AccountStatus::Active {
            return Err(AccountError::InactiveAccount {
                status: account.account_status,
            });
        }

        Ok(AccountDto::from(&account))
    }

    /// Current balance formatted with two decimals, e.g. `"1000.00"`.
    ///
    /// # Errors
    ///
    /// Returns [`AccountError::AccountNotFound`] if no account has this number.
    #[tracing::instrument(skip(self), name = "get_balance")]
    pub async fn get_balance(&self, account_number: &str) -> Result<String> {
        let account = self.resolve(account_number).await?;
        Ok(account.available_balance.to_string())
    }

    /// Ledger entries for an account, exactly as the ledger returned them.
    ///
    /// # Errors
    ///
    /// Returns [`AccountError::Collaborator`] if the ledger call fails.
    #[tracing::instrument(skip(self), name = "get_transactions")]
    pub async fn get_transactions(&self, account_id: &str) -> Result<Vec<Transaction>> {
        self.env.ledger.transactions_for_account(account_id).await
    }

    /// Close an account. The balance must be exactly zero.
    ///
    /// # Errors
    ///
    /// - [`AccountError::AccountNotFound`] if no account has this number
    /// - [`AccountError::AccountClosing`] if money remains on the account
    /// - [`AccountError::IllegalTransition`] if it is already closed
    /// - [`AccountError::ConcurrentModification`] if the record changed meanwhile
    #[tracing::instrument(skip(self), name = "close_account")]
    pub async fn close_account(&self, account_number: &str) -> Result<Response> {
        let started = Instant::now();
        let result = self.close(account_number).await;
        observe("close", started, &result);
        result
    }

    async fn close(&self, account_number: &str) -> Result<Response> {
        let mut account = self.resolve(account_number).await?;
        rules::check_closure(&account)?;

        account.account_status = AccountStatus::Closed;
        self.env.accounts.update(&account).await?;

        tracing::info!(%account_number, "Account closed");
        Ok(Response::success(messages::ACCOUNT_CLOSED))
    }

    async fn resolve(&self, account_number: &str) -> Result<Account> {
        self.env
            .accounts
            .find_by_account_number(account_number)
            .await?
            .ok_or(AccountError::AccountNotFound)
    }
}

/// Records metrics and logs the outcome of a mutating operation.
fn observe<T>(operation: &'static str, started: Instant, result: &Result<T>) {
    let outcome = match result {
        Ok(_) => "success",
        Err(e) => e.code(),
    };

    if let Err(e) = result {
        if e.is_rule_violation() {
            tracing::warn!(operation, code = e.code(), error = %e, "Lifecycle operation rejected");
        } else {
            tracing::error!(operation, code = e.code(), error = %e, "Lifecycle operation failed");
        }
    }

    metrics::counter!(
        "account_lifecycle_operations_total",
        "operation" => operation,
        "outcome" => outcome
    )
    .increment(1);
    metrics::histogram!("account_lifecycle_duration_seconds", "operation" => operation)
        .record(started.elapsed().as_secs_f64());
}
