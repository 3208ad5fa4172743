//! PostgreSQL account repository implementation.
//!
//! Money columns hold cents as `BIGINT`; enum columns hold their wire names
//! (`SAVINGS_ACCOUNT`, `ACTIVE`, ...).

use account_service_core::providers::AccountRepository;
use account_service_core::{
    Account, AccountError, AccountId, AccountNumber, AccountType, Money, NewAccount, Result,
    UserId,
};
use chrono::NaiveDate;
use sqlx::postgres::{PgArguments, PgPool, PgPoolOptions, PgRow};
use sqlx::{Postgres, Row};
use std::time::Duration;

type PgQuery<'q> = sqlx::query::Query<'q, Postgres, PgArguments>;

const SELECT_BY_NUMBER: &str = r"
    SELECT account_id, account_number, account_type, account_status, opening_date,
           available_balance, user_id, age, salary, version
    FROM accounts
    WHERE account_number = $1
";

const SELECT_EARLIEST_BY_USER: &str = r"
    SELECT account_id, account_number, account_type, account_status, opening_date,
           available_balance, user_id, age, salary, version
    FROM accounts
    WHERE user_id = $1
    ORDER BY account_id ASC
    LIMIT 1
";

const SELECT_BY_USER_AND_TYPE: &str = r"
    SELECT account_id, account_number, account_type, account_status, opening_date,
           available_balance, user_id, age, salary, version
    FROM accounts
    WHERE user_id = $1 AND account_type = $2
";

const OWNER_TYPE_CONSTRAINT: &str = "accounts_user_id_account_type_key";

/// PostgreSQL account repository.
#[derive(Clone, Debug)]
pub struct PostgresAccountRepository {
    /// PostgreSQL connection pool.
    pool: PgPool,
}

impl PostgresAccountRepository {
    /// Create a repository over an existing pool.
    #[must_use]
    pub const fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Open a connection pool and wrap it.
    ///
    /// # Errors
    ///
    /// Returns [`AccountError::DatabaseError`] if the database is unreachable.
    pub async fn connect(
        database_url: &str,
        max_connections: u32,
        connect_timeout: Duration,
    ) -> Result<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .acquire_timeout(connect_timeout)
            .connect(database_url)
            .await
            .map_err(|e| AccountError::DatabaseError(format!("Failed to connect: {e}")))?;

        tracing::info!(max_connections, "Connected to PostgreSQL");
        Ok(Self::new(pool))
    }

    /// Run database migrations.
    ///
    /// # Errors
    ///
    /// Returns [`AccountError::DatabaseError`] if migrations fail.
    pub async fn migrate(&self) -> Result<()> {
        sqlx::migrate!("./migrations")
            .run(&self.pool)
            .await
            .map_err(|e| AccountError::DatabaseError(format!("Migration failed: {e}")))?;
        Ok(())
    }

    /// The underlying pool.
    #[must_use]
    pub const fn pool(&self) -> &PgPool {
        &self.pool
    }

    async fn fetch_account(&self, query: PgQuery<'_>) -> Result<Option<Account>> {
        let row = query
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AccountError::DatabaseError(format!("Failed to get account: {e}")))?;

        row.as_ref().map(account_from_row).transpose()
    }
}

impl AccountRepository for PostgresAccountRepository {
    async fn find_by_account_number(&self, account_number: &str) -> Result<Option<Account>> {
        self.fetch_account(sqlx::query(SELECT_BY_NUMBER).bind(account_number))
            .await
    }

    async fn find_by_user_id(&self, user_id: UserId) -> Result<Option<Account>> {
        self.fetch_account(sqlx::query(SELECT_EARLIEST_BY_USER).bind(user_id.0))
            .await
    }

    async fn find_by_user_id_and_account_type(
        &self,
        user_id: UserId,
        account_type: AccountType,
    ) -> Result<Option<Account>> {
        self.fetch_account(
            sqlx::query(SELECT_BY_USER_AND_TYPE)
                .bind(user_id.0)
                .bind(account_type.as_str()),
        )
        .await
    }

    async fn insert(&self, account: NewAccount) -> Result<Account> {
        let row = sqlx::query(
            r"
            INSERT INTO accounts (
                account_number, account_type, account_status, opening_date,
                available_balance, user_id, age, salary
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING account_id
            ",
        )
        .bind(account.account_number.as_str())
        .bind(account.account_type.as_str())
        .bind(account.account_status.as_str())
        .bind(account.opening_date)
        .bind(cents_to_column(account.available_balance)?)
        .bind(account.user_id.0)
        .bind(i32::try_from(account.age).map_err(|_| out_of_range("age"))?)
        .bind(cents_to_column(account.salary)?)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            if let sqlx::Error::Database(db_err) = &e {
                if db_err.is_unique_violation() {
                    if db_err.constraint() == Some(OWNER_TYPE_CONSTRAINT) {
                        metrics::counter!("account_store_conflicts_total", "kind" => "duplicate")
                            .increment(1);
                        return AccountError::DuplicateAccount {
                            user_id: account.user_id,
                            account_type: account.account_type,
                        };
                    }
                    return AccountError::DatabaseError(format!(
                        "Account number {} already exists",
                        account.account_number
                    ));
                }
            }
            AccountError::DatabaseError(format!("Failed to create account: {e}"))
        })?;

        let account_id: i64 = row
            .try_get("account_id")
            .map_err(|e| AccountError::DatabaseError(e.to_string()))?;

        tracing::debug!(account_id, account_number = %account.account_number, "Inserted account");
        Ok(account.into_account(AccountId(account_id)))
    }

    async fn update(&self, account: &Account) -> Result<Account> {
        let expected_version =
            i64::try_from(account.version).map_err(|_| out_of_range("version"))?;

        let row = sqlx::query(
            r"
            UPDATE accounts
            SET account_status = $3,
                available_balance = $4,
                version = version + 1
            WHERE account_id = $1 AND version = $2
            RETURNING account_id, account_number, account_type, account_status, opening_date,
                      available_balance, user_id, age, salary, version
            ",
        )
        .bind(account.account_id.0)
        .bind(expected_version)
        .bind(account.account_status.as_str())
        .bind(cents_to_column(account.available_balance)?)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AccountError::DatabaseError(format!("Failed to update account: {e}")))?;

        if let Some(row) = row {
            return account_from_row(&row);
        }

        // Nothing matched: either the record is gone or its version moved on.
        let exists: bool =
            sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM accounts WHERE account_id = $1)")
                .bind(account.account_id.0)
                .fetch_one(&self.pool)
                .await
                .map_err(|e| {
                    AccountError::DatabaseError(format!("Failed to check account: {e}"))
                })?;

        if !exists {
            return Err(AccountError::AccountNotFound);
        }

        metrics::counter!("account_store_conflicts_total", "kind" => "version").increment(1);
        tracing::warn!(
            account_number = %account.account_number,
            expected_version,
            "Stale account version on update"
        );
        Err(AccountError::ConcurrentModification {
            account_number: account.account_number.to_string(),
        })
    }
}

fn account_from_row(row: &PgRow) -> Result<Account> {
    let column = |e: sqlx::Error| AccountError::DatabaseError(format!("Invalid account row: {e}"));

    let account_type: String = row.try_get("account_type").map_err(column)?;
    let account_status: String = row.try_get("account_status").map_err(column)?;
    let opening_date: NaiveDate = row.try_get("opening_date").map_err(column)?;
    let age: i32 = row.try_get("age").map_err(column)?;
    let version: i64 = row.try_get("version").map_err(column)?;

    Ok(Account {
        account_id: AccountId(row.try_get("account_id").map_err(column)?),
        account_number: AccountNumber::new(
            row.try_get::<String, _>("account_number").map_err(column)?,
        ),
        account_type: account_type.parse().map_err(corrupt)?,
        account_status: account_status.parse().map_err(corrupt)?,
        opening_date,
        available_balance: cents_from_column(row.try_get("available_balance").map_err(column)?)?,
        user_id: UserId(row.try_get("user_id").map_err(column)?),
        age: u32::try_from(age).map_err(|_| out_of_range("age"))?,
        salary: cents_from_column(row.try_get("salary").map_err(column)?)?,
        version: u64::try_from(version).map_err(|_| out_of_range("version"))?,
    })
}

fn cents_to_column(amount: Money) -> Result<i64> {
    i64::try_from(amount.cents()).map_err(|_| out_of_range("amount"))
}

fn cents_from_column(cents: i64) -> Result<Money> {
    u64::try_from(cents)
        .map(Money::from_cents)
        .map_err(|_| out_of_range("amount"))
}

#[allow(clippy::needless_pass_by_value)] // Used as a map_err adapter
fn corrupt(e: AccountError) -> AccountError {
    AccountError::DatabaseError(format!("Invalid account row: {e}"))
}

fn out_of_range(field: &str) -> AccountError {
    AccountError::DatabaseError(format!("Column {field} out of range"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn money_columns_hold_cents() {
        assert!(matches!(cents_to_column(Money::from_major(1_000)), Ok(100_000)));
        assert!(matches!(cents_from_column(123), Ok(m) if m == Money::from_cents(123)));
    }

    #[test]
    fn negative_column_is_rejected() {
        assert_eq!(
            cents_from_column(-1),
            Err(AccountError::DatabaseError(
                "Column amount out of range".to_string()
            ))
        );
    }

    #[test]
    fn oversized_amount_is_rejected() {
        assert!(cents_to_column(Money::from_cents(u64::MAX)).is_err());
    }
}
