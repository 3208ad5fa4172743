//! Account handlers.
//!
//! Thin adapters: parse the wire payload, call the lifecycle engine, render
//! the result. Every failure goes through [`AppError`].

use crate::error::AppError;
use crate::state::AccountState;
use account_service_core::dto::Response as AccountResponse;
use account_service_core::providers::{
    AccountNumberIssuer, AccountRepository, TransactionLedger, UserDirectory,
};
use account_service_core::{
    AccountDto, AccountStatusUpdate, CreateAccountRequest, Transaction, UserId,
};
use axum::{
    Json,
    extract::{
        Path, Query, State,
        rejection::{JsonRejection, PathRejection, QueryRejection},
    },
    http::StatusCode,
};
use serde::{Deserialize, Serialize};

/// `?accountNumber=...` query parameter.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountNumberQuery {
    /// Target account number.
    pub account_number: String,
}

/// Open an account.
///
/// # Endpoint
///
/// ```text
/// POST /accounts
/// Content-Type: application/json
///
/// {
///   "userId": 1,
///   "accountType": "SAVINGS_ACCOUNT",
///   "availableBalance": 1000.0,
///   "age": 30,
///   "salary": 60000.0
/// }
/// ```
///
/// # Response
///
/// `201 Created` with `{"responseCode": "200", "message": " Account created successfully"}`.
pub async fn create_account<U, I, L, R>(
    State(lifecycle): State<AccountState<U, I, L, R>>,
    payload: Result<Json<AccountDto>, JsonRejection>,
) -> Result<(StatusCode, Json<AccountResponse>), AppError>
where
    U: UserDirectory + 'static,
    I: AccountNumberIssuer + 'static,
    L: TransactionLedger + 'static,
    R: AccountRepository + 'static,
{
    let Json(dto) = payload?;
    let request = CreateAccountRequest::try_from(dto)?;

    let response = lifecycle.create_account(request).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

/// Change an account's status.
///
/// # Endpoint
///
/// ```text
/// PATCH /accounts?accountNumber=0600140000001
/// Content-Type: application/json
///
/// { "accountStatus": "ACTIVE" }
/// ```
pub async fn update_status<U, I, L, R>(
    State(lifecycle): State<AccountState<U, I, L, R>>,
    query: Result<Query<AccountNumberQuery>, QueryRejection>,
    payload: Result<Json<AccountStatusUpdate>, JsonRejection>,
) -> Result<Json<AccountResponse>, AppError>
where
    U: UserDirectory + 'static,
    I: AccountNumberIssuer + 'static,
    L: TransactionLedger + 'static,
    R: AccountRepository + 'static,
{
    let Query(query) = query?;
    let Json(update) = payload?;

    let response = lifecycle
        .update_status(&query.account_number, update.account_status)
        .await?;
    Ok(Json(response))
}

/// Record a ledger-reported balance. Only `availableBalance` is read.
///
/// # Endpoint
///
/// ```text
/// PUT /accounts?accountNumber=0600140000001
/// Content-Type: application/json
///
/// { "availableBalance": 1250.75 }
/// ```
pub async fn update_balance<U, I, L, R>(
    State(lifecycle): State<AccountState<U, I, L, R>>,
    query: Result<Query<AccountNumberQuery>, QueryRejection>,
    payload: Result<Json<AccountDto>, JsonRejection>,
) -> Result<Json<AccountResponse>, AppError>
where
    U: UserDirectory + 'static,
    I: AccountNumberIssuer + 'static,
    L: TransactionLedger + 'static,
    R: AccountRepository + 'static,
{
    let Query(query) = query?;
    let Json(dto) = payload?;

    let response = lifecycle
        .update_balance(&query.account_number, dto.balance()?)
        .await?;
    Ok(Json(response))
}

/// Read an account by number.
///
/// # Endpoint
///
/// ```text
/// GET /accounts?accountNumber=0600140000001
/// ```
pub async fn read_by_account_number<U, I, L, R>(
    State(lifecycle): State<AccountState<U, I, L, R>>,
    query: Result<Query<AccountNumberQuery>, QueryRejection>,
) -> Result<Json<AccountDto>, AppError>
where
    U: UserDirectory + 'static,
    I: AccountNumberIssuer + 'static,
    L: TransactionLedger + 'static,
    R: AccountRepository + 'static,
{
    let Query(query) = query?;
    Ok(Json(
        lifecycle.read_by_account_number(&query.account_number).await?,
    ))
}

/// Current balance as plain text, e.g. `1000.00`.
///
/// # Endpoint
///
/// ```text
/// GET /accounts/balance?accountNumber=0600140000001
/// ```
pub async fn get_balance<U, I, L, R>(
    State(lifecycle): State<AccountState<U, I, L, R>>,
    query: Result<Query<AccountNumberQuery>, QueryRejection>,
) -> Result<String, AppError>
where
    U: UserDirectory + 'static,
    I: AccountNumberIssuer + 'static,
    L: TransactionLedger + 'static,
    R: AccountRepository + 'static,
{
    let Query(query) = query?;
    Ok(lifecycle.get_balance(&query.account_number).await?)
}

/// Ledger entries for an account.
///
/// # Endpoint
///
/// ```text
/// GET /accounts/{accountId}/transactions
/// ```
pub async fn get_transactions<U, I, L, R>(
    State(lifecycle): State<AccountState<U, I, L, R>>,
    path: Result<Path<String>, PathRejection>,
) -> Result<Json<Vec<Transaction>>, AppError>
where
    U: UserDirectory + 'static,
    I: AccountNumberIssuer + 'static,
    L: TransactionLedger + 'static,
    R: AccountRepository + 'static,
{
    let Path(account_id) = path?;
    Ok(Json(lifecycle.get_transactions(&account_id).await?))
}

/// Close an account.
///
/// # Endpoint
///
/// ```text
/// PUT /accounts/closure?accountNumber=0600140000001
/// ```
pub async fn close_account<U, I, L, R>(
    State(lifecycle): State<AccountState<U, I, L, R>>,
    query: Result<Query<AccountNumberQuery>, QueryRejection>,
) -> Result<Json<AccountResponse>, AppError>
where
    U: UserDirectory + 'static,
    I: AccountNumberIssuer + 'static,
    L: TransactionLedger + 'static,
    R: AccountRepository + 'static,
{
    let Query(query) = query?;
    Ok(Json(lifecycle.close_account(&query.account_number).await?))
}

/// Read a user's active account.
///
/// # Endpoint
///
/// ```text
/// GET /accounts/{userId}
/// ```
pub async fn read_by_user_id<U, I, L, R>(
    State(lifecycle): State<AccountState<U, I, L, R>>,
    path: Result<Path<i64>, PathRejection>,
) -> Result<Json<AccountDto>, AppError>
where
    U: UserDirectory + 'static,
    I: AccountNumberIssuer + 'static,
    L: TransactionLedger + 'static,
    R: AccountRepository + 'static,
{
    let Path(user_id) = path?;
    Ok(Json(lifecycle.read_by_user_id(UserId(user_id)).await?))
}
