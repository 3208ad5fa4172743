//! HTTP collaborator clients against stub services.
#![allow(clippy::unwrap_used)] // Test code

use account_service_core::clients::{
    HttpSequenceIssuer, HttpTransactionLedger, HttpUserDirectory, http_client,
};
use account_service_core::providers::{AccountNumberIssuer, TransactionLedger, UserDirectory};
use account_service_core::{
    AccountEnvironment, AccountError, AccountLifecycle, AccountType, CreateAccountRequest,
    InMemoryAccountRepository, LifecyclePolicy, Money, SystemClock, UserId,
};
use axum::{
    Json, Router,
    extract::{Path, Query},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use serde_json::{Value, json};
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

async fn user(Path(id): Path<i64>) -> Response {
    match id {
        1 => Json(json!({
            "userId": 1,
            "firstName": "Ada",
            "lastName": "Lovelace",
            "emailId": "ada@example.com"
        }))
        .into_response(),
        // Legacy behavior: 200 with no body
        2 => StatusCode::OK.into_response(),
        500 => StatusCode::INTERNAL_SERVER_ERROR.into_response(),
        _ => StatusCode::NOT_FOUND.into_response(),
    }
}

async fn sequence() -> Json<Value> {
    Json(json!({ "accountNumber": 42 }))
}

async fn transactions(Query(params): Query<HashMap<String, String>>) -> Json<Value> {
    let account_id = params.get("accountId").cloned().unwrap_or_default();
    Json(json!([
        { "referenceId": "t-1", "accountId": account_id, "amount": 10.5 },
        { "referenceId": "t-2", "accountId": account_id, "amount": 4.0, "comments": "fee" }
    ]))
}

/// Serves all three collaborators on an ephemeral port and returns its base URL.
async fn stub_services() -> String {
    let app = Router::new()
        .route("/api/users/:id", get(user))
        .route("/sequence", post(sequence))
        .route("/transactions", get(transactions));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move { axum::serve(listener, app).await });

    format!("http://{addr}/")
}

fn client() -> reqwest::Client {
    http_client(Duration::from_secs(5)).unwrap()
}

#[tokio::test]
async fn user_directory_resolves_known_user() {
    let base = stub_services().await;
    let users = HttpUserDirectory::new(base, client());

    let user = users.read_user_by_id(UserId(1)).await.unwrap();

    assert_eq!(user.user_id, UserId(1));
    assert_eq!(user.email_id, "ada@example.com");
}

#[tokio::test]
async fn user_directory_maps_missing_and_empty_to_not_found() {
    let base = stub_services().await;
    let users = HttpUserDirectory::new(base, client());

    for id in [2, 99] {
        let err = users.read_user_by_id(UserId(id)).await.unwrap_err();
        assert_eq!(err, AccountError::UserNotFound { user_id: UserId(id) });
    }
}

#[tokio::test]
async fn user_directory_server_error_is_collaborator_failure() {
    let base = stub_services().await;
    let users = HttpUserDirectory::new(base, client());

    let err = users.read_user_by_id(UserId(500)).await.unwrap_err();

    assert!(matches!(err, AccountError::Collaborator { service: "user-service", .. }));
}

#[tokio::test]
async fn issuer_returns_sequence_value() {
    let base = stub_services().await;
    let issuer = HttpSequenceIssuer::new(base, client());

    assert_eq!(issuer.generate_account_number().await.unwrap(), 42);
}

#[tokio::test]
async fn ledger_passes_account_id_and_keeps_extra_fields() {
    let base = stub_services().await;
    let ledger = HttpTransactionLedger::new(base, client());

    let entries = ledger.transactions_for_account("17").await.unwrap();

    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].account_id.as_deref(), Some("17"));
    assert_eq!(entries[1].extra.get("comments"), Some(&json!("fee")));
}

#[tokio::test]
async fn unreachable_service_is_collaborator_failure() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let issuer = HttpSequenceIssuer::new(format!("http://{addr}"), client());
    let err = issuer.generate_account_number().await.unwrap_err();

    assert!(matches!(
        err,
        AccountError::Collaborator { service: "sequence-generator", .. }
    ));
}

#[tokio::test]
async fn create_over_http_collaborators_formats_issued_number() {
    let base = stub_services().await;
    let http = client();
    let accounts = InMemoryAccountRepository::new();

    let env = AccountEnvironment::new(
        HttpUserDirectory::new(&base, http.clone()),
        HttpSequenceIssuer::new(&base, http.clone()),
        HttpTransactionLedger::new(&base, http),
        accounts.clone(),
        Arc::new(SystemClock),
    );
    let lifecycle = AccountLifecycle::new(env, LifecyclePolicy::default());

    lifecycle
        .create_account(CreateAccountRequest {
            user_id: UserId(1),
            account_type: AccountType::FixedDeposit,
            initial_deposit: Money::ZERO,
            age: 40,
            salary: Money::from_major(80_000),
        })
        .await
        .unwrap();

    let account = lifecycle.read_by_account_number("0600140000042").await.unwrap();
    assert_eq!(account.account_status.as_deref(), Some("PENDING"));
    assert_eq!(accounts.len().unwrap(), 1);
}
