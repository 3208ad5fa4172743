//! Account router composition.

use crate::handlers::{accounts, health};
use crate::state::AccountState;
use account_service_core::providers::{
    AccountNumberIssuer, AccountRepository, TransactionLedger, UserDirectory,
};
use axum::{
    Router,
    routing::{get, put},
};

/// Create the account router.
///
/// # Routes
///
/// - `GET /health` - Liveness
/// - `POST /accounts` - Open an account
/// - `PATCH /accounts?accountNumber=` - Change status
/// - `PUT /accounts?accountNumber=` - Record a ledger balance
/// - `GET /accounts?accountNumber=` - Read by number
/// - `GET /accounts/ping` - Service banner
/// - `GET /accounts/balance?accountNumber=` - Balance as text
/// - `PUT /accounts/closure?accountNumber=` - Close
/// - `GET /accounts/{userId}` - Read a user's active account
/// - `GET /accounts/{accountId}/transactions` - Ledger entries
///
/// # Example
///
/// ```rust,ignore
/// let lifecycle = Arc::new(AccountLifecycle::new(env, policy));
///
/// let app = account_router(lifecycle)
///     .layer(http_trace_layer())
///     .layer(request_id_layer());
/// ```
pub fn account_router<U, I, L, R>(lifecycle: AccountState<U, I, L, R>) -> Router
where
    U: UserDirectory + 'static,
    I: AccountNumberIssuer + 'static,
    L: TransactionLedger + 'static,
    R: AccountRepository + 'static,
{
    Router::new()
        .route("/health", get(health::health_check))
        .route(
            "/accounts",
            get(accounts::read_by_account_number::<U, I, L, R>)
                .post(accounts::create_account::<U, I, L, R>)
                .patch(accounts::update_status::<U, I, L, R>)
                .put(accounts::update_balance::<U, I, L, R>),
        )
        .route("/accounts/ping", get(health::ping))
        .route("/accounts/balance", get(accounts::get_balance::<U, I, L, R>))
        .route("/accounts/closure", put(accounts::close_account::<U, I, L, R>))
        .route("/accounts/:id", get(accounts::read_by_user_id::<U, I, L, R>))
        .route(
            "/accounts/:id/transactions",
            get(accounts::get_transactions::<U, I, L, R>),
        )
        .with_state(lifecycle)
}
