//! Shared handler state.

use account_service_core::AccountLifecycle;
use std::sync::Arc;

/// State shared by the account handlers: the lifecycle engine behind an `Arc`.
///
/// # Type Parameters
///
/// - `U`: User directory
/// - `I`: Account number issuer
/// - `L`: Transaction ledger
/// - `R`: Account repository
pub type AccountState<U, I, L, R> = Arc<AccountLifecycle<U, I, L, R>>;
