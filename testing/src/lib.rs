//! # Account Service Testing
//!
//! Testing utilities for the account lifecycle engine.
//!
//! This crate provides:
//! - Mock implementations of the collaborator traits
//! - A fixed clock for deterministic opening dates
//! - Fixtures for users, requests and seeded accounts
//! - proptest strategies for domain inputs
//!
//! ## Example
//!
//! ```ignore
//! use account_service_testing::{fixtures, test_environment};
//! use account_service_core::{AccountLifecycle, LifecyclePolicy};
//!
//! #[tokio::test]
//! async fn opens_a_savings_account() {
//!     let env = test_environment();
//!     env.users.add_user(fixtures::user(1));
//!     let lifecycle = AccountLifecycle::new(env, LifecyclePolicy::default());
//!
//!     let response = lifecycle
//!         .create_account(fixtures::eligible_request(1, AccountType::SavingsAccount))
//!         .await
//!         .unwrap();
//!     assert_eq!(response.response_code, "200");
//! }
//! ```

use account_service_core::AccountEnvironment;
use std::sync::Arc;

pub mod fixtures;
pub mod mocks;
pub mod properties;

pub use mocks::{
    FixedClock, MockAccountNumberIssuer, MockTransactionLedger, MockUserDirectory,
    RecordingRepository, test_clock,
};

/// Environment wired entirely with mocks.
pub type TestEnvironment = AccountEnvironment<
    MockUserDirectory,
    MockAccountNumberIssuer,
    MockTransactionLedger,
    RecordingRepository,
>;

/// Build an empty mock environment using [`test_clock`].
///
/// Mocks share state with their clones, so tests can keep handles to them
/// after moving the environment into the engine.
#[must_use]
pub fn test_environment() -> TestEnvironment {
    AccountEnvironment::new(
        MockUserDirectory::new(),
        MockAccountNumberIssuer::new(),
        MockTransactionLedger::new(),
        RecordingRepository::new(),
        Arc::new(test_clock()),
    )
}

/// Install a test-writer tracing subscriber once per process.
///
/// Honors `RUST_LOG`; silently does nothing if a subscriber is already set.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "account_service_core=debug".into()),
        )
        .with_test_writer()
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use account_service_core::Clock;

    #[test]
    fn test_fixed_clock() {
        let clock = test_clock();
        assert_eq!(clock.now(), clock.now());
    }

    #[test]
    fn test_environment_starts_empty() {
        let env = test_environment();
        assert_eq!(env.issuer.calls(), 0);
        assert_eq!(env.accounts.writes(), 0);
        assert_eq!(env.clock.now().date_naive().to_string(), "2025-01-01");
    }
}
