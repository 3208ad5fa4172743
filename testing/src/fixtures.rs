//! Test data builders.

use crate::mocks::test_clock;
use account_service_core::{
    AccountNumber, AccountStatus, AccountType, Clock, CreateAccountRequest, Money, NewAccount,
    User, UserId,
};

/// Account number prefix used by the default policy.
pub const PREFIX: &str = "060014";

/// A directory user with placeholder contact details.
#[must_use]
pub fn user(id: i64) -> User {
    User {
        user_id: UserId(id),
        first_name: "Test".to_string(),
        last_name: format!("User{id}"),
        email_id: format!("user{id}@example.com"),
    }
}

/// A creation request that passes every default eligibility rule and funds
/// the account with exactly the default activation minimum.
#[must_use]
pub fn eligible_request(user_id: i64, account_type: AccountType) -> CreateAccountRequest {
    CreateAccountRequest {
        user_id: UserId(user_id),
        account_type,
        initial_deposit: Money::from_major(1_000),
        age: 30,
        salary: Money::from_major(60_000),
    }
}

/// The account number the default policy derives from `sequence`.
#[must_use]
pub fn account_number(sequence: u64) -> AccountNumber {
    AccountNumber::from_sequence(PREFIX, 7, sequence)
}

/// An unsaved savings account in the given state, numbered by `sequence`.
#[must_use]
pub fn account(
    sequence: u64,
    user_id: i64,
    account_status: AccountStatus,
    available_balance: Money,
) -> NewAccount {
    NewAccount {
        account_number: account_number(sequence),
        account_type: AccountType::SavingsAccount,
        account_status,
        opening_date: test_clock().now().date_naive(),
        available_balance,
        user_id: UserId(user_id),
        age: 30,
        salary: Money::from_major(60_000),
    }
}
