//! proptest strategies for domain inputs.

use account_service_core::{AccountStatus, AccountType, Money};
use proptest::prelude::*;

/// Any account type.
pub fn account_type() -> impl Strategy<Value = AccountType> {
    prop_oneof![
        Just(AccountType::SavingsAccount),
        Just(AccountType::FixedDeposit),
        Just(AccountType::LoanAccount),
    ]
}

/// Any account status.
pub fn account_status() -> impl Strategy<Value = AccountStatus> {
    prop_oneof![
        Just(AccountStatus::Pending),
        Just(AccountStatus::Active),
        Just(AccountStatus::Closed),
    ]
}

/// Amounts up to ten million, in cents.
pub fn money() -> impl Strategy<Value = Money> {
    (0u64..1_000_000_000).prop_map(Money::from_cents)
}

/// Ages around the adulthood threshold.
pub fn age() -> impl Strategy<Value = u32> {
    0u32..100
}
