//! Eligibility and transition rules.
//!
//! Pure functions over a record and an intended change. They never perform I/O;
//! the lifecycle engine calls them between resolving a record and persisting it.

use crate::config::LifecyclePolicy;
use crate::error::{AccountError, Result};
use crate::types::{Account, AccountStatus, Money};
use std::fmt;

/// Which creation sub-rule an applicant failed.
///
/// Kept for diagnostics only. Callers see a single
/// [`AccountError::IneligibleApplicant`] either way.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ineligibility {
    /// Applicant is younger than the minimum age.
    Underage {
        /// Applicant age
        age: u32,
        /// Policy minimum
        minimum: u32,
    },
    /// Applicant earns less than the minimum salary.
    SalaryBelowMinimum {
        /// Applicant salary
        salary: Money,
        /// Policy minimum
        minimum: Money,
    },
}

impl fmt::Display for Ineligibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Underage { age, minimum } => {
                write!(f, "applicant age {age} is below {minimum}")
            }
            Self::SalaryBelowMinimum { salary, minimum } => {
                write!(f, "applicant salary {salary} is below {minimum}")
            }
        }
    }
}

impl From<Ineligibility> for AccountError {
    fn from(_: Ineligibility) -> Self {
        Self::IneligibleApplicant
    }
}

/// Evaluates creation eligibility. Age is checked before salary.
///
/// # Errors
///
/// Returns the first sub-rule the applicant fails.
pub const fn check_eligibility(
    policy: &LifecyclePolicy,
    age: u32,
    salary: Money,
) -> std::result::Result<(), Ineligibility> {
    if age < policy.min_applicant_age {
        return Err(Ineligibility::Underage {
            age,
            minimum: policy.min_applicant_age,
        });
    }

    if salary.cents() < policy.min_salary.cents() {
        return Err(Ineligibility::SalaryBelowMinimum {
            salary,
            minimum: policy.min_salary,
        });
    }

    Ok(())
}

/// Evaluates a status change requested through the status-update operation.
///
/// Only `PENDING → ACTIVE` is reachable here, and only when the balance covers
/// the activation minimum. Closure has its own rule, [`check_closure`].
///
/// # Errors
///
/// - [`AccountError::IllegalTransition`] if the requested status equals the
///   current one, the account is closed, or the edge does not exist
/// - [`AccountError::InsufficientFunds`] if the activation guard fails
pub fn check_status_transition(
    policy: &LifecyclePolicy,
    account: &Account,
    requested: AccountStatus,
) -> Result<()> {
    let current = account.account_status;
    let illegal = AccountError::IllegalTransition {
        from: current,
        to: requested,
    };

    match (current, requested) {
        (AccountStatus::Pending, AccountStatus::Active) => {
            if account.available_balance < policy.min_activation_balance {
                return Err(AccountError::InsufficientFunds {
                    required: policy.min_activation_balance,
                    available: account.available_balance,
                });
            }
            Ok(())
        }
        // Same-status requests, anything out of CLOSED, back to PENDING, and
        // CLOSED outside the closure operation.
        _ => Err(illegal),
    }
}

/// Evaluates a closure request.
///
/// # Errors
///
/// - [`AccountError::AccountClosing`] if money remains on the account
/// - [`AccountError::IllegalTransition`] if the account is already closed
pub fn check_closure(account: &Account) -> Result<()> {
    if !account.available_balance.is_zero() {
        return Err(AccountError::AccountClosing {
            balance: account.available_balance,
        });
    }

    if account.is_closed() {
        return Err(AccountError::IllegalTransition {
            from: account.account_status,
            to: AccountStatus::Closed,
        });
    }

    Ok(())
}

/// Evaluates a ledger-driven balance update.
///
/// # Errors
///
/// Returns [`AccountError::IllegalTransition`] if the account is closed.
pub fn check_balance_update(account: &Account) -> Result<()> {
    if account.is_closed() {
        return Err(AccountError::IllegalTransition {
            from: account.account_status,
            to: account.account_status,
        });
    }
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::types::{AccountId, AccountNumber, AccountType, UserId};
    use chrono::NaiveDate;
    use proptest::prelude::*;

    fn account(status: AccountStatus, balance: Money) -> Account {
        Account {
            account_id: AccountId(1),
            account_number: AccountNumber::new("0600140000001"),
            account_type: AccountType::SavingsAccount,
            account_status: status,
            opening_date: NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
            available_balance: balance,
            user_id: UserId(100),
            age: 25,
            salary: Money::from_major(60_000),
            version: 0,
        }
    }

    #[test]
    fn eligible_applicant_passes() {
        let policy = LifecyclePolicy::default();
        assert_eq!(check_eligibility(&policy, 25, Money::from_major(60_000)), Ok(()));
        assert_eq!(check_eligibility(&policy, 18, Money::from_major(50_000)), Ok(()));
    }

    #[test]
    fn underage_applicant_fails() {
        let policy = LifecyclePolicy::default();
        assert_eq!(
            check_eligibility(&policy, 16, Money::from_major(60_000)),
            Err(Ineligibility::Underage { age: 16, minimum: 18 })
        );
    }

    #[test]
    fn low_salary_fails_with_same_error_kind() {
        let policy = LifecyclePolicy::default();
        let result = check_eligibility(&policy, 25, Money::from_major(40_000));
        assert!(matches!(result, Err(Ineligibility::SalaryBelowMinimum { .. })));
        assert_eq!(
            AccountError::from(result.unwrap_err()),
            AccountError::IneligibleApplicant
        );
    }

    #[test]
    fn pending_to_active_with_funds() {
        let policy = LifecyclePolicy::default();
        let acc = account(AccountStatus::Pending, Money::from_major(1_000));
        assert_eq!(check_status_transition(&policy, &acc, AccountStatus::Active), Ok(()));
    }

    #[test]
    fn pending_to_active_without_funds() {
        let policy = LifecyclePolicy::default();
        let acc = account(AccountStatus::Pending, Money::from_major(500));
        assert_eq!(
            check_status_transition(&policy, &acc, AccountStatus::Active),
            Err(AccountError::InsufficientFunds {
                required: Money::from_major(1_000),
                available: Money::from_major(500),
            })
        );
    }

    #[test]
    fn active_to_active_is_illegal_even_with_funds() {
        let policy = LifecyclePolicy::default();
        let acc = account(AccountStatus::Active, Money::from_major(5_000));
        assert!(matches!(
            check_status_transition(&policy, &acc, AccountStatus::Active),
            Err(AccountError::IllegalTransition { .. })
        ));
    }

    #[test]
    fn closure_requires_zero_balance() {
        let acc = account(AccountStatus::Active, Money::from_major(1_000));
        assert_eq!(
            check_closure(&acc),
            Err(AccountError::AccountClosing {
                balance: Money::from_major(1_000)
            })
        );
        assert_eq!(check_closure(&account(AccountStatus::Active, Money::ZERO)), Ok(()));
        assert_eq!(check_closure(&account(AccountStatus::Pending, Money::ZERO)), Ok(()));
    }

    #[test]
    fn closed_account_cannot_be_closed_again() {
        let acc = account(AccountStatus::Closed, Money::ZERO);
        assert!(matches!(
            check_closure(&acc),
            Err(AccountError::IllegalTransition { .. })
        ));
        assert!(check_balance_update(&acc).is_err());
    }

    fn any_status() -> impl Strategy<Value = AccountStatus> {
        prop_oneof![
            Just(AccountStatus::Pending),
            Just(AccountStatus::Active),
            Just(AccountStatus::Closed),
        ]
    }

    proptest! {
        #[test]
        fn eligibility_matches_both_thresholds(age in 0u32..120, salary in 0u64..20_000_000) {
            let policy = LifecyclePolicy::default();
            let salary = Money::from_cents(salary);
            let expected = age >= 18 && salary >= Money::from_major(50_000);
            prop_assert_eq!(check_eligibility(&policy, age, salary).is_ok(), expected);
        }

        #[test]
        fn only_pending_to_active_is_ever_accepted(
            from in any_status(),
            to in any_status(),
            balance in 0u64..1_000_000,
        ) {
            let policy = LifecyclePolicy::default();
            let acc = account(from, Money::from_cents(balance));
            if check_status_transition(&policy, &acc, to).is_ok() {
                prop_assert_eq!(from, AccountStatus::Pending);
                prop_assert_eq!(to, AccountStatus::Active);
            }
        }

        #[test]
        fn closed_is_terminal(to in any_status(), balance in 0u64..1_000_000) {
            let policy = LifecyclePolicy::default();
            let acc = account(AccountStatus::Closed, Money::from_cents(balance));
            prop_assert!(check_status_transition(&policy, &acc, to).is_err());
            prop_assert!(check_closure(&acc).is_err());
        }
    }
}
