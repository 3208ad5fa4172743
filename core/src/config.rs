//! Lifecycle policy configuration.
//!
//! Thresholds and number formatting used by the lifecycle engine. Values are
//! supplied by the application; the defaults match the bank's published policy.

use crate::types::Money;

/// Policy applied by the lifecycle engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LifecyclePolicy {
    /// Minimum applicant age at creation.
    ///
    /// Default: 18
    pub min_applicant_age: u32,

    /// Minimum applicant salary at creation.
    ///
    /// Default: 50000.00
    pub min_salary: Money,

    /// Minimum balance required for `PENDING → ACTIVE`.
    ///
    /// Default: 1000.00
    pub min_activation_balance: Money,

    /// Prefix prepended to every issued account number.
    ///
    /// Default: `"060014"`
    pub account_number_prefix: String,

    /// Zero-padded width of the issuer sequence in the account number.
    ///
    /// Default: 7
    pub account_number_width: usize,
}

impl LifecyclePolicy {
    /// Create a policy with the default thresholds.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the minimum applicant age.
    #[must_use]
    pub const fn with_min_applicant_age(mut self, age: u32) -> Self {
        self.min_applicant_age = age;
        self
    }

    /// Set the minimum applicant salary.
    #[must_use]
    pub const fn with_min_salary(mut self, salary: Money) -> Self {
        self.min_salary = salary;
        self
    }

    /// Set the minimum activation balance.
    #[must_use]
    pub const fn with_min_activation_balance(mut self, balance: Money) -> Self {
        self.min_activation_balance = balance;
        self
    }

    /// Set the account number prefix and sequence width.
    #[must_use]
    pub fn with_account_number_format(mut self, prefix: impl Into<String>, width: usize) -> Self {
        self.account_number_prefix = prefix.into();
        self.account_number_width = width;
        self
    }
}

impl Default for LifecyclePolicy {
    fn default() -> Self {
        Self {
            min_applicant_age: 18,
            min_salary: Money::from_major(50_000),
            min_activation_balance: Money::from_major(1_000),
            account_number_prefix: "060014".to_string(),
            account_number_width: 7,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_policy() {
        let policy = LifecyclePolicy::default();
        assert_eq!(policy.min_applicant_age, 18);
        assert_eq!(policy.min_salary, Money::from_major(50_000));
        assert_eq!(policy.min_activation_balance, Money::from_major(1_000));
        assert_eq!(policy.account_number_prefix, "060014");
        assert_eq!(policy.account_number_width, 7);
    }

    #[test]
    fn test_policy_builder() {
        let policy = LifecyclePolicy::new()
            .with_min_applicant_age(21)
            .with_min_salary(Money::from_major(30_000))
            .with_min_activation_balance(Money::from_major(500))
            .with_account_number_format("99", 4);

        assert_eq!(policy.min_applicant_age, 21);
        assert_eq!(policy.min_salary, Money::from_major(30_000));
        assert_eq!(policy.min_activation_balance, Money::from_major(500));
        assert_eq!(policy.account_number_prefix, "99");
        assert_eq!(policy.account_number_width, 4);
    }
}
