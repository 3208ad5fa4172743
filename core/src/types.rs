//! Domain types for the account lifecycle.
//!
//! The account record is the only persisted entity. Collaborator payloads
//! (`User`, `Transaction`) are carried through as read-only values.

use crate::error::AccountError;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Store-assigned account identifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AccountId(pub i64);

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identifier of a user in the user directory.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(pub i64);

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Human-facing account number, e.g. `0600140000001`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AccountNumber(String);

impl AccountNumber {
    /// Wraps an account number string.
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Builds an account number from an issuer sequence value.
    ///
    /// The sequence is zero-padded to `width` digits and appended to `prefix`.
    ///
    /// ```
    /// # use account_service_core::types::AccountNumber;
    /// let number = AccountNumber::from_sequence("060014", 7, 1);
    /// assert_eq!(number.as_str(), "0600140000001");
    /// ```
    #[must_use]
    pub fn from_sequence(prefix: &str, width: usize, sequence: u64) -> Self {
        Self(format!("{prefix}{sequence:0width$}"))
    }

    /// Returns the account number as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AccountNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for AccountNumber {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

/// Non-negative money amount in minor units (cents).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(u64);

impl Money {
    /// Zero.
    pub const ZERO: Self = Self(0);

    /// Creates an amount from minor units.
    #[must_use]
    pub const fn from_cents(cents: u64) -> Self {
        Self(cents)
    }

    /// Creates an amount from whole major units.
    ///
    /// Saturates at the largest representable amount.
    #[must_use]
    pub const fn from_major(units: u64) -> Self {
        Self(units.saturating_mul(100))
    }

    /// Returns the amount in minor units.
    #[must_use]
    pub const fn cents(&self) -> u64 {
        self.0
    }

    /// Checks if this amount is zero.
    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Converts a decimal wire amount that has at most two decimal places.
    ///
    /// Only binary floating-point noise is absorbed (`0.1 + 0.2` is 30 cents);
    /// a genuine fraction of a cent such as `999.995` is rejected, never rounded.
    ///
    /// Returns `None` for negative, non-finite, sub-cent or out-of-range values.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_precision_loss)]
    pub fn from_decimal(value: f64) -> Option<Self> {
        if !value.is_finite() || value < 0.0 {
            return None;
        }
        let scaled = value * 100.0;
        let cents = scaled.round();
        if (scaled - cents).abs() > scaled.max(1.0) * f64::EPSILON * 8.0 {
            return None;
        }
        if cents > u64::MAX as f64 {
            return None;
        }
        Some(Self(cents as u64))
    }

    /// Converts to a decimal wire amount.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn to_decimal(&self) -> f64 {
        self.0 as f64 / 100.0
    }
}

/// Formats with exactly two decimal places and no currency symbol.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:02}", self.0 / 100, self.0 % 100)
    }
}

/// Kind of account. Immutable after creation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AccountType {
    /// Savings account.
    SavingsAccount,
    /// Fixed deposit.
    FixedDeposit,
    /// Loan account.
    LoanAccount,
}

impl AccountType {
    /// Wire/database name of the variant.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::SavingsAccount => "SAVINGS_ACCOUNT",
            Self::FixedDeposit => "FIXED_DEPOSIT",
            Self::LoanAccount => "LOAN_ACCOUNT",
        }
    }
}

impl fmt::Display for AccountType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AccountType {
    type Err = AccountError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "SAVINGS_ACCOUNT" => Ok(Self::SavingsAccount),
            "FIXED_DEPOSIT" => Ok(Self::FixedDeposit),
            "LOAN_ACCOUNT" => Ok(Self::LoanAccount),
            _ => Err(AccountError::Validation(format!("Unknown account type: {s}"))),
        }
    }
}

/// Account status.
///
/// ```text
/// PENDING ──(balance >= minimum)──► ACTIVE
///    │                                 │
///    └──────(close, balance == 0)──────┴──► CLOSED (terminal)
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AccountStatus {
    /// Created, not yet activated.
    Pending,
    /// Open for use.
    Active,
    /// Closed. No further mutation.
    Closed,
}

impl AccountStatus {
    /// Wire/database name of the variant.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "PENDING",
            Self::Active => "ACTIVE",
            Self::Closed => "CLOSED",
        }
    }

    /// Returns `true` if no transition may leave this state.
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        matches!(self, Self::Closed)
    }
}

impl fmt::Display for AccountStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AccountStatus {
    type Err = AccountError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "PENDING" => Ok(Self::Pending),
            "ACTIVE" => Ok(Self::Active),
            "CLOSED" => Ok(Self::Closed),
            _ => Err(AccountError::Validation(format!("Unknown account status: {s}"))),
        }
    }
}

/// A persisted account record.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    /// Store-assigned identifier.
    pub account_id: AccountId,
    /// Issuer-assigned account number.
    pub account_number: AccountNumber,
    /// Account type.
    pub account_type: AccountType,
    /// Current status.
    pub account_status: AccountStatus,
    /// Date the account was created.
    pub opening_date: NaiveDate,
    /// Available balance.
    pub available_balance: Money,
    /// Owning user.
    pub user_id: UserId,
    /// Applicant age at creation time.
    pub age: u32,
    /// Applicant salary at creation time.
    pub salary: Money,
    /// Optimistic concurrency version, bumped on every update.
    pub version: u64,
}

impl Account {
    /// Checks if the account is in the terminal `CLOSED` state.
    #[must_use]
    pub const fn is_closed(&self) -> bool {
        self.account_status.is_terminal()
    }
}

/// An account record that has not been persisted yet.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NewAccount {
    /// Issuer-assigned account number.
    pub account_number: AccountNumber,
    /// Account type.
    pub account_type: AccountType,
    /// Initial status.
    pub account_status: AccountStatus,
    /// Date the account was created.
    pub opening_date: NaiveDate,
    /// Initial balance.
    pub available_balance: Money,
    /// Owning user.
    pub user_id: UserId,
    /// Applicant age.
    pub age: u32,
    /// Applicant salary.
    pub salary: Money,
}

impl NewAccount {
    /// Materializes the record with its store-assigned identifier.
    #[must_use]
    pub fn into_account(self, account_id: AccountId) -> Account {
        Account {
            account_id,
            account_number: self.account_number,
            account_type: self.account_type,
            account_status: self.account_status,
            opening_date: self.opening_date,
            available_balance: self.available_balance,
            user_id: self.user_id,
            age: self.age,
            salary: self.salary,
            version: 0,
        }
    }
}

/// User as returned by the user directory.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// User identifier.
    pub user_id: UserId,
    /// First name.
    #[serde(default)]
    pub first_name: String,
    /// Last name.
    #[serde(default)]
    pub last_name: String,
    /// Email address.
    #[serde(default)]
    pub email_id: String,
}

/// Ledger entry as returned by the transaction ledger.
///
/// Unknown fields are preserved so the list can be handed back unmodified.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    /// Ledger reference.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reference_id: Option<String>,
    /// Account the entry belongs to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account_id: Option<String>,
    /// Entry kind (deposit, withdrawal, ...).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transaction_type: Option<String>,
    /// Amount.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<f64>,
    /// Remaining ledger fields.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn money_display() {
        assert_eq!(Money::from_major(1000).to_string(), "1000.00");
        assert_eq!(Money::from_cents(50_050).to_string(), "500.50");
        assert_eq!(Money::ZERO.to_string(), "0.00");
    }

    #[test]
    fn money_from_decimal() {
        assert_eq!(Money::from_decimal(1000.0), Some(Money::from_major(1000)));
        assert_eq!(Money::from_decimal(0.1 + 0.2), Some(Money::from_cents(30)));
        assert_eq!(Money::from_decimal(-1.0), None);
        assert_eq!(Money::from_decimal(f64::NAN), None);
        assert_eq!(Money::from_decimal(123_456_789.12), Some(Money::from_cents(12_345_678_912)));
    }

    #[test]
    fn money_from_decimal_rejects_fractions_of_a_cent() {
        assert_eq!(Money::from_decimal(49_999.995), None);
        assert_eq!(Money::from_decimal(999.995), None);
        assert_eq!(Money::from_decimal(0.001), None);
        assert_eq!(Money::from_decimal(49_999.99), Some(Money::from_cents(4_999_999)));
    }

    #[test]
    fn money_from_major_saturates() {
        assert_eq!(Money::from_major(u64::MAX), Money::from_cents(u64::MAX));
    }

    #[test]
    fn account_number_from_sequence() {
        assert_eq!(
            AccountNumber::from_sequence("060014", 7, 42).as_str(),
            "0600140000042"
        );
        // Wider sequences are not truncated
        assert_eq!(
            AccountNumber::from_sequence("06", 2, 12_345).as_str(),
            "0612345"
        );
    }

    #[test]
    fn enum_names() {
        assert_eq!("SAVINGS_ACCOUNT".parse::<AccountType>(), Ok(AccountType::SavingsAccount));
        assert_eq!(AccountStatus::Active.as_str(), "ACTIVE");
        assert!("BLOCKED".parse::<AccountStatus>().is_err());
        assert!(AccountStatus::Closed.is_terminal());
    }

    #[test]
    fn transaction_keeps_unknown_fields() {
        let json = r#"{"referenceId":"r-1","amount":25.0,"comments":"atm"}"#;
        let tx: Transaction = serde_json::from_str(json).unwrap_or_default();
        assert_eq!(tx.reference_id.as_deref(), Some("r-1"));
        assert_eq!(tx.extra.get("comments"), Some(&serde_json::json!("atm")));
    }
}
