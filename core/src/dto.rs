//! Wire representation of accounts and lifecycle responses.
//!
//! `AccountDto` mirrors the JSON shape the user-facing application speaks:
//! camelCase fields, enum names as strings, amounts as decimals. Conversion
//! to internal types is the only place wire input is validated.

use crate::constants::RESPONSE_CODE_SUCCESS;
use crate::error::{AccountError, Result};
use crate::lifecycle::CreateAccountRequest;
use crate::types::{Account, AccountStatus, Money, UserId};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Account as seen on the wire.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountDto {
    /// Store-assigned identifier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account_id: Option<i64>,

    /// Account number.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account_number: Option<String>,

    /// Account type name, e.g. `SAVINGS_ACCOUNT`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account_type: Option<String>,

    /// Account status name, e.g. `ACTIVE`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account_status: Option<String>,

    /// Opening date.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub opening_date: Option<NaiveDate>,

    /// Available balance in major units.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub available_balance: Option<f64>,

    /// Owning user.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<i64>,

    /// Applicant age.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age: Option<u32>,

    /// Applicant salary in major units.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub salary: Option<f64>,
}

impl AccountDto {
    /// Parses the balance field.
    ///
    /// # Errors
    ///
    /// Returns `AccountError::Validation` if the balance is missing, negative,
    /// not a number, or finer than a cent.
    pub fn balance(&self) -> Result<Money> {
        let value = self
            .available_balance
            .ok_or_else(|| AccountError::Validation("availableBalance is required".to_string()))?;
        parse_amount("availableBalance", value)
    }
}

impl From<&Account> for AccountDto {
    fn from(account: &Account) -> Self {
        Self {
            account_id: Some(account.account_id.0),
            account_number: Some(account.account_number.to_string()),
            account_type: Some(account.account_type.as_str().to_string()),
            account_status: Some(account.account_status.as_str().to_string()),
            opening_date: Some(account.opening_date),
            available_balance: Some(account.available_balance.to_decimal()),
            user_id: Some(account.user_id.0),
            age: Some(account.age),
            salary: Some(account.salary.to_decimal()),
        }
    }
}

impl TryFrom<AccountDto> for CreateAccountRequest {
    type Error = AccountError;

    fn try_from(dto: AccountDto) -> Result<Self> {
        let user_id = dto
            .user_id
            .ok_or_else(|| AccountError::Validation("userId is required".to_string()))?;
        let account_type = dto
            .account_type
            .as_deref()
            .ok_or_else(|| AccountError::Validation("accountType is required".to_string()))?
            .parse()?;
        let age = dto
            .age
            .ok_or_else(|| AccountError::Validation("age is required".to_string()))?;
        let salary = dto
            .salary
            .ok_or_else(|| AccountError::Validation("salary is required".to_string()))?;
        let initial_deposit = match dto.available_balance {
            Some(value) => parse_amount("availableBalance", value)?,
            None => Money::ZERO,
        };

        Ok(Self {
            user_id: UserId(user_id),
            account_type,
            initial_deposit,
            age,
            salary: parse_amount("salary", salary)?,
        })
    }
}

fn parse_amount(field: &str, value: f64) -> Result<Money> {
    Money::from_decimal(value)
        .ok_or_else(|| AccountError::Validation(format!("{field} must be a non-negative amount with at most two decimals")))
}

/// Body of a status-update request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountStatusUpdate {
    /// Requested status.
    pub account_status: AccountStatus,
}

/// Uniform success response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Response {
    /// Fixed success code.
    pub response_code: String,

    /// Operation-specific confirmation message.
    pub message: String,
}

impl Response {
    /// Builds a success response with the given message.
    #[must_use]
    pub fn success(message: &str) -> Self {
        Self {
            response_code: RESPONSE_CODE_SUCCESS.to_string(),
            message: message.to_string(),
        }
    }
}
