//! Error types for account lifecycle operations.

use crate::types::{AccountStatus, AccountType, Money, UserId};
use thiserror::Error;

/// Result type alias for account operations.
pub type Result<T> = std::result::Result<T, AccountError>;

/// Every way an account lifecycle operation can fail.
///
/// Business-rule variants come first; they are returned before any state is
/// touched. System variants wrap collaborator and store failures.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum AccountError {
    // ═══════════════════════════════════════════════════════════
    // Creation
    // ═══════════════════════════════════════════════════════════

    /// Referenced user does not exist.
    #[error("User not found on the server: {user_id}")]
    UserNotFound {
        /// Requested user
        user_id: UserId,
    },

    /// User already holds an account of this type.
    #[error("Account already exists for user {user_id} with type {account_type}")]
    DuplicateAccount {
        /// Owning user
        user_id: UserId,
        /// Requested account type
        account_type: AccountType,
    },

    /// Applicant does not meet the age or salary threshold.
    #[error("Applicant is not eligible to open an account")]
    IneligibleApplicant,

    // ═══════════════════════════════════════════════════════════
    // Lookup and state
    // ═══════════════════════════════════════════════════════════

    /// No account matches the lookup key.
    #[error("Account not found on the server")]
    AccountNotFound,

    /// Requested status change is not allowed from the current status.
    #[error("Account status cannot change from {from} to {to}")]
    IllegalTransition {
        /// Current status
        from: AccountStatus,
        /// Requested status
        to: AccountStatus,
    },

    /// Balance is below the activation minimum.
    #[error("Minimum balance of {required} is required, available {available}")]
    InsufficientFunds {
        /// Minimum balance
        required: Money,
        /// Current balance
        available: Money,
    },

    /// Account resolved by owner is not active.
    #[error("Account is inactive or closed (status {status})")]
    InactiveAccount {
        /// Current status
        status: AccountStatus,
    },

    /// Closure requested while money remains on the account.
    #[error("Balance should be zero to close the account, available {balance}")]
    AccountClosing {
        /// Current balance
        balance: Money,
    },

    /// Record changed between read and write.
    #[error("Account {account_number} was modified concurrently")]
    ConcurrentModification {
        /// Account that lost the race
        account_number: String,
    },

    /// Malformed input at the wire boundary.
    #[error("Invalid request: {0}")]
    Validation(String),

    // ═══════════════════════════════════════════════════════════
    // System Errors
    // ═══════════════════════════════════════════════════════════

    /// External collaborator call failed.
    #[error("{service} call failed: {message}")]
    Collaborator {
        /// Collaborator name
        service: &'static str,
        /// Failure detail
        message: String,
    },

    /// Store operation failed.
    #[error("Database error: {0}")]
    DatabaseError(String),

    /// Internal error (should not be exposed to users).
    #[error("Internal error")]
    InternalError,
}

impl AccountError {
    /// Stable machine-readable code for the error kind.
    ///
    /// # Examples
    ///
    /// ```
    /// # use account_service_core::AccountError;
    /// assert_eq!(AccountError::AccountNotFound.code(), "ACCOUNT_NOT_FOUND");
    /// ```
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::UserNotFound { .. } => "USER_NOT_FOUND",
            Self::DuplicateAccount { .. } => "DUPLICATE_ACCOUNT",
            Self::IneligibleApplicant => "INELIGIBLE_APPLICANT",
            Self::AccountNotFound => "ACCOUNT_NOT_FOUND",
            Self::IllegalTransition { .. } => "ILLEGAL_TRANSITION",
            Self::InsufficientFunds { .. } => "INSUFFICIENT_FUNDS",
            Self::InactiveAccount { .. } => "INACTIVE_ACCOUNT",
            Self::AccountClosing { .. } => "ACCOUNT_CLOSING",
            Self::ConcurrentModification { .. } => "CONCURRENT_MODIFICATION",
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::Collaborator { .. } => "COLLABORATOR_ERROR",
            Self::DatabaseError(_) => "DATABASE_ERROR",
            Self::InternalError => "INTERNAL_ERROR",
        }
    }

    /// Returns `true` if the error is a business-rule rejection rather than a
    /// system failure.
    ///
    /// # Examples
    ///
    /// ```
    /// # use account_service_core::AccountError;
    /// assert!(AccountError::IneligibleApplicant.is_rule_violation());
    /// assert!(!AccountError::InternalError.is_rule_violation());
    /// ```
    #[must_use]
    pub const fn is_rule_violation(&self) -> bool {
        matches!(
            self,
            Self::UserNotFound { .. }
                | Self::DuplicateAccount { .. }
                | Self::IneligibleApplicant
                | Self::AccountNotFound
                | Self::IllegalTransition { .. }
                | Self::InsufficientFunds { .. }
                | Self::InactiveAccount { .. }
                | Self::AccountClosing { .. }
                | Self::Validation(_)
        )
    }
}
