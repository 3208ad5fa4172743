//! # Account Service Core
//!
//! Lifecycle and eligibility engine for bank accounts.
//!
//! The engine decides whether an account may be opened for a user, walks each
//! account through its status state machine and guards the monetary rules on
//! every transition.
//!
//! ## Lifecycle
//!
//! ```text
//!            activate (balance ≥ minimum)          close (balance = 0)
//! PENDING ───────────────────────────────► ACTIVE ─────────────────────► CLOSED
//!    │                                                                     ▲
//!    └────────────────────────── close (balance = 0) ──────────────────────┘
//! ```
//!
//! `CLOSED` is terminal. No other edge exists.
//!
//! ## Architecture
//!
//! - [`rules`] holds the pure decisions: eligibility, transitions, closure.
//! - [`lifecycle`] orchestrates collaborators around those decisions.
//! - [`providers`] declares the collaborator traits; [`clients`] and
//!   [`stores`] implement them.
//!
//! ## Example
//!
//! ```rust,ignore
//! use account_service_core::*;
//!
//! let lifecycle = AccountLifecycle::new(env, LifecyclePolicy::default());
//!
//! lifecycle
//!     .create_account(CreateAccountRequest {
//!         user_id: UserId(1),
//!         account_type: AccountType::SavingsAccount,
//!         initial_deposit: Money::from_major(1_000),
//!         age: 30,
//!         salary: Money::from_major(60_000),
//!     })
//!     .await?;
//! ```

pub mod clients;
pub mod config;
pub mod constants;
pub mod dto;
pub mod environment;
pub mod error;
pub mod lifecycle;
pub mod providers;
pub mod rules;
pub mod stores;
pub mod types;

pub use config::LifecyclePolicy;
pub use dto::{AccountDto, AccountStatusUpdate, Response};
pub use environment::{AccountEnvironment, Clock, SystemClock};
pub use error::{AccountError, Result};
pub use lifecycle::{AccountLifecycle, CreateAccountRequest};
pub use stores::InMemoryAccountRepository;
pub use types::{
    Account, AccountId, AccountNumber, AccountStatus, AccountType, Money, NewAccount, Transaction,
    User, UserId,
};
