//! Collaborator traits.
//!
//! The lifecycle engine depends only on these traits. Production wiring uses
//! the HTTP clients in [`crate::clients`] and a PostgreSQL or in-memory
//! [`AccountRepository`]; tests use the mocks from `account-service-testing`.
//!
//! ```text
//! ┌────────────────────┐     read_user_by_id        ┌───────────────┐
//! │                    │ ─────────────────────────► │ UserDirectory │
//! │                    │  generate_account_number   ┌───────────────┴─────┐
//! │  AccountLifecycle  │ ─────────────────────────► │ AccountNumberIssuer │
//! │                    │  transactions_for_account  ┌───────────────────┬─┘
//! │                    │ ─────────────────────────► │ TransactionLedger │
//! │                    │  find_* / insert / update  ┌───────────────────┴┐
//! │                    │ ─────────────────────────► │ AccountRepository  │
//! └────────────────────┘                            └────────────────────┘
//! ```

pub mod issuer;
pub mod ledger;
pub mod repository;
pub mod user;

pub use issuer::AccountNumberIssuer;
pub use ledger::TransactionLedger;
pub use repository::AccountRepository;
pub use user::UserDirectory;
