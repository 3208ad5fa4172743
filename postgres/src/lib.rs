//! `PostgreSQL` account repository for the account service.
//!
//! This crate provides a PostgreSQL-backed implementation of the
//! `AccountRepository` trait from `account-service-core`. It uses sqlx with
//! runtime-checked queries and supports:
//!
//! - Uniqueness of account number and `(user_id, account_type)` enforced by
//!   table constraints
//! - Optimistic concurrency on updates through a `version` column
//! - Connection pooling
//! - Embedded migrations
//!
//! # Example
//!
//! ```ignore
//! use account_service_postgres::PostgresAccountRepository;
//! use std::time::Duration;
//!
//! async fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let accounts = PostgresAccountRepository::connect(
//!         "postgres://localhost/accounts",
//!         10,
//!         Duration::from_secs(5),
//!     )
//!     .await?;
//!     accounts.migrate().await?;
//!     Ok(())
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod accounts;

pub use accounts::PostgresAccountRepository;
