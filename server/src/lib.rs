//! Account service server.
//!
//! Wires configuration, collaborator clients, the selected account store and
//! the HTTP router into a runnable service.
//!
//! # Usage
//!
//! ```bash
//! # In-memory store
//! cargo run --bin account-service
//!
//! # PostgreSQL store
//! STORAGE_BACKEND=postgres DATABASE_URL=postgres://... cargo run --bin account-service
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs, clippy::pedantic)]

pub mod app;
pub mod config;

pub use app::{init_metrics, run};
pub use config::{CollaboratorConfig, Config, ConfigError, ServerConfig, StorageBackend, StorageConfig};
