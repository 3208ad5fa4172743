//! Storage implementations bundled with the core.
//!
//! - **In-memory** - key-indexed store with the same uniqueness and
//!   compare-and-swap guarantees as the PostgreSQL store in
//!   `account-service-postgres`. Used for development and tests.

pub mod memory;

pub use memory::InMemoryAccountRepository;
