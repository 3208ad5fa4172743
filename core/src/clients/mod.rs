//! HTTP clients for the collaborator services.
//!
//! Each client implements one provider trait over a JSON HTTP API. Clients
//! never retry; a failed call surfaces as `AccountError::Collaborator`.

pub mod ledger;
pub mod sequence;
pub mod users;

pub use ledger::HttpTransactionLedger;
pub use sequence::HttpSequenceIssuer;
pub use users::HttpUserDirectory;

use crate::error::AccountError;
use reqwest::Client;
use std::time::Duration;

/// Builds the shared HTTP client with a per-request timeout.
///
/// # Errors
///
/// Returns `AccountError::InternalError` if the TLS backend cannot initialize.
pub fn http_client(timeout: Duration) -> Result<Client, AccountError> {
    Client::builder().timeout(timeout).build().map_err(|e| {
        tracing::error!(error = %e, "Failed to build HTTP client");
        AccountError::InternalError
    })
}

fn collaborator_error(service: &'static str, error: &reqwest::Error) -> AccountError {
    tracing::warn!(service, error = %error, "Collaborator call failed");
    AccountError::Collaborator {
        service,
        message: error.to_string(),
    }
}

fn trim_base(base_url: String) -> String {
    base_url.trim_end_matches('/').to_string()
}
