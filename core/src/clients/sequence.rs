//! Account number issuer over HTTP.

use super::{collaborator_error, trim_base};
use crate::error::Result;
use crate::providers::AccountNumberIssuer;
use reqwest::Client;
use serde::Deserialize;

const SERVICE: &str = "sequence-generator";

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SequenceResponse {
    account_number: u64,
}

/// Issuer backed by the sequence generator service.
///
/// Calls `POST {base_url}/sequence` and reads `{"accountNumber": n}`.
#[derive(Clone, Debug)]
pub struct HttpSequenceIssuer {
    base_url: String,
    http_client: Client,
}

impl HttpSequenceIssuer {
    /// Create a client for the sequence generator at `base_url`.
    #[must_use]
    pub fn new(base_url: impl Into<String>, http_client: Client) -> Self {
        Self {
            base_url: trim_base(base_url.into()),
            http_client,
        }
    }
}

impl AccountNumberIssuer for HttpSequenceIssuer {
    async fn generate_account_number(&self) -> Result<u64> {
        let url = format!("{}/sequence", self.base_url);

        let sequence: SequenceResponse = self
            .http_client
            .post(&url)
            .send()
            .await
            .and_then(reqwest::Response::error_for_status)
            .map_err(|e| collaborator_error(SERVICE, &e))?
            .json()
            .await
            .map_err(|e| collaborator_error(SERVICE, &e))?;

        tracing::debug!(sequence = sequence.account_number, "Issued account sequence");
        Ok(sequence.account_number)
    }
}
