//! Transaction ledger over HTTP.

use super::{collaborator_error, trim_base};
use crate::error::Result;
use crate::providers::TransactionLedger;
use crate::types::Transaction;
use reqwest::Client;

const SERVICE: &str = "transaction-service";

/// Ledger backed by the transaction service.
///
/// Calls `GET {base_url}/transactions?accountId={id}`.
#[derive(Clone, Debug)]
pub struct HttpTransactionLedger {
    base_url: String,
    http_client: Client,
}

impl HttpTransactionLedger {
    /// Create a client for the transaction service at `base_url`.
    #[must_use]
    pub fn new(base_url: impl Into<String>, http_client: Client) -> Self {
        Self {
            base_url: trim_base(base_url.into()),
            http_client,
        }
    }
}

impl TransactionLedger for HttpTransactionLedger {
    async fn transactions_for_account(&self, account_id: &str) -> Result<Vec<Transaction>> {
        let url = format!("{}/transactions", self.base_url);

        self.http_client
            .get(&url)
            .query(&[("accountId", account_id)])
            .send()
            .await
            .and_then(reqwest::Response::error_for_status)
            .map_err(|e| collaborator_error(SERVICE, &e))?
            .json()
            .await
            .map_err(|e| collaborator_error(SERVICE, &e))
    }
}
