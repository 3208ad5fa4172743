//! User directory over HTTP.

use super::{collaborator_error, trim_base};
use crate::error::{AccountError, Result};
use crate::providers::UserDirectory;
use crate::types::{User, UserId};
use reqwest::{Client, StatusCode};

const SERVICE: &str = "user-service";

/// User directory backed by the user service.
///
/// Calls `GET {base_url}/api/users/{id}`.
#[derive(Clone, Debug)]
pub struct HttpUserDirectory {
    base_url: String,
    http_client: Client,
}

impl HttpUserDirectory {
    /// Create a client for the user service at `base_url`.
    #[must_use]
    pub fn new(base_url: impl Into<String>, http_client: Client) -> Self {
        Self {
            base_url: trim_base(base_url.into()),
            http_client,
        }
    }
}

impl UserDirectory for HttpUserDirectory {
    async fn read_user_by_id(&self, user_id: UserId) -> Result<User> {
        let url = format!("{}/api/users/{user_id}", self.base_url);

        let response = self
            .http_client
            .get(&url)
            .send()
            .await
            .map_err(|e| collaborator_error(SERVICE, &e))?;

        if response.status() == StatusCode::NOT_FOUND {
            return Err(AccountError::UserNotFound { user_id });
        }

        let response = response
            .error_for_status()
            .map_err(|e| collaborator_error(SERVICE, &e))?;

        // The user service answers 200 with an empty body for unknown ids.
        let body = response
            .text()
            .await
            .map_err(|e| collaborator_error(SERVICE, &e))?;
        if body.trim().is_empty() || body.trim() == "null" {
            return Err(AccountError::UserNotFound { user_id });
        }

        serde_json::from_str(&body).map_err(|e| AccountError::Collaborator {
            service: SERVICE,
            message: format!("Invalid user payload: {e}"),
        })
    }
}
