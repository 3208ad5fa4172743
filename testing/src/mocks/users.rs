//! Mock user directory.

use account_service_core::providers::UserDirectory;
use account_service_core::{AccountError, Result, User, UserId};
use std::collections::HashMap;
use std::future::Future;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

/// Mock user directory.
///
/// Unknown users yield `UserNotFound`. [`MockUserDirectory::set_unavailable`]
/// makes every lookup fail as if the service were down.
#[derive(Debug, Clone, Default)]
pub struct MockUserDirectory {
    users: Arc<Mutex<HashMap<UserId, User>>>,
    unavailable: Arc<AtomicBool>,
}

impl MockUserDirectory {
    /// Create an empty directory.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a user.
    #[allow(clippy::unwrap_used)] // Test mock: mutex poisoning is a test failure
    pub fn add_user(&self, user: User) {
        self.users.lock().unwrap().insert(user.user_id, user);
    }

    /// Toggle simulated outage.
    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }
}

impl UserDirectory for MockUserDirectory {
    fn read_user_by_id(&self, user_id: UserId) -> impl Future<Output = Result<User>> + Send {
        let users = Arc::clone(&self.users);
        let unavailable = self.unavailable.load(Ordering::SeqCst);

        async move {
            if unavailable {
                return Err(AccountError::Collaborator {
                    service: "user-service",
                    message: "connection refused".to_string(),
                });
            }

            users
                .lock()
                .map_err(|_| AccountError::InternalError)?
                .get(&user_id)
                .cloned()
                .ok_or(AccountError::UserNotFound { user_id })
        }
    }
}
