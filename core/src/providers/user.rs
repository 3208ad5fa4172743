//! User directory trait.

use crate::error::Result;
use crate::types::{User, UserId};

/// Read access to the user directory.
pub trait UserDirectory: Send + Sync {
    /// Get user by ID.
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - User not found → `AccountError::UserNotFound`
    /// - Directory call fails → `AccountError::Collaborator`
    fn read_user_by_id(
        &self,
        user_id: UserId,
    ) -> impl std::future::Future<Output = Result<User>> + Send;
}
