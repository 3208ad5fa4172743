//! Response constants.
//!
//! Success responses carry a fixed code and an operation-specific message.
//! Clients match on these literals, so they must not change.

/// Response code carried by every successful lifecycle response.
pub const RESPONSE_CODE_SUCCESS: &str = "200";

/// Confirmation messages for lifecycle operations.
pub mod messages {
    /// Account created.
    ///
    /// The leading space is part of the published message.
    pub const ACCOUNT_CREATED: &str = " Account created successfully";

    /// Account status or balance updated.
    pub const ACCOUNT_UPDATED: &str = "Account updated successfully";

    /// Account closed.
    pub const ACCOUNT_CLOSED: &str = "Account closed successfully";

    /// Liveness probe reply.
    pub const SERVICE_UP: &str = "Account Service is up and running";
}
