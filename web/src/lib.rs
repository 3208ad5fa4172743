//! Axum HTTP surface for the account service.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │             HTTP shell (Axum)           │  ← JSON, query strings
//! │  - Request parsing                      │  ← Request IDs
//! │  - Status mapping                       │  ← Tracing
//! ├─────────────────────────────────────────┤
//! │           AccountLifecycle              │
//! │  - Eligibility and transition rules     │
//! │  - Collaborator orchestration           │
//! └─────────────────────────────────────────┘
//! ```
//!
//! # Request Flow
//!
//! 1. **HTTP Request** arrives at an account handler
//! 2. **Parse** query, path and JSON body (rejections become `400`)
//! 3. **Call** the lifecycle engine
//! 4. **Map** `AccountError` to a status and `{code, message}` body
//!
//! # Example
//!
//! ```ignore
//! use account_service_web::{account_router, http_trace_layer, request_id_layer};
//!
//! let app = account_router(Arc::new(lifecycle))
//!     .layer(http_trace_layer())
//!     .layer(request_id_layer());
//! axum::serve(listener, app).await?;
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod error;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use error::AppError;
pub use middleware::{REQUEST_ID_HEADER, RequestId, http_trace_layer, request_id_layer};
pub use router::account_router;
pub use state::AccountState;
