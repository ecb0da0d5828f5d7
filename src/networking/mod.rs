//! Networking module - remote move service
//!
//! - [`MoveService`] - Async seam for new-game and move requests
//! - [`HttpMoveService`] - reqwest client for the JSON endpoints
//! - [`protocol`] - Request/reply bodies
//! - [`ServiceError`] / [`FailureKind`] - Failure reporting

pub mod client;
pub mod error;
pub mod protocol;

pub use client::{HttpMoveService, MoveService};
pub use error::{FailureKind, ServiceError, ServiceResult};
pub use protocol::{MoveRequest, PositionReply};
